//! Admin-management forms.

use serde::Deserialize;

use crate::domain::admin::AdminRole;

#[derive(Deserialize)]
pub struct ChangeRoleForm {
    pub role: String,
}

impl ChangeRoleForm {
    pub fn role(&self) -> AdminRole {
        self.role.as_str().into()
    }
}
