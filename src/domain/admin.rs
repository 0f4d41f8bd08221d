use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::EmailAddress;

/// Back-office access levels. Viewers read, editors mutate content, admins
/// additionally manage accounts, settings, themes and templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminRole {
    Admin,
    Editor,
    Viewer,
}

impl AdminRole {
    /// Whether a holder of this role may act at the `required` level.
    /// Admin outranks editor, editor outranks viewer.
    #[must_use]
    pub fn allows(self, required: AdminRole) -> bool {
        match required {
            AdminRole::Viewer => true,
            AdminRole::Editor => matches!(self, AdminRole::Admin | AdminRole::Editor),
            AdminRole::Admin => matches!(self, AdminRole::Admin),
        }
    }
}

impl Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminRole::Admin => write!(f, "admin"),
            AdminRole::Editor => write!(f, "editor"),
            AdminRole::Viewer => write!(f, "viewer"),
        }
    }
}

impl From<&str> for AdminRole {
    fn from(s: &str) -> Self {
        match s {
            "admin" => AdminRole::Admin,
            "editor" => AdminRole::Editor,
            _ => AdminRole::Viewer,
        }
    }
}

impl From<String> for AdminRole {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string, never exposed to templates.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewAdmin {
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: AdminRole,
}

impl NewAdmin {
    #[must_use]
    pub fn new(name: String, email: EmailAddress, password_hash: String, role: AdminRole) -> Self {
        Self {
            name: name.trim().to_string(),
            email,
            password_hash,
            role,
        }
    }
}

crate::domain::string_enum_serde!(AdminRole);
