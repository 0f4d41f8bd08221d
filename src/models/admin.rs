use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::admin::{Admin as DomainAdmin, NewAdmin as DomainNewAdmin};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::admins)]
/// Diesel model for [`crate::domain::admin::Admin`].
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::admins)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::admins)]
pub struct UpdateAdminRole {
    pub role: String,
    pub updated_at: NaiveDateTime,
}

impl From<Admin> for DomainAdmin {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            password_hash: admin.password_hash,
            role: admin.role.into(),
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

impl From<&DomainNewAdmin> for NewAdmin {
    fn from(admin: &DomainNewAdmin) -> Self {
        Self {
            name: admin.name.clone(),
            email: admin.email.as_str().to_string(),
            password_hash: admin.password_hash.clone(),
            role: admin.role.to_string(),
        }
    }
}
