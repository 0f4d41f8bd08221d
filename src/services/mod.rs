//! Application services: pure functions generic over the repository traits.
//!
//! Routes stay thin; every workflow (page loads, form handling, the quote
//! approval lifecycle) lives here where it can be tested against mock
//! repositories.

use thiserror::Error;

use crate::domain::admin::AdminRole;
use crate::domain::types::TypeConstraintError;
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;

pub mod admins;
pub mod auth;
pub mod catalog;
pub mod consultation;
pub mod dashboard;
pub mod emails;
pub mod main;
pub mod projects;
pub mod reviews;
pub mod settings;
pub mod team;
pub mod themes;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("type constraint error: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}

/// Rejects callers whose role does not reach the required level.
pub fn ensure_role(user: &AuthenticatedUser, required: AdminRole) -> Result<(), ServiceError> {
    if user.role.allows(required) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
