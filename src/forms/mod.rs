//! Form definitions backing the site routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

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
pub mod upload;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid rating")]
    InvalidRating,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid color palette")]
    InvalidPalette,

    #[error("invalid approval token")]
    InvalidToken,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("failed to store uploaded file: {0}")]
    Upload(String),
}

impl From<TypeConstraintError> for FormError {
    fn from(err: TypeConstraintError) -> Self {
        match err {
            TypeConstraintError::InvalidEmail => FormError::InvalidEmail,
            TypeConstraintError::InvalidPhone => FormError::InvalidPhoneNumber,
            TypeConstraintError::RatingOutOfRange => FormError::InvalidRating,
            TypeConstraintError::InvalidColor => FormError::InvalidPalette,
            TypeConstraintError::InvalidToken => FormError::InvalidToken,
            _ => FormError::InvalidName,
        }
    }
}

/// Splits a textarea payload into trimmed, non-empty lines.
pub(crate) fn textarea_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textarea_lines_trims_and_drops_blanks() {
        let lines = textarea_lines("  Rust  \n\n Actix \n  \nDiesel");
        assert_eq!(lines, vec!["Rust", "Actix", "Diesel"]);
    }
}
