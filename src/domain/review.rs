use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Rating, SanitizedText};

/// Moderation state of a submitted review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl From<&str> for ReviewStatus {
    fn from(s: &str) -> Self {
        match s {
            "approved" => ReviewStatus::Approved,
            "rejected" => ReviewStatus::Rejected,
            _ => ReviewStatus::Pending,
        }
    }
}

impl From<String> for ReviewStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: i32,
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_email: Option<String>,
    pub content: String,
    pub rating: i32,
    pub project_id: Option<i32>,
    pub status: ReviewStatus,
    pub admin_notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Review as submitted from the public form. Content is sanitized and the
/// rating is range-checked before the value ever reaches the repository.
#[derive(Clone, Debug)]
pub struct NewReview {
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_email: Option<String>,
    pub content: SanitizedText,
    pub rating: Rating,
    pub project_id: Option<i32>,
}

impl NewReview {
    #[must_use]
    pub fn new(
        client_name: String,
        client_company: Option<String>,
        client_email: Option<String>,
        content: SanitizedText,
        rating: Rating,
        project_id: Option<i32>,
    ) -> Self {
        Self {
            client_name: client_name.trim().to_string(),
            client_company: client_company
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            client_email: client_email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            content,
            rating,
            project_id,
        }
    }
}

/// Moderation decision applied by an admin.
#[derive(Clone, Debug)]
pub struct ReviewModeration {
    pub status: ReviewStatus,
    pub admin_notes: Option<String>,
}

crate::domain::string_enum_serde!(ReviewStatus);
