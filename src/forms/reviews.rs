//! Admin moderation form for reviews.

use serde::Deserialize;

use crate::domain::review::{ReviewModeration, ReviewStatus};
use crate::forms::FormError;

#[derive(Deserialize)]
pub struct ModerateReviewForm {
    pub action: String,
    pub admin_notes: Option<String>,
}

impl TryFrom<ModerateReviewForm> for ReviewModeration {
    type Error = FormError;

    fn try_from(form: ModerateReviewForm) -> Result<Self, Self::Error> {
        let status = match form.action.as_str() {
            "approve" => ReviewStatus::Approved,
            "reject" => ReviewStatus::Rejected,
            _ => return Err(FormError::InvalidName),
        };
        Ok(ReviewModeration {
            status,
            admin_notes: form
                .admin_notes
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}
