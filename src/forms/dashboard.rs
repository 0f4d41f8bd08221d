//! Forms for the consultation back-office.

use serde::Deserialize;
use validator::Validate;

use crate::domain::consultation::{ConsultationStatus, UpdateConsultation};
use crate::domain::types::SanitizedText;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
pub struct UpdateConsultationForm {
    pub status: String,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub internal_notes: Option<String>,
}

impl From<UpdateConsultationForm> for UpdateConsultation {
    fn from(form: UpdateConsultationForm) -> Self {
        UpdateConsultation::new(
            ConsultationStatus::from(form.status.as_str()),
            form.assigned_to.filter(|id| *id > 0),
            form.priority,
            form.internal_notes,
        )
    }
}

#[derive(Deserialize, Validate)]
/// Reply posted by the team on the consultation detail page.
pub struct TeamChatForm {
    #[validate(length(min = 1))]
    pub message: String,
}

impl TeamChatForm {
    pub fn sanitized_message(&self) -> Result<SanitizedText, FormError> {
        SanitizedText::new(self.message.as_str()).map_err(FormError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_assignment_means_unassigned() {
        let form = UpdateConsultationForm {
            status: "in_progress".into(),
            assigned_to: Some(0),
            priority: Some(" high ".into()),
            internal_notes: None,
        };
        let update: UpdateConsultation = form.into();
        assert_eq!(update.status, ConsultationStatus::InProgress);
        assert!(update.assigned_to.is_none());
        assert_eq!(update.priority.as_deref(), Some("high"));
    }
}
