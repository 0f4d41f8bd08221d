//! Forms posted from the public pages.

use serde::Deserialize;
use validator::Validate;

use crate::domain::consultation::{LeadSource, NewConsultation};
use crate::domain::review::NewReview;
use crate::domain::types::{Rating, SanitizedText};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Review submitted from the public reviews page; lands in moderation.
pub struct AddReviewForm {
    #[validate(length(min = 1))]
    pub client_name: String,
    pub client_company: Option<String>,
    #[validate(email)]
    pub client_email: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub rating: i32,
    /// Select value; empty when no project was picked.
    pub project_id: Option<String>,
}

impl TryFrom<AddReviewForm> for NewReview {
    type Error = FormError;

    fn try_from(form: AddReviewForm) -> Result<Self, Self::Error> {
        let rating = Rating::new(form.rating)?;
        let content = SanitizedText::new(form.content)?;
        let project_id = form
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<i32>().ok());
        Ok(NewReview::new(
            form.client_name,
            form.client_company,
            Some(form.client_email),
            content,
            rating,
            project_id,
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Contact-page message; recorded as a website-sourced consultation so the
/// back office sees every lead in one place.
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl From<ContactForm> for NewConsultation {
    fn from(form: ContactForm) -> Self {
        NewConsultation::new(
            form.name,
            form.email,
            form.phone,
            None,
            None,
            Vec::new(),
            Some(form.subject),
            form.message,
            None,
            None,
            None,
            None,
            None,
            Vec::new(),
            LeadSource::Website,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_form_rejects_out_of_range_rating() {
        let form = AddReviewForm {
            client_name: "Ada".into(),
            client_company: None,
            client_email: "ada@example.com".into(),
            content: "Great work".into(),
            rating: 9,
            project_id: None,
        };
        assert!(NewReview::try_from(form).is_err());
    }

    #[test]
    fn contact_form_becomes_website_lead() {
        let form = ContactForm {
            name: " Ada ".into(),
            email: "Ada@Example.com".into(),
            phone: None,
            subject: "Partnership".into(),
            message: "Let's talk.".into(),
        };
        let lead: NewConsultation = form.into();
        assert_eq!(lead.name, "Ada");
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.project_scope.as_deref(), Some("Partnership"));
        assert_eq!(lead.source, LeadSource::Website);
    }
}
