//! Forms for the consultation intake and the token approval flow.

use serde::Deserialize;
use validator::Validate;

use crate::domain::consultation::{ApprovalDecision, LeadSource, NewConsultation, Ownership};
use crate::domain::types::{ApprovalToken, PhoneNumber, SanitizedText};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Multi-step intake form. Checkbox groups arrive as repeated keys, so the
/// route deserializes the raw body with `serde_html_form`.
pub struct ConsultationForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[serde(default)]
    pub project_type: Vec<String>,
    pub project_scope: Option<String>,
    #[validate(length(min = 10))]
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub location: Option<String>,
    pub ownership: Option<String>,
    pub idea: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

impl ConsultationForm {
    /// Parses the raw urlencoded body, keeping repeated checkbox values.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, FormError> {
        serde_html_form::from_bytes(body).map_err(|_| FormError::InvalidName)
    }
}

impl TryFrom<ConsultationForm> for NewConsultation {
    type Error = FormError;

    fn try_from(mut form: ConsultationForm) -> Result<Self, Self::Error> {
        // Blank optional inputs arrive as empty strings; drop them before
        // validation so the url check only sees real values.
        form.website = form
            .website
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        form.validate()?;

        let phone = match form.phone.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(PhoneNumber::new(raw)?.into_inner()),
            _ => None,
        };

        let ownership = form
            .ownership
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Ownership::from);

        Ok(NewConsultation::new(
            form.name,
            form.email,
            phone,
            form.company_name,
            form.website,
            form.project_type,
            form.project_scope,
            form.description,
            form.budget,
            form.timeline,
            form.location,
            ownership,
            form.idea,
            form.links,
            LeadSource::Website,
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Decision posted from the client approval page.
pub struct ApprovalDecisionForm {
    #[validate(length(min = 1))]
    pub token: String,
    pub action: String,
    pub notes: Option<String>,
    pub rejection_reason: Option<String>,
}

/// Validated payload of [`ApprovalDecisionForm`].
pub struct ApprovalDecisionPayload {
    pub token: ApprovalToken,
    pub decision: ApprovalDecision,
}

impl TryFrom<ApprovalDecisionForm> for ApprovalDecisionPayload {
    type Error = FormError;

    fn try_from(form: ApprovalDecisionForm) -> Result<Self, Self::Error> {
        let token: ApprovalToken = form.token.parse()?;

        let trim = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let decision = match form.action.as_str() {
            "approve" => ApprovalDecision::Approve {
                notes: trim(form.notes),
            },
            "reject" => ApprovalDecision::Reject {
                reason: trim(form.rejection_reason),
            },
            _ => return Err(FormError::InvalidName),
        };

        Ok(Self { token, decision })
    }
}

#[derive(Deserialize, Validate)]
/// Chat message posted by the client from the approval page.
pub struct ClientChatForm {
    #[validate(length(min = 1))]
    pub token: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl ClientChatForm {
    pub fn sanitized_message(&self) -> Result<SanitizedText, FormError> {
        SanitizedText::new(self.message.as_str()).map_err(FormError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_checkbox_values() {
        let body =
            b"name=Ada&email=ada%40example.com&description=A+longer+description&project_type=web&project_type=ai";
        let form = ConsultationForm::from_urlencoded(body).unwrap();
        assert_eq!(form.project_type, vec!["web", "ai"]);
    }

    #[test]
    fn approval_form_requires_known_action() {
        let form = ApprovalDecisionForm {
            token: crate::domain::types::ApprovalToken::new().to_string(),
            action: "postpone".into(),
            notes: None,
            rejection_reason: None,
        };
        assert!(ApprovalDecisionPayload::try_from(form).is_err());
    }

    #[test]
    fn approval_form_maps_reject_with_reason() {
        let form = ApprovalDecisionForm {
            token: crate::domain::types::ApprovalToken::new().to_string(),
            action: "reject".into(),
            notes: None,
            rejection_reason: Some("  Budget too high ".into()),
        };
        let payload = ApprovalDecisionPayload::try_from(form).unwrap();
        assert_eq!(
            payload.decision,
            ApprovalDecision::Reject {
                reason: Some("Budget too high".into())
            }
        );
    }
}
