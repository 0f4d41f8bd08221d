//! Lead intake and the client-facing quote approval flow.

use crate::domain::chat::{ChatSender, NewChatMessage};
use crate::domain::consultation::{ApprovalStatus, Consultation, NewConsultation};
use crate::domain::types::ApprovalToken;
use crate::dto::consultation::ApprovalPageData;
use crate::forms::consultation::{
    ApprovalDecisionForm, ApprovalDecisionPayload, ClientChatForm, ConsultationForm,
};
use crate::repository::{ChatReader, ChatWriter, ConsultationReader, ConsultationWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates and stores a consultation request from the public form.
pub fn submit_consultation<R>(repo: &R, form: ConsultationForm) -> ServiceResult<Consultation>
where
    R: ConsultationWriter + ?Sized,
{
    let new_consultation = NewConsultation::try_from(form).map_err(|err| {
        log::warn!("Rejected consultation submission: {err}");
        ServiceError::Form("Please check the highlighted fields and try again.".to_string())
    })?;

    repo.create_consultation(&new_consultation).map_err(|err| {
        log::error!("Failed to store consultation: {err}");
        ServiceError::from(err)
    })
}

fn consultation_by_token<R>(repo: &R, token: &ApprovalToken) -> ServiceResult<Consultation>
where
    R: ConsultationReader + ?Sized,
{
    repo.get_consultation_by_token(token)?
        .ok_or(ServiceError::NotFound)
}

/// Loads the approval page for an emailed token link.
pub fn load_approval_page<R>(repo: &R, raw_token: &str) -> ServiceResult<ApprovalPageData>
where
    R: ConsultationReader + ChatReader + ?Sized,
{
    let token: ApprovalToken = raw_token
        .parse()
        .map_err(|_| ServiceError::NotFound)?;

    let consultation = consultation_by_token(repo, &token)?;
    let chat = repo.list_chat_messages(consultation.id)?;

    Ok(ApprovalPageData { consultation, chat })
}

/// Applies the client's approve/reject decision for a pending quote.
pub fn decide_approval<R>(repo: &R, form: ApprovalDecisionForm) -> ServiceResult<Consultation>
where
    R: ConsultationReader + ConsultationWriter + ?Sized,
{
    let payload = ApprovalDecisionPayload::try_from(form)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let consultation = consultation_by_token(repo, &payload.token)?;

    // A quote can only be decided once; later visits just show the outcome.
    if consultation.approval_status != ApprovalStatus::Pending {
        return Err(ServiceError::Form(
            "This quote has already been decided.".to_string(),
        ));
    }

    repo.apply_approval_decision(consultation.id, &payload.decision)
        .map_err(|err| {
            log::error!("Failed to apply approval decision: {err}");
            ServiceError::from(err)
        })
}

/// Appends a client message to the consultation thread behind the token.
pub fn post_client_message<R>(repo: &R, form: ClientChatForm) -> ServiceResult<()>
where
    R: ConsultationReader + ChatWriter + ?Sized,
{
    let token: ApprovalToken = form
        .token
        .parse()
        .map_err(|_| ServiceError::NotFound)?;
    let message = form
        .sanitized_message()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let consultation = consultation_by_token(repo, &token)?;

    repo.create_chat_message(&NewChatMessage {
        consultation_id: consultation.id,
        sender: ChatSender::Client,
        message,
    })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::consultation::{ApprovalDecision, ConsultationStatus, LeadSource};
    use crate::repository::mock::MockRepository;

    fn pending_consultation(token: ApprovalToken) -> Consultation {
        let now = chrono::Utc::now().naive_utc();
        Consultation {
            id: 11,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            company_name: None,
            website: None,
            project_type: vec!["web".into()],
            project_scope: None,
            description: "A long enough description".into(),
            budget: None,
            timeline: None,
            location: None,
            ownership: None,
            idea: None,
            links: Vec::new(),
            source: LeadSource::Website,
            assigned_to: None,
            priority: None,
            internal_notes: None,
            status: ConsultationStatus::InProgress,
            quote_amount: Some(5000.0),
            quote_currency: Some("USD".into()),
            quote_validity_days: Some(30),
            quote_notes: None,
            email_sent: true,
            email_sent_at: Some(now),
            email_template_used: Some("Quote".into()),
            approval_status: ApprovalStatus::Pending,
            approval_token: Some(token),
            approval_date: None,
            approval_notes: None,
            rejection_reason: None,
            project_assigned: false,
            project_assignment_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unknown_token_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_consultation_by_token().returning(|_| Ok(None));

        let result = load_approval_page(&repo, &ApprovalToken::new().to_string());
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn malformed_token_is_not_found() {
        let repo = MockRepository::new();
        let result = load_approval_page(&repo, "definitely-not-a-uuid");
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn approving_pending_quote_applies_decision() {
        let token = ApprovalToken::new();
        let mut repo = MockRepository::new();
        {
            let token = token;
            repo.expect_get_consultation_by_token()
                .returning(move |_| Ok(Some(pending_consultation(token))));
        }
        repo.expect_apply_approval_decision()
            .withf(|id, decision| {
                *id == 11
                    && matches!(decision, ApprovalDecision::Approve { notes } if notes.is_none())
            })
            .returning(move |_, _| {
                let mut updated = pending_consultation(token);
                updated.approval_status = ApprovalStatus::Approved;
                updated.project_assigned = true;
                Ok(updated)
            });

        let form = ApprovalDecisionForm {
            token: token.to_string(),
            action: "approve".into(),
            notes: None,
            rejection_reason: None,
        };
        let updated = decide_approval(&repo, form).unwrap();
        assert_eq!(updated.approval_status, ApprovalStatus::Approved);
        assert!(updated.project_assigned);
    }

    #[test]
    fn already_decided_quote_is_rejected() {
        let token = ApprovalToken::new();
        let mut repo = MockRepository::new();
        repo.expect_get_consultation_by_token().returning(move |_| {
            let mut consultation = pending_consultation(token);
            consultation.approval_status = ApprovalStatus::Approved;
            Ok(Some(consultation))
        });
        repo.expect_apply_approval_decision().times(0);

        let form = ApprovalDecisionForm {
            token: token.to_string(),
            action: "reject".into(),
            notes: None,
            rejection_reason: Some("changed my mind".into()),
        };
        assert!(matches!(
            decide_approval(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }
}
