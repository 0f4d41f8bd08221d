//! Email templates, the delivery log, and the quote-mailing workflow.
//!
//! The site does not speak SMTP; sending a quote renders the active
//! template, stamps the consultation and appends an `email_logs` row. The
//! log is the delivery interface an external mailer consumes.

use chrono::Utc;

use crate::domain::admin::AdminRole;
use crate::domain::consultation::QuoteOffer;
use crate::domain::email::{
    EmailLog, EmailStatus, EmailTemplate, KIND_CONSULTATION_APPROVAL, NewEmailLog,
};
use crate::domain::types::ApprovalToken;
use crate::dto::emails::SentQuote;
use crate::forms::emails::{SaveTemplateForm, SendQuoteForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{
    ConsultationReader, ConsultationWriter, EmailLogReader, EmailLogWriter, EmailTemplateReader,
    EmailTemplateWriter,
};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Fills `{{slot}}` placeholders in a stored template string.
pub fn render_placeholders(template: &str, vars: &[(&str, String)]) -> String {
    let mut rendered = template.to_string();
    for (slot, value) in vars {
        rendered = rendered.replace(&format!("{{{{{slot}}}}}"), value);
    }
    rendered
}

/// Renders the active approval template, rotates the approval token and
/// records the send in the email log.
pub fn send_quote<R>(
    repo: &R,
    user: &AuthenticatedUser,
    consultation_id: i32,
    form: SendQuoteForm,
    base_url: &str,
) -> ServiceResult<SentQuote>
where
    R: ConsultationReader + ConsultationWriter + EmailTemplateReader + EmailLogWriter + ?Sized,
{
    ensure_role(user, AdminRole::Editor)?;

    let offer =
        QuoteOffer::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    let consultation = repo
        .get_consultation_by_id(consultation_id)?
        .ok_or(ServiceError::NotFound)?;

    let template = repo
        .get_active_template_by_kind(KIND_CONSULTATION_APPROVAL)?
        .ok_or_else(|| {
            ServiceError::Form(
                "No active consultation approval email template is configured.".to_string(),
            )
        })?;

    let token = ApprovalToken::new();
    let approval_url = format!("{base_url}/consultation/approval?token={token}&action=approve");
    let rejection_url = format!("{base_url}/consultation/approval?token={token}&action=reject");

    let vars = [
        ("name", consultation.name.clone()),
        (
            "company",
            consultation.company_name.clone().unwrap_or_default(),
        ),
        ("quote_amount", format!("{:.2}", offer.amount)),
        ("quote_currency", offer.currency.clone()),
        ("validity_days", offer.validity_days.to_string()),
        ("approval_url", approval_url.clone()),
        ("rejection_url", rejection_url.clone()),
    ];
    let subject = render_placeholders(&template.subject, &vars);
    // The rendered body is what an external mailer would pick up; rendering
    // must succeed before any state is written.
    let _body = render_placeholders(&template.body, &vars);

    let consultation =
        repo.record_quote_sent(consultation.id, &offer, token, &template.name)?;

    let email_log = repo.create_email_log(&NewEmailLog {
        consultation_id: consultation.id,
        template_id: template.id,
        recipient_email: consultation.email.clone(),
        subject,
        status: EmailStatus::Sent,
        sent_at: Some(Utc::now().naive_utc()),
        error_message: None,
    })?;

    Ok(SentQuote {
        consultation,
        email_log,
        approval_url,
        rejection_url,
    })
}

/// Lists every stored template for the admin screen.
pub fn list_templates<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<EmailTemplate>>
where
    R: EmailTemplateReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    Ok(repo.list_email_templates()?)
}

pub fn create_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveTemplateForm,
) -> ServiceResult<EmailTemplate>
where
    R: EmailTemplateWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    let new_template = form
        .into_new_template()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.create_email_template(&new_template)?)
}

pub fn update_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    template_id: i32,
    form: SaveTemplateForm,
) -> ServiceResult<EmailTemplate>
where
    R: EmailTemplateReader + EmailTemplateWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;

    if repo.get_email_template_by_id(template_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let updates = form
        .into_update_template()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.update_email_template(template_id, &updates)?)
}

pub fn delete_template<R>(
    repo: &R,
    user: &AuthenticatedUser,
    template_id: i32,
) -> ServiceResult<()>
where
    R: EmailTemplateWriter + ?Sized,
{
    ensure_role(user, AdminRole::Admin)?;
    repo.delete_email_template(template_id)?;
    Ok(())
}

/// Lists the delivery log, optionally narrowed to one consultation.
pub fn list_logs<R>(
    repo: &R,
    user: &AuthenticatedUser,
    consultation_id: Option<i32>,
) -> ServiceResult<Vec<EmailLog>>
where
    R: EmailLogReader + ?Sized,
{
    ensure_role(user, AdminRole::Viewer)?;
    Ok(repo.list_email_logs(consultation_id)?)
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn placeholders_are_replaced() {
        let rendered = render_placeholders(
            "Dear {{name}}, your quote is {{quote_amount}} {{quote_currency}}.",
            &[
                ("name", "Ada".to_string()),
                ("quote_amount", "12500.00".to_string()),
                ("quote_currency", "USD".to_string()),
            ],
        );
        assert_eq!(rendered, "Dear Ada, your quote is 12500.00 USD.");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let rendered = render_placeholders("Hello {{nobody}}", &[("name", "Ada".to_string())]);
        assert_eq!(rendered, "Hello {{nobody}}");
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::consultation::{
        ApprovalStatus, Consultation, ConsultationStatus, LeadSource,
    };
    use crate::repository::mock::MockRepository;

    fn editor() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "2".into(),
            email: "editor@example.com".into(),
            name: "Editor".into(),
            role: AdminRole::Editor,
            exp: 0,
        }
    }

    fn lead() -> Consultation {
        let now = chrono::Utc::now().naive_utc();
        Consultation {
            id: 4,
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
            status: ConsultationStatus::New,
            quote_amount: None,
            quote_currency: None,
            quote_validity_days: None,
            quote_notes: None,
            email_sent: false,
            email_sent_at: None,
            email_template_used: None,
            approval_status: ApprovalStatus::Pending,
            approval_token: None,
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
    fn sending_quote_without_template_is_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_consultation_by_id()
            .returning(|_| Ok(Some(lead())));
        repo.expect_get_active_template_by_kind()
            .returning(|_| Ok(None));
        repo.expect_record_quote_sent().times(0);
        repo.expect_create_email_log().times(0);

        let form = SendQuoteForm {
            amount: 5000.0,
            currency: "USD".into(),
            validity_days: 30,
            notes: None,
        };
        assert!(matches!(
            send_quote(&repo, &editor(), 4, form, "https://havoc.dev"),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn sending_quote_logs_the_email() {
        let now = chrono::Utc::now().naive_utc();
        let mut repo = MockRepository::new();
        repo.expect_get_consultation_by_id()
            .returning(|_| Ok(Some(lead())));
        repo.expect_get_active_template_by_kind().returning(move |_| {
            Ok(Some(EmailTemplate {
                id: 9,
                name: "Quote".into(),
                subject: "Your quote from Havoc Solutions, {{name}}".into(),
                body: "Approve here: {{approval_url}}".into(),
                kind: KIND_CONSULTATION_APPROVAL.into(),
                is_active: true,
                created_at: now,
                updated_at: now,
            }))
        });
        repo.expect_record_quote_sent().returning(|id, offer, token, template| {
            let mut updated = lead();
            updated.id = id;
            updated.quote_amount = Some(offer.amount);
            updated.approval_token = Some(token);
            updated.email_template_used = Some(template.to_string());
            updated.status = ConsultationStatus::InProgress;
            updated.email_sent = true;
            Ok(updated)
        });
        repo.expect_create_email_log().returning(|new_log| {
            assert_eq!(new_log.status, EmailStatus::Sent);
            assert_eq!(new_log.recipient_email, "ada@example.com");
            assert_eq!(
                new_log.subject,
                "Your quote from Havoc Solutions, Ada"
            );
            Ok(EmailLog {
                id: 1,
                consultation_id: new_log.consultation_id,
                template_id: new_log.template_id,
                recipient_email: new_log.recipient_email.clone(),
                subject: new_log.subject.clone(),
                status: new_log.status,
                sent_at: new_log.sent_at,
                error_message: None,
                created_at: chrono::Utc::now().naive_utc(),
            })
        });

        let form = SendQuoteForm {
            amount: 5000.0,
            currency: "usd".into(),
            validity_days: 30,
            notes: None,
        };
        let sent = send_quote(&repo, &editor(), 4, form, "https://havoc.dev").unwrap();
        assert!(sent.approval_url.contains("action=approve"));
        assert!(sent.rejection_url.contains("action=reject"));
        assert!(sent.consultation.email_sent);
    }
}
