use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::consultation::{
    Consultation as DomainConsultation, NewConsultation as DomainNewConsultation,
    UpdateConsultation as DomainUpdateConsultation,
};
use crate::domain::types::ApprovalToken;
use crate::models::{decode_string_list, encode_string_list};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::consultations)]
/// Diesel model for [`crate::domain::consultation::Consultation`].
pub struct Consultation {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub project_type: String,
    pub project_scope: Option<String>,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub location: Option<String>,
    pub ownership: Option<String>,
    pub idea: Option<String>,
    pub links: String,
    pub source: String,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub internal_notes: Option<String>,
    pub status: String,
    pub quote_amount: Option<f64>,
    pub quote_currency: Option<String>,
    pub quote_validity_days: Option<i32>,
    pub quote_notes: Option<String>,
    pub email_sent: bool,
    pub email_sent_at: Option<NaiveDateTime>,
    pub email_template_used: Option<String>,
    pub approval_status: String,
    pub approval_token: Option<String>,
    pub approval_date: Option<NaiveDateTime>,
    pub approval_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub project_assigned: bool,
    pub project_assignment_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::consultations)]
/// Insertable form of [`Consultation`]; lifecycle columns take their
/// schema defaults.
pub struct NewConsultation {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub project_type: String,
    pub project_scope: Option<String>,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub location: Option<String>,
    pub ownership: Option<String>,
    pub idea: Option<String>,
    pub links: String,
    pub source: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::consultations)]
#[diesel(treat_none_as_null = true)]
/// Back-office edits to lifecycle fields.
pub struct UpdateConsultation {
    pub status: String,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub internal_notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::consultations)]
#[diesel(treat_none_as_null = true)]
/// Written when a quote is mailed: quote figures, email bookkeeping and a
/// fresh approval token; any previous client decision is reset.
pub struct QuoteSentUpdate {
    pub quote_amount: Option<f64>,
    pub quote_currency: Option<String>,
    pub quote_validity_days: Option<i32>,
    pub quote_notes: Option<String>,
    pub email_sent: bool,
    pub email_sent_at: Option<NaiveDateTime>,
    pub email_template_used: Option<String>,
    pub status: String,
    pub approval_status: String,
    pub approval_token: Option<String>,
    pub approval_date: Option<NaiveDateTime>,
    pub approval_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub project_assigned: bool,
    pub project_assignment_date: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::consultations)]
#[diesel(treat_none_as_null = true)]
/// Written when the client decides on a mailed quote.
pub struct ApprovalDecisionUpdate {
    pub approval_status: String,
    pub approval_date: Option<NaiveDateTime>,
    pub approval_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub project_assigned: bool,
    pub project_assignment_date: Option<NaiveDateTime>,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

impl From<Consultation> for DomainConsultation {
    fn from(consultation: Consultation) -> Self {
        Self {
            id: consultation.id,
            name: consultation.name,
            email: consultation.email,
            phone: consultation.phone,
            company_name: consultation.company_name,
            website: consultation.website,
            project_type: decode_string_list(&consultation.project_type),
            project_scope: consultation.project_scope,
            description: consultation.description,
            budget: consultation.budget,
            timeline: consultation.timeline,
            location: consultation.location,
            ownership: consultation.ownership.map(Into::into),
            idea: consultation.idea,
            links: decode_string_list(&consultation.links),
            source: consultation.source.into(),
            assigned_to: consultation.assigned_to,
            priority: consultation.priority,
            internal_notes: consultation.internal_notes,
            status: consultation.status.into(),
            quote_amount: consultation.quote_amount,
            quote_currency: consultation.quote_currency,
            quote_validity_days: consultation.quote_validity_days,
            quote_notes: consultation.quote_notes,
            email_sent: consultation.email_sent,
            email_sent_at: consultation.email_sent_at,
            email_template_used: consultation.email_template_used,
            approval_status: consultation.approval_status.into(),
            approval_token: consultation
                .approval_token
                .as_deref()
                .and_then(|raw| ApprovalToken::from_str(raw).ok()),
            approval_date: consultation.approval_date,
            approval_notes: consultation.approval_notes,
            rejection_reason: consultation.rejection_reason,
            project_assigned: consultation.project_assigned,
            project_assignment_date: consultation.project_assignment_date,
            created_at: consultation.created_at,
            updated_at: consultation.updated_at,
        }
    }
}

impl From<&DomainNewConsultation> for NewConsultation {
    fn from(consultation: &DomainNewConsultation) -> Self {
        Self {
            name: consultation.name.clone(),
            email: consultation.email.clone(),
            phone: consultation.phone.clone(),
            company_name: consultation.company_name.clone(),
            website: consultation.website.clone(),
            project_type: encode_string_list(&consultation.project_type),
            project_scope: consultation.project_scope.clone(),
            description: consultation.description.clone(),
            budget: consultation.budget.clone(),
            timeline: consultation.timeline.clone(),
            location: consultation.location.clone(),
            ownership: consultation.ownership.map(|o| o.to_string()),
            idea: consultation.idea.clone(),
            links: encode_string_list(&consultation.links),
            source: consultation.source.to_string(),
        }
    }
}

impl From<&DomainUpdateConsultation> for UpdateConsultation {
    fn from(update: &DomainUpdateConsultation) -> Self {
        Self {
            status: update.status.to_string(),
            assigned_to: update.assigned_to,
            priority: update.priority.clone(),
            internal_notes: update.internal_notes.clone(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consultation::{ApprovalStatus, ConsultationStatus, LeadSource, Ownership};

    #[test]
    fn db_consultation_into_domain() {
        let now = chrono::Utc::now().naive_utc();
        let token = ApprovalToken::new();
        let db = Consultation {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            company_name: None,
            website: None,
            project_type: r#"["web","ai"]"#.to_string(),
            project_scope: None,
            description: "A portal".to_string(),
            budget: Some("$10k-$25k".to_string()),
            timeline: None,
            location: None,
            ownership: Some("representing".to_string()),
            idea: None,
            links: "[]".to_string(),
            source: "website".to_string(),
            assigned_to: None,
            priority: None,
            internal_notes: None,
            status: "in_progress".to_string(),
            quote_amount: Some(12_500.0),
            quote_currency: Some("USD".to_string()),
            quote_validity_days: Some(30),
            quote_notes: None,
            email_sent: true,
            email_sent_at: Some(now),
            email_template_used: Some("Quote".to_string()),
            approval_status: "pending".to_string(),
            approval_token: Some(token.to_string()),
            approval_date: None,
            approval_notes: None,
            rejection_reason: None,
            project_assigned: false,
            project_assignment_date: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainConsultation = db.into();
        assert_eq!(domain.project_type, vec!["web", "ai"]);
        assert_eq!(domain.ownership, Some(Ownership::Representing));
        assert_eq!(domain.source, LeadSource::Website);
        assert_eq!(domain.status, ConsultationStatus::InProgress);
        assert_eq!(domain.approval_status, ApprovalStatus::Pending);
        assert_eq!(domain.approval_token, Some(token));
    }
}
