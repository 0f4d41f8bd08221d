use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::email::{
    EmailLog as DomainEmailLog, EmailTemplate as DomainEmailTemplate,
    NewEmailLog as DomainNewEmailLog, NewEmailTemplate as DomainNewEmailTemplate,
    UpdateEmailTemplate as DomainUpdateEmailTemplate,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::email_templates)]
pub struct EmailTemplate {
    pub id: i32,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub kind: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::email_templates)]
pub struct NewEmailTemplate {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub kind: String,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::email_templates)]
pub struct UpdateEmailTemplate {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub kind: String,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::email_logs)]
pub struct EmailLog {
    pub id: i32,
    pub consultation_id: i32,
    pub template_id: i32,
    pub recipient_email: String,
    pub subject: String,
    pub status: String,
    pub sent_at: Option<NaiveDateTime>,
    pub error_message: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::email_logs)]
pub struct NewEmailLog {
    pub consultation_id: i32,
    pub template_id: i32,
    pub recipient_email: String,
    pub subject: String,
    pub status: String,
    pub sent_at: Option<NaiveDateTime>,
    pub error_message: Option<String>,
}

impl From<EmailTemplate> for DomainEmailTemplate {
    fn from(template: EmailTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            subject: template.subject,
            body: template.body,
            kind: template.kind,
            is_active: template.is_active,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

impl From<&DomainNewEmailTemplate> for NewEmailTemplate {
    fn from(template: &DomainNewEmailTemplate) -> Self {
        Self {
            name: template.name.clone(),
            subject: template.subject.clone(),
            body: template.body.clone(),
            kind: template.kind.clone(),
            is_active: template.is_active,
        }
    }
}

impl From<&DomainUpdateEmailTemplate> for UpdateEmailTemplate {
    fn from(template: &DomainUpdateEmailTemplate) -> Self {
        Self {
            name: template.name.clone(),
            subject: template.subject.clone(),
            body: template.body.clone(),
            kind: template.kind.clone(),
            is_active: template.is_active,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<EmailLog> for DomainEmailLog {
    fn from(log: EmailLog) -> Self {
        Self {
            id: log.id,
            consultation_id: log.consultation_id,
            template_id: log.template_id,
            recipient_email: log.recipient_email,
            subject: log.subject,
            status: log.status.into(),
            sent_at: log.sent_at,
            error_message: log.error_message,
            created_at: log.created_at,
        }
    }
}

impl From<&DomainNewEmailLog> for NewEmailLog {
    fn from(log: &DomainNewEmailLog) -> Self {
        Self {
            consultation_id: log.consultation_id,
            template_id: log.template_id,
            recipient_email: log.recipient_email.clone(),
            subject: log.subject.clone(),
            status: log.status.to_string(),
            sent_at: log.sent_at,
            error_message: log.error_message.clone(),
        }
    }
}
