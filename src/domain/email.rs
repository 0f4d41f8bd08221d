//! Email templates and the delivery log. The site never talks SMTP itself;
//! "sending" renders a template and records the outcome in the log.

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Template kind routed by workflow, e.g. `consultation_approval`.
pub const KIND_CONSULTATION_APPROVAL: &str = "consultation_approval";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailStatus {
    Pending,
    Sent,
    Failed,
}

impl Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailStatus::Pending => write!(f, "pending"),
            EmailStatus::Sent => write!(f, "sent"),
            EmailStatus::Failed => write!(f, "failed"),
        }
    }
}

impl From<&str> for EmailStatus {
    fn from(s: &str) -> Self {
        match s {
            "sent" => EmailStatus::Sent,
            "failed" => EmailStatus::Failed,
            _ => EmailStatus::Pending,
        }
    }
}

impl From<String> for EmailStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmailTemplate {
    pub id: i32,
    pub name: String,
    pub subject: String,
    /// Body with `{{placeholder}}` slots filled at send time.
    pub body: String,
    pub kind: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewEmailTemplate {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub kind: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateEmailTemplate {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub kind: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmailLog {
    pub id: i32,
    pub consultation_id: i32,
    pub template_id: i32,
    pub recipient_email: String,
    pub subject: String,
    pub status: EmailStatus,
    pub sent_at: Option<NaiveDateTime>,
    pub error_message: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewEmailLog {
    pub consultation_id: i32,
    pub template_id: i32,
    pub recipient_email: String,
    pub subject: String,
    pub status: EmailStatus,
    pub sent_at: Option<NaiveDateTime>,
    pub error_message: Option<String>,
}

crate::domain::string_enum_serde!(EmailStatus);
