//! Lead-intake aggregate: a prospective client's project request and its
//! lifecycle through quoting and client approval.

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ApprovalToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsultationStatus {
    New,
    InProgress,
    Completed,
    Cancelled,
}

impl Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsultationStatus::New => write!(f, "new"),
            ConsultationStatus::InProgress => write!(f, "in_progress"),
            ConsultationStatus::Completed => write!(f, "completed"),
            ConsultationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl From<&str> for ConsultationStatus {
    fn from(s: &str) -> Self {
        match s {
            "in_progress" => ConsultationStatus::InProgress,
            "completed" => ConsultationStatus::Completed,
            "cancelled" => ConsultationStatus::Cancelled,
            _ => ConsultationStatus::New,
        }
    }
}

impl From<String> for ConsultationStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// Client-side decision state for a mailed quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStatus::Pending => write!(f, "pending"),
            ApprovalStatus::Approved => write!(f, "approved"),
            ApprovalStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl From<&str> for ApprovalStatus {
    fn from(s: &str) -> Self {
        match s {
            "approved" => ApprovalStatus::Approved,
            "rejected" => ApprovalStatus::Rejected,
            _ => ApprovalStatus::Pending,
        }
    }
}

impl From<String> for ApprovalStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// Whether the requester owns the idea or represents a company.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    Own,
    Representing,
}

impl Display for Ownership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ownership::Own => write!(f, "own"),
            Ownership::Representing => write!(f, "representing"),
        }
    }
}

impl From<&str> for Ownership {
    fn from(s: &str) -> Self {
        match s {
            "representing" => Ownership::Representing,
            _ => Ownership::Own,
        }
    }
}

impl From<String> for Ownership {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

/// Where the lead came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadSource {
    Website,
    Referral,
    SocialMedia,
    Advertisement,
    Other(String),
}

impl Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadSource::Website => write!(f, "website"),
            LeadSource::Referral => write!(f, "referral"),
            LeadSource::SocialMedia => write!(f, "social_media"),
            LeadSource::Advertisement => write!(f, "advertisement"),
            LeadSource::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for LeadSource {
    fn from(s: &str) -> Self {
        match s {
            "website" => LeadSource::Website,
            "referral" => LeadSource::Referral,
            "social_media" => LeadSource::SocialMedia,
            "advertisement" => LeadSource::Advertisement,
            _ => LeadSource::Other(s.to_string()),
        }
    }
}

impl From<String> for LeadSource {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub project_type: Vec<String>,
    pub project_scope: Option<String>,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub location: Option<String>,
    pub ownership: Option<Ownership>,
    pub idea: Option<String>,
    pub links: Vec<String>,
    pub source: LeadSource,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub internal_notes: Option<String>,
    pub status: ConsultationStatus,
    pub quote_amount: Option<f64>,
    pub quote_currency: Option<String>,
    pub quote_validity_days: Option<i32>,
    pub quote_notes: Option<String>,
    pub email_sent: bool,
    pub email_sent_at: Option<NaiveDateTime>,
    pub email_template_used: Option<String>,
    pub approval_status: ApprovalStatus,
    pub approval_token: Option<ApprovalToken>,
    pub approval_date: Option<NaiveDateTime>,
    pub approval_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub project_assigned: bool,
    pub project_assignment_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewConsultation {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub project_type: Vec<String>,
    pub project_scope: Option<String>,
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub location: Option<String>,
    pub ownership: Option<Ownership>,
    pub idea: Option<String>,
    pub links: Vec<String>,
    pub source: LeadSource,
}

impl NewConsultation {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        company_name: Option<String>,
        website: Option<String>,
        project_type: Vec<String>,
        project_scope: Option<String>,
        description: String,
        budget: Option<String>,
        timeline: Option<String>,
        location: Option<String>,
        ownership: Option<Ownership>,
        idea: Option<String>,
        links: Vec<String>,
        source: LeadSource,
    ) -> Self {
        let trim = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: trim(phone),
            company_name: trim(company_name),
            website: trim(website),
            project_type: project_type
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            project_scope: trim(project_scope),
            description: description.trim().to_string(),
            budget: trim(budget),
            timeline: trim(timeline),
            location: trim(location),
            ownership,
            idea: trim(idea),
            links: links
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            source,
        }
    }
}

/// Back-office edits applied to an existing consultation.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateConsultation {
    pub status: ConsultationStatus,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub internal_notes: Option<String>,
}

impl UpdateConsultation {
    #[must_use]
    pub fn new(
        status: ConsultationStatus,
        assigned_to: Option<i32>,
        priority: Option<String>,
        internal_notes: Option<String>,
    ) -> Self {
        let trim = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            status,
            assigned_to,
            priority: trim(priority),
            internal_notes: trim(internal_notes),
        }
    }
}

/// Quote figures captured when mailing an offer to the client.
#[derive(Clone, Debug, Deserialize)]
pub struct QuoteOffer {
    pub amount: f64,
    pub currency: String,
    pub validity_days: i32,
    pub notes: Option<String>,
}

/// The client's verdict on a mailed quote. Approving marks the project as
/// officially assigned; rejecting cancels the consultation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApprovalDecision {
    Approve { notes: Option<String> },
    Reject { reason: Option<String> },
}

crate::domain::string_enum_serde!(ConsultationStatus);
crate::domain::string_enum_serde!(ApprovalStatus);
crate::domain::string_enum_serde!(Ownership);
crate::domain::string_enum_serde!(LeadSource);
