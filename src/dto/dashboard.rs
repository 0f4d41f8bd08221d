//! DTOs for the admin dashboard and consultation workspace.

use serde::Serialize;

use crate::domain::admin::Admin;
use crate::domain::chat::ChatMessage;
use crate::domain::consultation::Consultation;
use crate::domain::email::{EmailLog, EmailTemplate};
use crate::pagination::Paginated;

/// Consultation counts rolled up by lifecycle status.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub new: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total: usize,
}

/// Query parameters accepted by the dashboard listing.
#[derive(Debug, Default)]
pub struct DashboardQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
}

pub struct DashboardPageData {
    pub counts: StatusCounts,
    pub consultations: Paginated<Consultation>,
    pub admins: Vec<Admin>,
    pub status_filter: Option<String>,
    pub search_query: Option<String>,
}

/// Aggregated data required to render the consultation detail page.
pub struct ConsultationDetailData {
    pub consultation: Consultation,
    pub chat: Vec<ChatMessage>,
    pub email_logs: Vec<EmailLog>,
    pub admins: Vec<Admin>,
    pub templates: Vec<EmailTemplate>,
}
