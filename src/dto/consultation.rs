//! DTOs for the client-facing approval page.

use crate::domain::chat::ChatMessage;
use crate::domain::consultation::Consultation;

/// Everything the approval page shows: the quoted consultation and the
/// running thread with the team.
pub struct ApprovalPageData {
    pub consultation: Consultation,
    pub chat: Vec<ChatMessage>,
}
