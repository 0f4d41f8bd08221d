//! DTOs for the quote-mailing workflow.

use crate::domain::consultation::Consultation;
use crate::domain::email::EmailLog;

/// Outcome of sending a quote: the updated consultation plus the links
/// embedded in the rendered email.
pub struct SentQuote {
    pub consultation: Consultation,
    pub email_log: EmailLog,
    pub approval_url: String,
    pub rejection_url: String,
}
