//! Database models backing the site repository.

pub mod admin;
#[cfg(feature = "server")]
pub mod auth;
pub mod chat;
#[cfg(feature = "server")]
pub mod config;
pub mod consultation;
pub mod email;
pub mod project;
pub mod review;
pub mod service;
pub mod settings;
pub mod team_member;
pub mod theme;

/// Decodes a JSON TEXT column into a vector of strings, tolerating legacy
/// rows with malformed payloads.
pub(crate) fn decode_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encodes a list of strings for storage in a JSON TEXT column.
pub(crate) fn encode_string_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}
