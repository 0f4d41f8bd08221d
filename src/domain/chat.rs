use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::SanitizedText;

/// Which side of the consultation thread wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatSender {
    Client,
    Team,
}

impl Display for ChatSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatSender::Client => write!(f, "client"),
            ChatSender::Team => write!(f, "team"),
        }
    }
}

impl From<&str> for ChatSender {
    fn from(s: &str) -> Self {
        match s {
            "team" => ChatSender::Team,
            _ => ChatSender::Client,
        }
    }
}

impl From<String> for ChatSender {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub consultation_id: i32,
    pub sender: ChatSender,
    pub message: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewChatMessage {
    pub consultation_id: i32,
    pub sender: ChatSender,
    pub message: SanitizedText,
}

crate::domain::string_enum_serde!(ChatSender);
