use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::chat::{ChatMessage as DomainChatMessage, NewChatMessage as DomainNewChatMessage};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::chats)]
pub struct ChatMessage {
    pub id: i32,
    pub consultation_id: i32,
    pub sender: String,
    pub message: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::chats)]
pub struct NewChatMessage {
    pub consultation_id: i32,
    pub sender: String,
    pub message: String,
}

impl From<ChatMessage> for DomainChatMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            consultation_id: message.consultation_id,
            sender: message.sender.into(),
            message: message.message,
            read: message.read,
            created_at: message.created_at,
        }
    }
}

impl From<&DomainNewChatMessage> for NewChatMessage {
    fn from(message: &DomainNewChatMessage) -> Self {
        Self {
            consultation_id: message.consultation_id,
            sender: message.sender.to_string(),
            message: message.message.as_str().to_string(),
        }
    }
}
