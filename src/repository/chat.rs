//! Repository implementation for consultation chat threads.

use diesel::prelude::*;

use crate::domain::chat::{ChatMessage, ChatSender, NewChatMessage};
use crate::models::chat::{ChatMessage as DbChatMessage, NewChatMessage as DbNewChatMessage};
use crate::repository::{ChatReader, ChatWriter, DieselRepository, errors::RepositoryResult};

impl ChatReader for DieselRepository {
    fn list_chat_messages(&self, consultation_id: i32) -> RepositoryResult<Vec<ChatMessage>> {
        use crate::schema::chats;

        let mut conn = self.conn()?;
        let messages = chats::table
            .filter(chats::consultation_id.eq(consultation_id))
            .order(chats::created_at.asc())
            .load::<DbChatMessage>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(messages)
    }
}

impl ChatWriter for DieselRepository {
    fn create_chat_message(&self, message: &NewChatMessage) -> RepositoryResult<ChatMessage> {
        use crate::schema::chats;

        let mut conn = self.conn()?;
        let db_message: DbNewChatMessage = message.into();

        let created = diesel::insert_into(chats::table)
            .values(&db_message)
            .get_result::<DbChatMessage>(&mut conn)?;

        Ok(created.into())
    }

    fn mark_chat_read(
        &self,
        consultation_id: i32,
        sender: ChatSender,
    ) -> RepositoryResult<usize> {
        use crate::schema::chats;

        let mut conn = self.conn()?;
        let affected = diesel::update(
            chats::table
                .filter(chats::consultation_id.eq(consultation_id))
                .filter(chats::sender.eq(sender.to_string()))
                .filter(chats::read.eq(false)),
        )
        .set(chats::read.eq(true))
        .execute(&mut conn)?;

        Ok(affected)
    }
}
