use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use spark_shared::clients::db::DbPool;
use spark_shared::errors::AppResult;

use crate::models::{Message, NewMessage};
use crate::schema::messages;

use super::get_conn;

/// CRUD access to the `messages` table. A conversation is every message
/// exchanged between two users, in either direction.
#[derive(Clone)]
pub struct MessageRepository {
    pool: DbPool,
}

impl MessageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, new_message: &NewMessage) -> AppResult<Message> {
        let mut conn = get_conn(&self.pool)?;
        let message = diesel::insert_into(messages::table)
            .values(new_message)
            .get_result(&mut conn)?;
        Ok(message)
    }

    pub fn find_by_id(&self, id: Uuid) -> AppResult<Message> {
        let mut conn = get_conn(&self.pool)?;
        let message = messages::table.find(id).first(&mut conn)?;
        Ok(message)
    }

    /// All messages between the two users, oldest first.
    pub fn conversation(&self, user1_id: Uuid, user2_id: Uuid) -> AppResult<Vec<Message>> {
        let mut conn = get_conn(&self.pool)?;
        let rows = messages::table
            .filter(
                (messages::sender_id.eq(user1_id).and(messages::receiver_id.eq(user2_id)))
                    .or(messages::sender_id.eq(user2_id).and(messages::receiver_id.eq(user1_id))),
            )
            .order(messages::created_at.asc())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn mark_read(&self, id: Uuid) -> AppResult<Message> {
        let mut conn = get_conn(&self.pool)?;
        let message = diesel::update(messages::table.find(id))
            .set((messages::is_read.eq(true), messages::updated_at.eq(Utc::now())))
            .get_result(&mut conn)?;
        Ok(message)
    }

    pub fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut conn = get_conn(&self.pool)?;
        let deleted = diesel::delete(messages::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(diesel::result::Error::NotFound.into());
        }
        Ok(())
    }
}
