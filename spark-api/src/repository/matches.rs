use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use spark_shared::clients::db::DbPool;
use spark_shared::errors::AppResult;

use crate::models::{Match, MatchStatus, NewMatch};
use crate::schema::matches;

use super::get_conn;

/// CRUD access to the `matches` table. A pair of users has at most one
/// match row regardless of which side proposed it; lookups are symmetric.
#[derive(Clone)]
pub struct MatchRepository {
    pool: DbPool,
}

impl MatchRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, new_match: &NewMatch) -> AppResult<Match> {
        let mut conn = get_conn(&self.pool)?;
        let m = diesel::insert_into(matches::table)
            .values(new_match)
            .get_result(&mut conn)?;
        Ok(m)
    }

    pub fn find_by_id(&self, id: Uuid) -> AppResult<Match> {
        let mut conn = get_conn(&self.pool)?;
        let m = matches::table.find(id).first(&mut conn)?;
        Ok(m)
    }

    pub fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Vec<Match>> {
        let mut conn = get_conn(&self.pool)?;
        let rows = matches::table
            .filter(matches::user1_id.eq(user_id).or(matches::user2_id.eq(user_id)))
            .order(matches::created_at.desc())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn find_by_users(&self, user1_id: Uuid, user2_id: Uuid) -> AppResult<Match> {
        let mut conn = get_conn(&self.pool)?;
        let m = matches::table
            .filter(
                (matches::user1_id.eq(user1_id).and(matches::user2_id.eq(user2_id)))
                    .or(matches::user1_id.eq(user2_id).and(matches::user2_id.eq(user1_id))),
            )
            .first(&mut conn)?;
        Ok(m)
    }

    pub fn update_status(&self, id: Uuid, status: MatchStatus) -> AppResult<Match> {
        let mut conn = get_conn(&self.pool)?;
        let m = diesel::update(matches::table.find(id))
            .set((
                matches::status.eq(status.to_string()),
                matches::updated_at.eq(Utc::now()),
            ))
            .get_result(&mut conn)?;
        Ok(m)
    }

    pub fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut conn = get_conn(&self.pool)?;
        let deleted = diesel::delete(matches::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(diesel::result::Error::NotFound.into());
        }
        Ok(())
    }
}
