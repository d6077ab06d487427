use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use spark_shared::clients::db::DbPool;
use spark_shared::errors::AppResult;

use crate::models::{NewUser, UpdateUser, User};
use crate::schema::users;

use super::get_conn;

/// CRUD access to the `users` table. Query failures are surfaced raw
/// (as `AppError::Database`); callers classify them.
#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, new_user: &NewUser) -> AppResult<User> {
        let mut conn = get_conn(&self.pool)?;
        let user = diesel::insert_into(users::table)
            .values(new_user)
            .get_result(&mut conn)?;
        Ok(user)
    }

    pub fn find_by_id(&self, id: Uuid) -> AppResult<User> {
        let mut conn = get_conn(&self.pool)?;
        let user = users::table.find(id).first(&mut conn)?;
        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> AppResult<User> {
        let mut conn = get_conn(&self.pool)?;
        let user = users::table
            .filter(users::email.eq(email.to_lowercase()))
            .first(&mut conn)?;
        Ok(user)
    }

    pub fn email_exists(&self, email: &str) -> AppResult<bool> {
        let mut conn = get_conn(&self.pool)?;
        let count: i64 = users::table
            .filter(users::email.eq(email.to_lowercase()))
            .count()
            .get_result(&mut conn)?;
        Ok(count > 0)
    }

    pub fn update(&self, id: Uuid, changes: &UpdateUser) -> AppResult<User> {
        let mut conn = get_conn(&self.pool)?;
        let user = diesel::update(users::table.find(id))
            .set((changes, users::updated_at.eq(Utc::now())))
            .get_result(&mut conn)?;
        Ok(user)
    }

    /// Stamps `last_login_at` on a successful login.
    pub fn record_login(&self, id: Uuid) -> AppResult<User> {
        let mut conn = get_conn(&self.pool)?;
        let user = diesel::update(users::table.find(id))
            .set((
                users::last_login_at.eq(Utc::now()),
                users::updated_at.eq(Utc::now()),
            ))
            .get_result(&mut conn)?;
        Ok(user)
    }

    pub fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut conn = get_conn(&self.pool)?;
        let deleted = diesel::delete(users::table.find(id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(diesel::result::Error::NotFound.into());
        }
        Ok(())
    }
}
