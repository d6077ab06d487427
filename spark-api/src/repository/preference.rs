use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use spark_shared::clients::db::DbPool;
use spark_shared::errors::AppResult;

use crate::models::{NewPreference, Preference, UpdatePreference};
use crate::schema::preferences;

use super::get_conn;

/// CRUD access to the `preferences` table, one row per user. Column
/// defaults come from the database.
#[derive(Clone)]
pub struct PreferenceRepository {
    pool: DbPool,
}

impl PreferenceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, new_preference: &NewPreference) -> AppResult<Preference> {
        let mut conn = get_conn(&self.pool)?;
        let preference = diesel::insert_into(preferences::table)
            .values(new_preference)
            .get_result(&mut conn)?;
        Ok(preference)
    }

    pub fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Preference> {
        let mut conn = get_conn(&self.pool)?;
        let preference = preferences::table
            .filter(preferences::user_id.eq(user_id))
            .first(&mut conn)?;
        Ok(preference)
    }

    pub fn update(&self, user_id: Uuid, changes: &UpdatePreference) -> AppResult<Preference> {
        let mut conn = get_conn(&self.pool)?;
        let preference =
            diesel::update(preferences::table.filter(preferences::user_id.eq(user_id)))
                .set((changes, preferences::updated_at.eq(Utc::now())))
                .get_result(&mut conn)?;
        Ok(preference)
    }

    pub fn delete(&self, user_id: Uuid) -> AppResult<()> {
        let mut conn = get_conn(&self.pool)?;
        let deleted =
            diesel::delete(preferences::table.filter(preferences::user_id.eq(user_id)))
                .execute(&mut conn)?;
        if deleted == 0 {
            return Err(diesel::result::Error::NotFound.into());
        }
        Ok(())
    }
}
