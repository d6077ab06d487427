use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use spark_shared::clients::db::DbPool;
use spark_shared::errors::AppResult;

use crate::models::{NewProfile, Profile, UpdateProfile};
use crate::schema::profiles;

use super::get_conn;

/// CRUD access to the `profiles` table, keyed by the owning user.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: DbPool,
}

impl ProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, new_profile: &NewProfile) -> AppResult<Profile> {
        let mut conn = get_conn(&self.pool)?;
        let profile = diesel::insert_into(profiles::table)
            .values(new_profile)
            .get_result(&mut conn)?;
        Ok(profile)
    }

    pub fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Profile> {
        let mut conn = get_conn(&self.pool)?;
        let profile = profiles::table
            .filter(profiles::user_id.eq(user_id))
            .first(&mut conn)?;
        Ok(profile)
    }

    pub fn update(&self, user_id: Uuid, changes: &UpdateProfile) -> AppResult<Profile> {
        let mut conn = get_conn(&self.pool)?;
        let profile = diesel::update(profiles::table.filter(profiles::user_id.eq(user_id)))
            .set((changes, profiles::updated_at.eq(Utc::now())))
            .get_result(&mut conn)?;
        Ok(profile)
    }

    pub fn delete(&self, user_id: Uuid) -> AppResult<()> {
        let mut conn = get_conn(&self.pool)?;
        let deleted = diesel::delete(profiles::table.filter(profiles::user_id.eq(user_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(diesel::result::Error::NotFound.into());
        }
        Ok(())
    }
}
