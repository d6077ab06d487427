pub mod config;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

use spark_shared::clients::db::DbPool;

use repository::{
    MatchRepository, MessageRepository, PreferenceRepository, ProfileRepository, UserRepository,
};

/// Everything a handler needs: configuration plus one repository per
/// entity, all sharing the same connection pool. No ambient globals.
pub struct AppState {
    pub config: config::AppConfig,
    pub db: DbPool,
    pub users: UserRepository,
    pub profiles: ProfileRepository,
    pub matches: MatchRepository,
    pub messages: MessageRepository,
    pub preferences: PreferenceRepository,
}

impl AppState {
    pub fn new(config: config::AppConfig, db: DbPool) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            profiles: ProfileRepository::new(db.clone()),
            matches: MatchRepository::new(db.clone()),
            messages: MessageRepository::new(db.clone()),
            preferences: PreferenceRepository::new(db.clone()),
            config,
            db,
        }
    }
}
