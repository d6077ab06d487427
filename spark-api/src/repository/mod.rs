mod user;
mod profile;
mod matches;
mod message;
mod preference;

pub use user::UserRepository;
pub use profile::ProfileRepository;
pub use matches::MatchRepository;
pub use message::MessageRepository;
pub use preference::PreferenceRepository;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use spark_shared::clients::db::DbPool;
use spark_shared::errors::{AppError, AppResult};

pub(crate) type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

pub(crate) fn get_conn(pool: &DbPool) -> AppResult<PooledConn> {
    pool.get().map_err(|e| AppError::internal(e.to_string()))
}
