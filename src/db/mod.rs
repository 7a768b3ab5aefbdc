pub mod from_row;
pub mod repo;
mod schema;

pub use schema::init_db;

use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Store handle; each request checks out one connection.
    pub db: DbPool,
}

/// Writers queue on the write lock for up to this long before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

fn with_connection_setup(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    Pool::builder()
        .max_size(10)
        .build(with_connection_setup(SqliteConnectionManager::file(database_path)))
}

/// In-memory pool for tests and throwaway runs.
///
/// Every in-memory connection is its own database, so the pool holds exactly
/// one connection.
pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    Pool::builder()
        .max_size(1)
        .build(with_connection_setup(SqliteConnectionManager::memory()))
}
