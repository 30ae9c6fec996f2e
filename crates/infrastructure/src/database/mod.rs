use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use domain::DomainError;
use std::time::Duration;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// Sampler and API server share the file, so writers wait for the lock instead of failing.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the SQLite file and makes sure both tables exist.
    pub fn new(database_path: &str) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .max_size(4)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: Duration::from_secs(5),
            }))
            .build(manager)
            .map_err(|e| {
                DomainError::RepositoryError(format!("Failed to open {}: {}", database_path, e))
            })?;

        let database = Database { pool };
        database.initialize()?;
        Ok(database)
    }

    fn initialize(&self) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        conn.batch_execute(CREATE_SCHEMA)
            .map_err(|e| DomainError::RepositoryError(format!("Failed to create schema: {}", e)))
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Runs a diesel query on a pooled connection off the async runtime.
pub(crate) async fn run_blocking<T, F>(pool: &SqlitePool, query: F) -> Result<T, DomainError>
where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        query(&mut conn).map_err(|e| DomainError::RepositoryError(e.to_string()))
    })
    .await
    .map_err(|e| DomainError::RepositoryError(e.to_string()))?
}
