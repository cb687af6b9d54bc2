use thiserror::Error;

/// Failures at the database boundary. All are fatal for the run: the first
/// error aborts the remaining entity loads.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("database connection failed")]
    Connect(#[source] sqlx::Error),
    #[error("schema setup failed for {table}")]
    SchemaSetup {
        table: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("insert into {table} failed")]
    Insert {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
