//! Connection configuration.

use sqlx::mysql::MySqlConnectOptions;

/// Connection parameters, built once at process entry and passed by
/// reference into the loader.
///
/// There are no defaults: a variable missing from the environment becomes an
/// empty value here and fails at the database when connecting.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Reads `DB_HOST`, `DB_USER`, `DB_PASSWORD`, and `DB_NAME`.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DB_HOST").unwrap_or_default(),
            user: std::env::var("DB_USER").unwrap_or_default(),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            database: std::env::var("DB_NAME").unwrap_or_default(),
        }
    }

    pub(crate) fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}
