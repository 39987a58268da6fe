//! Per-invocation database session lifecycle.
//!
//! Each invocation opens one exclusively-owned connection and closes it
//! before responding. Pooling across invocations is deliberately absent.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tokio::time::timeout;

use crate::config::{DbConfig, CONNECT_TIMEOUT};
use crate::error::DbError;

/// One open, exclusively-owned connection.
pub type DbSession = MySqlConnection;

/// Open a session against the configured server.
///
/// The attempt is bounded by [`CONNECT_TIMEOUT`]; an expired deadline is a
/// connection failure like any other.
pub async fn connect(config: &DbConfig) -> Result<DbSession, DbError> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    match timeout(CONNECT_TIMEOUT, MySqlConnection::connect_with(&options)).await {
        Ok(Ok(session)) => Ok(session),
        Ok(Err(err)) => Err(DbError::Connection(err.to_string())),
        Err(_) => Err(DbError::Connection(format!(
            "connect to {}:{} timed out after {} ms",
            config.host,
            config.port,
            CONNECT_TIMEOUT.as_millis()
        ))),
    }
}

/// Close the session gracefully. A failed close is logged, not surfaced:
/// by this point the invocation already has its outcome.
pub async fn release(session: DbSession) {
    if let Err(err) = session.close().await {
        tracing::warn!(error = %err, "failed to close database session");
    }
}
