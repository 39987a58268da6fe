//! Repository for the `api_logs` table.

use crate::error::DbError;
use crate::models::log_entry::{LogEntry, NewLogEntry};
use crate::session::DbSession;

/// Column list for SELECT queries.
const COLUMNS: &str = "id, request_id, path, method, ip_address, user_agent, created_at";

/// Insert and read operations for request-log rows.
pub struct LogEntryRepo;

impl LogEntryRepo {
    /// Insert exactly one log entry; the server assigns `id` and
    /// `created_at`.
    pub async fn insert(session: &mut DbSession, entry: &NewLogEntry) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO api_logs (request_id, path, method, ip_address, user_agent) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&entry.request_id)
        .bind(&entry.path)
        .bind(&entry.method)
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .execute(session)
        .await
        .map(|_| ())
        .map_err(DbError::Execution)
    }

    /// Fetch the most recently inserted entries, newest first.
    pub async fn recent(session: &mut DbSession, limit: i64) -> Result<Vec<LogEntry>, DbError> {
        sqlx::query_as::<_, LogEntry>(&format!(
            "SELECT {COLUMNS} FROM api_logs ORDER BY id DESC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(session)
        .await
        .map_err(DbError::Execution)
    }

    /// Count all log entries.
    pub async fn count(session: &mut DbSession) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM api_logs")
            .fetch_one(session)
            .await
            .map_err(DbError::Execution)
    }
}
