//! Idempotent log-table bootstrap.
//!
//! Runs on every invocation before dispatch. A rejection here is fatal for
//! the invocation; an existing table is a no-op.

use crate::error::DbError;
use crate::session::DbSession;

/// DDL for the `api_logs` table. `id` and `created_at` are server-assigned;
/// rows are append-only.
const CREATE_API_LOGS: &str = "\
CREATE TABLE IF NOT EXISTS api_logs (
    id INT AUTO_INCREMENT PRIMARY KEY,
    request_id VARCHAR(100),
    path VARCHAR(255),
    method VARCHAR(10),
    ip_address VARCHAR(45),
    user_agent TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Ensure the log table exists. Safe to run any number of times.
pub async fn ensure_log_table(session: &mut DbSession) -> Result<(), DbError> {
    sqlx::query(CREATE_API_LOGS)
        .execute(session)
        .await
        .map(|_| ())
        .map_err(DbError::Schema)
}
