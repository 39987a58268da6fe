//! Log entry entity model and insert DTO.
//!
//! Rows in `api_logs` are append-only: this system inserts them and never
//! updates or deletes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use apilog_core::event::RequestLogFields;

/// One persisted request-log row. `id` and `created_at` are server-assigned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LogEntry {
    pub id: i32,
    pub request_id: Option<String>,
    pub path: Option<String>,
    pub method: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// DTO for inserting a new log entry: the five extracted request fields,
/// defaults already applied.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub request_id: String,
    pub path: String,
    pub method: String,
    pub ip_address: String,
    pub user_agent: String,
}

impl From<RequestLogFields> for NewLogEntry {
    fn from(fields: RequestLogFields) -> Self {
        Self {
            request_id: fields.request_id,
            path: fields.path,
            method: fields.method,
            ip_address: fields.source_ip,
            user_agent: fields.user_agent,
        }
    }
}
