//! The dual-mode invocation handler.
//!
//! One invocation: open a session, ensure the log table, run exactly one of
//! the two modes, close the session, answer. Every error class collapses
//! into the uniform failure shape; callers always get a well-formed
//! response.

use apilog_core::event::InvocationEvent;
use apilog_core::response::InvocationResponse;
use apilog_db::models::log_entry::NewLogEntry;
use apilog_db::repositories::LogEntryRepo;
use apilog_db::{query, schema, session, DbConfig, DbError, DbSession};

/// Run one invocation end to end.
///
/// Once a session has been opened it is released on every path, including
/// schema and dispatch failures.
pub async fn handle_event(config: &DbConfig, event: InvocationEvent) -> InvocationResponse {
    let mut db = match session::connect(config).await {
        Ok(db) => db,
        Err(err) => return failure(err),
    };

    let outcome = dispatch(&mut db, event).await;
    session::release(db).await;

    match outcome {
        Ok(response) => response,
        Err(err) => failure(err),
    }
}

/// Ensure the schema, then run exactly one of the two modes.
async fn dispatch(
    db: &mut DbSession,
    event: InvocationEvent,
) -> Result<InvocationResponse, DbError> {
    schema::ensure_log_table(db).await?;

    match event {
        // Trusted-caller capability: the statement runs verbatim, unfiltered.
        InvocationEvent::RawQuery { sql } => {
            let rows = query::run_raw(db, &sql).await?;
            Ok(InvocationResponse::raw_query_success(rows))
        }
        InvocationEvent::LogRequest(fields) => {
            let request_id = fields.request_id.clone();
            LogEntryRepo::insert(db, &NewLogEntry::from(fields)).await?;
            Ok(InvocationResponse::log_write_success(&request_id))
        }
    }
}

/// Convert any invocation error into the uniform failure response.
fn failure(err: DbError) -> InvocationResponse {
    tracing::error!(error = %err, "invocation failed");
    InvocationResponse::failure(&err.details())
}
