use std::sync::Arc;

use apilog_db::DbConfig;

/// Shared application state available to handlers via `State<AppState>`.
///
/// Holds connection *configuration*, not a pool: every invocation opens and
/// closes its own session.
#[derive(Clone)]
pub struct AppState {
    /// Validated database connection parameters.
    pub db: Arc<DbConfig>,
}
