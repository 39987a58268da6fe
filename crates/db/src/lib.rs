//! MySQL session layer for the request-log handler.
//!
//! One invocation owns one connection: opened from a validated [`DbConfig`],
//! bounded by a fixed connect deadline, and closed before the response goes
//! out. There is deliberately no pool and no reuse across invocations.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod repositories;
pub mod schema;
pub mod session;

pub use config::{ConfigError, DbConfig};
pub use error::DbError;
pub use session::DbSession;
