//! Route composition.

pub mod health;
pub mod invoke;

use axum::Router;

use crate::state::AppState;

/// All routes, unversioned: the health probe plus the invocation endpoint.
pub fn router() -> Router<AppState> {
    Router::new().merge(health::router()).merge(invoke::router())
}
