//! The invocation endpoint.
//!
//! The event payload arrives as the request body; both shapes (query and
//! log) come through here. The handler's response contract maps onto HTTP:
//! status from `statusCode`, the named headers verbatim, the body string
//! as-is.

use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use apilog_core::event::InvocationEvent;
use apilog_core::response::InvocationResponse;

use crate::handler;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/invoke", post(invoke))
}

/// POST /invoke
///
/// The contract starts at a parsed event: delivering a syntactically valid
/// JSON payload is the host's job (the gateway always does), so a malformed
/// body is answered by the extractor's own rejection, not the uniform
/// failure shape.
async fn invoke(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    let event = InvocationEvent::decode(&payload);
    let response = handler::handle_event(&state.db, event).await;
    into_http(response)
}

/// Translate the response contract into an HTTP response. Only the headers
/// the contract names are set.
fn into_http(response: InvocationResponse) -> Response {
    let mut builder = Response::builder().status(response.status_code);
    for (name, value) in &response.headers {
        builder = builder.header(name, value);
    }
    match builder.body(Body::from(response.body)) {
        Ok(http_response) => http_response,
        Err(err) => {
            tracing::error!(error = %err, "failed to build HTTP response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
