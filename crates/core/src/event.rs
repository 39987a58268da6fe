//! Invocation event decoding.
//!
//! The host delivers one JSON payload per invocation. Two unrelated shapes
//! share that payload: a query shape `{"is_query": true, "sql": "..."}` used
//! by trusted scripts, and an API-gateway log shape where every field is
//! optional. The shape is decided once here; the rest of the system only
//! sees the tagged variant.

use serde_json::Value;

// ---------------------------------------------------------------------------
// Extraction defaults
// ---------------------------------------------------------------------------

/// Sentinel stored when the gateway supplied no request id.
pub const DEFAULT_REQUEST_ID: &str = "N/A";
/// Path recorded when absent from the event.
pub const DEFAULT_PATH: &str = "/";
/// Method recorded when absent from the event.
pub const DEFAULT_METHOD: &str = "GET";
/// Source IP recorded when the gateway identity block is absent.
pub const DEFAULT_SOURCE_IP: &str = "0.0.0.0";
/// User agent recorded when the `User-Agent` header is absent.
pub const DEFAULT_USER_AGENT: &str = "Unknown";

// ---------------------------------------------------------------------------
// Tagged event
// ---------------------------------------------------------------------------

/// One decoded invocation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationEvent {
    /// Execute the caller-supplied statement verbatim and return its rows.
    RawQuery { sql: String },
    /// Record one request-log row (the default mode).
    LogRequest(RequestLogFields),
}

/// The five request fields persisted by log-write mode, with defaults
/// already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLogFields {
    pub request_id: String,
    pub path: String,
    pub method: String,
    pub source_ip: String,
    pub user_agent: String,
}

impl InvocationEvent {
    /// Decode a raw payload into its tagged form.
    ///
    /// Only a JSON boolean `true` in `is_query` selects raw query mode;
    /// anything else (absent, `false`, `"true"`, `1`) is a log request.
    /// A query event without a string `sql` decodes to the empty statement,
    /// which then fails at execution time.
    pub fn decode(payload: &Value) -> Self {
        if payload.get("is_query").and_then(Value::as_bool) == Some(true) {
            let sql = payload
                .get("sql")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Self::RawQuery { sql };
        }
        Self::LogRequest(RequestLogFields::extract(payload))
    }
}

impl RequestLogFields {
    /// Extract the five log fields from a gateway event, applying defaults
    /// for anything absent or non-string. The `User-Agent` header lookup is
    /// case-sensitive.
    pub fn extract(payload: &Value) -> Self {
        Self {
            request_id: str_at(payload, "/requestContext/requestId", DEFAULT_REQUEST_ID),
            path: str_at(payload, "/path", DEFAULT_PATH),
            method: str_at(payload, "/httpMethod", DEFAULT_METHOD),
            source_ip: str_at(payload, "/requestContext/identity/sourceIp", DEFAULT_SOURCE_IP),
            user_agent: str_at(payload, "/headers/User-Agent", DEFAULT_USER_AGENT),
        }
    }
}

/// Read a string at a JSON pointer, falling back to `default`.
fn str_at(payload: &Value, pointer: &str, default: &str) -> String {
    payload
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}
