//! The outward response contract.
//!
//! Every invocation terminates in exactly one of three shapes: log-write
//! success, raw-query success, or the uniform failure. Callers always
//! receive a well-formed response object, never a raw error.

use std::collections::BTreeMap;

use serde_json::{json, Value};

/// The single origin allowed to read log-write responses from a browser.
pub const ALLOWED_ORIGIN: &str = "https://felipesalvador.com.br";

/// Message returned on a successful log write.
pub const SUCCESS_MESSAGE: &str = "Sucesso!";

/// Error label returned on any failed invocation.
pub const FAILURE_MESSAGE: &str = "Falha no banco";

/// Response object handed back to the host: an HTTP-ish status code, the
/// headers the contract names (and only those), and a serialized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    /// 200 with the success message, the resolved request id, and the fixed
    /// cross-origin header.
    pub fn log_write_success(request_id: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            ALLOWED_ORIGIN.to_string(),
        );
        Self {
            status_code: 200,
            headers,
            body: json!({"message": SUCCESS_MESSAGE, "requestId": request_id}).to_string(),
        }
    }

    /// 200 with the result rows serialized as-is (an array of row objects),
    /// no extra headers.
    pub fn raw_query_success(rows: Vec<Value>) -> Self {
        Self {
            status_code: 200,
            headers: BTreeMap::new(),
            body: Value::Array(rows).to_string(),
        }
    }

    /// 500 with the uniform failure body. `details` is the underlying
    /// database error text, passed through verbatim.
    pub fn failure(details: &str) -> Self {
        Self {
            status_code: 500,
            headers: BTreeMap::new(),
            body: json!({"error": FAILURE_MESSAGE, "details": details}).to_string(),
        }
    }
}
