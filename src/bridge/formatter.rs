//! Result-string construction for bridge executions.
//!
//! Every outcome of an in-page execution is encoded into a single string:
//! pretty-printed JSON when the response body parses, a plain status/text
//! dump when it does not, and a JSON `{ "error": ... }` object for every
//! failure path.

use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageSuccess<'a> {
    status: u16,
    status_text: &'a str,
    data: Value,
}

#[derive(Serialize)]
struct PageError<'a> {
    error: &'a str,
}

/// Formats a completed HTTP response.
///
/// JSON bodies come back as an indented `{status, statusText, data}`
/// document; anything else as `Status: <code> <text>` followed by the raw
/// body.
pub fn format_response(status: u16, status_text: &str, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(data) => pretty(&PageSuccess {
            status,
            status_text,
            data,
        }),
        Err(_) => format!("Status: {} {}\n\n{}", status, status_text, body),
    }
}

/// Encodes a failure as a `{ "error": message }` result string.
pub fn error_text(message: &str) -> String {
    pretty(&PageError { error: message })
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("Failed to serialize result: {}", e))
}
