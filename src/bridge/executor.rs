//! In-page request execution.
//!
//! `run_in_page` is the function injected into a tab's context: it takes
//! the bridge message plus the page's own fetch client and performs the
//! request exactly as the page would, ambient cookies included. It is
//! self-contained — no state from the popup's scope crosses the boundary —
//! and it never raises: every failure is encoded into the returned string.

use std::str::FromStr;

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, Method,
};
use serde_json::Value;

use super::formatter::{error_text, format_response};
use super::types::BridgeRequest;

const INVALID_BODY_MESSAGE: &str = "Invalid JSON in request body";

/// Methods that carry a request body. GET and DELETE ignore the body
/// editor's content entirely.
fn sends_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::DELETE)
}

/// Executes a request in the page's context and returns the formatted
/// result string.
pub async fn run_in_page(page_fetch: &Client, request: &BridgeRequest) -> String {
    let method = match Method::from_str(&request.method.to_uppercase()) {
        Ok(m) => m,
        Err(_) => return error_text(&format!("Invalid method: {}", request.method)),
    };

    let carries_body = sends_body(&method) && !request.body_text.is_empty();

    // Malformed JSON is rejected before any network I/O.
    if carries_body && serde_json::from_str::<Value>(&request.body_text).is_err() {
        return error_text(INVALID_BODY_MESSAGE);
    }

    let mut builder = page_fetch
        .request(method, &request.target_url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json");

    if carries_body {
        builder = builder.body(request.body_text.clone());
    }

    match builder.send().await {
        Ok(response) => {
            let status = response.status();
            let status_text = status.canonical_reason().unwrap_or("");
            match response.text().await {
                Ok(body) => format_response(status.as_u16(), status_text, &body),
                Err(e) => error_text(&e.to_string()),
            }
        }
        Err(e) => error_text(&e.to_string()),
    }
}
