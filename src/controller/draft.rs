use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bridge::BridgeRequest;

/// HTTP methods offered by the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form state of the popup as submitted. Nothing is validated until send
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDraft {
    pub method: HttpMethod,
    pub url: String,
    /// Raw JSON text from the body editor.
    #[serde(default)]
    pub body: String,
}

impl RequestDraft {
    /// Lowers the draft into the primitive-only message that crosses the
    /// execution boundary.
    pub fn into_bridge_request(self) -> BridgeRequest {
        BridgeRequest {
            target_url: self.url.trim().to_string(),
            method: self.method.as_str().to_string(),
            body_text: self.body,
        }
    }
}
