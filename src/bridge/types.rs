use serde::{Deserialize, Serialize};

/// Request message handed across the tab-execution boundary.
///
/// Carries primitives only: the injected execution references nothing from
/// the popup's scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    pub target_url: String,
    pub method: String,
    /// Raw JSON text as typed into the body editor.
    #[serde(default)]
    pub body_text: String,
}

/// Response message marshaled back from the tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeReply {
    /// Fully formatted response text, displayed verbatim by the popup.
    pub result_text: String,
}
