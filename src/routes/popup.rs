use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::controller::{PopupController, RequestDraft};
use crate::error::AppError;

/// Prefill data for the popup's initial mount.
#[derive(Serialize)]
pub struct PopupContext {
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct SendReply {
    pub response: String,
}

pub async fn popup_context(
    State(controller): State<Arc<PopupController>>,
) -> Json<PopupContext> {
    Json(PopupContext {
        url: controller.initial_url(),
    })
}

pub async fn send_request(
    State(controller): State<Arc<PopupController>>,
    Json(draft): Json<RequestDraft>,
) -> Result<Json<SendReply>, AppError> {
    tracing::debug!(
        method = %draft.method,
        url = %draft.url,
        "Popup send"
    );

    match controller.send(draft).await {
        Ok(response) => Ok(Json(SendReply { response })),
        Err(e) => {
            tracing::warn!(error = %e, "Send refused");
            Err(e)
        }
    }
}
