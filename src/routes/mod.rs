pub mod health;
pub mod popup;
pub mod static_files;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::controller::PopupController;

/// Assembles the popup API and embedded asset routes.
pub fn router(controller: Arc<PopupController>) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/popup/context", get(popup::popup_context))
        .route("/api/popup/send", post(popup::send_request))
        .fallback(static_files::serve_static)
        .with_state(controller)
}
