pub mod bridge;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod routes;

pub use bridge::{run_in_page, BridgeReply, BridgeRequest};
pub use config::Config;
pub use controller::{HttpMethod, PopupController, RequestDraft, SendState};
pub use error::AppError;
pub use host::{TabHost, TabId, TabInfo, TabRegistry};
