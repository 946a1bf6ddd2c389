pub mod executor;
pub mod formatter;
pub mod types;

pub use executor::run_in_page;
pub use formatter::{error_text, format_response};
pub use types::{BridgeReply, BridgeRequest};
