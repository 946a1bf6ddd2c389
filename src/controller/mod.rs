pub mod draft;
pub mod popup;
pub mod state;

pub use draft::{HttpMethod, RequestDraft};
pub use popup::PopupController;
pub use state::SendState;
