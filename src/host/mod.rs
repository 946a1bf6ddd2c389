//! Host-environment capability: active-tab resolution and in-tab execution.

pub mod tabs;

pub use tabs::{Tab, TabRegistry};

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::bridge::{BridgeReply, BridgeRequest};
use crate::error::AppError;

pub type TabId = u64;

/// Identity and current address of a tab.
#[derive(Debug, Clone, Serialize)]
pub struct TabInfo {
    pub id: TabId,
    pub url: String,
}

/// What the popup controller needs from the environment hosting it.
///
/// Trait-shaped so the controller can be exercised against mock hosts;
/// the production implementation is [`TabRegistry`].
pub trait TabHost: Send + Sync {
    /// The currently focused tab, if any.
    fn active_tab(&self) -> Option<TabInfo>;

    /// Executes a bridge request inside the given tab's context and
    /// marshals the reply message back.
    ///
    /// Fails only at the host level (e.g. the tab no longer exists);
    /// request-level failures are encoded into the reply by the bridge.
    fn execute_in_tab(
        &self,
        tab: TabId,
        request: BridgeRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BridgeReply, AppError>> + Send + '_>>;
}
