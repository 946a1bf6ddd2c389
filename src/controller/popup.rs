//! Popup submission controller.
//!
//! Owns the send state machine and the one displayed-response slot. The
//! host environment is reached only through the [`TabHost`] seam.

use std::sync::Arc;

use parking_lot::RwLock;

use super::draft::RequestDraft;
use super::state::{SendState, SingleFlight};
use crate::error::AppError;
use crate::host::TabHost;

pub struct PopupController {
    host: Arc<dyn TabHost>,
    flight: SingleFlight,
    response: RwLock<Option<String>>,
}

impl PopupController {
    pub fn new(host: Arc<dyn TabHost>) -> Self {
        Self {
            host,
            flight: SingleFlight::new(),
            response: RwLock::new(None),
        }
    }

    /// Best-effort URL prefill for the popup's initial mount. `None` when
    /// the host cannot resolve an active tab; that is not an error.
    pub fn initial_url(&self) -> Option<String> {
        self.host.active_tab().map(|tab| tab.url)
    }

    pub fn state(&self) -> SendState {
        self.flight.current()
    }

    /// The currently displayed response text, if any.
    pub fn response(&self) -> Option<String> {
        self.response.read().clone()
    }

    /// Sends the draft through the active tab and returns the text to
    /// display.
    ///
    /// Guard violations — an empty URL, or a send already in flight — are
    /// refused without a state transition and without touching the
    /// response slot. Everything past the guards resolves to displayed
    /// text, never an error: tab and host failures are surfaced as
    /// `Error: ...` lines.
    pub async fn send(&self, draft: RequestDraft) -> Result<String, AppError> {
        if draft.url.trim().is_empty() {
            return Err(AppError::InvalidUrl("URL must not be empty".to_string()));
        }
        let _flight = self.flight.begin().ok_or(AppError::Busy)?;

        // A new send starts from a cleared panel.
        *self.response.write() = None;

        let text = match self.host.active_tab() {
            None => format!("Error: {}", AppError::NoActiveTab),
            Some(tab) => {
                tracing::debug!(
                    tab = tab.id,
                    method = %draft.method,
                    url = %draft.url,
                    "Executing send in active tab"
                );
                match self.host.execute_in_tab(tab.id, draft.into_bridge_request()).await {
                    Ok(reply) => reply.result_text,
                    Err(e) => format!("Error: {}", e),
                }
            }
        };

        *self.response.write() = Some(text.clone());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::bridge::{BridgeReply, BridgeRequest};
    use crate::host::{TabId, TabInfo};

    struct MockTabHost {
        tab: Option<TabInfo>,
        reply: Result<String, TabId>,
        delay: Duration,
        executions: AtomicUsize,
    }

    impl MockTabHost {
        fn new(reply: &str) -> Self {
            Self {
                tab: Some(TabInfo {
                    id: 1,
                    url: "https://example.com/app".to_string(),
                }),
                reply: Ok(reply.to_string()),
                delay: Duration::ZERO,
                executions: AtomicUsize::new(0),
            }
        }

        fn without_tab() -> Self {
            Self {
                tab: None,
                ..Self::new("")
            }
        }

        fn rejecting(tab: TabId) -> Self {
            Self {
                reply: Err(tab),
                ..Self::new("")
            }
        }

        fn slow(reply: &str, delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new(reply)
            }
        }
    }

    impl TabHost for MockTabHost {
        fn active_tab(&self) -> Option<TabInfo> {
            self.tab.clone()
        }

        fn execute_in_tab(
            &self,
            _tab: TabId,
            _request: BridgeRequest,
        ) -> Pin<Box<dyn Future<Output = Result<BridgeReply, AppError>> + Send + '_>> {
            self.executions.fetch_add(1, Ordering::SeqCst);
            let reply = self.reply.clone();
            let delay = self.delay;
            Box::pin(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                match reply {
                    Ok(text) => Ok(BridgeReply { result_text: text }),
                    Err(tab) => Err(AppError::UnknownTab(tab)),
                }
            })
        }
    }

    fn draft(url: &str) -> RequestDraft {
        RequestDraft {
            method: crate::controller::HttpMethod::Get,
            url: url.to_string(),
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn test_send_stores_bridge_result_verbatim() {
        let host = Arc::new(MockTabHost::new("Status: 200 OK\n\nhello"));
        let controller = PopupController::new(host);

        let text = controller.send(draft("https://api.example.com")).await.unwrap();
        assert_eq!(text, "Status: 200 OK\n\nhello");
        assert_eq!(controller.response().as_deref(), Some("Status: 200 OK\n\nhello"));
        assert_eq!(controller.state(), SendState::Idle);
    }

    #[tokio::test]
    async fn test_empty_url_is_refused_without_transition() {
        let host = Arc::new(MockTabHost::new("unused"));
        let controller = PopupController::new(host.clone());
        controller.send(draft("https://api.example.com")).await.unwrap();

        let refused = controller.send(draft("   ")).await;
        assert!(matches!(refused, Err(AppError::InvalidUrl(_))));
        // The prior response survives a refused trigger.
        assert_eq!(controller.response().as_deref(), Some("unused"));
        assert_eq!(host.executions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_active_tab_surfaces_error_line_and_returns_idle() {
        let controller = PopupController::new(Arc::new(MockTabHost::without_tab()));

        let text = controller.send(draft("https://api.example.com")).await.unwrap();
        assert_eq!(text, "Error: no active tab");
        assert_eq!(controller.response().as_deref(), Some("Error: no active tab"));
        assert_eq!(controller.state(), SendState::Idle);
    }

    #[tokio::test]
    async fn test_host_rejection_is_caught_at_controller_boundary() {
        let controller = PopupController::new(Arc::new(MockTabHost::rejecting(9)));

        let text = controller.send(draft("https://api.example.com")).await.unwrap();
        assert_eq!(text, "Error: No tab with id 9");
        assert_eq!(controller.state(), SendState::Idle);
    }

    #[tokio::test]
    async fn test_second_send_while_pending_is_refused() {
        let host = Arc::new(MockTabHost::slow("done", Duration::from_millis(100)));
        let controller = Arc::new(PopupController::new(host.clone()));

        let background = controller.clone();
        let first = tokio::spawn(async move { background.send(draft("https://a.example")).await });
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(controller.state(), SendState::Sending);
        let second = controller.send(draft("https://b.example")).await;
        assert!(matches!(second, Err(AppError::Busy)));

        assert_eq!(first.await.unwrap().unwrap(), "done");
        assert_eq!(host.executions.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state(), SendState::Idle);
    }

    #[tokio::test]
    async fn test_mount_without_tab_prefills_nothing() {
        let controller = PopupController::new(Arc::new(MockTabHost::without_tab()));
        assert_eq!(controller.initial_url(), None);
    }

    #[tokio::test]
    async fn test_mount_prefills_active_tab_url() {
        let controller = PopupController::new(Arc::new(MockTabHost::new("")));
        assert_eq!(controller.initial_url().as_deref(), Some("https://example.com/app"));
    }
}
