//! Tab registry: the production [`TabHost`].
//!
//! Each tab owns a `reqwest::Client` with an isolated cookie store, so a
//! request executed in that tab rides on the session the tab has
//! accumulated — the ambient credentials the page's own script would send.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Client;

use super::{TabHost, TabId, TabInfo};
use crate::bridge::{run_in_page, BridgeReply, BridgeRequest};
use crate::error::AppError;

/// A host-side tab: a current address plus the page's fetch client.
pub struct Tab {
    id: TabId,
    url: RwLock<String>,
    fetch: Client,
}

impl Tab {
    fn open(id: TabId, url: String) -> Result<Self, AppError> {
        let fetch = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            id,
            url: RwLock::new(url),
            fetch,
        })
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn url(&self) -> String {
        self.url.read().clone()
    }

    /// Points the tab at a new address. The cookie store persists, as it
    /// would across an in-tab navigation.
    pub fn navigate(&self, url: &str) -> Result<(), AppError> {
        url::Url::parse(url).map_err(|e| AppError::InvalidUrl(e.to_string()))?;
        *self.url.write() = url.to_string();
        Ok(())
    }

    /// The page's own network capability.
    pub fn fetch(&self) -> &Client {
        &self.fetch
    }
}

/// Registry of open tabs with an active-tab pointer.
pub struct TabRegistry {
    tabs: RwLock<HashMap<TabId, Arc<Tab>>>,
    active: RwLock<Option<TabId>>,
    counter: AtomicU64,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: RwLock::new(HashMap::new()),
            active: RwLock::new(None),
            counter: AtomicU64::new(0),
        }
    }

    /// Opens a tab at the given URL and focuses it.
    pub fn open(&self, url: &str) -> Result<TabId, AppError> {
        url::Url::parse(url).map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let tab = Arc::new(Tab::open(id, url.to_string())?);
        self.tabs.write().insert(id, tab);
        *self.active.write() = Some(id);

        Ok(id)
    }

    /// Focuses an existing tab.
    pub fn activate(&self, id: TabId) -> Result<(), AppError> {
        if !self.tabs.read().contains_key(&id) {
            return Err(AppError::UnknownTab(id));
        }
        *self.active.write() = Some(id);
        Ok(())
    }

    /// Closes a tab. If it was focused, no tab is active afterwards.
    pub fn close(&self, id: TabId) {
        self.tabs.write().remove(&id);
        let mut active = self.active.write();
        if *active == Some(id) {
            *active = None;
        }
    }

    pub fn get(&self, id: TabId) -> Option<Arc<Tab>> {
        self.tabs.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tabs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.read().is_empty()
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabHost for TabRegistry {
    fn active_tab(&self) -> Option<TabInfo> {
        let id = (*self.active.read())?;
        self.get(id).map(|tab| TabInfo { id, url: tab.url() })
    }

    fn execute_in_tab(
        &self,
        tab: TabId,
        request: BridgeRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BridgeReply, AppError>> + Send + '_>> {
        let found = self.get(tab);
        Box::pin(async move {
            let found = found.ok_or(AppError::UnknownTab(tab))?;
            let result_text = run_in_page(found.fetch(), &request).await;
            Ok(BridgeReply { result_text })
        })
    }
}
