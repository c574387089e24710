//! Application router
//!
//! Drives one resolution pass from routing configuration to a published
//! route table.
//!
//! # Lifecycle
//!
//! ```text
//! Unconfigured ──mount (attached host)──► Resolving ──success──► Ready
//!      │                                      │
//!      └─ mount (detached host): no-op         └─ failure: logged, stays Resolving
//! ```
//!
//! Fetching the configuration is the only suspension point. Everything
//! after the answer arrives runs without yielding, so the route table and
//! the navigation tables become visible together.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;
use webc_core::base_path_from_url;
use webc_router_core::{
    resolve_landing_page, HostContext, RouteTable, RouteTreeResolver, RouterError, SkinStylesheets,
    PAGES_PATH,
};

use crate::config_source::ConfigSource;
use crate::error::MountError;
use crate::publisher::{NavigationBus, NavigationClient, NavigationMap, NavigationMapPublisher};

/// Router lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouterState {
    /// Not mounted yet
    Unconfigured,
    /// Waiting for configuration, or stuck after a failure
    Resolving,
    /// Route table built and navigation maps published
    Ready,
}

impl std::fmt::Display for RouterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterState::Unconfigured => write!(f, "unconfigured"),
            RouterState::Resolving => write!(f, "resolving"),
            RouterState::Ready => write!(f, "ready"),
        }
    }
}

/// Router settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterSettings {
    /// Root directory of page sources
    pub pages_path: String,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            pages_path: PAGES_PATH.to_string(),
        }
    }
}

/// Everything built by a successful pass
struct Resolved {
    table: Arc<RouteTable>,
    stylesheets: SkinStylesheets,
    publisher: NavigationMapPublisher,
}

/// Mutable router state, kept under one lock
struct Lifecycle {
    state: RouterState,
    /// Cleared by `detach`; nothing is published while cleared
    attached: bool,
    resolved: Option<Resolved>,
}

/// Application router instance
pub struct AppRouter {
    id: Uuid,
    host: Arc<dyn HostContext>,
    settings: RouterSettings,
    lifecycle: RwLock<Lifecycle>,
    bus: NavigationBus,
}

impl AppRouter {
    /// Create a router with default settings
    pub fn new(host: Arc<dyn HostContext>) -> Self {
        Self::with_settings(host, RouterSettings::default())
    }

    /// Create a router with custom settings
    pub fn with_settings(host: Arc<dyn HostContext>, settings: RouterSettings) -> Self {
        let id = Uuid::new_v4();
        debug!(router_id = %id, pages_path = %settings.pages_path, "Creating application router");

        Self {
            id,
            host,
            settings,
            lifecycle: RwLock::new(Lifecycle {
                state: RouterState::Unconfigured,
                attached: true,
                resolved: None,
            }),
            bus: NavigationBus::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> RouterState {
        self.lifecycle.read().state
    }

    pub fn is_attached(&self) -> bool {
        self.lifecycle.read().attached
    }

    /// Requesting end for tag and routing requests
    pub fn navigation(&self) -> NavigationClient {
        self.bus.client()
    }

    /// Resolved route table, once ready
    pub fn route_table(&self) -> Option<Arc<RouteTable>> {
        self.lifecycle.read().resolved.as_ref().map(|r| r.table.clone())
    }

    /// Skin stylesheets to link, once ready
    pub fn stylesheets(&self) -> Option<SkinStylesheets> {
        self.lifecycle.read().resolved.as_ref().map(|r| r.stylesheets.clone())
    }

    /// Run the resolution pass
    ///
    /// Only the first mount of an attached host does any work.
    pub async fn mount(&self, source: &dyn ConfigSource) -> RouterState {
        if !self.host.is_connected() {
            debug!(router_id = %self.id, "Host not attached, skipping route resolution");
            return self.state();
        }

        {
            let mut lifecycle = self.lifecycle.write();
            let current = lifecycle.state;
            if current != RouterState::Unconfigured {
                debug!(router_id = %self.id, state = %current, "Router already mounted");
                return current;
            }
            lifecycle.state = RouterState::Resolving;
        }

        info!(router_id = %self.id, source = source.name(), "Resolving routes");

        match self.resolve(source).await {
            Ok(resolved) => {
                let entries = resolved.table.entries.len();
                let mut lifecycle = self.lifecycle.write();
                if lifecycle.attached {
                    resolved.publisher.add_all();
                } else {
                    debug!(router_id = %self.id, "Host detached during resolution, not publishing");
                }
                lifecycle.resolved = Some(resolved);
                lifecycle.state = RouterState::Ready;
                info!(router_id = %self.id, entries, "Router ready");
            }
            Err(err) => {
                error!(router_id = %self.id, error = %err, "Route resolution failed");
            }
        }

        self.state()
    }

    /// Host removed from the document: stop answering requests
    pub fn detach(&self) {
        let mut lifecycle = self.lifecycle.write();
        lifecycle.attached = false;
        if let Some(resolved) = lifecycle.resolved.as_ref() {
            debug!(router_id = %self.id, "Host detached, removing listeners");
            resolved.publisher.remove_all();
        }
    }

    /// Host inserted again: answer requests again
    pub fn attach(&self) {
        let mut lifecycle = self.lifecycle.write();
        lifecycle.attached = true;
        if let Some(resolved) = lifecycle.resolved.as_ref() {
            debug!(router_id = %self.id, "Host attached, adding listeners");
            resolved.publisher.add_all();
        }
    }

    async fn resolve(&self, source: &dyn ConfigSource) -> Result<Resolved, MountError> {
        let config = source.routing_config().await?;

        let base_path = base_path_from_url(&config.base_url)
            .map_err(|e| RouterError::InvalidBaseUrl(e.to_string()))?;
        let resolver = RouteTreeResolver::new(base_path.clone(), &self.settings.pages_path)?;

        let stylesheets = SkinStylesheets::resolve(&base_path, &config.skin, &config.skin_path());
        let landing = resolve_landing_page(self.host.landing_page().as_deref(), self.host.as_ref())?;

        let resolution = resolver.resolve(&config.pages);
        let fallback = resolver.resolve_fallback(config.pages_fallback.as_ref());
        let table = RouteTable::assemble(
            &base_path,
            landing,
            resolution.entries,
            fallback,
            self.host.as_ref(),
        );

        let map = NavigationMap::new(resolution.tag_index, base_path, resolution.path_mapping);
        let publisher = NavigationMapPublisher::new(map, self.bus.clone());

        Ok(Resolved {
            table: Arc::new(table),
            stylesheets,
            publisher,
        })
    }
}
