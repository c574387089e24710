//! Navigation map publishing
//!
//! Collaborators ask for the tag index ("get tags") or for the base path and
//! path mapping ("get routing"). Answers come from a `NavigationBus` owned by
//! the router; a `NavigationClient` is the requesting end.
//!
//! Each request kind is served by its own listener. Adding a listener
//! publishes the full snapshot in one step, removing it withdraws the
//! snapshot, so a requester either sees complete tables or nothing.
//!
//! ```text
//! NavigationClient ──get_tags()────►┐
//!                                   │  waits until published
//! NavigationClient ──get_routing()─►┤
//!                                   ▼
//!                           NavigationBus ◄── NavigationMapPublisher
//!                                               add() / remove()
//! ```

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;
use webc_types::{PathMapping, TagIndex};

use crate::error::NavigationError;

/// Answer to a routing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingInfo {
    pub base_path: String,
    pub mapping: PathMapping,
}

/// Everything the router publishes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationMap {
    pub tags: TagIndex,
    pub routing: RoutingInfo,
}

impl NavigationMap {
    pub fn new(tags: TagIndex, base_path: impl Into<String>, mapping: PathMapping) -> Self {
        Self {
            tags,
            routing: RoutingInfo {
                base_path: base_path.into(),
                mapping,
            },
        }
    }
}

/// Request kinds served by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Tags,
    Routing,
}

impl std::fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerKind::Tags => write!(f, "getTags"),
            ListenerKind::Routing => write!(f, "getRouting"),
        }
    }
}

struct BusInner {
    tags: watch::Sender<Option<Arc<TagIndex>>>,
    routing: watch::Sender<Option<Arc<RoutingInfo>>>,
}

/// Serving end of the navigation requests
#[derive(Clone)]
pub struct NavigationBus {
    inner: Arc<BusInner>,
}

impl NavigationBus {
    pub fn new() -> Self {
        let (tags, _) = watch::channel(None);
        let (routing, _) = watch::channel(None);
        Self {
            inner: Arc::new(BusInner { tags, routing }),
        }
    }

    /// Create a requesting end
    pub fn client(&self) -> NavigationClient {
        NavigationClient {
            tags: self.inner.tags.subscribe(),
            routing: self.inner.routing.subscribe(),
        }
    }

    fn publish_tags(&self, tags: Option<Arc<TagIndex>>) {
        self.inner.tags.send_replace(tags);
    }

    fn publish_routing(&self, routing: Option<Arc<RoutingInfo>>) {
        self.inner.routing.send_replace(routing);
    }
}

impl Default for NavigationBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Requesting end of the navigation requests
#[derive(Debug, Clone)]
pub struct NavigationClient {
    tags: watch::Receiver<Option<Arc<TagIndex>>>,
    routing: watch::Receiver<Option<Arc<RoutingInfo>>>,
}

impl NavigationClient {
    /// Tag index, waiting until it is published
    pub async fn get_tags(&self) -> Result<TagIndex, NavigationError> {
        wait_published(self.tags.clone()).await
    }

    /// Base path and mapping, waiting until they are published
    pub async fn get_routing(&self) -> Result<RoutingInfo, NavigationError> {
        wait_published(self.routing.clone()).await
    }

    /// Tag index if published right now
    pub fn try_get_tags(&self) -> Result<TagIndex, NavigationError> {
        current(&self.tags)
    }

    /// Base path and mapping if published right now
    pub fn try_get_routing(&self) -> Result<RoutingInfo, NavigationError> {
        current(&self.routing)
    }
}

async fn wait_published<T: Clone>(
    mut rx: watch::Receiver<Option<Arc<T>>>,
) -> Result<T, NavigationError> {
    let published = rx
        .wait_for(Option::is_some)
        .await
        .map_err(|_| NavigationError::Closed)?;

    match &*published {
        Some(value) => Ok(T::clone(value)),
        None => Err(NavigationError::NotReady),
    }
}

fn current<T: Clone>(rx: &watch::Receiver<Option<Arc<T>>>) -> Result<T, NavigationError> {
    match &*rx.borrow() {
        Some(value) => Ok(T::clone(value)),
        None => Err(NavigationError::NotReady),
    }
}

/// Serves one finished navigation map on a bus
pub struct NavigationMapPublisher {
    tags: Arc<TagIndex>,
    routing: Arc<RoutingInfo>,
    bus: NavigationBus,
    registered: RwLock<HashSet<ListenerKind>>,
}

impl NavigationMapPublisher {
    pub fn new(map: NavigationMap, bus: NavigationBus) -> Self {
        Self {
            tags: Arc::new(map.tags),
            routing: Arc::new(map.routing),
            bus,
            registered: RwLock::new(HashSet::new()),
        }
    }

    /// Start answering `kind` requests
    pub fn add(&self, kind: ListenerKind) {
        if !self.registered.write().insert(kind) {
            return;
        }

        match kind {
            ListenerKind::Tags => self.bus.publish_tags(Some(self.tags.clone())),
            ListenerKind::Routing => self.bus.publish_routing(Some(self.routing.clone())),
        }
        debug!(listener = %kind, "Listener added");
    }

    /// Stop answering `kind` requests
    pub fn remove(&self, kind: ListenerKind) {
        if !self.registered.write().remove(&kind) {
            return;
        }

        match kind {
            ListenerKind::Tags => self.bus.publish_tags(None),
            ListenerKind::Routing => self.bus.publish_routing(None),
        }
        debug!(listener = %kind, "Listener removed");
    }

    pub fn add_all(&self) {
        self.add(ListenerKind::Tags);
        self.add(ListenerKind::Routing);
    }

    pub fn remove_all(&self) {
        self.remove(ListenerKind::Tags);
        self.remove(ListenerKind::Routing);
    }

    pub fn is_registered(&self, kind: ListenerKind) -> bool {
        self.registered.read().contains(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    fn sample_map() -> NavigationMap {
        let tags: TagIndex = [("home".to_string(), "/".to_string())].into_iter().collect();
        let mapping: PathMapping = [("/app/".to_string(), "home".to_string())].into_iter().collect();
        NavigationMap::new(tags, "/app", mapping)
    }

    #[test]
    fn test_not_ready_before_publish() {
        let bus = NavigationBus::new();
        let client = bus.client();

        assert_eq!(client.try_get_tags(), Err(NavigationError::NotReady));
        assert_eq!(client.try_get_routing(), Err(NavigationError::NotReady));
    }

    #[test]
    fn test_request_waits_until_published() {
        let bus = NavigationBus::new();
        let client = bus.client();
        let publisher = NavigationMapPublisher::new(sample_map(), bus.clone());

        let mut request = task::spawn(async move { client.get_tags().await });
        assert_pending!(request.poll());

        publisher.add(ListenerKind::Tags);
        assert!(request.is_woken());

        let tags = assert_ready!(request.poll()).unwrap();
        assert_eq!(tags.get("home").map(String::as_str), Some("/"));
    }

    #[test]
    fn test_listeners_are_independent() {
        let bus = NavigationBus::new();
        let client = bus.client();
        let publisher = NavigationMapPublisher::new(sample_map(), bus);

        publisher.add(ListenerKind::Routing);
        assert_eq!(client.try_get_tags(), Err(NavigationError::NotReady));

        let routing = client.try_get_routing().unwrap();
        assert_eq!(routing.base_path, "/app");
        assert_eq!(routing.mapping.get("/app/").map(String::as_str), Some("home"));
    }

    #[test]
    fn test_add_remove_idempotent() {
        let bus = NavigationBus::new();
        let client = bus.client();
        let publisher = NavigationMapPublisher::new(sample_map(), bus);

        publisher.add_all();
        publisher.add_all();
        assert!(publisher.is_registered(ListenerKind::Tags));
        assert!(client.try_get_tags().is_ok());

        publisher.remove_all();
        publisher.remove_all();
        assert!(!publisher.is_registered(ListenerKind::Routing));
        assert_eq!(client.try_get_routing(), Err(NavigationError::NotReady));

        publisher.add(ListenerKind::Routing);
        assert!(client.try_get_routing().is_ok());
    }

    #[test]
    fn test_closed_when_bus_dropped() {
        let bus = NavigationBus::new();
        let client = bus.client();

        let mut request = task::spawn(async move { client.get_routing().await });
        assert_pending!(request.poll());

        drop(bus);
        assert_eq!(assert_ready!(request.poll()), Err(NavigationError::Closed));
    }
}
