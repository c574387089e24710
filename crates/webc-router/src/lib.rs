//! Webc Router - Application Router
//!
//! Obtains the routing configuration once, resolves it into a route table
//! and publishes the navigation maps to collaborators.
//!
//! # Architecture
//!
//! ```text
//! ConfigSource (static / file / channel)
//!     │  routing_config().await
//!     ▼
//! ┌─────────────────────────┐
//! │       AppRouter         │  Unconfigured → Resolving → Ready
//! │  (webc-router-core)     │
//! └───────────┬─────────────┘
//!             │
//!     ┌───────┴────────┐
//!     ▼                ▼
//! RouteTable     NavigationMapPublisher ──► NavigationClient
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use webc_router::{AppRouter, FileConfigSource};
//! use webc_router_core::StaticHostContext;
//!
//! let router = AppRouter::new(Arc::new(StaticHostContext::new()));
//! router.mount(&FileConfigSource::new("webcardinal.json")).await;
//!
//! let tags = router.navigation().get_tags().await?;
//! ```

mod error;
mod config_source;
mod publisher;
mod app_router;

// Re-exports: Error types
pub use error::{ConfigSourceError, MountError, NavigationError};

// Re-exports: Configuration sources
pub use config_source::{
    ConfigSource, StaticConfigSource, FileConfigSource, ChannelConfigSource, ConfigRequest,
};

// Re-exports: Navigation maps
pub use publisher::{
    NavigationBus, NavigationClient, NavigationMap, NavigationMapPublisher,
    ListenerKind, RoutingInfo,
};

// Re-exports: Router
pub use app_router::{AppRouter, RouterSettings, RouterState};
