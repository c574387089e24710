//! Webc Router Core - Route Tree Resolution
//!
//! Turns a declarative, possibly nested route description into a flat
//! navigable route table plus the navigation side tables.
//!
//! # Architecture
//!
//! ```text
//! RoutingConfig { pages, pagesFallback, baseURL }
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │   RouteTreeResolver     │  Flattens the tree, fills tag index
//! │   (Which pages?)        │  and path mapping in one pass
//! └───────────┬─────────────┘
//!             │
//!             ▼
//! ┌─────────────────────────┐
//! │   Redirect injection    │  Landing page, embedded context
//! │   (Which redirects?)    │
//! └───────────┬─────────────┘
//!             │
//!             ▼
//!        RouteTable
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use webc_router_core::{RouteTreeResolver, RouteTable, StaticHostContext, PAGES_PATH};
//! use webc_types::RouteSpec;
//!
//! let resolver = RouteTreeResolver::new("", PAGES_PATH)?;
//! let resolution = resolver.resolve(&[RouteSpec::leaf("", "home")]);
//!
//! let host = StaticHostContext::new();
//! let table = RouteTable::assemble("", None, resolution.entries, None, &host);
//! ```

// Core modules
mod error;
mod types;
mod host;

// Resolution
mod resolver;
mod redirect;
mod skin;
mod table;

#[cfg(test)]
mod tests;

// Re-exports: Error types
pub use error::RouterError;

// Re-exports: Core types
pub use types::{PAGES_PATH, ASSETS_PATH, SKIN_CSS, SKIN_NONE, DEFAULT_LOADER, ROOT_PATH};

// Re-exports: Host context
pub use host::{HostContext, StaticHostContext};

// Re-exports: Resolution
pub use resolver::{resolve, RouteResolution, RouteTreeResolver};
pub use redirect::{maybe_inject_embedded_redirect, resolve_landing_page};
pub use skin::SkinStylesheets;
pub use table::{RouteMatch, RouteTable};
