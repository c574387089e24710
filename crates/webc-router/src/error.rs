//! Error types for the application router

use thiserror::Error;
use webc_router_core::RouterError;
use webc_types::WebcError;

/// Failure to obtain the routing configuration
#[derive(Debug, Error)]
pub enum ConfigSourceError {
    /// Nobody is listening for configuration requests
    #[error("No configuration provider available")]
    NoProvider,

    /// The provider rejected the request
    #[error("Configuration request rejected: {0}")]
    Rejected(String),

    /// The provider went away without answering
    #[error("Configuration provider dropped the request")]
    Dropped,

    /// Configuration could not be read
    #[error(transparent)]
    Config(#[from] WebcError),
}

/// Failure while resolving the route table
#[derive(Debug, Error)]
pub enum MountError {
    #[error("Configuration retrieval failed: {0}")]
    Config(#[from] ConfigSourceError),

    #[error("Route resolution failed: {0}")]
    Resolution(#[from] RouterError),
}

/// Failure of a tag or routing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Tables are not published (yet, or anymore)
    #[error("Navigation map not ready")]
    NotReady,

    /// The router owning the tables was torn down
    #[error("Navigation bus closed")]
    Closed,
}
