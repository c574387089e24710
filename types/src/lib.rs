// ========== Core Modules ==========
pub mod route;      // Authored route tree
pub mod resolved;   // Flattened route entries and side tables

// Export commonly used types
pub use route::{RouteSpec, FallbackSpec, deserialize_routes, routes_from_value};
pub use resolved::{
    ResolvedRoute, RedirectRoute, FallbackRoute, RouteEntry,
    TagIndex, PathMapping,
};

// Error types
pub type WebcResult<T> = Result<T, WebcError>;

#[derive(Debug, thiserror::Error)]
pub enum WebcError {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}
