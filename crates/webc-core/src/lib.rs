//! Webc Core - Shared library for the application shell
//!
//! This crate provides the URL path helpers and configuration types
//! used by the router crates and the shell binary.

pub mod config;
pub mod url;

pub use config::{RoutingConfig, ShellConfig, DEFAULT_SKIN};
pub use url::{join, trim_end, pathname_of, base_path_from_url, JoinedPath};
