//! Common constants for the router core

/// Root directory of page sources
pub const PAGES_PATH: &str = "/pages";

/// Directory holding stylesheet assets, relative to the base path or a skin
pub const ASSETS_PATH: &str = "assets";

/// Skin stylesheet file name
pub const SKIN_CSS: &str = "skin.css";

/// Skin applied to every generated leaf
pub const SKIN_NONE: &str = "none";

/// Loader used by the fallback page when none is configured
pub const DEFAULT_LOADER: &str = "default";

/// Canonical root path
pub const ROOT_PATH: &str = "/";
