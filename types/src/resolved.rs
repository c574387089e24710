//! Flattened, navigable route entries produced by one resolution pass

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag name → logical path of the leaf that declared it
pub type TagIndex = BTreeMap<String, String>;

/// Absolute path → source location with the pages prefix removed
pub type PathMapping = BTreeMap<String, String>;

/// A content route produced from one leaf `RouteSpec`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    /// Absolute path, prefixed with the base path
    pub path: String,

    /// Logical path relative to the router root (what tags point at)
    pub route_path: String,

    /// Resolved source location (absolute URL or `.`-relative)
    pub src: String,

    /// Skin applied to the page
    pub skin: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
}

/// Redirect marker: forwards one path to another instead of rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRoute {
    /// Path this marker matches
    pub path: String,

    /// Where matching navigation is sent
    pub redirect_to: String,
}

impl RedirectRoute {
    pub fn new(path: impl Into<String>, redirect_to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirect_to: redirect_to.into(),
        }
    }
}

/// Catch-all page with no path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRoute {
    pub src: String,
    pub skin: String,
    pub loader: String,
}

/// One routable entry, in match-priority order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteEntry {
    Page(ResolvedRoute),
    Redirect(RedirectRoute),
}

impl RouteEntry {
    /// Path this entry is matched against
    pub fn path(&self) -> &str {
        match self {
            RouteEntry::Page(route) => &route.path,
            RouteEntry::Redirect(redirect) => &redirect.path,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteEntry::Redirect(_))
    }
}

impl From<ResolvedRoute> for RouteEntry {
    fn from(route: ResolvedRoute) -> Self {
        RouteEntry::Page(route)
    }
}

impl From<RedirectRoute> for RouteEntry {
    fn from(redirect: RedirectRoute) -> Self {
        RouteEntry::Redirect(redirect)
    }
}
