//! Route Tree Resolver
//!
//! Flattens a nested route description into concrete, navigable entries.
//!
//! # Resolution
//!
//! ```text
//! [docs] ──children──► [intro]   [about]
//!    │                    │         │
//!    │ prefix {/docs, /docs}        │
//!    ▼                    ▼         ▼
//!  (no entry)       /docs/intro   /about
//!                   ./pages/docs/intro
//! ```
//!
//! Walk is depth-first, pre-order. Each level receives the accumulated path
//! and source prefixes by value; grouping nodes only extend the prefixes and
//! leaves become entries. Entry order follows the source configuration and
//! is the match priority downstream.
//!
//! Alongside the entries two side tables are filled in the same pass:
//! tag → logical path, and absolute path → source with the pages prefix
//! removed. Duplicate paths or tags are resolved last-writer-wins.

use regex::Regex;
use tracing::{debug, trace};
use webc_core::url::{join, trim_end};
use webc_types::{FallbackRoute, FallbackSpec, PathMapping, ResolvedRoute, RouteSpec, TagIndex};

use crate::error::RouterError;
use crate::types::{DEFAULT_LOADER, ROOT_PATH, SKIN_NONE};

/// Output of one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteResolution {
    /// One entry per leaf, in traversal order
    pub entries: Vec<ResolvedRoute>,

    /// Tag → logical path
    pub tag_index: TagIndex,

    /// Absolute path → source location without the pages prefix
    pub path_mapping: PathMapping,
}

/// Prefixes accumulated from the ancestors of a node
#[derive(Debug, Clone, Default)]
struct Prefix {
    path: String,
    src: String,
}

/// Resolves route trees against one base path and pages prefix
#[derive(Debug, Clone)]
pub struct RouteTreeResolver {
    base_path: String,
    pages_prefix: String,
    /// Anchored at the start of a resolved source, built once
    pages_pattern: Regex,
}

impl RouteTreeResolver {
    /// Create a resolver
    pub fn new(base_path: impl Into<String>, pages_prefix: &str) -> Result<Self, RouterError> {
        // "/" and "/pages/" normalise to "" and "/pages"
        let pages_prefix = trim_end(&join("", &[pages_prefix]).pathname);
        let pattern = format!(r"^\.?{}(?:/|$)", regex::escape(&pages_prefix));
        let pages_pattern =
            Regex::new(&pattern).map_err(|e| RouterError::InvalidPagesPrefix(e.to_string()))?;

        Ok(Self {
            base_path: base_path.into(),
            pages_prefix,
            pages_pattern,
        })
    }

    /// Base path every entry is prefixed with
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Flatten `routes` into entries and side tables
    pub fn resolve(&self, routes: &[RouteSpec]) -> RouteResolution {
        let mut resolution = RouteResolution::default();
        self.walk(routes, Prefix::default(), &mut resolution);

        debug!(
            base_path = %self.base_path,
            entries = resolution.entries.len(),
            tags = resolution.tag_index.len(),
            "Route tree resolved"
        );

        resolution
    }

    /// Resolve the catch-all page, if one is configured
    pub fn resolve_fallback(&self, fallback: Option<&FallbackSpec>) -> Option<FallbackRoute> {
        let fallback = fallback.filter(|f| !f.src.is_empty())?;

        Some(FallbackRoute {
            src: self.page_src(&fallback.src),
            skin: SKIN_NONE.to_string(),
            loader: fallback
                .loader
                .clone()
                .unwrap_or_else(|| DEFAULT_LOADER.to_string()),
        })
    }

    fn walk(&self, routes: &[RouteSpec], prefix: Prefix, out: &mut RouteResolution) {
        for node in routes {
            let current = Prefix {
                path: join("", &[&prefix.path, &node.path]).pathname,
                src: join("", &[&prefix.src, &node.src]).pathname,
            };

            match &node.children {
                Some(children) => self.walk(children, current, out),
                None => {
                    let route = self.resolve_leaf(node, current, out);
                    out.entries.push(route);
                }
            }
        }
    }

    fn resolve_leaf(&self, node: &RouteSpec, prefix: Prefix, out: &mut RouteResolution) -> ResolvedRoute {
        let route_path = if prefix.path.is_empty() {
            ROOT_PATH.to_string()
        } else {
            prefix.path
        };

        let src = if is_external(&node.src) {
            node.src.clone()
        } else {
            self.page_src(&prefix.src)
        };

        let path = join(&self.base_path, &[&route_path]).pathname;
        let mapped = self.pages_pattern.replace(&src, "").into_owned();

        trace!(path = %path, src = %src, mapped = %mapped, "Resolved leaf route");

        out.path_mapping.insert(path.clone(), mapped);
        if let Some(tag) = &node.tag {
            out.tag_index.insert(tag.clone(), route_path.clone());
        }

        ResolvedRoute {
            path,
            route_path,
            src,
            skin: SKIN_NONE.to_string(),
            loader: node.loader.clone(),
        }
    }

    /// Source relative to the pages root
    fn page_src(&self, src: &str) -> String {
        format!(".{}", join(&self.pages_prefix, &[src]).pathname)
    }
}

/// Resolve `routes` in one call
pub fn resolve(
    routes: &[RouteSpec],
    base_path: &str,
    pages_prefix: &str,
) -> Result<RouteResolution, RouterError> {
    Ok(RouteTreeResolver::new(base_path, pages_prefix)?.resolve(routes))
}

/// Absolute http(s) URLs are used as-is
fn is_external(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}
