//! Route table handed to the navigation surface
//!
//! Holds the router root, every routable entry in match-priority order and
//! the optional catch-all page. Matching is exact and first-hit: injected
//! redirects sit in front of the content pages so they win.

use serde::{Deserialize, Serialize};
use webc_core::url::trim_end;
use webc_types::{FallbackRoute, RedirectRoute, ResolvedRoute, RouteEntry};

use crate::host::HostContext;
use crate::redirect::maybe_inject_embedded_redirect;

/// Ordered, renderable route table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Router root: base path followed by `/`
    pub root: String,

    /// Entries in match-priority order
    pub entries: Vec<RouteEntry>,

    /// Catch-all page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackRoute>,
}

/// Outcome of matching a location against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    Page(&'a ResolvedRoute),
    Redirect(&'a RedirectRoute),
    Fallback(&'a FallbackRoute),
    NotFound,
}

impl RouteTable {
    /// Put the table together: landing redirect, embedded redirects, then pages
    pub fn assemble(
        base_path: &str,
        landing: Option<RedirectRoute>,
        pages: Vec<ResolvedRoute>,
        fallback: Option<FallbackRoute>,
        host: &dyn HostContext,
    ) -> Self {
        let mut entries: Vec<RouteEntry> = Vec::with_capacity(pages.len() + 2);
        entries.extend(landing.map(RouteEntry::from));
        entries.extend(
            pages
                .iter()
                .filter_map(|page| maybe_inject_embedded_redirect(page, host))
                .map(RouteEntry::from),
        );
        entries.extend(pages.into_iter().map(RouteEntry::from));

        Self {
            root: format!("{}/", base_path),
            entries,
            fallback,
        }
    }

    /// First entry matching `pathname`, else the fallback
    pub fn route(&self, pathname: &str) -> RouteMatch<'_> {
        let wanted = trim_end(pathname);
        let hit = self
            .entries
            .iter()
            .find(|entry| entry.path() == pathname || trim_end(entry.path()) == wanted);

        match (hit, &self.fallback) {
            (Some(RouteEntry::Page(page)), _) => RouteMatch::Page(page),
            (Some(RouteEntry::Redirect(redirect)), _) => RouteMatch::Redirect(redirect),
            (None, Some(fallback)) => RouteMatch::Fallback(fallback),
            (None, None) => RouteMatch::NotFound,
        }
    }

    /// Content pages, skipping redirect markers
    pub fn pages(&self) -> impl Iterator<Item = &ResolvedRoute> {
        self.entries.iter().filter_map(|entry| match entry {
            RouteEntry::Page(page) => Some(page),
            RouteEntry::Redirect(_) => None,
        })
    }

    /// Redirect markers, in order
    pub fn redirects(&self) -> impl Iterator<Item = &RedirectRoute> {
        self.entries.iter().filter_map(|entry| match entry {
            RouteEntry::Redirect(redirect) => Some(redirect),
            RouteEntry::Page(_) => None,
        })
    }
}
