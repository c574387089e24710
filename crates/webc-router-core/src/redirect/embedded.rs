//! Embedded-context redirect
//!
//! An embedding shell may load the application at a physical location that
//! differs from `/`. The root page stays reachable by redirecting that
//! location to `/`.

use tracing::debug;
use webc_types::{RedirectRoute, ResolvedRoute};

use crate::host::HostContext;
use crate::types::ROOT_PATH;

/// Redirect marker for the root page when running embedded
pub fn maybe_inject_embedded_redirect(
    root_entry: &ResolvedRoute,
    host: &dyn HostContext,
) -> Option<RedirectRoute> {
    if root_entry.route_path != ROOT_PATH || !host.is_embedded() {
        return None;
    }

    let location = host.location_pathname();
    debug!(location = %location, "Embedded context detected, redirecting location to root");

    Some(RedirectRoute::new(location, ROOT_PATH))
}
