//! Landing-page redirect
//!
//! The hosting element may carry a `landing-page` attribute. When it does,
//! the current location is redirected there. Inside an embedding shell the
//! target is placed under the shell's base URL pathname.

use tracing::debug;
use webc_core::url::pathname_of;
use webc_types::RedirectRoute;

use crate::error::RouterError;
use crate::host::HostContext;

/// Redirect marker for the landing page, if one is set
pub fn resolve_landing_page(
    landing_page: Option<&str>,
    host: &dyn HostContext,
) -> Result<Option<RedirectRoute>, RouterError> {
    let landing_page = match landing_page.filter(|page| !page.is_empty()) {
        Some(page) => page,
        None => return Ok(None),
    };

    let target = match host.embedded_base_url().filter(|url| !url.is_empty()) {
        Some(base_url) => {
            let base = pathname_of(&base_url)
                .map_err(|e| RouterError::InvalidEmbeddedContext(e.to_string()))?;
            let tail = landing_page.strip_prefix('/').unwrap_or(landing_page);
            if base.ends_with('/') {
                format!("{}{}", base, tail)
            } else {
                format!("{}/{}", base, tail)
            }
        }
        None if landing_page.starts_with('/') => landing_page.to_string(),
        None => format!("/{}", landing_page),
    };

    let location = host.location_pathname();
    debug!(location = %location, target = %target, "Landing page redirect");

    Ok(Some(RedirectRoute::new(location, target)))
}
