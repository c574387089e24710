//! Synthetic redirect entries
//!
//! Two redirect markers can be injected ahead of the resolved content:
//!
//! - `landing`: a `landing-page` attribute on the host sends the current
//!   location to the configured landing page
//! - `embedded`: inside an embedding shell the physical location may not be
//!   `/`, so the root page is reached through a redirect
//!
//! # Entry Order
//!
//! ```text
//! ┌──────────────────────────┐
//! │ landing redirect         │  (at most one)
//! ├──────────────────────────┤
//! │ embedded redirect        │  (only with a root page, only embedded)
//! ├──────────────────────────┤
//! │ content pages            │  (traversal order)
//! └──────────────────────────┘
//! ```

mod embedded;
mod landing;

pub use embedded::maybe_inject_embedded_redirect;
pub use landing::resolve_landing_page;
