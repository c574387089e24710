//! Webc Shell - Application shell host
//!
//! The shell is responsible for:
//! - Describing the hosting page (location, landing page, embedding shell)
//! - Mounting the application router against a configuration file
//! - Reporting the resolved route table and what the current location hits

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use webc_core::ShellConfig;
use webc_router::{AppRouter, FileConfigSource, NavigationClient, RouterSettings, RouterState};
use webc_router_core::{RouteMatch, RouteTable, SkinStylesheets, StaticHostContext};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Router did not become ready (state: {0})")]
    NotReady(RouterState),
}

/// What the current location resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationOutcome {
    Page { src: String },
    Redirect { to: String },
    Fallback { src: String },
    NotFound,
}

impl From<RouteMatch<'_>> for LocationOutcome {
    fn from(hit: RouteMatch<'_>) -> Self {
        match hit {
            RouteMatch::Page(page) => LocationOutcome::Page { src: page.src.clone() },
            RouteMatch::Redirect(redirect) => LocationOutcome::Redirect {
                to: redirect.redirect_to.clone(),
            },
            RouteMatch::Fallback(fallback) => LocationOutcome::Fallback {
                src: fallback.src.clone(),
            },
            RouteMatch::NotFound => LocationOutcome::NotFound,
        }
    }
}

/// Result of one shell run
#[derive(Debug, Clone, Serialize)]
pub struct ShellReport {
    pub location: String,
    pub outcome: LocationOutcome,
    pub stylesheets: Option<SkinStylesheets>,
    pub table: RouteTable,
}

/// Application shell
pub struct Shell {
    config: ShellConfig,
    router: AppRouter,
}

impl Shell {
    /// Create a new shell
    pub fn new(config: ShellConfig) -> Self {
        let mut host = StaticHostContext::new().with_location(config.location.clone());
        if let Some(landing_page) = &config.landing_page {
            host = host.with_landing_page(landing_page.clone());
        }
        if let Some(base_url) = &config.embedded_base_url {
            host = host.embedded_in(base_url.clone());
        }

        let settings = RouterSettings {
            pages_path: config.pages_path.clone(),
        };
        let router = AppRouter::with_settings(Arc::new(host), settings);

        info!(
            router_id = %router.id(),
            config = %config.config_path.display(),
            location = %config.location,
            "Creating application shell"
        );

        Self { config, router }
    }

    /// Mount the router and resolve the current location
    pub async fn run(&self) -> Result<ShellReport, ShellError> {
        let source = FileConfigSource::new(&self.config.config_path);
        let state = self.router.mount(&source).await;

        let table = match (state, self.router.route_table()) {
            (RouterState::Ready, Some(table)) => table,
            _ => return Err(ShellError::NotReady(state)),
        };

        let outcome = LocationOutcome::from(table.route(&self.config.location));
        info!(location = %self.config.location, outcome = ?outcome, "Location resolved");

        Ok(ShellReport {
            location: self.config.location.clone(),
            outcome,
            stylesheets: self.router.stylesheets(),
            table: RouteTable::clone(&table),
        })
    }

    /// Navigation requests against this shell's router
    pub fn navigation(&self) -> NavigationClient {
        self.router.navigation()
    }

    pub fn state(&self) -> RouterState {
        self.router.state()
    }
}
