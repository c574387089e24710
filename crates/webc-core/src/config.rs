//! Configuration module for the application shell

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use webc_types::{deserialize_routes, FallbackSpec, RouteSpec, WebcError, WebcResult};

/// Skin used when the configuration names none
pub const DEFAULT_SKIN: &str = "default";

/// Routing configuration, as found in `webcardinal.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Route tree
    #[serde(default, deserialize_with = "deserialize_routes")]
    pub pages: Vec<RouteSpec>,

    /// Page shown when nothing matches
    #[serde(rename = "pagesFallback", default, skip_serializing_if = "Option::is_none")]
    pub pages_fallback: Option<FallbackSpec>,

    /// Absolute URL of the application root
    #[serde(rename = "baseURL")]
    pub base_url: String,

    /// Active skin
    #[serde(default = "default_skin")]
    pub skin: String,
}

fn default_skin() -> String {
    DEFAULT_SKIN.to_string()
}

impl RoutingConfig {
    /// Create a configuration with no fallback and the default skin
    pub fn new(base_url: impl Into<String>, pages: Vec<RouteSpec>) -> Self {
        Self {
            pages,
            pages_fallback: None,
            base_url: base_url.into(),
            skin: default_skin(),
        }
    }

    /// Set the fallback page
    pub fn with_fallback(mut self, fallback: FallbackSpec) -> Self {
        self.pages_fallback = Some(fallback);
        self
    }

    /// Set the skin
    pub fn with_skin(mut self, skin: impl Into<String>) -> Self {
        self.skin = skin.into();
        self
    }

    /// Parse from a JSON document
    pub fn from_json_str(json: &str) -> WebcResult<Self> {
        serde_json::from_str(json).map_err(|e| WebcError::InvalidConfig(e.to_string()))
    }

    /// Load from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> WebcResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading routing configuration");
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }

    /// Directory holding the assets of the active skin
    pub fn skin_path(&self) -> String {
        format!("skins/{}", self.skin)
    }
}

/// Process configuration for the shell binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Routing configuration file
    pub config_path: PathBuf,

    /// Current location pathname
    pub location: String,

    /// `landing-page` attribute of the hosting element
    pub landing_page: Option<String>,

    /// Base URL exposed by an embedding shell, if any
    pub embedded_base_url: Option<String>,

    /// Root directory of page sources
    pub pages_path: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("webcardinal.json"),
            location: "/".to_string(),
            landing_page: None,
            embedded_base_url: None,
            pages_path: "/pages".to_string(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ShellConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = non_empty("WEBC_CONFIG") {
            config.config_path = PathBuf::from(path);
        }

        if let Some(location) = non_empty("WEBC_LOCATION") {
            config.location = location;
        }

        config.landing_page = non_empty("WEBC_LANDING_PAGE");
        config.embedded_base_url = non_empty("WEBC_EMBED_BASE_URL");

        if let Some(pages_path) = non_empty("WEBC_PAGES_PATH") {
            config.pages_path = pages_path;
        }

        config
    }
}
