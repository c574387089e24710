//! Host context provider
//!
//! Everything the router needs to know about the page hosting it: whether
//! the host element is attached, the `landing-page` attribute, the current
//! location, and the base URL of an embedding shell.

/// Capabilities exposed by the hosting environment
pub trait HostContext: Send + Sync {
    /// Whether the host element is attached to a document
    fn is_connected(&self) -> bool;

    /// `landing-page` attribute of the enclosing element
    fn landing_page(&self) -> Option<String>;

    /// Pathname of the current location
    fn location_pathname(&self) -> String;

    /// Base URL exposed by an embedding shell, if running embedded
    fn embedded_base_url(&self) -> Option<String>;

    /// Whether the runtime is embedded in a shell with a known base URL
    fn is_embedded(&self) -> bool {
        self.embedded_base_url().map_or(false, |url| !url.is_empty())
    }
}

/// Host context with fixed values
#[derive(Debug, Clone)]
pub struct StaticHostContext {
    connected: bool,
    landing_page: Option<String>,
    location: String,
    embedded_base_url: Option<String>,
}

impl StaticHostContext {
    /// Attached, not embedded, at `/`
    pub fn new() -> Self {
        Self {
            connected: true,
            landing_page: None,
            location: "/".to_string(),
            embedded_base_url: None,
        }
    }

    /// Host element that was never inserted into a document
    pub fn detached() -> Self {
        Self {
            connected: false,
            ..Self::new()
        }
    }

    /// Set the current location pathname
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the `landing-page` attribute
    pub fn with_landing_page(mut self, landing_page: impl Into<String>) -> Self {
        self.landing_page = Some(landing_page.into());
        self
    }

    /// Run embedded in a shell exposing `base_url`
    pub fn embedded_in(mut self, base_url: impl Into<String>) -> Self {
        self.embedded_base_url = Some(base_url.into());
        self
    }
}

impl Default for StaticHostContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HostContext for StaticHostContext {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn landing_page(&self) -> Option<String> {
        self.landing_page.clone()
    }

    fn location_pathname(&self) -> String {
        self.location.clone()
    }

    fn embedded_base_url(&self) -> Option<String> {
        self.embedded_base_url.clone()
    }
}
