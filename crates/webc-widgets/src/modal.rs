//! Modal dialog
//!
//! State of a modal: visibility, loading, expansion and the model it binds
//! its content to. Rendering belongs to the host; this module decides what
//! is shown and which events fire.
//!
//! # Initialisation
//!
//! ```text
//! initialise()
//!     │  detached host ─► no-op
//!     ├─ auto_show      ─► visible
//!     ├─ template       ─► loading … TemplateSource::load().await … loaded
//!     ├─ controller     ─► ControllerRegistry lookup, construct, adopt models
//!     ├─ model listeners added
//!     ▼
//! ModalEvent::Initialised
//! ```

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use webc_router_core::HostContext;

use crate::error::WidgetError;

/// Modal attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModalOptions {
    /// Registered controller name
    pub controller: Option<String>,
    /// Template name, loaded from `modals/<name>.html`
    pub template: Option<String>,
    pub modal_title: Option<String>,
    pub modal_description: Option<String>,
    pub modal_content: Option<String>,
    /// Raw footer markup
    pub modal_footer: Option<String>,
    /// Content provides its own footer
    pub footer_slot: bool,
    pub cancel_button_text: String,
    pub confirm_button_text: String,
    pub expanded: bool,
    pub centered: bool,
    pub auto_show: bool,
    pub disable_closing: bool,
    pub disable_backdrop_closing: bool,
    pub disable_expanding: bool,
    pub disable_footer: bool,
    pub disable_cancel_button: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            controller: None,
            template: None,
            modal_title: None,
            modal_description: None,
            modal_content: None,
            modal_footer: None,
            footer_slot: false,
            cancel_button_text: "Close".to_string(),
            confirm_button_text: "Ok".to_string(),
            expanded: false,
            centered: true,
            auto_show: true,
            disable_closing: false,
            disable_backdrop_closing: true,
            disable_expanding: false,
            disable_footer: false,
            disable_cancel_button: false,
        }
    }
}

/// Events emitted by a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Initialised,
    Confirmed,
    /// `by_button` is false for a backdrop click
    Closed { by_button: bool },
}

/// Footer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    /// Footer supplied by the content
    Slot,
    Html(String),
    Buttons {
        cancel: Option<String>,
        confirm: String,
    },
}

/// Loads modal templates by name
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn load(&self, name: &str) -> Result<String, WidgetError>;
}

/// Templates read from `<root>/modals/<name>.html`
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    root: PathBuf,
}

impl FileTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    async fn load(&self, name: &str) -> Result<String, WidgetError> {
        let path = self.root.join("modals").join(format!("{}.html", name));
        debug!(path = %path.display(), "Loading modal template");

        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(html),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(WidgetError::TemplateNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Behaviour attached to a modal by name
pub trait ModalController: Send + Sync {
    fn model(&self) -> Option<Value>;

    fn translation_model(&self) -> Option<Value> {
        None
    }

    /// Host removed from the document
    fn disconnected(&self) {}
}

/// Builds a controller from the modal's model and translation model
pub type ControllerFactory = Arc<
    dyn Fn(Option<&Value>, Option<&Value>) -> Result<Box<dyn ModalController>, WidgetError>
        + Send
        + Sync,
>;

/// Named controller factories
#[derive(Default)]
pub struct ControllerRegistry {
    factories: RwLock<HashMap<String, ControllerFactory>>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any previous one with the same name
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Result<Box<dyn ModalController>, WidgetError>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        debug!(controller = %name, "Registering modal controller");
        self.factories.write().insert(name, Arc::new(factory));
    }

    pub fn get(&self, name: &str) -> Option<ControllerFactory> {
        self.factories.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }
}

/// Requests a modal answers for its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelListener {
    Model,
    TranslationModel,
}

#[derive(Debug, Default)]
struct ModalState {
    initialised: bool,
    visible: bool,
    loading: bool,
    expanded: bool,
    content: Option<String>,
    model: Option<Value>,
    translation_model: Option<Value>,
}

/// Modal dialog instance
pub struct Modal {
    options: ModalOptions,
    host: Arc<dyn HostContext>,
    state: RwLock<ModalState>,
    controller: RwLock<Option<Box<dyn ModalController>>>,
    listeners: RwLock<HashSet<ModelListener>>,
    events: mpsc::UnboundedSender<ModalEvent>,
}

impl Modal {
    /// Create a modal and the receiving end of its events
    pub fn new(
        options: ModalOptions,
        host: Arc<dyn HostContext>,
    ) -> (Self, mpsc::UnboundedReceiver<ModalEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let state = ModalState {
            expanded: options.expanded,
            ..Default::default()
        };

        let modal = Self {
            options,
            host,
            state: RwLock::new(state),
            controller: RwLock::new(None),
            listeners: RwLock::new(HashSet::new()),
            events,
        };
        (modal, rx)
    }

    /// Start with a model already bound
    pub fn with_model(self, model: Value) -> Self {
        self.state.write().model = Some(model);
        self
    }

    pub fn with_translation_model(self, translation_model: Value) -> Self {
        self.state.write().translation_model = Some(translation_model);
        self
    }

    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    pub fn is_initialised(&self) -> bool {
        self.state.read().initialised
    }

    pub fn is_visible(&self) -> bool {
        self.state.read().visible
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn is_expanded(&self) -> bool {
        self.state.read().expanded
    }

    /// Loaded template markup
    pub fn content(&self) -> Option<String> {
        self.state.read().content.clone()
    }

    pub fn model(&self) -> Option<Value> {
        self.state.read().model.clone()
    }

    pub fn translation_model(&self) -> Option<Value> {
        self.state.read().translation_model.clone()
    }

    /// Load the template, bind the controller and start answering model requests
    pub async fn initialise(
        &self,
        registry: &ControllerRegistry,
        templates: &dyn TemplateSource,
    ) -> Result<(), WidgetError> {
        if !self.host.is_connected() {
            debug!("Modal host not attached, skipping initialisation");
            return Ok(());
        }

        if self.options.auto_show {
            self.state.write().visible = true;
        }

        if let Some(template) = &self.options.template {
            self.state.write().loading = true;
            let loaded = templates.load(template).await;

            let mut state = self.state.write();
            state.loading = false;
            state.content = Some(loaded?);
        }

        if let Some(name) = &self.options.controller {
            self.bind_controller(registry, name);
        }

        self.add_listeners();
        self.state.write().initialised = true;
        self.emit(ModalEvent::Initialised);

        info!(
            template = ?self.options.template,
            controller = ?self.options.controller,
            "Modal initialised"
        );
        Ok(())
    }

    fn bind_controller(&self, registry: &ControllerRegistry, name: &str) {
        let Some(factory) = registry.get(name) else {
            warn!(controller = %name, "Modal controller not registered");
            return;
        };

        let built = {
            let state = self.state.read();
            factory(state.model.as_ref(), state.translation_model.as_ref())
        };

        match built {
            Ok(controller) => {
                let mut state = self.state.write();
                if state.model.is_none() {
                    state.model = controller.model();
                }
                if state.translation_model.is_none() {
                    state.translation_model = controller.translation_model();
                }
                drop(state);

                *self.controller.write() = Some(controller);
            }
            Err(err) => {
                error!(controller = %name, error = %err, "Modal controller construction failed");
            }
        }
    }

    pub fn show(&self) {
        self.state.write().visible = true;
    }

    pub fn hide(&self) {
        self.state.write().visible = false;
    }

    pub fn toggle_expand(&self) -> bool {
        let mut state = self.state.write();
        state.expanded = !state.expanded;
        state.expanded
    }

    /// Close button or a `data-close` element was pressed
    pub fn close(&self) {
        self.emit(ModalEvent::Closed { by_button: true });
    }

    /// Confirm button or a `data-confirm` element was pressed
    pub fn confirm(&self) {
        self.emit(ModalEvent::Confirmed);
    }

    /// Click outside the dialog; returns whether it closed the modal
    pub fn backdrop_click(&self) -> bool {
        if self.options.disable_closing || self.options.disable_backdrop_closing {
            return false;
        }
        self.emit(ModalEvent::Closed { by_button: false });
        true
    }

    pub fn shows_expand_button(&self) -> bool {
        !self.options.disable_expanding
    }

    pub fn shows_close_button(&self) -> bool {
        !self.options.disable_closing
    }

    /// Footer to render, if any
    pub fn footer(&self) -> Option<Footer> {
        if self.options.disable_footer || self.is_loading() {
            return None;
        }
        if self.options.footer_slot {
            return Some(Footer::Slot);
        }
        if let Some(html) = &self.options.modal_footer {
            return Some(Footer::Html(html.clone()));
        }

        Some(Footer::Buttons {
            cancel: (!self.options.disable_cancel_button)
                .then(|| self.options.cancel_button_text.clone()),
            confirm: self.options.confirm_button_text.clone(),
        })
    }

    /// Answer a model request from the content
    pub fn request(&self, listener: ModelListener) -> Option<Value> {
        if !self.listeners.read().contains(&listener) {
            return None;
        }
        let state = self.state.read();
        match listener {
            ModelListener::Model => state.model.clone(),
            ModelListener::TranslationModel => state.translation_model.clone(),
        }
    }

    /// Host inserted again
    pub fn attach(&self) {
        if self.is_initialised() {
            self.add_listeners();
        }
    }

    /// Host removed from the document
    pub fn detach(&self) {
        self.listeners.write().clear();
        if let Some(controller) = self.controller.read().as_ref() {
            controller.disconnected();
        }
        debug!("Modal detached");
    }

    fn add_listeners(&self) {
        let mut listeners = self.listeners.write();
        listeners.insert(ModelListener::Model);
        listeners.insert(ModelListener::TranslationModel);
    }

    fn emit(&self, event: ModalEvent) {
        debug!(event = ?event, "Modal event");
        // No receiver means nobody listens; the event is dropped
        let _ = self.events.send(event);
    }
}
