//! Widget error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Controller {name} failed: {reason}")]
    Controller { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
