//! Webc Widgets
//!
//! State behind the two stock widgets of the shell: the paginated data
//! table and the modal dialog.
//!
//! ```text
//! DataTableOptions ──► number_of_pages ──► pagination_window ──► PaginationItem*
//!        │
//!        └──► PageCursor (go_to / next / previous)
//!
//! ModalOptions ──► Modal::initialise(ControllerRegistry, TemplateSource)
//!                        │
//!                        └──► ModalEvent { Initialised, Confirmed, Closed }
//! ```

mod error;
pub mod datatable;
pub mod modal;

// Re-exports: Error types
pub use error::WidgetError;

// Re-exports: Data table
pub use datatable::{
    pagination_window, DataTable, DataTableOptions, PageCursor, PaginationItem, WindowItem,
    DEFAULT_PAGE_SIZE, MODEL_CHAIN_PREFIX,
};

// Re-exports: Modal
pub use modal::{
    ControllerFactory, ControllerRegistry, FileTemplateSource, Footer, Modal, ModalController,
    ModalEvent, ModalOptions, ModelListener, TemplateSource,
};
