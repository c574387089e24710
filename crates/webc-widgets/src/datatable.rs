//! Data-table pagination
//!
//! Page arithmetic and the pagination bar of a data table bound to a model
//! data source. Page indexes are zero-based; page numbers shown to the user
//! start at one.
//!
//! ```text
//!  total ≤ 7:   ‹  1  2  3  4  5  ›
//!  otherwise:   ‹  1  …  4 [5] 6  …  10  ›
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::WidgetError;

/// Prefix marking a model chain
pub const MODEL_CHAIN_PREFIX: char = '@';

/// Rows per page when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Up to this many pages every page gets a button
const FULL_WINDOW: usize = 7;

/// Data-table attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataTableOptions {
    /// Model chain of the data source, e.g. `@items`
    #[serde(rename = "datasource")]
    pub chain: String,

    /// Total number of rows, if known
    pub data_size: Option<usize>,

    pub page_size: usize,

    pub current_page_index: usize,

    pub hide_pagination: bool,
}

impl Default for DataTableOptions {
    fn default() -> Self {
        Self {
            chain: String::new(),
            data_size: None,
            page_size: DEFAULT_PAGE_SIZE,
            current_page_index: 0,
            hide_pagination: false,
        }
    }
}

/// Entry of a pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowItem {
    Page(usize),
    Ellipsis,
}

/// Rendered pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationItem {
    Previous { disabled: bool },
    /// The active page is rendered disabled
    Page { number: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

impl DataTableOptions {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            ..Default::default()
        }
    }

    pub fn with_data_size(mut self, data_size: usize) -> Self {
        self.data_size = Some(data_size);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_current_page_index(mut self, index: usize) -> Self {
        self.current_page_index = index;
        self
    }

    pub fn with_hidden_pagination(mut self) -> Self {
        self.hide_pagination = true;
        self
    }

    /// Data source chain without the model prefix
    pub fn model_chain(&self) -> &str {
        self.chain
            .strip_prefix(MODEL_CHAIN_PREFIX)
            .unwrap_or(&self.chain)
    }

    /// Page count; an unknown or empty data size counts as one page
    pub fn number_of_pages(&self) -> Result<usize, WidgetError> {
        if self.page_size == 0 {
            return Err(WidgetError::InvalidPageSize);
        }

        Ok(match self.data_size {
            Some(size) if size > 0 => size.div_ceil(self.page_size),
            _ => 1,
        })
    }

    /// Pagination bar, previous and next buttons included
    pub fn pagination(&self) -> Result<Vec<PaginationItem>, WidgetError> {
        if self.hide_pagination {
            return Ok(Vec::new());
        }

        let total = self.number_of_pages()?;
        let current = (self.current_page_index + 1).min(total);

        let mut items: Vec<PaginationItem> = pagination_window(current, total)
            .into_iter()
            .map(|item| match item {
                WindowItem::Page(number) => PaginationItem::Page {
                    number,
                    active: number == current,
                },
                WindowItem::Ellipsis => PaginationItem::Ellipsis,
            })
            .collect();

        if total != 1 {
            items.insert(0, PaginationItem::Previous { disabled: current == 1 });
            items.push(PaginationItem::Next { disabled: current == total });
        }

        trace!(current, total, items = items.len(), "Pagination rendered");
        Ok(items)
    }

    /// Cursor positioned on the configured page
    pub fn cursor(&self) -> Result<PageCursor, WidgetError> {
        let mut cursor = PageCursor::new(self.number_of_pages()?);
        cursor.go_to(self.current_page_index);
        Ok(cursor)
    }
}

/// Page numbers to show around `current` (one-based) out of `total`
pub fn pagination_window(current: usize, total: usize) -> Vec<WindowItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= FULL_WINDOW {
        return (1..=total).map(WindowItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let low = current.saturating_sub(1).max(2);
    let high = (current + 1).min(total - 1);

    let mut window = vec![WindowItem::Page(1)];

    // A gap of one page shows that page instead of an ellipsis
    match low {
        3 => window.push(WindowItem::Page(2)),
        l if l > 3 => window.push(WindowItem::Ellipsis),
        _ => {}
    }

    window.extend((low..=high).map(WindowItem::Page));

    match total - 1 - high {
        1 => window.push(WindowItem::Page(total - 1)),
        gap if gap > 1 => window.push(WindowItem::Ellipsis),
        _ => {}
    }

    window.push(WindowItem::Page(total));
    window
}

/// Position within a fixed number of pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
    pages: usize,
}

impl PageCursor {
    pub fn new(pages: usize) -> Self {
        Self {
            index: 0,
            pages: pages.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.pages
    }

    /// Move to `index`, clamped to the last page
    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.pages - 1);
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.index + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.index.saturating_sub(1))
    }
}

/// Data table: options, cursor and the rows of the current page
#[derive(Debug, Clone)]
pub struct DataTable {
    options: DataTableOptions,
    cursor: PageCursor,
    rows: Vec<Value>,
}

impl DataTable {
    pub fn new(options: DataTableOptions) -> Result<Self, WidgetError> {
        let cursor = options.cursor()?;
        debug!(chain = %options.model_chain(), pages = cursor.pages(), "Data table created");

        Ok(Self {
            options,
            cursor,
            rows: Vec::new(),
        })
    }

    pub fn options(&self) -> &DataTableOptions {
        &self.options
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn current_page_index(&self) -> usize {
        self.cursor.index()
    }

    /// Replace the rows of the current page
    pub fn fill_current_page(&mut self, rows: Vec<Value>) {
        self.rows = rows;
    }

    pub fn clear_current_page(&mut self) {
        self.rows.clear();
    }

    /// Move to a page by index; returns the index actually selected
    pub fn go_to_page(&mut self, index: usize) -> usize {
        self.select(|cursor| cursor.go_to(index))
    }

    pub fn go_to_next_page(&mut self) -> usize {
        self.select(PageCursor::next)
    }

    pub fn go_to_previous_page(&mut self) -> usize {
        self.select(PageCursor::previous)
    }

    /// Pagination bar for the current page
    pub fn pagination(&self) -> Result<Vec<PaginationItem>, WidgetError> {
        self.options.pagination()
    }

    fn select(&mut self, step: impl FnOnce(&mut PageCursor) -> usize) -> usize {
        let index = step(&mut self.cursor);
        self.options.current_page_index = index;
        index
    }
}
