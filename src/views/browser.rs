use crate::domain::{Category, ListingSummary, Page, PageDescriptor};
use crate::gateway::{GatewayError, ListingsGateway, DEFAULT_SORT};
use crate::paths;
use tracing::warn;

/// State behind the listing page: the active filter, the last page the
/// service returned, and what went wrong if it didn't.
#[derive(Debug, Clone)]
pub struct BrowserView {
    page_size: u32,
    category: Option<Category>,
    page: Page<ListingSummary>,
    error: Option<String>,
    notice: Option<String>,
}

impl BrowserView {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            category: None,
            page: Page::empty(page_size),
            error: None,
            notice: None,
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Unfiltered listing, sorted by name.
    pub fn load_all(&mut self, gateway: &dyn ListingsGateway, page: u32) {
        let result = gateway.fetch_all(page, self.page_size, DEFAULT_SORT);
        self.apply(None, result);
    }

    pub fn load_category(
        &mut self,
        gateway: &dyn ListingsGateway,
        category: Category,
        page: u32,
    ) {
        let result = gateway.fetch_by_category(category, page, self.page_size);
        self.apply(Some(category), result);
    }

    pub fn load(
        &mut self,
        gateway: &dyn ListingsGateway,
        category: Option<Category>,
        page: u32,
    ) {
        match category {
            Some(category) => self.load_category(gateway, category, page),
            None => self.load_all(gateway, page),
        }
    }

    /// The most recent result replaces everything shown before it.
    fn apply(
        &mut self,
        category: Option<Category>,
        result: Result<Page<ListingSummary>, GatewayError>,
    ) {
        self.category = category;
        match result {
            Ok(page) => {
                self.page = page;
                self.error = None;
            }
            Err(err) => {
                warn!(
                    error = %err,
                    category = ?category.map(Category::token),
                    "listing fetch failed"
                );
                self.page = Page::empty(self.page_size);
                self.error = Some(err.user_message());
            }
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn listings(&self) -> &[ListingSummary] {
        &self.page.items
    }

    pub fn descriptor(&self) -> &PageDescriptor {
        &self.page.descriptor
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Paginator is only worth showing with more than one page.
    pub fn shows_paginator(&self) -> bool {
        self.error.is_none() && self.page.descriptor.total_pages() > 1
    }

    /// Link that repeats the current filter from its first page.
    pub fn retry_path(&self) -> String {
        paths::browse_path(self.category, 0)
    }
}
