//! List view: one page of links with pagination and delete

use tracing::{debug, info, warn};

use super::{Confirm, DELETE_CONFIRM_MESSAGE, DELETE_FALLBACK_ERROR};
use crate::client::{ClientError, LinkClient};
use crate::models::{LinkPage, PageMeta, ShortLink};

/// Shown when a page load fails without a server message
pub const LIST_LOAD_FALLBACK_ERROR: &str = "Failed to load URLs";

/// Single row shown for an empty page
pub const EMPTY_LIST_MESSAGE: &str = "No URLs found";

/// What the table area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListBody<'a> {
    /// Load failed; replaces the whole table
    Failed(&'a str),
    Loading,
    Empty,
    Rows(&'a [ShortLink]),
}

#[derive(Debug)]
pub struct ListView {
    page: u32,
    records: Vec<ShortLink>,
    meta: PageMeta,
    loading: bool,
    deleting: bool,
    load_error: Option<String>,
    action_error: Option<String>,
    selected: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            page: 1,
            records: Vec::new(),
            meta: PageMeta::default(),
            loading: false,
            deleting: false,
            load_error: None,
            action_error: None,
            selected: 0,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locally tracked page (1-based)
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn records(&self) -> &[ShortLink] {
        &self.records
    }

    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Inline error of the last delete
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn body(&self) -> ListBody<'_> {
        if let Some(error) = &self.load_error {
            ListBody::Failed(error)
        } else if self.loading {
            ListBody::Loading
        } else if self.records.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Rows(&self.records)
        }
    }

    // ========== 分页 ==========

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.meta.total_pages
    }

    /// Page indicator is only shown for multi-page results
    pub fn show_pagination(&self) -> bool {
        self.meta.total_pages > 1
    }

    /// Step back one page; `false` when blocked
    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Step forward one page; `false` when blocked
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page += 1;
        true
    }

    // ========== 加载 ==========

    /// Enter loading state; returns the page to request
    pub fn begin_load(&mut self) -> u32 {
        self.loading = true;
        self.action_error = None;
        self.page
    }

    pub fn finish_load(&mut self, result: Result<LinkPage, ClientError>) -> Result<(), ClientError> {
        self.loading = false;
        match result {
            Ok(page) => {
                debug!(
                    "Loaded page {} ({} records, {} pages)",
                    self.page,
                    page.data.len(),
                    page.meta.total_pages
                );
                self.records = page.data;
                self.meta = page.meta;
                self.load_error = None;
                self.clamp_selection();
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load page {}: {}", self.page, e);
                self.records.clear();
                self.load_error = Some(e.user_message(LIST_LOAD_FALLBACK_ERROR));
                self.selected = 0;
                Err(e)
            }
        }
    }

    pub async fn load(&mut self, client: &LinkClient) -> Result<(), ClientError> {
        let page = self.begin_load();
        let result = client.list_links(page).await;
        self.finish_load(result)
    }

    /// Next page and reload; `false` (no request) when blocked
    pub async fn go_next(&mut self, client: &LinkClient) -> bool {
        if !self.next_page() {
            return false;
        }
        let _ = self.load(client).await;
        true
    }

    /// Previous page and reload; `false` (no request) when blocked
    pub async fn go_previous(&mut self, client: &LinkClient) -> bool {
        if !self.previous_page() {
            return false;
        }
        let _ = self.load(client).await;
        true
    }

    // ========== 删除 ==========

    /// Ask for confirmation; `true` when the delete request should be sent
    pub fn begin_delete(&mut self, slug: &str, confirm: &mut dyn Confirm) -> bool {
        if self.deleting || self.loading {
            return false;
        }
        if !confirm.confirm(DELETE_CONFIRM_MESSAGE) {
            debug!("Delete of {} cancelled", slug);
            return false;
        }
        self.action_error = None;
        self.deleting = true;
        true
    }

    /// Apply the delete outcome; `true` on success (the caller reloads)
    pub fn finish_delete(&mut self, slug: &str, result: Result<(), ClientError>) -> bool {
        self.deleting = false;
        match result {
            Ok(()) => {
                info!("Deleted {}", slug);
                true
            }
            Err(e) => {
                warn!("Failed to delete {}: {}", slug, e);
                self.action_error = Some(e.user_message(DELETE_FALLBACK_ERROR));
                false
            }
        }
    }

    /// Confirm, delete, then reload the current page on success
    pub async fn delete(
        &mut self,
        slug: &str,
        confirm: &mut dyn Confirm,
        client: &LinkClient,
    ) -> bool {
        if !self.begin_delete(slug, confirm) {
            return false;
        }
        let result = client.delete_link(slug).await;
        if !self.finish_delete(slug, result) {
            return false;
        }
        let _ = self.load(client).await;
        true
    }

    // ========== 选择 ==========

    pub fn selected_index(&self) -> Option<usize> {
        (!self.records.is_empty()).then_some(self.selected)
    }

    pub fn selected_record(&self) -> Option<&ShortLink> {
        self.records.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.records.is_empty() {
            self.selected = (self.selected + 1).min(self.records.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.records.len().saturating_sub(1));
    }
}
