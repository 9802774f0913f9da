//! Detail view: one link's statistics, copy and delete

use tracing::{debug, info, warn};

use super::{ClipboardWriter, Confirm, CopiedIndicator, DELETE_CONFIRM_MESSAGE, DELETE_FALLBACK_ERROR};
use crate::client::{ClientError, LinkClient};
use crate::models::ShortLink;
use crate::router::Route;

/// Shown when the record cannot be loaded and the server gave no message
pub const DETAIL_LOAD_FALLBACK_ERROR: &str = "Failed to load URL data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailBody<'a> {
    /// Load failed; replaces the whole view
    Failed(&'a str),
    Loading,
    Loaded(&'a ShortLink),
}

#[derive(Debug)]
pub struct DetailView {
    slug: String,
    record: Option<ShortLink>,
    load_error: Option<String>,
    action_error: Option<String>,
    loading: bool,
    deleting: bool,
    copied: CopiedIndicator,
}

impl DetailView {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            record: None,
            load_error: None,
            action_error: None,
            loading: false,
            deleting: false,
            copied: CopiedIndicator::new(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn record(&self) -> Option<&ShortLink> {
        self.record.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Inline notice of the last copy or delete
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_active()
    }

    /// A "Copied!" reset timer is still scheduled
    pub fn has_pending_copy_reset(&self) -> bool {
        self.copied.has_pending_reset()
    }

    pub fn body(&self) -> DetailBody<'_> {
        match (&self.load_error, &self.record) {
            (Some(error), _) => DetailBody::Failed(error),
            (None, Some(record)) => DetailBody::Loaded(record),
            (None, None) => DetailBody::Loading,
        }
    }

    /// Switch to another slug; `true` when it changed and a load is due
    pub fn set_slug(&mut self, slug: impl Into<String>) -> bool {
        let slug = slug.into();
        if slug == self.slug {
            return false;
        }
        self.slug = slug;
        self.record = None;
        self.load_error = None;
        self.action_error = None;
        self.copied.clear();
        true
    }

    // ========== 加载 ==========

    /// Enter loading state; returns the slug to request
    pub fn begin_load(&mut self) -> String {
        self.loading = true;
        self.slug.clone()
    }

    pub fn finish_load(
        &mut self,
        slug: &str,
        result: Result<ShortLink, ClientError>,
    ) -> Result<(), ClientError> {
        if slug != self.slug {
            debug!("Dropping stale response for {}", slug);
            return Ok(());
        }
        self.loading = false;
        match result {
            Ok(record) => {
                self.record = Some(record);
                self.load_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load {}: {}", slug, e);
                self.record = None;
                self.load_error = Some(e.user_message(DETAIL_LOAD_FALLBACK_ERROR));
                Err(e)
            }
        }
    }

    pub async fn load(&mut self, client: &LinkClient) -> Result<(), ClientError> {
        let slug = self.begin_load();
        let result = client.get_link(&slug).await;
        self.finish_load(&slug, result)
    }

    // ========== 复制 ==========

    /// Copy the short link; `true` when it reached the clipboard
    pub fn copy_short_link(&mut self, clipboard: &mut dyn ClipboardWriter) -> bool {
        let Some(record) = &self.record else {
            return false;
        };
        match clipboard.write_text(&record.shortened_link) {
            Ok(()) => {
                debug!("Copied {}", record.shortened_link);
                self.action_error = None;
                self.copied.trigger();
                true
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.action_error = Some(e.message().to_string());
                self.copied.clear();
                false
            }
        }
    }

    // ========== 删除 ==========

    /// Ask for confirmation; returns the slug to delete
    pub fn begin_delete(&mut self, confirm: &mut dyn Confirm) -> Option<String> {
        if self.deleting || self.record.is_none() {
            return None;
        }
        if !confirm.confirm(DELETE_CONFIRM_MESSAGE) {
            debug!("Delete of {} cancelled", self.slug);
            return None;
        }
        self.action_error = None;
        self.deleting = true;
        Some(self.slug.clone())
    }

    /// Apply the delete outcome; on success the route to navigate to
    pub fn finish_delete(&mut self, result: Result<(), ClientError>) -> Option<Route> {
        self.deleting = false;
        match result {
            Ok(()) => {
                info!("Deleted {}", self.slug);
                Some(Route::List)
            }
            Err(e) => {
                warn!("Failed to delete {}: {}", self.slug, e);
                self.action_error = Some(e.user_message(DELETE_FALLBACK_ERROR));
                None
            }
        }
    }

    pub async fn delete(&mut self, confirm: &mut dyn Confirm, client: &LinkClient) -> Option<Route> {
        let slug = self.begin_delete(confirm)?;
        let result = client.delete_link(&slug).await;
        self.finish_delete(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShortlyError;

    struct FailingClipboard;

    impl ClipboardWriter for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ShortlyError> {
            Err(ShortlyError::clipboard("no display"))
        }
    }

    fn record(slug: &str) -> ShortLink {
        ShortLink {
            slug: slug.into(),
            original_url: "https://example.com".into(),
            shortened_link: format!("https://short.ly/{}", slug),
            visits: 3,
            last_visit_at: None,
            is_active: true,
        }
    }

    #[test]
    fn test_body_transitions() {
        let mut view = DetailView::new("abc");
        assert_eq!(view.body(), DetailBody::Loading);
        let slug = view.begin_load();
        view.finish_load(&slug, Ok(record("abc"))).unwrap();
        assert!(matches!(view.body(), DetailBody::Loaded(r) if r.slug == "abc"));
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut view = DetailView::new("abc");
        let slug = view.begin_load();
        assert!(view.set_slug("def"));
        view.finish_load(&slug, Ok(record("abc"))).unwrap();
        assert!(view.record().is_none());
        assert!(!view.set_slug("def"));
    }

    #[test]
    fn test_copy_without_record_is_noop() {
        let mut view = DetailView::new("abc");
        let mut calls = 0;
        struct Counting<'a>(&'a mut i32);
        impl ClipboardWriter for Counting<'_> {
            fn write_text(&mut self, _text: &str) -> Result<(), ShortlyError> {
                *self.0 += 1;
                Ok(())
            }
        }
        assert!(!view.copy_short_link(&mut Counting(&mut calls)));
        assert_eq!(calls, 0);
        assert!(!view.is_copied());
    }

    #[test]
    fn test_clipboard_failure_is_inline() {
        let mut view = DetailView::new("abc");
        view.finish_load("abc", Ok(record("abc"))).unwrap();
        assert!(!view.copy_short_link(&mut FailingClipboard));
        assert!(!view.is_copied());
        assert_eq!(view.action_error(), Some("no display"));
        assert!(matches!(view.body(), DetailBody::Loaded(_)));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut view = DetailView::new("abc");
        view.finish_load("abc", Ok(record("abc"))).unwrap();
        assert!(view.begin_delete(&mut |_: &str| false).is_none());
        assert!(!view.is_deleting());
        assert_eq!(view.begin_delete(&mut |_: &str| true).as_deref(), Some("abc"));
        assert_eq!(view.finish_delete(Ok(())), Some(Route::List));
    }
}
