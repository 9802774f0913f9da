//! Create view: one URL field, one submit, result shown inline

use std::fmt;

use tracing::{info, warn};
use url::Url;

use crate::client::{ClientError, LinkClient};
use crate::models::CreatedLink;

/// Shown when a create fails without a server message
pub const CREATE_FALLBACK_ERROR: &str = "Something went wrong";

const EMPTY_INPUT_MESSAGE: &str = "Please fill out this field.";
const INVALID_URL_MESSAGE: &str = "Please enter a URL.";

/// Why a submission did not produce a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Rejected before reaching the network
    Invalid(String),
    /// A submission is already in flight
    Busy,
    Request(ClientError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(msg) => write!(f, "{}", msg),
            SubmitError::Busy => write!(f, "submission already in progress"),
            SubmitError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SubmitError {}

#[derive(Debug, Default)]
pub struct CreateView {
    input: String,
    validation: Option<String>,
    error: Option<String>,
    loading: bool,
    created: Option<CreatedLink>,
}

impl CreateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.validation = None;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.validation = None;
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.validation = None;
    }

    pub fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    /// Validation message from the last blocked submit
    pub fn validation_message(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    /// Request error from the last submit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn created(&self) -> Option<&CreatedLink> {
        self.created.as_ref()
    }

    /// Submit control is enabled only when idle
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Start a submission: validate, clear previous outcome, enter loading.
    /// Returns the URL to send, verbatim.
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        if self.loading {
            return Err(SubmitError::Busy);
        }
        if let Some(message) = validate_url(&self.input) {
            self.validation = Some(message.to_string());
            return Err(SubmitError::Invalid(message.to_string()));
        }

        self.validation = None;
        self.error = None;
        self.created = None;
        self.loading = true;
        Ok(self.input.clone())
    }

    /// Apply the outcome of the create request
    pub fn finish_submit(
        &mut self,
        result: Result<CreatedLink, ClientError>,
    ) -> Result<CreatedLink, SubmitError> {
        self.loading = false;
        match result {
            Ok(created) => {
                info!("Created short link {}", created.short_link);
                self.created = Some(created.clone());
                Ok(created)
            }
            Err(e) => {
                warn!("Create failed: {}", e);
                self.error = Some(e.user_message(CREATE_FALLBACK_ERROR));
                Err(SubmitError::Request(e))
            }
        }
    }

    pub async fn submit(&mut self, client: &LinkClient) -> Result<CreatedLink, SubmitError> {
        let url = self.begin_submit()?;
        let result = client.create_link(&url).await;
        self.finish_submit(result)
    }
}

/// Required, absolute-URL check; `None` when valid
fn validate_url(input: &str) -> Option<&'static str> {
    if input.trim().is_empty() {
        return Some(EMPTY_INPUT_MESSAGE);
    }
    match Url::parse(input) {
        Ok(_) => None,
        Err(_) => Some(INVALID_URL_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert_eq!(validate_url(""), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(validate_url("   "), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(validate_url("example.com"), Some(INVALID_URL_MESSAGE));
        assert_eq!(validate_url("https://example.com"), None);
        assert_eq!(validate_url("mailto:a@b.c"), None);
    }

    #[test]
    fn test_begin_submit_blocks_invalid_input() {
        let mut view = CreateView::new();
        view.set_input("not a url");
        let err = view.begin_submit().unwrap_err();
        assert_eq!(err, SubmitError::Invalid(INVALID_URL_MESSAGE.into()));
        assert!(!view.is_loading());
        assert_eq!(view.validation_message(), Some(INVALID_URL_MESSAGE));

        view.push_char('x');
        assert!(view.validation_message().is_none());
    }

    #[test]
    fn test_begin_submit_while_loading_is_busy() {
        let mut view = CreateView::new();
        view.set_input("https://example.com");
        assert_eq!(view.begin_submit().unwrap(), "https://example.com");
        assert!(view.is_loading());
        assert!(!view.can_submit());
        assert_eq!(view.begin_submit().unwrap_err(), SubmitError::Busy);
    }

    #[test]
    fn test_finish_submit_error_uses_fallback() {
        let mut view = CreateView::new();
        view.set_input("https://example.com");
        view.begin_submit().unwrap();
        let _ = view.finish_submit(Err(ClientError::Api {
            status: 500,
            message: None,
        }));
        assert!(!view.is_loading());
        assert_eq!(view.error(), Some(CREATE_FALLBACK_ERROR));
        assert!(view.created().is_none());
    }

    #[test]
    fn test_new_submit_clears_previous_outcome() {
        let mut view = CreateView::new();
        view.set_input("https://example.com");
        view.begin_submit().unwrap();
        let _ = view.finish_submit(Err(ClientError::Transport("down".into())));
        assert!(view.error().is_some());

        view.begin_submit().unwrap();
        assert!(view.error().is_none());
        assert!(view.created().is_none());
    }
}
