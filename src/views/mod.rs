//! View state machines
//!
//! Each view owns its transient state and talks to the backend only through
//! [`LinkClient`](crate::client::LinkClient). Operations come in two phases
//! (`begin_*` / `finish_*`) so a front end can render the in-flight state
//! between them; the async helpers (`submit`, `load`, `delete`) chain both
//! phases around the request.
//!
//! User interaction the views cannot perform themselves (confirmation, the
//! system clipboard) is injected through [`Confirm`] and [`ClipboardWriter`].

mod copied;
mod create;
mod detail;
mod list;

pub use copied::{COPIED_RESET_DELAY, CopiedIndicator};
pub use create::{CREATE_FALLBACK_ERROR, CreateView, SubmitError};
pub use detail::{DETAIL_LOAD_FALLBACK_ERROR, DetailBody, DetailView};
pub use list::{EMPTY_LIST_MESSAGE, LIST_LOAD_FALLBACK_ERROR, ListBody, ListView};

use crate::errors::ShortlyError;

/// Question asked before any delete
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this URL?";

/// Shown when a delete fails without a server message
pub const DELETE_FALLBACK_ERROR: &str = "Failed to delete URL";

/// Shown in place of rows/records while a load is in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Yes/no confirmation capability
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Clipboard write capability
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ShortlyError>;
}
