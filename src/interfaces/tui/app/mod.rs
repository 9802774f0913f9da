//! TUI application state and the operations driving it
//!
//! - state: App struct, current screen, messages
//! - navigation: route mounting, history, drawing
//! - link_operations: create / load / delete / copy through the views

mod link_operations;
mod navigation;
mod state;

pub use state::{App, Screen};
