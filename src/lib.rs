//! Shortly - a terminal front end for a URL-shortening REST service
//!
//! This library holds everything except the terminal itself: the API client,
//! the record types, the router and the three view state machines. The
//! ratatui front end lives behind the `tui` feature.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `client`: HTTP transport and the short link API client
//! - `models`: Records exchanged with the backend
//! - `router`: Path to view resolution and navigation history
//! - `views`: Create / list / detail view state and their capabilities
//! - `config`: Configuration loading (file + environment)
//! - `system`: Logging setup
//! - `interfaces`: User interfaces (TUI)

pub mod client;
pub mod config;
pub mod errors;
#[cfg(feature = "tui")]
pub mod interfaces;
pub mod models;
pub mod router;
pub mod system;
pub mod views;
