//! 可复用 UI 组件

mod modal;
mod status_indicator;
mod url_input;

pub use modal::Modal;
pub use status_indicator::StatusIndicator;
pub use url_input::UrlInput;
