//! TUI module for the interactive notice browser
//!
//! The `browser` module holds the screen and modal components along with
//! the testable state model; `components` holds the reusable pieces.

pub mod browser;
pub mod components;
pub mod theme;

pub use browser::{BrowseScreen, BrowseScreenProps, NoticeBrowser, NoticeBrowserProps, PendingEdit};
pub use theme::Theme;
