//! Shared helpers used across TUI features.

mod scrollbar;
pub mod text;
pub mod theme;

pub use scrollbar::Scrollbar;
pub use text::{truncate_with_ellipsis, wrap_words};
