//! Transcript feature slice.
//!
//! - `style.rs`: UI-agnostic styled lines
//! - `layout.rs`: chat bubbles laid out into styled lines
//! - `render.rs`: conversion to ratatui lines

mod layout;
mod render;
mod style;

pub use layout::{AVATAR_WIDTH, BOT_AVATAR, USER_AVATAR, layout_bubbles, max_bubble_text_width};
pub use render::render_transcript;
pub use style::{Style, StyledLine, StyledSpan};
