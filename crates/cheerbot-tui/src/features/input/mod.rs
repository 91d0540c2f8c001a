//! Input feature slice.
//!
//! - `text_buffer.rs`: single-line editing buffer
//! - `update.rs`: key and paste handling
//! - `render.rs`: reply box rendering

mod render;
mod text_buffer;
mod update;

pub use render::{INPUT_HEIGHT, render_input};
pub use text_buffer::TextBuffer;
pub use update::{KeyOutcome, handle_key, handle_paste};

/// Placeholder shown once the bot is waiting for a reply.
pub const REPLY_PLACEHOLDER: &str = "Type your response here...";

/// Reply box state.
#[derive(Debug, Default)]
pub struct InputState {
    pub buffer: TextBuffer,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the typed text if it contains anything but whitespace.
    ///
    /// Blank input is left in place so the user can keep editing.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.buffer.text().trim().is_empty() {
            return None;
        }
        Some(self.buffer.take())
    }
}
