//! The chat window as a display surface.
//!
//! The session pushes messages here; the renderer reads them back as chat
//! bubbles. `terminate()` only raises a flag; the reducer turns it into a
//! quit effect on the next update.

use cheerbot_core::dialogue::{DisplaySurface, Sender};

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub sender: Sender,
    pub text: String,
}

/// In-memory transcript fed by the session.
#[derive(Debug, Default)]
pub struct ChatSurface {
    bubbles: Vec<Bubble>,
    terminated: bool,
}

impl ChatSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl DisplaySurface for ChatSurface {
    fn show_message(&mut self, text: &str, sender: Sender) {
        tracing::debug!(%sender, "bubble added");
        self.bubbles.push(Bubble {
            sender,
            text: text.to_string(),
        });
    }

    fn terminate(&mut self) {
        self.terminated = true;
    }
}
