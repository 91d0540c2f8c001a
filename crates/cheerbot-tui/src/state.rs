//! Application state.
//!
//! ```text
//! AppState
//! ├── session: Session<ChatSurface, C>  (phase, timers, transcript)
//! ├── input: InputState                 (reply box)
//! ├── scroll                            (lines above the bottom)
//! └── size                              (last frame size)
//! ```

use cheerbot_core::clock::{Clock, SystemClock};
use cheerbot_core::dialogue::{BranchReplies, Phase, Script, Session};

use crate::input::InputState;
use crate::surface::ChatSurface;

/// Combined application state for the chat window.
///
/// Generic over the clock so tests can drive the dialogue by hand.
pub struct AppState<C: Clock = SystemClock> {
    pub session: Session<ChatSurface, C>,
    pub input: InputState,
    /// Transcript scroll, counted in lines up from the bottom.
    pub scroll: usize,
    /// Last known terminal size (width, height).
    pub size: (u16, u16),
    pub should_quit: bool,
}

impl<C: Clock> AppState<C> {
    pub fn new(script: Script, replies: BranchReplies, clock: C) -> Self {
        Self {
            session: Session::new(script, replies, ChatSurface::new(), clock),
            input: InputState::new(),
            scroll: 0,
            size: (0, 0),
            should_quit: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn surface(&self) -> &ChatSurface {
        self.session.surface()
    }

    /// Moves the transcript by `delta` lines (positive = towards older).
    pub fn scroll_by(&mut self, delta: i32) {
        let step = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        self.scroll = if delta >= 0 {
            self.scroll.saturating_add(step)
        } else {
            self.scroll.saturating_sub(step)
        };
    }

    /// Jumps back to the newest message.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = 0;
    }
}
