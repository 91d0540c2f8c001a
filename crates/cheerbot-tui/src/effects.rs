//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The chat window has exactly one: leaving.

/// Why the window is closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    /// The dialogue reached its closing step.
    SessionClosed,
    /// Esc or Ctrl+C.
    UserExit,
}

impl QuitReason {
    pub fn as_str(self) -> &'static str {
        match self {
            QuitReason::SessionClosed => "session closed",
            QuitReason::UserExit => "user exit",
        }
    }
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Restore the terminal and leave the event loop.
    Quit { reason: QuitReason },
}
