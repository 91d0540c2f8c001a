//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the redraw tick, and wake-ups for dialogue timers. The runtime produces
//! them; `update` consumes them.

use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// First event after the terminal is ready. Starts the dialogue.
    Launch,
    /// Periodic wake-up with no input.
    Tick,
    /// A dialogue timer is due (or overdue).
    Timer,
    /// About to draw a frame of this size.
    Frame { width: u16, height: u16 },
    /// Raw crossterm event.
    Terminal(CrosstermEvent),
}
