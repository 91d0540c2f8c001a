//! Dialogue module: the scripted conversation and everything that drives it.
//!
//! This module contains:
//! - `script`: Scripted bot messages and their delivery offsets
//! - `keywords`: Farewell keyword set and reply classification
//! - `timers`: Ordered timer queue keyed by virtual offset
//! - `surface`: The display surface contract the session drives
//! - `session`: The phase state machine (start, reply, poll)
//! - `driver`: Async loops that sleep until deadlines and feed replies

pub mod driver;
pub mod keywords;
pub mod script;
pub mod session;
pub mod surface;
pub mod timers;

#[cfg(test)]
mod proptests;

pub use keywords::{Branch, KeywordSet};
pub use script::{Script, ScriptedMessage};
pub use session::{BranchReplies, Phase, Session};
pub use surface::{DisplaySurface, RecordingSurface, Sender, SurfaceEvent};
pub use timers::TimerQueue;
