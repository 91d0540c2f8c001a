//! Core cheerbot library (dialogue sequencer, clocks, config, logging).

pub mod clock;
pub mod config;
pub mod dialogue;
pub mod logging;
