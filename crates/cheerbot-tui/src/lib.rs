//! Full-screen chat window for cheerbot.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::{Context, Result};
use cheerbot_core::clock::SystemClock;
use cheerbot_core::config::Config;
pub use features::{input, transcript};
pub use runtime::TuiRuntime;

/// Runs the chat window until the dialogue closes or the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the configuration is
/// invalid, or the terminal cannot be driven.
pub fn run_chat(config: &Config) -> Result<()> {
    // Chat mode requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Chat mode requires a terminal.\n\
             Use `cheerbot exec` for non-interactive runs."
        );
    }

    let replies = config.branch_replies().context("invalid reply settings")?;
    let mut runtime = TuiRuntime::new(config.script(), replies, SystemClock::new())?;
    runtime.run()
}
