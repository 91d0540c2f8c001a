//! Chat command handler.

use anyhow::{Context, Result};
use cheerbot_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    cheerbot_tui::run_chat(config).context("chat window failed")
}
