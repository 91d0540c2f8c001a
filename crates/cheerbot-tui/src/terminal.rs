//! Terminal lifecycle.
//!
//! The chat window draws on stderr so stdout stays free for piping. Raw
//! mode and the alternate screen are undone on normal exit (the runtime's
//! `Drop`) and on panic (the hook below).

use std::io::{self, Stderr};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type ChatTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Enters raw mode and the alternate screen, and turns on bracketed paste.
///
/// Call `install_panic_hook()` first.
///
/// # Errors
/// Returns an error if the terminal refuses any of the mode switches.
pub fn setup_terminal(title: &str) -> Result<ChatTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste, SetTitle(title))
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stderr)).context("Failed to create terminal")
}

/// Leaves the alternate screen and raw mode. Safe to call more than once.
///
/// # Errors
/// Returns an error if the terminal cannot be switched back.
pub fn restore_terminal() -> Result<()> {
    // Paste mode has to go before raw mode does
    let _ = execute!(io::stderr(), DisableBracketedPaste);
    execute!(io::stderr(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Restores the terminal before the default panic output is printed.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
