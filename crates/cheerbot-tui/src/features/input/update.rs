//! Input feature reducer.
//!
//! Maps key presses onto the reply buffer. Anything that reaches beyond the
//! buffer (submitting, quitting, scrolling) is reported back as a
//! `KeyOutcome` for the main reducer to act on.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputState;

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled inside the input box (or ignored).
    Handled,
    /// Non-blank text was submitted.
    Submit(String),
    /// User asked to leave.
    Quit,
    /// Scroll the transcript by this many lines (positive = up).
    Scroll(i32),
}

/// Parsed key modifiers for cleaner pattern matching.
struct Modifiers {
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
            alt: key.modifiers.contains(KeyModifiers::ALT),
        }
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.shift && !self.alt
    }
}

/// Lines moved per PageUp/PageDown.
const PAGE_SCROLL: i32 = 10;

/// Handles one key press.
pub fn handle_key(input: &mut InputState, key: KeyEvent) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Handled;
    }
    let mods = Modifiers::from(&key);

    // First match wins
    handle_control_keys(input, key.code, &mods)
        .or_else(|| handle_navigation(input, key.code))
        .or_else(|| handle_submission(input, key.code))
        .unwrap_or_else(|| handle_default_input(input, key.code, &mods))
}

/// Handles bracketed paste.
pub fn handle_paste(input: &mut InputState, text: &str) {
    input.buffer.insert_str(&text.replace('\t', "    "));
}

fn handle_control_keys(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> Option<KeyOutcome> {
    if code == KeyCode::Esc {
        return Some(KeyOutcome::Quit);
    }
    if !mods.only_ctrl() {
        return None;
    }
    match code {
        KeyCode::Char('c' | 'd') => Some(KeyOutcome::Quit),
        KeyCode::Char('a') => {
            input.buffer.move_home();
            Some(KeyOutcome::Handled)
        }
        KeyCode::Char('e') => {
            input.buffer.move_end();
            Some(KeyOutcome::Handled)
        }
        KeyCode::Char('u') => {
            input.buffer.delete_to_head();
            Some(KeyOutcome::Handled)
        }
        _ => Some(KeyOutcome::Handled),
    }
}

fn handle_navigation(input: &mut InputState, code: KeyCode) -> Option<KeyOutcome> {
    let outcome = match code {
        KeyCode::Left => {
            input.buffer.move_left();
            KeyOutcome::Handled
        }
        KeyCode::Right => {
            input.buffer.move_right();
            KeyOutcome::Handled
        }
        KeyCode::Home => {
            input.buffer.move_home();
            KeyOutcome::Handled
        }
        KeyCode::End => {
            input.buffer.move_end();
            KeyOutcome::Handled
        }
        KeyCode::Up => KeyOutcome::Scroll(1),
        KeyCode::Down => KeyOutcome::Scroll(-1),
        KeyCode::PageUp => KeyOutcome::Scroll(PAGE_SCROLL),
        KeyCode::PageDown => KeyOutcome::Scroll(-PAGE_SCROLL),
        _ => return None,
    };
    Some(outcome)
}

fn handle_submission(input: &mut InputState, code: KeyCode) -> Option<KeyOutcome> {
    if code != KeyCode::Enter {
        return None;
    }
    Some(
        input
            .take_submission()
            .map_or(KeyOutcome::Handled, KeyOutcome::Submit),
    )
}

fn handle_default_input(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> KeyOutcome {
    match code {
        // Tab: insert spaces (tabs cause rendering issues)
        KeyCode::Tab => input.buffer.insert_str("    "),
        KeyCode::Backspace => input.buffer.backspace(),
        KeyCode::Delete => input.buffer.delete(),
        KeyCode::Char(ch) if !mods.alt => input.buffer.insert_char(ch),
        _ => {}
    }
    KeyOutcome::Handled
}
