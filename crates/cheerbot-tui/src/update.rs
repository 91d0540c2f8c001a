//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use cheerbot_core::clock::Clock;
use cheerbot_core::dialogue::driver;
use crossterm::event::{Event, KeyEvent};

use crate::effects::{QuitReason, UiEffect};
use crate::events::UiEvent;
use crate::input::{self, KeyOutcome};
use crate::state::AppState;

/// The main reducer function.
pub fn update<C: Clock>(app: &mut AppState<C>, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = match event {
        UiEvent::Launch => {
            app.session.start();
            vec![]
        }
        UiEvent::Tick | UiEvent::Timer => {
            app.session.poll();
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.size = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    };

    // The session closes itself through its surface
    if !app.should_quit && app.surface().is_terminated() {
        effects.push(quit(app, QuitReason::SessionClosed));
    }
    effects
}

fn handle_terminal_event<C: Clock>(app: &mut AppState<C>, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            input::handle_paste(&mut app.input, &text);
            vec![]
        }
        Event::Resize(width, height) => {
            app.size = (width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key<C: Clock>(app: &mut AppState<C>, key: KeyEvent) -> Vec<UiEffect> {
    match input::handle_key(&mut app.input, key) {
        KeyOutcome::Handled => vec![],
        KeyOutcome::Scroll(delta) => {
            app.scroll_by(delta);
            vec![]
        }
        KeyOutcome::Submit(text) => {
            if driver::submit(&mut app.session, &text) {
                app.scroll_to_bottom();
            }
            vec![]
        }
        KeyOutcome::Quit => vec![quit(app, QuitReason::UserExit)],
    }
}

fn quit<C: Clock>(app: &mut AppState<C>, reason: QuitReason) -> UiEffect {
    tracing::info!(reason = reason.as_str(), phase = app.phase().label(), "quitting");
    app.should_quit = true;
    UiEffect::Quit { reason }
}
