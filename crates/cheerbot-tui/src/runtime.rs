//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the only place with side effects. The reducer decides, the
//! runtime carries it out.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use cheerbot_core::clock::{Clock, SystemClock};
use cheerbot_core::dialogue::{BranchReplies, Script};
use crossterm::event;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render::WINDOW_TITLE;
use crate::state::AppState;
use crate::terminal::{self, ChatTerminal};
use crate::{render, update};

/// Longest the loop sleeps without input or a due timer.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen chat runtime.
///
/// The terminal is restored when the runtime is dropped.
pub struct TuiRuntime<C: Clock = SystemClock> {
    terminal: ChatTerminal,
    pub state: AppState<C>,
    last_tick: Instant,
}

impl<C: Clock> TuiRuntime<C> {
    /// Takes over the terminal and prepares a session that has not started yet.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(script: Script, replies: BranchReplies, clock: C) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal =
            terminal::setup_terminal(WINDOW_TITLE).context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(script, replies, clock),
            last_tick: Instant::now(),
        })
    }

    /// Runs until the dialogue closes or the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        self.dispatch_event(UiEvent::Launch);
        let mut dirty = true;

        while !self.state.should_quit {
            if dirty {
                let size = self.terminal.size()?;
                self.dispatch_event(UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                });
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }

            for event in self.collect_events()? {
                // Ticks only matter if they moved the dialogue
                dirty |= !matches!(event, UiEvent::Tick);
                let before = self.state.surface().bubbles().len();
                self.dispatch_event(event);
                dirty |= self.state.surface().bubbles().len() != before;
            }
        }

        tracing::debug!(
            phase = self.state.phase().label(),
            bubbles = self.state.surface().bubbles().len(),
            "event loop finished"
        );
        Ok(())
    }

    /// Waits for terminal input, a due timer, or the idle tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let time_until_tick = IDLE_POLL_DURATION.saturating_sub(self.last_tick.elapsed());
        let poll_duration = self
            .state
            .session
            .time_until_next()
            .map_or(time_until_tick, |wait| wait.min(time_until_tick));

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain anything else already buffered
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.state.session.time_until_next() == Some(Duration::ZERO) {
            events.push(UiEvent::Timer);
        }

        if self.last_tick.elapsed() >= IDLE_POLL_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit { reason } => {
                tracing::debug!(reason = reason.as_str(), "quit effect");
                self.state.should_quit = true;
            }
        }
    }
}

impl<C: Clock> Drop for TuiRuntime<C> {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
