//! Dialogue session state machine.
//!
//! ```text
//! Idle --start()--> Greeting
//! Greeting --(all scripted messages delivered)--> AwaitingReply
//! AwaitingReply --(reply matches keywords)--> Branching(Farewell)
//! AwaitingReply --(reply does not match)--> Branching(Redirect)
//! Branching --(close timer elapses)--> Closed
//! ```
//!
//! The session never sleeps. It schedules actions on its `TimerQueue` and
//! executes whatever is due whenever `poll()` is called; the event loop that
//! owns it decides how long to wait between polls (see `next_deadline`).

use std::time::Duration;

use super::keywords::{Branch, KeywordSet};
use super::script::Script;
use super::surface::{DisplaySurface, Sender};
use super::timers::TimerQueue;
use crate::clock::{Clock, ManualClock};

/// Position of the session in its script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, `start()` not called yet.
    Idle,
    /// Delivering scripted messages.
    Greeting,
    /// All scripted messages delivered; waiting for the single reply.
    AwaitingReply,
    /// Reply handled; closing messages in flight.
    Branching(Branch),
    /// Terminal. The surface has been told to terminate.
    Closed,
}

impl Phase {
    pub fn is_closed(self) -> bool {
        matches!(self, Phase::Closed)
    }

    pub fn accepts_reply(self) -> bool {
        matches!(self, Phase::AwaitingReply)
    }

    /// Short lowercase name for status lines and logs.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Greeting => "greeting",
            Phase::AwaitingReply => "awaiting reply",
            Phase::Branching(Branch::Farewell) => "farewell",
            Phase::Branching(Branch::Redirect) => "redirect",
            Phase::Closed => "closed",
        }
    }
}

/// Messages and delays used once the reply has been classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchReplies {
    pub keywords: KeywordSet,
    /// Sent immediately on the farewell path.
    pub farewell: String,
    /// Sent `reassurance_delay` after the farewell.
    pub reassurance: String,
    pub reassurance_delay: Duration,
    /// Farewell path: time from the farewell message to close.
    pub farewell_close_delay: Duration,
    /// Sent immediately on the redirect path.
    pub redirect: String,
    /// Redirect path: time from the redirect message to close.
    pub redirect_close_delay: Duration,
}

impl BranchReplies {
    pub const FAREWELL: &str = "Okay, I'll leave for now... 😌";
    pub const REASSURANCE: &str = "But remember, always stay happy! 😊";
    pub const REDIRECT: &str = "Join our site, and we can talk more! 💻";
    pub const REASSURANCE_DELAY: Duration = Duration::from_millis(2000);
    pub const FAREWELL_CLOSE_DELAY: Duration = Duration::from_millis(4000);
    pub const REDIRECT_CLOSE_DELAY: Duration = Duration::from_millis(2000);
}

impl Default for BranchReplies {
    fn default() -> Self {
        Self {
            keywords: KeywordSet::default(),
            farewell: Self::FAREWELL.to_string(),
            reassurance: Self::REASSURANCE.to_string(),
            reassurance_delay: Self::REASSURANCE_DELAY,
            farewell_close_delay: Self::FAREWELL_CLOSE_DELAY,
            redirect: Self::REDIRECT.to_string(),
            redirect_close_delay: Self::REDIRECT_CLOSE_DELAY,
        }
    }
}

#[derive(Debug)]
enum Action {
    /// Deliver the scripted message at this index.
    Deliver(usize),
    /// Send a bot message outside the script.
    Say(String),
    AwaitReply,
    Close,
}

/// One scripted conversation, from launch to shutdown.
pub struct Session<S, C> {
    phase: Phase,
    script: Script,
    replies: BranchReplies,
    timers: TimerQueue<Action>,
    surface: S,
    clock: C,
    delivered: usize,
}

impl<S: DisplaySurface, C: Clock> Session<S, C> {
    pub fn new(script: Script, replies: BranchReplies, surface: S, clock: C) -> Self {
        Self {
            phase: Phase::Idle,
            script,
            replies,
            timers: TimerQueue::new(),
            surface,
            clock,
            delivered: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn replies(&self) -> &BranchReplies {
        &self.replies
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of scripted messages delivered so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Enters `Greeting` and schedules the whole script relative to now.
    ///
    /// Messages with a zero delay are delivered before this returns.
    /// Ignored unless the session is `Idle`.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = self.phase.label(), "start ignored");
            return;
        }

        let origin = self.clock.now();
        for (idx, message) in self.script.messages().iter().enumerate() {
            self.timers.schedule(
                origin.saturating_add(message.delay),
                Action::Deliver(idx),
            );
        }
        self.timers.schedule(
            origin.saturating_add(self.script.await_reply_at()),
            Action::AwaitReply,
        );

        self.enter(Phase::Greeting);
        tracing::info!(
            messages = self.script.len(),
            await_reply_ms = self.script.await_reply_at().as_millis() as u64,
            "dialogue started"
        );

        self.poll();
    }

    /// Handles the user's single reply.
    ///
    /// Ignored unless the session is `AwaitingReply`.
    pub fn on_user_reply(&mut self, text: &str) {
        if !self.phase.accepts_reply() {
            tracing::debug!(phase = self.phase.label(), "reply ignored");
            return;
        }

        let now = self.clock.now();
        let branch = self.replies.keywords.classify(text);
        self.enter(Phase::Branching(branch));

        match branch {
            Branch::Farewell => {
                self.surface.show_message(&self.replies.farewell, Sender::Bot);
                self.timers.schedule(
                    now.saturating_add(self.replies.reassurance_delay),
                    Action::Say(self.replies.reassurance.clone()),
                );
                self.timers.schedule(
                    now.saturating_add(self.replies.farewell_close_delay),
                    Action::Close,
                );
            }
            Branch::Redirect => {
                self.surface.show_message(&self.replies.redirect, Sender::Bot);
                self.timers.schedule(
                    now.saturating_add(self.replies.redirect_close_delay),
                    Action::Close,
                );
            }
        }
    }

    /// Echoes a submitted message as the user's, then treats it as the reply.
    pub fn on_user_message(&mut self, text: &str) {
        self.surface.show_message(text, Sender::User);
        self.on_user_reply(text);
    }

    /// Runs every action due at the current time, in scheduled order.
    ///
    /// Returns the number of actions fired.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some((_, action)) = self.timers.pop_due(now) {
            self.fire(action);
            fired += 1;
        }
        fired
    }

    /// Clock offset of the next pending action.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Time left until the next pending action (zero if already due).
    pub fn time_until_next(&self) -> Option<Duration> {
        let deadline = self.next_deadline()?;
        Some(deadline.saturating_sub(self.clock.now()))
    }

    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    fn fire(&mut self, action: Action) {
        match action {
            Action::Deliver(idx) => {
                if let Some(message) = self.script.messages().get(idx) {
                    self.surface.show_message(&message.text, Sender::Bot);
                    self.delivered += 1;
                }
            }
            Action::Say(text) => self.surface.show_message(&text, Sender::Bot),
            Action::AwaitReply => self.enter(Phase::AwaitingReply),
            Action::Close => self.close(),
        }
    }

    fn close(&mut self) {
        let dropped = self.timers.len();
        self.timers.clear();
        self.enter(Phase::Closed);
        tracing::info!(dropped, "dialogue closed");
        self.surface.terminate();
    }

    fn enter(&mut self, next: Phase) {
        tracing::debug!(from = self.phase.label(), to = next.label(), "phase change");
        self.phase = next;
    }
}

impl<S: DisplaySurface> Session<S, ManualClock> {
    /// Jumps virtual time to the next deadline and polls.
    ///
    /// Returns false when nothing is pending, or when the poll fired
    /// nothing (so `settle_instantly` can't spin).
    pub fn advance_to_next(&mut self) -> bool {
        let Some(deadline) = self.next_deadline() else {
            return false;
        };
        self.clock.advance_to(deadline);
        self.poll() > 0
    }

    /// Advances virtual time until no actions remain pending.
    pub fn settle_instantly(&mut self) -> Phase {
        while self.advance_to_next() {}
        self.phase
    }
}
