//! Property-based tests for the dialogue session
//!
//! Every generated script is delivered once, in order, at its own offset, and
//! every reply lands on exactly one closing path.

use std::time::Duration;

use proptest::prelude::*;

use super::keywords::FAREWELL_KEYWORDS;
use super::*;
use crate::clock::{Clock, ManualClock};

/// Records each call with the virtual time it arrived at.
struct TimedSurface {
    clock: ManualClock,
    messages: Vec<(Duration, Sender, String)>,
    terminated_at: Option<Duration>,
    calls_after_terminate: usize,
}

impl TimedSurface {
    fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            messages: Vec::new(),
            terminated_at: None,
            calls_after_terminate: 0,
        }
    }

    fn bot_texts(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(_, sender, _)| *sender == Sender::Bot)
            .map(|(_, _, text)| text.as_str())
            .collect()
    }
}

impl DisplaySurface for TimedSurface {
    fn show_message(&mut self, text: &str, sender: Sender) {
        if self.terminated_at.is_some() {
            self.calls_after_terminate += 1;
        }
        self.messages.push((self.clock.now(), sender, text.to_string()));
    }

    fn terminate(&mut self) {
        if self.terminated_at.is_some() {
            self.calls_after_terminate += 1;
        }
        self.terminated_at = Some(self.clock.now());
    }
}

// ============================================================================
// Generators
// ============================================================================

/// Non-decreasing offsets built from random gaps (zero gaps included).
fn arb_script() -> impl Strategy<Value = Vec<ScriptedMessage>> {
    proptest::collection::vec(("[a-zA-Z !?']{0,24}", 0u64..5_000), 0..16).prop_map(|entries| {
        let mut at = 0;
        entries
            .into_iter()
            .map(|(text, gap)| {
                at += gap;
                ScriptedMessage::at_ms(text, at)
            })
            .collect()
    })
}

/// A farewell token buried in arbitrary text, with random casing.
fn arb_reply_with_token() -> impl Strategy<Value = String> {
    (
        ".{0,12}",
        proptest::sample::select(FAREWELL_KEYWORDS.to_vec()),
        proptest::collection::vec(any::<bool>(), 5),
        ".{0,12}",
    )
        .prop_map(|(prefix, token, upper, suffix)| {
            let token: String = token
                .chars()
                .zip(upper)
                .map(|(ch, up)| if up { ch.to_ascii_uppercase() } else { ch })
                .collect();
            format!("{prefix}{token}{suffix}")
        })
}

fn arb_reply() -> impl Strategy<Value = String> {
    prop_oneof![any::<String>(), "[a-zA-Z ]{0,30}", arb_reply_with_token()]
}

fn expects_farewell(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    FAREWELL_KEYWORDS.iter().any(|token| lowered.contains(token))
}

fn awaiting_session() -> (Session<TimedSurface, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let script = Script::evenly_spaced(
        ["Hi", "How are you?"],
        Duration::from_millis(1000),
        Duration::from_millis(2000),
    );
    let mut session = Session::new(
        script,
        BranchReplies::default(),
        TimedSurface::new(clock.clone()),
        clock.clone(),
    );
    session.start();
    session.settle_instantly();
    (session, clock)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_script_delivered_once_in_order_on_time(messages in arb_script()) {
        let clock = ManualClock::new();
        let script = Script::new(messages.clone()).unwrap();
        let mut session = Session::new(
            script,
            BranchReplies::default(),
            TimedSurface::new(clock.clone()),
            clock,
        );

        session.start();
        prop_assert_eq!(session.settle_instantly(), Phase::AwaitingReply);
        prop_assert_eq!(session.delivered(), messages.len());

        let surface = session.surface();
        let expected: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        prop_assert_eq!(surface.bot_texts(), expected);

        for ((at, _, _), message) in surface.messages.iter().zip(&messages) {
            prop_assert_eq!(*at, message.delay);
        }
        prop_assert!(surface.messages.windows(2).all(|w| w[0].0 <= w[1].0));
        prop_assert!(surface.terminated_at.is_none());
    }

    #[test]
    fn prop_reply_takes_exactly_one_path(reply in arb_reply()) {
        let (mut session, clock) = awaiting_session();
        let before = session.surface().bot_texts().len();
        let replied_at = clock.now();

        session.on_user_reply(&reply);
        prop_assert_eq!(session.settle_instantly(), Phase::Closed);

        let surface = session.surface();
        let bot_texts = surface.bot_texts();
        let closing = &bot_texts[before..];
        let replies = BranchReplies::default();
        if expects_farewell(&reply) {
            prop_assert_eq!(closing, [replies.farewell.as_str(), replies.reassurance.as_str()]);
            prop_assert_eq!(surface.terminated_at, Some(replied_at + replies.farewell_close_delay));
        } else {
            prop_assert_eq!(closing, [replies.redirect.as_str()]);
            prop_assert_eq!(surface.terminated_at, Some(replied_at + replies.redirect_close_delay));
        }
        prop_assert_eq!(surface.calls_after_terminate, 0);
    }

    #[test]
    fn prop_classify_matches_lowercase_substring(reply in arb_reply()) {
        let expected = if expects_farewell(&reply) {
            Branch::Farewell
        } else {
            Branch::Redirect
        };
        prop_assert_eq!(KeywordSet::default().classify(&reply), expected);
    }

    #[test]
    fn prop_late_replies_are_ignored(
        first in arb_reply(),
        later in proptest::collection::vec(arb_reply(), 1..4),
    ) {
        let (mut session, _clock) = awaiting_session();
        session.on_user_reply(&first);
        let branch = session.phase();
        let shown = session.surface().messages.len();

        for reply in &later {
            session.on_user_reply(reply);
        }
        prop_assert_eq!(session.phase(), branch);
        prop_assert_eq!(session.surface().messages.len(), shown);
    }
}
