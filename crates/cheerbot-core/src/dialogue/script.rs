//! Scripted bot messages.
//!
//! A `Script` is the fixed, ordered list of greeting messages plus the offset
//! at which the session starts waiting for the user's reply. All offsets are
//! relative to the moment `Session::start` is called.

use std::time::Duration;

use anyhow::{Result, ensure};

/// A predefined bot utterance with a fixed delivery offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedMessage {
    pub text: String,
    pub delay: Duration,
}

impl ScriptedMessage {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }

    /// Shorthand for a message delivered `delay_ms` after start.
    pub fn at_ms(text: impl Into<String>, delay_ms: u64) -> Self {
        Self::new(text, Duration::from_millis(delay_ms))
    }
}

/// The ordered greeting script.
///
/// Delays never decrease from one message to the next, and the reply offset
/// is never earlier than the last message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    messages: Vec<ScriptedMessage>,
    await_reply_at: Duration,
}

/// `start + interval * steps`, saturating instead of overflowing.
fn offset(start: Duration, interval: Duration, steps: usize) -> Duration {
    let steps = u32::try_from(steps).unwrap_or(u32::MAX);
    start.saturating_add(interval.saturating_mul(steps))
}

impl Script {
    /// Builds a script that starts awaiting the reply right after the last
    /// message (or immediately, for an empty script).
    ///
    /// # Errors
    /// Returns an error if the delays decrease anywhere in the list.
    pub fn new(messages: Vec<ScriptedMessage>) -> Result<Self> {
        let await_reply_at = messages.last().map_or(Duration::ZERO, |m| m.delay);
        Self::with_await_reply_at(messages, await_reply_at)
    }

    /// Builds a script with an explicit reply offset.
    ///
    /// # Errors
    /// Returns an error if the delays decrease or the reply offset comes
    /// before the last message.
    pub fn with_await_reply_at(
        messages: Vec<ScriptedMessage>,
        await_reply_at: Duration,
    ) -> Result<Self> {
        for (idx, pair) in messages.windows(2).enumerate() {
            ensure!(
                pair[1].delay >= pair[0].delay,
                "Scripted message {} is scheduled at {}ms, before message {} at {}ms",
                idx + 1,
                pair[1].delay.as_millis(),
                idx,
                pair[0].delay.as_millis()
            );
        }

        if let Some(last) = messages.last() {
            ensure!(
                await_reply_at >= last.delay,
                "Reply offset {}ms comes before the last scripted message at {}ms",
                await_reply_at.as_millis(),
                last.delay.as_millis()
            );
        }

        Ok(Self {
            messages,
            await_reply_at,
        })
    }

    /// Builds an evenly spaced script: the first message at `start_delay`,
    /// each following one `interval` later, and the reply awaited one more
    /// `interval` after the last message.
    pub fn evenly_spaced<I, T>(texts: I, start_delay: Duration, interval: Duration) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let messages: Vec<ScriptedMessage> = texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| ScriptedMessage::new(text, offset(start_delay, interval, idx)))
            .collect();
        let await_reply_at = offset(start_delay, interval, messages.len());

        // Monotonic by construction.
        Self {
            messages,
            await_reply_at,
        }
    }

    pub fn messages(&self) -> &[ScriptedMessage] {
        &self.messages
    }

    pub fn await_reply_at(&self) -> Duration {
        self.await_reply_at
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
