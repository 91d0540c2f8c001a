//! Display surface contract.
//!
//! The session never renders anything itself. It pushes messages and the
//! final shutdown request into whatever implements `DisplaySurface`: the
//! terminal chat window, the stdout printer, or a recorder in tests.

use std::fmt;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    Bot,
    User,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::Bot => "bot",
            Sender::User => "user",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation layer driven by the session.
pub trait DisplaySurface {
    /// Shows one chat message.
    fn show_message(&mut self, text: &str, sender: Sender);

    /// Ends the conversation. Called exactly once, when the session closes.
    fn terminate(&mut self);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn show_message(&mut self, text: &str, sender: Sender) {
        (**self).show_message(text, sender);
    }

    fn terminate(&mut self) {
        (**self).terminate();
    }
}

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Message { sender: Sender, text: String },
    Terminated,
}

/// Surface that records every call, in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Texts of all messages from `sender`, in delivery order.
    pub fn texts_from(&self, sender: Sender) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Message { sender: s, text } if *s == sender => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn terminated(&self) -> bool {
        self.events.contains(&SurfaceEvent::Terminated)
    }
}

impl DisplaySurface for RecordingSurface {
    fn show_message(&mut self, text: &str, sender: Sender) {
        self.events.push(SurfaceEvent::Message {
            sender,
            text: text.to_string(),
        });
    }

    fn terminate(&mut self) {
        self.events.push(SurfaceEvent::Terminated);
    }
}
