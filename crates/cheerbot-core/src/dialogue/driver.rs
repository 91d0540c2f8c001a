//! Async drivers for a session.
//!
//! A session only reacts to two things: its own timers and the user's input.
//! These loops sleep until the next deadline (tokio time) and feed submitted
//! lines in between. Both return the phase the session ended in.

use std::time::Duration;

use tokio::sync::mpsc;

use super::session::{Phase, Session};
use super::surface::DisplaySurface;
use crate::clock::Clock;

/// Forwards a submitted line to the session.
///
/// Blank or whitespace-only input is dropped here and never reaches the
/// session. Returns whether the line was forwarded.
pub fn submit<S: DisplaySurface, C: Clock>(session: &mut Session<S, C>, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    session.on_user_message(trimmed);
    true
}

/// Sleeps through every pending timer until none remain.
pub async fn settle<S: DisplaySurface, C: Clock>(session: &mut Session<S, C>) -> Phase {
    while let Some(wait) = session.time_until_next() {
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
        session.poll();
    }
    session.phase()
}

/// Runs the session against a stream of user lines.
///
/// Stops once the session is closed, or once input has ended and no timer
/// is left that could move the session forward.
pub async fn run_interactive<S: DisplaySurface, C: Clock>(
    session: &mut Session<S, C>,
    replies: &mut mpsc::UnboundedReceiver<String>,
) -> Phase {
    let mut input_open = true;

    loop {
        session.poll();
        if session.phase().is_closed() {
            break;
        }

        let wait = session.time_until_next();
        if !input_open && wait.is_none() {
            tracing::debug!(phase = session.phase().label(), "input closed, stopping");
            break;
        }

        tokio::select! {
            () = sleep_for(wait) => {}
            line = replies.recv(), if input_open => match line {
                Some(text) => {
                    submit(session, &text);
                }
                None => input_open = false,
            },
        }
    }

    session.phase()
}

async fn sleep_for(wait: Option<Duration>) {
    match wait {
        Some(d) => tokio::time::sleep(d).await,
        None => std::future::pending().await,
    }
}
