//! Timeline command handler.

use std::fmt::Write as _;
use std::time::Duration;

use cheerbot_core::config::Config;
use cheerbot_core::dialogue::Script;

pub fn run(config: &Config) {
    print!("{}", format_timeline(&config.script()));
}

/// One line per scripted message, then the point where the bot waits.
fn format_timeline(script: &Script) -> String {
    let mut out = String::new();
    for message in script.messages() {
        let _ = writeln!(out, "{}  {}", offset(message.delay), message.text);
    }
    let _ = writeln!(out, "{}  (awaiting reply)", offset(script.await_reply_at()));
    out
}

fn offset(d: Duration) -> String {
    format!("+{}ms", d.as_millis())
}
