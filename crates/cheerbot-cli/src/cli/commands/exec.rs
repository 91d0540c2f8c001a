//! Exec command handler.
//!
//! Runs the dialogue without the chat window. Every message becomes one
//! line on stdout, prefixed with who said it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use cheerbot_core::clock::{ManualClock, SystemClock};
use cheerbot_core::config::Config;
use cheerbot_core::dialogue::{DisplaySurface, Phase, Sender, Session, driver};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub struct ExecOptions<'a> {
    pub config: &'a Config,
    /// Sent as soon as the bot waits for a reply. Stdin is read otherwise.
    pub reply: Option<&'a str>,
    /// Use virtual time instead of waiting.
    pub instant: bool,
}

pub async fn run(options: ExecOptions<'_>) -> Result<()> {
    let script = options.config.script();
    let replies = options
        .config
        .branch_replies()
        .context("invalid reply settings")?;
    let surface = LineSurface::new(io::stdout());

    let phase = if options.instant {
        run_instant(
            Session::new(script, replies, surface, ManualClock::new()),
            options.reply,
        )
        .await
    } else {
        run_timed(
            Session::new(script, replies, surface, SystemClock::new()),
            options.reply,
        )
        .await
    };

    tracing::info!(phase = phase.label(), "exec finished");
    Ok(())
}

async fn run_timed<W: Write>(
    mut session: Session<LineSurface<W>, SystemClock>,
    reply: Option<&str>,
) -> Phase {
    session.start();

    let Some(reply) = reply else {
        let mut lines = spawn_stdin_reader();
        return driver::run_interactive(&mut session, &mut lines).await;
    };

    driver::settle(&mut session).await;
    driver::submit(&mut session, reply);
    driver::settle(&mut session).await
}

async fn run_instant<W: Write>(
    mut session: Session<LineSurface<W>, ManualClock>,
    reply: Option<&str>,
) -> Phase {
    session.start();
    session.settle_instantly();

    if let Some(reply) = reply {
        driver::submit(&mut session, reply);
    } else {
        let mut lines = spawn_stdin_reader();
        while session.phase().accepts_reply() {
            let Some(line) = lines.recv().await else {
                break;
            };
            driver::submit(&mut session, &line);
        }
    }

    session.settle_instantly()
}

fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Prints each message as `bot: …` or `you: …`.
struct LineSurface<W> {
    out: W,
}

impl<W: Write> LineSurface<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn prefix(sender: Sender) -> &'static str {
        match sender {
            Sender::Bot => "bot",
            Sender::User => "you",
        }
    }
}

impl<W: Write> DisplaySurface for LineSurface<W> {
    fn show_message(&mut self, text: &str, sender: Sender) {
        // A closed stdout only loses output
        let _ = writeln!(self.out, "{}: {text}", Self::prefix(sender));
        let _ = self.out.flush();
    }

    fn terminate(&mut self) {
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use cheerbot_core::clock::Clock;
    use cheerbot_core::dialogue::{BranchReplies, Script};

    use super::*;

    fn session(clock: ManualClock) -> Session<LineSurface<Vec<u8>>, ManualClock> {
        let script = Script::evenly_spaced(
            ["Hi", "How are you?"],
            std::time::Duration::from_millis(1000),
            std::time::Duration::from_millis(2000),
        );
        Session::new(
            script,
            BranchReplies::default(),
            LineSurface::new(Vec::new()),
            clock,
        )
    }

    fn output(session: Session<LineSurface<Vec<u8>>, ManualClock>) -> String {
        String::from_utf8(session.into_surface().out).unwrap()
    }

    #[test]
    fn test_instant_farewell_transcript() {
        let mut session = session(ManualClock::new());
        session.start();
        session.settle_instantly();
        driver::submit(&mut session, "No thanks");
        assert_eq!(session.settle_instantly(), Phase::Closed);

        assert_eq!(
            output(session),
            format!(
                "bot: Hi\nbot: How are you?\nyou: No thanks\nbot: {}\nbot: {}\n",
                BranchReplies::FAREWELL,
                BranchReplies::REASSURANCE
            )
        );
    }

    #[tokio::test]
    async fn test_run_instant_with_reply_redirects() {
        let phase = run_instant(session(ManualClock::new()), Some("tell me a joke")).await;
        assert_eq!(phase, Phase::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_timed_holds_reply_until_asked() {
        let mut out = Vec::new();
        let script = Script::evenly_spaced(
            ["Hi", "How are you?"],
            std::time::Duration::from_millis(1000),
            std::time::Duration::from_millis(2000),
        );
        let clock = SystemClock::new();
        let session = Session::new(
            script,
            BranchReplies::default(),
            LineSurface::new(&mut out),
            clock,
        );

        let phase = run_timed(session, Some("okay then")).await;
        assert_eq!(phase, Phase::Closed);
        // greeting done at 5s, farewell closes 4s after the reply
        assert!(clock.now() >= std::time::Duration::from_millis(9000));

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "bot: Hi\nbot: How are you?\nyou: okay then\nbot: {}\nbot: {}\n",
                BranchReplies::FAREWELL,
                BranchReplies::REASSURANCE
            )
        );
    }

    #[test]
    fn test_line_surface_prefixes() {
        let mut surface = LineSurface::new(Vec::new());
        surface.show_message("hello", Sender::Bot);
        surface.show_message("hey", Sender::User);
        assert_eq!(String::from_utf8(surface.out).unwrap(), "bot: hello\nyou: hey\n");
    }
}
