//! CLI entry and dispatch.

use anyhow::{Context, Result};
use cheerbot_core::config::{self, paths};
use cheerbot_core::logging;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "cheerbot")]
#[command(version)]
#[command(about = "A friendly chatbot that cheers you up")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the chat window (default)
    Chat,
    /// Run the dialogue on plain stdout, reading the reply from stdin
    Exec {
        /// Reply to send once the bot asks (skips reading stdin)
        #[arg(short, long, value_name = "TEXT")]
        reply: Option<String>,

        /// Skip the waits between messages
        #[arg(long)]
        instant: bool,
    },
    /// Print the configured script with its delivery offsets
    Timeline,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let result = rt.block_on(async move { dispatch(cli).await });
    // The stdin reader may still be parked on a read
    rt.shutdown_background();
    result
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Config commands work on the file itself and must not fail on a bad one
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        };
    }

    let config = config::Config::load().context("load config")?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let _guard = init_logging();
            commands::chat::run(&config)
        }
        Commands::Exec { reply, instant } => {
            let _guard = init_logging();
            commands::exec::run(commands::exec::ExecOptions {
                config: &config,
                reply: reply.as_deref(),
                instant,
            })
            .await
        }
        Commands::Timeline => {
            commands::timeline::run(&config);
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}

/// Logging is best effort: a read-only home should not stop the chat.
fn init_logging() -> Option<logging::WorkerGuard> {
    match logging::init(&paths::logs_dir()) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    }
}
