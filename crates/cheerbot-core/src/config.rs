//! Configuration management for cheerbot.
//!
//! Loads configuration from ${CHEERBOT_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::dialogue::{BranchReplies, KeywordSet, Script};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for cheerbot configuration and data directories.
    //!
    //! CHEERBOT_HOME resolution order:
    //! 1. CHEERBOT_HOME environment variable (if set)
    //! 2. ~/.config/cheerbot (default)

    use std::path::PathBuf;

    /// Returns the cheerbot home directory.
    pub fn cheerbot_home() -> PathBuf {
        if let Ok(home) = std::env::var("CHEERBOT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".cheerbot"),
            |h| h.join(".config").join("cheerbot"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        cheerbot_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        cheerbot_home().join("logs")
    }
}

/// Farewell branch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarewellConfig {
    /// Tokens matched case-insensitively as substrings of the reply.
    pub keywords: Vec<String>,
    pub message: String,
    pub reassurance: String,
    pub reassurance_delay_ms: u64,
    /// Time from the farewell message until the chat closes.
    pub close_delay_ms: u64,
}

impl Default for FarewellConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordSet::default().tokens().to_vec(),
            message: BranchReplies::FAREWELL.to_string(),
            reassurance: BranchReplies::REASSURANCE.to_string(),
            reassurance_delay_ms: duration_ms(BranchReplies::REASSURANCE_DELAY),
            close_delay_ms: duration_ms(BranchReplies::FAREWELL_CLOSE_DELAY),
        }
    }
}

/// Redirect branch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    pub message: String,
    /// Time from the redirect message until the chat closes.
    pub close_delay_ms: u64,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            message: BranchReplies::REDIRECT.to_string(),
            close_delay_ms: duration_ms(BranchReplies::REDIRECT_CLOSE_DELAY),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay before the first scripted message.
    pub start_delay_ms: u64,

    /// Gap between scripted messages (and before the reply prompt).
    pub message_interval_ms: u64,

    /// Scripted messages, in delivery order.
    pub messages: Vec<String>,

    #[serde(default)]
    pub farewell: FarewellConfig,

    #[serde(default)]
    pub redirect: RedirectConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_delay_ms: Self::DEFAULT_START_DELAY_MS,
            message_interval_ms: Self::DEFAULT_MESSAGE_INTERVAL_MS,
            messages: Self::DEFAULT_MESSAGES.iter().map(ToString::to_string).collect(),
            farewell: FarewellConfig::default(),
            redirect: RedirectConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_START_DELAY_MS: u64 = 1000;
    const DEFAULT_MESSAGE_INTERVAL_MS: u64 = 2000;
    const DEFAULT_MESSAGES: [&str; 7] = [
        "Hey there! 👋 I just popped in because I sensed something in the air... ✨",
        "Sometimes life throws negativity your way, but guess what? You’re way stronger than that! 💪",
        "You’re amazing, and no hater can change that. 💖",
        "Here’s the deal: You should always remember you’re AWESOME. 🌟",
        "Negativity? Pfft. It’s got nothing on you. 💥",
        "Let’s spread good vibes only! 🎉",
        "Now, do you want more advice or maybe just to chat? 😎",
    ];

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Builds the greeting script from the configured messages and timing.
    pub fn script(&self) -> Script {
        Script::evenly_spaced(
            self.messages.iter().map(String::as_str),
            Duration::from_millis(self.start_delay_ms),
            Duration::from_millis(self.message_interval_ms),
        )
    }

    /// Builds the post-reply messages and delays.
    ///
    /// # Errors
    /// Returns an error if the farewell path would close before its
    /// reassurance message is shown.
    pub fn branch_replies(&self) -> Result<BranchReplies> {
        let farewell = &self.farewell;
        ensure!(
            farewell.close_delay_ms >= farewell.reassurance_delay_ms,
            "farewell.close_delay_ms ({}) must not be shorter than farewell.reassurance_delay_ms ({})",
            farewell.close_delay_ms,
            farewell.reassurance_delay_ms
        );

        Ok(BranchReplies {
            keywords: KeywordSet::new(&farewell.keywords),
            farewell: farewell.message.clone(),
            reassurance: farewell.reassurance.clone(),
            reassurance_delay: Duration::from_millis(farewell.reassurance_delay_ms),
            farewell_close_delay: Duration::from_millis(farewell.close_delay_ms),
            redirect: self.redirect.message.clone(),
            redirect_close_delay: Duration::from_millis(self.redirect.close_delay_ms),
        })
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to move {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
