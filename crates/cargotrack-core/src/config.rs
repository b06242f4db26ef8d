use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CargotrackError;

/// Top-level cargotrack configuration.
///
/// Loaded from a TOML file when present, then overlaid with environment
/// variables. The bot token is the only hard requirement.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Telegram bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot API token. Overridden by `CARGOTRACK_BOT_TOKEN`.
    #[serde(default)]
    pub bot_token: String,
    /// Administrator user IDs. Overridden by `CARGOTRACK_ADMINS`
    /// (comma-separated; invalid entries are dropped).
    #[serde(default)]
    pub admins: Vec<i64>,
    /// Sticker file_id sent when a search found something.
    #[serde(default = "default_success_sticker")]
    pub success_sticker: String,
    /// Sticker file_id sent when a search found nothing.
    #[serde(default = "default_error_sticker")]
    pub error_sticker: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            admins: Vec::new(),
            success_sticker: default_success_sticker(),
            error_sticker: default_error_sticker(),
        }
    }
}

/// Record store file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the dataset files and the feedback log.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// Canonical CSV cache path.
    pub fn csv_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("products.csv")
    }

    /// Richer spreadsheet source, consulted only when the cache is absent.
    pub fn xlsx_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("products.xlsx")
    }

    /// Append-only feedback log path.
    pub fn feedback_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("feedback.txt")
    }
}

fn default_success_sticker() -> String {
    "CAACAgIAAxkBAAIBG2YJ5qGfQk0succ".to_string()
}
fn default_error_sticker() -> String {
    "CAACAgIAAxkBAAIBH2YJ5qHfQk0fail".to_string()
}
fn default_data_dir() -> String {
    ".".to_string()
}

/// Parse a comma-separated admin ID list. Invalid entries are silently dropped.
pub fn parse_admins(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i64>().ok())
        .collect()
}

/// Load configuration from a TOML file, then overlay environment variables.
///
/// A missing file is fine (defaults are used), a missing bot token is not:
/// the process must not start without one.
pub fn load(path: &str) -> Result<Config, CargotrackError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CargotrackError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| CargotrackError::Config(format!("failed to parse config: {e}")))?
    } else {
        tracing::info!("config file not found at {}, using defaults", path.display());
        Config::default()
    };

    if let Ok(token) = std::env::var("CARGOTRACK_BOT_TOKEN") {
        if !token.is_empty() {
            config.bot.bot_token = token;
        }
    }
    if let Ok(admins) = std::env::var("CARGOTRACK_ADMINS") {
        config.bot.admins = parse_admins(&admins);
    }

    if config.bot.bot_token.is_empty() {
        return Err(CargotrackError::Config(
            "bot token not set. Set it in config.toml or the CARGOTRACK_BOT_TOKEN env var".into(),
        ));
    }

    Ok(config)
}
