use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_ROLE_CHANNEL_FILE: &str = "role_channels.txt";

pub struct Config {
    pub discord_bot_token: String,

    pub role_channel_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            role_channel_file: std::env::var("ROLE_CHANNEL_FILE")
                .unwrap_or_else(|_| DEFAULT_ROLE_CHANNEL_FILE.to_string())
                .into(),
        })
    }
}
