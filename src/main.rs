mod bot;
mod config;
mod data;
mod error;
mod service;
mod util;

use std::sync::Arc;

use crate::config::Config;
use crate::data::role_channel::RoleChannelStore;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(RoleChannelStore::load(config.role_channel_file.clone()).await?);

    tracing::info!("Starting roleboard");

    bot::start::start_bot(&config, store).await
}
