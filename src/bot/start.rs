use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::role_channel::RoleChannelStore;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner.
///
/// Creates and starts the Discord bot client; blocks until the bot shuts
/// down, so the caller owns the process lifetime.
///
/// # Arguments
/// - `config` - Application configuration (bot token)
/// - `store` - Role channel designations shared with the event handler
///
/// # Returns
/// - `Ok(())` if the bot runs to shutdown
/// - `Err(AppError)` if client construction or the gateway connection fails
pub async fn start_bot(config: &Config, store: Arc<RoleChannelStore>) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the Discord
    // Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(store);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
