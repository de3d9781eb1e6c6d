//! Ready event handlers for bot initialization.
//!
//! `ready` fires when the gateway handshake completes and is used to log the
//! connection and register the `setrole` command. `cache_ready` fires once
//! guild data has arrived and is the trigger for the initial binding
//! directory rebuild; doing the rebuild at `ready` time would race the cache
//! still being populated.

use serenity::all::{ChannelId, Command, Context, GuildId, Ready};

use crate::bot::handler::command::setrole_command;
use crate::data::role_channel::RoleChannelStore;
use crate::service::catalog::directory::BindingDirectory;
use crate::service::catalog::rebuild;

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    // Re-registering on every connect is idempotent; Discord upserts global
    // commands by name.
    if let Err(e) = Command::create_global_command(&ctx.http, setrole_command()).await {
        tracing::error!("Failed to register setrole command: {}", e);
    }
}

/// Rebuilds the binding directory of every guild with a designated role
/// channel once guild data is cached.
pub async fn handle_cache_ready(
    store: &RoleChannelStore,
    directory: &BindingDirectory,
    ctx: Context,
    guilds: Vec<GuildId>,
) {
    for guild_id in guilds {
        let Some(channel_id) = store.role_channel(guild_id.get()).await else {
            continue;
        };
        if let Err(e) =
            rebuild::rebuild_guild(&ctx, directory, guild_id, ChannelId::new(channel_id)).await
        {
            tracing::error!("Failed to rebuild role bindings for guild {}: {}", guild_id, e);
        }
    }
}
