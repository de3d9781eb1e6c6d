//! Message event handlers.
//!
//! Any message posted or edited in a guild's designated role channel
//! invalidates the whole binding directory entry for that guild, so both
//! events trigger a full rebuild. There is no incremental update path; the
//! rebuild re-reads the channel and swaps the guild's snapshot wholesale.

use serenity::all::{Context, Message, MessageUpdateEvent};

use crate::data::role_channel::RoleChannelStore;
use crate::service::catalog::directory::BindingDirectory;
use crate::service::catalog::rebuild;

/// Handle message creation in a channel.
pub async fn handle_message(
    store: &RoleChannelStore,
    directory: &BindingDirectory,
    ctx: Context,
    message: Message,
) {
    // The bot should never respond to itself, and only to role channels
    let Some(guild_id) = message.guild_id else {
        return;
    };
    if message.author.id == ctx.cache.current_user().id {
        return;
    }
    match store.role_channel(guild_id.get()).await {
        Some(channel_id) if channel_id == message.channel_id.get() => {}
        _ => return,
    }

    tracing::info!("Reloading role bindings for guild {} from new message", guild_id);
    if let Err(e) = rebuild::rebuild_guild(&ctx, directory, guild_id, message.channel_id).await {
        tracing::error!("Failed to rebuild role bindings for guild {}: {}", guild_id, e);
    }
}

/// Handle a message edit in a channel.
pub async fn handle_message_update(
    store: &RoleChannelStore,
    directory: &BindingDirectory,
    ctx: Context,
    _old_if_available: Option<Message>,
    _new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let Some(guild_id) = event.guild_id else {
        return;
    };
    if event
        .author
        .as_ref()
        .is_some_and(|author| author.id == ctx.cache.current_user().id)
    {
        return;
    }
    match store.role_channel(guild_id.get()).await {
        Some(channel_id) if channel_id == event.channel_id.get() => {}
        _ => return,
    }

    tracing::info!(
        "Reloading role bindings for guild {} from updated message",
        guild_id
    );
    if let Err(e) = rebuild::rebuild_guild(&ctx, directory, guild_id, event.channel_id).await {
        tracing::error!("Failed to rebuild role bindings for guild {}: {}", guild_id, e);
    }
}
