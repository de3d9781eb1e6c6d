use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, GuildId, Interaction, Message, MessageUpdateEvent, Reaction, Ready,
};
use serenity::async_trait;

use crate::data::role_channel::RoleChannelStore;
use crate::service::catalog::directory::BindingDirectory;

pub mod command;
pub mod message;
pub mod reaction;
pub mod ready;

/// Discord bot event handler.
///
/// Owns the shared state every event consults: the per-guild role channel
/// designations and the binding directory.
pub struct Handler {
    pub store: Arc<RoleChannelStore>,
    pub directory: Arc<BindingDirectory>,
}

impl Handler {
    pub fn new(store: Arc<RoleChannelStore>) -> Self {
        Self {
            store,
            directory: Arc::new(BindingDirectory::new()),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called once the cache has received data for all guilds
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.store, &self.directory, ctx, guilds).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.store, &self.directory, ctx, message).await;
    }

    /// Called when a message is edited
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(
            &self.store,
            &self.directory,
            ctx,
            old_if_available,
            new,
            event,
        )
        .await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.store, &self.directory, ctx, add_reaction).await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(&self.store, &self.directory, ctx, removed_reaction).await;
    }

    /// Called when a slash command or other interaction is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        command::handle_interaction(&self.store, ctx, interaction).await;
    }
}
