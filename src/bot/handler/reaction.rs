//! Reaction event handlers.
//!
//! Both events funnel into the role synchronizer, which owns all the
//! filtering; the handlers only carry the add/remove direction.

use serenity::all::{Context, Reaction};

use crate::data::role_channel::RoleChannelStore;
use crate::service::catalog::directory::BindingDirectory;
use crate::service::catalog::role_sync;

/// Handle a reaction being added to a message.
pub async fn handle_reaction_add(
    store: &RoleChannelStore,
    directory: &BindingDirectory,
    ctx: Context,
    reaction: Reaction,
) {
    role_sync::sync_role(&ctx, store, directory, &reaction, true).await;
}

/// Handle a reaction being removed from a message.
pub async fn handle_reaction_remove(
    store: &RoleChannelStore,
    directory: &BindingDirectory,
    ctx: Context,
    reaction: Reaction,
) {
    role_sync::sync_role(&ctx, store, directory, &reaction, false).await;
}
