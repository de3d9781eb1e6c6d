//! Role membership synchronization from reaction events.
//!
//! A reaction add or remove on a bound catalog message drives the acting
//! user's membership in the bound role. The operation is idempotent: granting
//! an already-held role and revoking an absent one are observed no-ops, so
//! duplicate or out-of-order event delivery converges on the state of the
//! most recently processed event.

use std::collections::HashMap;

use serenity::all::{Context, GuildId, Mentionable, Reaction, Role, RoleId};

use crate::data::role_channel::RoleChannelStore;
use crate::service::catalog::directory::BindingDirectory;
use crate::service::catalog::parser::reaction_key;

/// Outcome of planning one reaction event against live role state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    /// The user lacks the role and reacted: grant it.
    Grant(RoleId),
    /// The user holds the role and un-reacted: revoke it.
    Revoke(RoleId),
    /// Reaction added but the role is already held; nothing to do.
    AlreadyHeld(RoleId),
    /// Reaction removed but the role is not held; nothing to do.
    NotHeld(RoleId),
}

/// Resolves a role mention token against the guild's roles and decides the
/// membership change for one reaction event.
///
/// Pure planning half of the synchronizer. The binding stores the mention
/// token as written; it is matched here by string equality against each live
/// role's own mention representation, first match winning.
///
/// # Arguments
/// - `role_ref` - Role mention token from the binding (`<@&ID>`)
/// - `guild_roles` - The guild's current role table
/// - `member_roles` - Role IDs the acting user currently holds
/// - `is_add` - Whether the reaction was added (true) or removed (false)
///
/// # Returns
/// - `Some(RoleChange)` - The change (or observed no-op) to perform
/// - `None` - No role's mention matches `role_ref` (resolution miss)
pub fn plan_role_change(
    role_ref: &str,
    guild_roles: &HashMap<RoleId, Role>,
    member_roles: &[RoleId],
    is_add: bool,
) -> Option<RoleChange> {
    let role = guild_roles
        .values()
        .find(|role| role.mention().to_string() == role_ref)?;
    let has_role = member_roles.contains(&role.id);

    Some(match (is_add, has_role) {
        (true, false) => RoleChange::Grant(role.id),
        (true, true) => RoleChange::AlreadyHeld(role.id),
        (false, true) => RoleChange::Revoke(role.id),
        (false, false) => RoleChange::NotHeld(role.id),
    })
}

/// Handles one reaction add/remove event end to end.
///
/// Silently ignored when the event is outside a guild, the acting user is the
/// bot itself, the message has no entry in the current directory snapshot,
/// the channel is not the guild's designated role channel, or the emoji has
/// no binding on that message. Failures past the guards are logged and
/// dropped; the next event self-heals.
pub async fn sync_role(
    ctx: &Context,
    store: &RoleChannelStore,
    directory: &BindingDirectory,
    reaction: &Reaction,
    is_add: bool,
) {
    // The bot should not react to its own reactions, only to role emotes on
    // bound messages in the designated channel, and only for users.
    let Some(guild_id) = reaction.guild_id else {
        return;
    };
    let Some(user_id) = reaction.user_id else {
        return;
    };
    if user_id == ctx.cache.current_user().id {
        return;
    }
    let Some(bindings) = directory.guild(guild_id).await else {
        return;
    };
    let Some(message_bindings) = bindings.get(&reaction.message_id) else {
        return;
    };
    match store.role_channel(guild_id.get()).await {
        Some(channel_id) if channel_id == reaction.channel_id.get() => {}
        _ => return,
    }
    let emoji_key = reaction_key(&reaction.emoji);
    let Some(binding) = message_bindings.get(&emoji_key) else {
        return;
    };

    let member = match guild_id.member(&ctx.http, user_id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::error!(
                "Failed to fetch member {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
            return;
        }
    };
    let guild_roles = match fetch_guild_roles(ctx, guild_id).await {
        Ok(roles) => roles,
        Err(e) => {
            tracing::error!("Failed to fetch roles for guild {}: {}", guild_id, e);
            return;
        }
    };

    match plan_role_change(&binding.role_ref, &guild_roles, &member.roles, is_add) {
        Some(RoleChange::Grant(role_id)) => {
            if let Err(e) = ctx
                .http
                .add_member_role(guild_id, user_id, role_id, Some("role catalog reaction"))
                .await
            {
                tracing::error!("Failed to grant role {} to {}: {}", role_id, user_id, e);
            } else {
                tracing::info!(
                    "{} (ID: {}) added to role {}",
                    member.user.name,
                    user_id,
                    role_id
                );
            }
        }
        Some(RoleChange::Revoke(role_id)) => {
            if let Err(e) = ctx
                .http
                .remove_member_role(guild_id, user_id, role_id, Some("role catalog reaction"))
                .await
            {
                tracing::error!("Failed to revoke role {} from {}: {}", role_id, user_id, e);
            } else {
                tracing::info!(
                    "{} (ID: {}) removed from role {}",
                    member.user.name,
                    user_id,
                    role_id
                );
            }
        }
        Some(RoleChange::AlreadyHeld(role_id)) => {
            tracing::info!(
                "{} (ID: {}) already has role {}",
                member.user.name,
                user_id,
                role_id
            );
        }
        Some(RoleChange::NotHeld(role_id)) => {
            tracing::info!(
                "{} (ID: {}) does not have role {}",
                member.user.name,
                user_id,
                role_id
            );
        }
        None => {
            tracing::warn!(
                "No role in guild {} has mention {} (bound to {})",
                guild_id,
                binding.role_ref,
                emoji_key
            );
        }
    }
}

/// Reads the guild's role table from the cache, falling back to the HTTP API
/// when the guild is not cached.
async fn fetch_guild_roles(
    ctx: &Context,
    guild_id: GuildId,
) -> Result<HashMap<RoleId, Role>, serenity::Error> {
    let cached = ctx.cache.guild(guild_id).map(|guild| guild.roles.clone());
    match cached {
        Some(roles) => Ok(roles),
        None => guild_id.roles(&ctx.http).await,
    }
}
