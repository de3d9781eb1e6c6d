//! Reaction reconciliation.
//!
//! Given a catalog message and its freshly parsed bindings, make the
//! message's live reaction set match the binding keys: reactions the catalog
//! does not declare are removed (for every user that applied them), and
//! bindings with no reaction yet get the bot's own reaction added. Removal
//! runs before addition so a miswritten key is cleaned up and re-added
//! deterministically.
//!
//! Removing a stray reaction here is cleanup of legacy emoji, not a user
//! event; it never revokes a role. Role changes flow only through the
//! reaction event path in `role_sync`.

use serenity::all::{Context, Message, ReactionType, UserId};

use crate::service::catalog::parser::{reaction_key, MessageBindings};

/// Discord caps reaction-user listing at 100 per request.
const REACTION_USER_PAGE_SIZE: u8 = 100;

/// One reaction mutation needed to converge a message.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOp {
    /// Remove every user's reaction of this emoji; no binding declares it.
    ClearReaction { emoji: ReactionType },
    /// Add the bot's own reaction for a binding not yet represented.
    AddReaction { emoji_token: String },
}

/// Computes the minimal set of reaction mutations for one message.
///
/// Pure planning half of the reconciler: removal ops for every reaction emoji
/// whose canonical key has no binding, then addition ops for every binding
/// whose key is absent from the existing reaction emojis, in binding order.
/// Planning on a converged message yields no ops.
pub fn plan_reconcile(message: &Message, bindings: &MessageBindings) -> Vec<ReconcileOp> {
    let mut ops = Vec::new();

    for reaction in &message.reactions {
        if !bindings.contains_key(&reaction_key(&reaction.reaction_type)) {
            ops.push(ReconcileOp::ClearReaction {
                emoji: reaction.reaction_type.clone(),
            });
        }
    }

    let existing: Vec<String> = message
        .reactions
        .iter()
        .map(|reaction| reaction_key(&reaction.reaction_type))
        .collect();
    for binding in bindings.iter() {
        if !existing.iter().any(|key| *key == binding.emoji_key) {
            ops.push(ReconcileOp::AddReaction {
                emoji_token: binding.emoji_token.clone(),
            });
        }
    }

    ops
}

/// Plans and applies the reaction mutations for one message.
///
/// Each platform call failure is caught and logged at its own call site;
/// one rejected operation never aborts the remaining ones.
pub async fn reconcile_message(ctx: &Context, message: &Message, bindings: &MessageBindings) {
    for op in plan_reconcile(message, bindings) {
        match op {
            ReconcileOp::ClearReaction { emoji } => clear_reaction(ctx, message, emoji).await,
            ReconcileOp::AddReaction { emoji_token } => {
                add_reaction(ctx, message, &emoji_token).await
            }
        }
    }
}

/// Removes one emoji's reactions user by user.
///
/// The platform provides no bulk-clear for a single emoji here, so the users
/// are paged through and each removal is its own call.
async fn clear_reaction(ctx: &Context, message: &Message, emoji: ReactionType) {
    let mut after: Option<UserId> = None;

    loop {
        let users = match message
            .reaction_users(
                &ctx.http,
                emoji.clone(),
                Some(REACTION_USER_PAGE_SIZE),
                after,
            )
            .await
        {
            Ok(users) => users,
            Err(e) => {
                tracing::error!(
                    "Failed to list users of reaction {} on message {}: {}",
                    emoji,
                    message.id,
                    e
                );
                return;
            }
        };

        for user in &users {
            tracing::info!(
                "Removing stray reaction {} by {} on message {}",
                emoji,
                user.name,
                message.id
            );
            if let Err(e) = message
                .channel_id
                .delete_reaction(&ctx.http, message.id, Some(user.id), emoji.clone())
                .await
            {
                tracing::error!(
                    "Failed to remove reaction {} by {} on message {}: {}",
                    emoji,
                    user.id,
                    message.id,
                    e
                );
            }
        }

        if users.len() < REACTION_USER_PAGE_SIZE as usize {
            return;
        }
        after = users.last().map(|user| user.id);
    }
}

/// Adds the bot's own reaction for a binding.
///
/// The written token is resolved to a platform emoji reference; a token that
/// cannot be resolved is logged and skipped, leaving that one binding
/// unsynchronized until the catalog message is corrected.
async fn add_reaction(ctx: &Context, message: &Message, emoji_token: &str) {
    let emoji = match ReactionType::try_from(emoji_token) {
        Ok(emoji) => emoji,
        Err(e) => {
            tracing::warn!("Cannot add reaction {}: {}", emoji_token, e);
            return;
        }
    };

    if let Err(e) = message
        .channel_id
        .create_reaction(&ctx.http, message.id, emoji)
        .await
    {
        tracing::error!(
            "Failed to add reaction {} to message {}: {}",
            emoji_token,
            message.id,
            e
        );
    }
}
