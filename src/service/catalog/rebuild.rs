//! Full rebuild of a guild's binding directory entry.
//!
//! A rebuild pages through the complete history of the guild's role channel,
//! parses every message, reconciles the reactions of each message that
//! declares bindings, and then swaps the assembled map into the directory as
//! one atomic replacement. Bindings for messages that have since been deleted
//! disappear simply by not being in the fresh map.

use serenity::all::{ChannelId, Context, GetMessages, GuildId, MessageId};

use crate::error::AppError;
use crate::service::catalog::directory::{BindingDirectory, GuildBindings};
use crate::service::catalog::{parser, reconcile};

/// Discord caps message history retrieval at 100 per request.
const MESSAGE_PAGE_SIZE: u8 = 100;

/// Rebuilds the binding directory entry for one guild and converges the
/// reactions of every catalog message found.
///
/// Rebuild runs are serialized process-wide; an overlapping trigger waits for
/// the in-flight run and then performs its own full rebuild, so the last
/// completed run wins. Reconciliation failures are isolated per message;
/// only a failed history or channel fetch aborts the rebuild (the directory
/// then keeps its previous snapshot until the next trigger).
///
/// # Arguments
/// - `ctx` - Discord context
/// - `directory` - Directory receiving the rebuilt snapshot
/// - `guild_id` - Guild being rebuilt
/// - `catalog_channel_id` - The guild's designated role channel
pub async fn rebuild_guild(
    ctx: &Context,
    directory: &BindingDirectory,
    guild_id: GuildId,
    catalog_channel_id: ChannelId,
) -> Result<(), AppError> {
    let _rebuild = directory.lock_rebuild().await;

    // The designation may outlive the channel; a stale entry clears the
    // guild's bindings rather than erroring.
    let channels = guild_id.channels(&ctx.http).await?;
    if !channels.contains_key(&catalog_channel_id) {
        tracing::warn!(
            "Role channel {} no longer belongs to guild {}",
            catalog_channel_id,
            guild_id
        );
        directory.replace_guild(guild_id, GuildBindings::new()).await;
        return Ok(());
    }

    let mut fresh = GuildBindings::new();
    let mut before: Option<MessageId> = None;

    loop {
        let mut page = GetMessages::new().limit(MESSAGE_PAGE_SIZE);
        if let Some(oldest) = before {
            page = page.before(oldest);
        }
        let batch = catalog_channel_id.messages(&ctx.http, page).await?;
        // Batches arrive newest first; the last message anchors the next page.
        let Some(oldest) = batch.last().map(|message| message.id) else {
            break;
        };

        for message in &batch {
            let bindings = parser::parse_bindings(&message.content);
            // Messages without bindings are ordinary chatter; their reactions
            // are left alone.
            if bindings.is_empty() {
                continue;
            }

            for binding in bindings.iter() {
                tracing::info!(
                    "{} => {} on message {} in guild {}",
                    binding.emoji_key,
                    binding.role_ref,
                    message.id,
                    guild_id
                );
            }

            reconcile::reconcile_message(ctx, message, &bindings).await;
            fresh.insert(message.id, bindings);
        }

        if batch.len() < MESSAGE_PAGE_SIZE as usize {
            break;
        }
        before = Some(oldest);
    }

    directory.replace_guild(guild_id, fresh).await;
    Ok(())
}
