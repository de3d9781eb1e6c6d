//! The `setrole` administrative command.
//!
//! Designates the channel the command is invoked in as the guild's role
//! channel. Restricted to administrators and to guild contexts; both are
//! enforced by the command's registered permissions and re-checked here,
//! since registered restrictions are a client-side default the server owner
//! can override. Setting the channel does not trigger a rebuild; the next
//! message in the channel (or the next reconnect) does.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction, Permissions,
};

use crate::data::role_channel::RoleChannelStore;
use crate::util::clip::clip_message;

pub const SETROLE_COMMAND: &str = "setrole";

/// Builds the command definition registered on ready.
pub fn setrole_command() -> CreateCommand {
    CreateCommand::new(SETROLE_COMMAND)
        .description("Designate this channel as the role catalog channel")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .dm_permission(false)
}

/// Handle an interaction event, dispatching the setrole command.
pub async fn handle_interaction(store: &RoleChannelStore, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };
    if command.data.name != SETROLE_COMMAND {
        return;
    }

    let reply = run_setrole(store, &command).await;
    let response = CreateInteractionResponseMessage::new()
        .content(clip_message(&reply))
        .ephemeral(true);
    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!("Failed to respond to {} command: {}", SETROLE_COMMAND, e);
    }
}

/// Validates the invocation context and updates the store.
///
/// Returns the user-facing reply text; rejections leave the store untouched.
async fn run_setrole(store: &RoleChannelStore, command: &CommandInteraction) -> String {
    let Some(guild_id) = command.guild_id else {
        return "Sorry, this command must be ran from within a server, not a DM!".to_string();
    };
    let is_admin = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());
    if !is_admin {
        return "Sorry, this command requires the Administrator permission.".to_string();
    }

    match store
        .set_role_channel(guild_id.get(), command.channel_id.get())
        .await
    {
        Ok(()) => {
            tracing::info!(
                "Role channel for guild {} set to {}",
                guild_id,
                command.channel_id
            );
            "Role channel set".to_string()
        }
        Err(e) => {
            tracing::error!("Failed to persist role channel for guild {}: {}", guild_id, e);
            "Failed to save the role channel configuration.".to_string()
        }
    }
}
