//! Discord bot integration.
//!
//! The bot subscribes to the gateway events that can change role catalog
//! state: message creation and edits in a guild's role channel trigger a full
//! directory rebuild, reaction adds and removals drive role membership, and
//! the `setrole` slash command designates the role channel.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel availability
//! - `GUILD_MESSAGES` - Message created/updated events in guild channels
//! - `GUILD_MESSAGE_REACTIONS` - Reaction added/removed events
//! - `MESSAGE_CONTENT` - Access to message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal, or catalog messages arrive with
//! empty text and parse to nothing.

pub mod handler;
pub mod start;
