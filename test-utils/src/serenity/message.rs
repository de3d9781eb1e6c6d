//! Test factory for creating Serenity Message objects.
//!
//! This module provides factory functions for creating mock Serenity `Message`
//! structs for testing purposes. These factories create valid Message objects
//! by deserializing JSON, simulating what Discord's API would return when
//! fetching channel history.

use serenity::all::Message;

/// Creates a test Serenity Message with content and an existing reaction set.
///
/// Each entry in `reactions` is `(name, custom_emoji_id)`: pass `None` for a
/// standard emoji (the name is the literal glyph, e.g. `"🎉"`), or `Some(id)`
/// for a custom emoji (the name is the bare emoji name, e.g. `"partyhat"`).
/// Every reaction is reported with a count of 1 and not authored by the
/// current user, matching a message other users have reacted to.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - ID of the channel the message lives in
/// - `content` - Raw message text
/// - `reactions` - Existing reactions as `(name, custom_emoji_id)` pairs
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::create_test_message;
///
/// // A catalog message with one standard and one custom reaction
/// let message = create_test_message(
///     1,
///     200,
///     "🎉 <@&555> - party role",
///     &[("🎉", None), ("partyhat", Some(12345))],
/// );
/// assert_eq!(message.reactions.len(), 2);
/// ```
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    content: &str,
    reactions: &[(&str, Option<u64>)],
) -> Message {
    let reactions: Vec<serde_json::Value> = reactions
        .iter()
        .map(|(name, custom_id)| {
            let emoji = match custom_id {
                Some(id) => serde_json::json!({
                    "animated": false,
                    "id": id.to_string(),
                    "name": name,
                }),
                None => serde_json::json!({
                    "id": null,
                    "name": name,
                }),
            };
            serde_json::json!({
                "count": 1,
                "count_details": { "burst": 0, "normal": 1 },
                "me": false,
                "me_burst": false,
                "emoji": emoji,
                "burst_colors": [],
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": "900000000000000001",
            "username": "catalog-author",
            "discriminator": "0001",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": reactions,
        "nonce": null,
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "application_id": null,
        "message_reference": null,
        "flags": 0,
        "referenced_message": null,
        "thread": null,
        "components": [],
        "sticker_items": [],
        "position": null,
        "role_subscription_data": null,
        "guild_id": null,
        "member": null,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
