//! Test factory for creating Serenity Role objects.
//!
//! This module provides factory functions for creating mock Serenity `Role`
//! structs for testing purposes. These factories create valid Role objects by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::Role;

/// Creates a test Serenity Role with the given ID and name.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, zero color, zero permissions). The role's mention string
/// is derived from the ID, so `create_test_role(555, "party")` yields a role
/// whose mention renders as `<@&555>`.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
