use serenity::all::{EmojiId, ReactionType};

use super::*;

/// Tests the key of a standard emoji reaction.
///
/// Expected: the glyph
#[test]
fn unicode_reaction_keys_on_glyph() {
    let emoji = ReactionType::Unicode("🎉".to_string());
    assert_eq!(reaction_key(&emoji), "🎉");
}

/// Tests the key of a custom emoji reaction.
///
/// The platform reports custom reaction emoji with their bare name, which is
/// already canonical.
///
/// Expected: the bare name
#[test]
fn custom_reaction_keys_on_name() {
    let emoji = ReactionType::Custom {
        animated: false,
        id: EmojiId::new(12345),
        name: Some("partyhat".to_string()),
    };
    assert_eq!(reaction_key(&emoji), "partyhat");
}

/// Tests a custom reaction whose name the platform omitted.
///
/// Expected: empty key, which matches no binding
#[test]
fn nameless_custom_reaction_matches_nothing() {
    let emoji = ReactionType::Custom {
        animated: false,
        id: EmojiId::new(12345),
        name: None,
    };
    assert_eq!(reaction_key(&emoji), "");
}
