//! Catalog message parsing.
//!
//! Parsing is pure and total: any text input yields a (possibly empty)
//! binding table, and lines that do not match the expected shape are skipped
//! silently rather than reported.

use serenity::all::ReactionType;

/// One emoji-to-role association declared by a catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Canonical emoji identifier used as the lookup key (colon and ID
    /// segments stripped for custom emoji, the literal glyph otherwise).
    pub emoji_key: String,
    /// The emoji exactly as written in the message, kept so a custom emoji
    /// can be resolved back to a platform reference when adding reactions.
    pub emoji_token: String,
    /// The role mention token (`<@&ID>`) exactly as written. Resolution to a
    /// live role happens lazily, by comparing against each role's own mention
    /// string, so a catalog line may name a role that does not exist yet.
    pub role_ref: String,
}

/// The ordered binding table of one catalog message.
///
/// Insertion order follows line order; a duplicate emoji key keeps the first
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBindings {
    bindings: Vec<Binding>,
}

impl MessageBindings {
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn contains_key(&self, emoji_key: &str) -> bool {
        self.get(emoji_key).is_some()
    }

    pub fn get(&self, emoji_key: &str) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|binding| binding.emoji_key == emoji_key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }
}

/// Parses a catalog message's text into its binding table.
///
/// A line qualifies only if, after trimming leading whitespace, it contains a
/// space, a `<@&` role mention opener, and a `>` after the opener. Everything
/// before the first space is the emoji token; the `<@&...>` span is the role
/// token; anything after the closing `>` is a comment and ignored.
///
/// # Arguments
/// - `content` - Raw multi-line message text
///
/// # Returns
/// - `MessageBindings` - Zero or more bindings, in line order, first
///   occurrence winning on duplicate emoji keys
pub fn parse_bindings(content: &str) -> MessageBindings {
    let mut bindings = MessageBindings::default();

    for line in content.lines() {
        // VALID LINE FORMAT: <emoji> <@&role> - Ignored text
        let line = line.trim_start();
        let Some(first_space) = line.find(' ') else {
            continue;
        };
        let Some(open) = line.find("<@&") else {
            continue;
        };
        let Some(close) = line[open..].find('>').map(|offset| open + offset) else {
            continue;
        };

        let emoji_token = &line[..first_space];
        let role_ref = &line[open..=close];
        let emoji_key = clip_emoji_name(emoji_token);

        if bindings.contains_key(&emoji_key) {
            continue;
        }
        bindings.bindings.push(Binding {
            emoji_key,
            emoji_token: emoji_token.to_string(),
            role_ref: role_ref.to_string(),
        });
    }

    bindings
}

/// Canonicalizes an emoji token to its binding key.
///
/// Custom emoji are written with colon delimiters and an ID segment
/// (`<:partyhat:12345>`); the key is the text between the first and last
/// colon. Tokens without two colons (standard emoji glyphs) pass through
/// unchanged.
pub fn clip_emoji_name(token: &str) -> String {
    if let (Some(first), Some(last)) = (token.find(':'), token.rfind(':')) {
        if last > first {
            return token[first + 1..last].to_string();
        }
    }
    token.to_string()
}

/// Returns the canonical binding key for a live reaction emoji.
pub fn reaction_key(emoji: &ReactionType) -> String {
    match emoji {
        ReactionType::Unicode(glyph) => clip_emoji_name(glyph),
        ReactionType::Custom {
            name: Some(name), ..
        } => clip_emoji_name(name),
        _ => String::new(),
    }
}
