/// Longest message text the bot will send as-is; Discord rejects anything
/// near the 2000 character limit once markdown expansion is accounted for.
const MAX_MESSAGE_LEN: usize = 1950;

const TRUNCATION_MARKER: &str = " (truncated)";

/// Clips outbound message text to the platform limit.
///
/// Text at or under the limit passes through unchanged; longer text is cut at
/// the limit and suffixed with a truncation marker.
pub fn clip_message(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(MAX_MESSAGE_LEN).collect();
    clipped.push_str(TRUNCATION_MARKER);
    clipped
}
