//! Moderation state constants and parsing.
//!
//! Events carry a single-letter moderation state controlling public
//! visibility. New events start unmoderated; "deleting" an event is a
//! transition to rejected, never a row removal.

/// Event awaits a moderator decision. The state every new event starts in.
pub const MODERATION_UNMODERATED: &str = "U";

/// Event was accepted and is publicly visible (subject to `list_online`).
pub const MODERATION_ACCEPTED: &str = "A";

/// Event was rejected. Terminal as far as the API is concerned; the row
/// stays resolvable by direct id for privileged access.
pub const MODERATION_REJECTED: &str = "R";

/// All valid moderation letters.
pub const VALID_MODERATION_STATES: &[&str] = &[
    MODERATION_UNMODERATED,
    MODERATION_ACCEPTED,
    MODERATION_REJECTED,
];

/// Normalize a client-supplied moderation value to its canonical letter.
///
/// Accepts a single case-insensitive letter in {U, A, R}. Anything else
/// yields `None`; callers ignore unrecognized values rather than failing
/// (the API's long-standing tolerant-ignore contract).
pub fn parse_moderation(value: &str) -> Option<&'static str> {
    match value.trim().to_ascii_uppercase().as_str() {
        "U" => Some(MODERATION_UNMODERATED),
        "A" => Some(MODERATION_ACCEPTED),
        "R" => Some(MODERATION_REJECTED),
        _ => None,
    }
}
