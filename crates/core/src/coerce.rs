//! Coercion of textual form values into booleans.
//!
//! Boolean-like fields arrive as strings. A fixed truthy set maps to
//! `true`; every other value maps to `false`. There is no tri-state: a
//! field present with an unrecognized value still coerces to `false`, and
//! only *absence* from the payload leaves the stored value untouched.

/// Values treated as `true`, compared case-insensitively.
const TRUTHY: &[&str] = &["1", "T", "Y", "YES", "TRUE", "ON"];

/// Coerce a textual boolean field value.
pub fn coerce_bool(value: &str) -> bool {
    let upper = value.trim().to_ascii_uppercase();
    TRUTHY.contains(&upper.as_str())
}
