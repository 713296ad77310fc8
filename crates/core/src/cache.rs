//! Cache key construction for the listing cache.
//!
//! Keys are derived from the entity kind plus the query parameters, with
//! parameters sorted by name so the same logical query always maps to the
//! same key regardless of argument order.

/// Build a deterministic cache key from an entity kind and query parameters.
///
/// Empty parameter lists collapse to `"<kind>:all"`, the key for the
/// unfiltered listing.
pub fn cache_key(kind: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return format!("{kind}:all");
    }

    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort();

    let mut key = String::from(kind);
    for (name, value) in sorted {
        key.push(':');
        key.push_str(name);
        key.push('=');
        key.push_str(value);
    }
    key
}
