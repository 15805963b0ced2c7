//! Optional version-prefix stripping applied before grammar validation

/// Strips a single leading `v` when `allow_v_prefix` is set.
///
/// Only the lowercase letter is recognised, and never more than one character
/// is removed: `"vv1.0.0"` becomes `"v1.0.0"`, which the parser then rejects.
pub fn normalize(raw: &str, allow_v_prefix: bool) -> &str {
    if allow_v_prefix {
        raw.strip_prefix('v').unwrap_or(raw)
    } else {
        raw
    }
}
