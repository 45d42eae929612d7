//! Shared utility functions.

/// Take at most `max_chars` characters from the start of `s`.
///
/// Counts Unicode scalar values, not bytes, so the cut never splits a
/// character. If the string is shorter, it is returned unchanged.
pub fn char_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
