//! Literal substring replacement helpers.

/// Replace every occurrence of `pattern` in `text` with `replacement`.
///
/// Occurrences are located in the original string (non-overlapping, scanning
/// left to right) and applied right to left, so offsets collected up front
/// stay valid while the string is being rewritten. An empty pattern is a
/// no-op.
pub fn replace_all(text: &str, pattern: &str, replacement: &str) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }

    let starts: Vec<usize> = text.match_indices(pattern).map(|(i, _)| i).collect();

    let mut result = text.to_string();
    for &start in starts.iter().rev() {
        result.replace_range(start..start + pattern.len(), replacement);
    }

    result
}
