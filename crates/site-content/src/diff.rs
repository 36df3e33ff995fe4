//! Unified diff rendering for dry-run previews

use similar::TextDiff;

/// Render a unified diff between two document versions.
///
/// Returns an empty string when the versions are identical.
pub fn unified_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    if old == new {
        return String::new();
    }
    let diff = TextDiff::from_lines(old, new);
    diff.unified_diff()
        .context_radius(3)
        .header(old_label, new_label)
        .to_string()
}
