//! Forward-slash path handling for URLs and JSON values

use std::path::{Component, Path};

/// Compute the path of `file` relative to `root`, joined with forward
/// slashes regardless of platform.
///
/// Returns `None` when `file` is not located under `root`.
pub fn relative_url_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

/// Check whether a file name carries one of the given extensions,
/// case-insensitively. Extensions are given without the leading dot.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_ascii_lowercase();
            extensions.iter().any(|candidate| *candidate == ext)
        })
        .unwrap_or(false)
}
