//! Site tree walking.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Names skipped during the walk, as directories and as files.
pub const DEFAULT_IGNORES: [&str; 3] = [".git", "tools", ".ref"];

/// Collect the relative forward-slash paths of every HTML page under
/// `root`, sorted. Ignored names (defaults plus `extra_ignores`) are
/// skipped whether they are directories or files.
pub fn collect_pages(root: &Path, extra_ignores: &[String]) -> Result<Vec<String>> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry.file_name(), extra_ignores));

    let mut pages = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| Error::io(root, e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !site_fs::has_extension(entry.path(), &["html"]) {
            continue;
        }
        if let Some(page) = site_fs::relative_url_path(root, entry.path()) {
            pages.push(page);
        }
    }
    pages.sort();

    debug!(root = %root.display(), pages = pages.len(), "collected site pages");
    Ok(pages)
}

fn is_ignored(name: &std::ffi::OsStr, extra_ignores: &[String]) -> bool {
    let name = name.to_string_lossy();
    DEFAULT_IGNORES.iter().any(|ignored| *ignored == name)
        || extra_ignores.iter().any(|ignored| *ignored == name)
}
