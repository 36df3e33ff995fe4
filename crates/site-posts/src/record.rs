//! Post records and their ordering.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File name of the post index, written at the posts root.
pub const INDEX_FILE: &str = "meta.json";

/// One entry of the post index.
///
/// Field order matches the serialized index layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub summary: String,
    /// Name of the post folder under the posts root.
    pub folder: String,
    /// Thumbnail path relative to the posts root, or empty when the post
    /// has none.
    pub thumbnail: String,
    pub category: String,
}

/// Folders named `post<N>` carry a release number.
static NUMBERED_FOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^post([0-9]+)$").expect("Invalid numbered folder regex"));

fn post_number(folder: &str) -> Option<u64> {
    let captures = NUMBERED_FOLDER.captures(folder)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Order post folders for the index: numbered posts first, newest (highest
/// number) leading; everything else after, alphabetically.
pub fn compare_folders(a: &str, b: &str) -> Ordering {
    match (post_number(a), post_number(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort records into index order.
pub fn sort_records(records: &mut [PostRecord]) {
    records.sort_by(|a, b| compare_folders(&a.folder, &b.folder));
}

/// Load the post index from disk.
///
/// An absent or unparsable index is a missing input and stops the run.
pub fn load_records(path: &Path) -> Result<Vec<PostRecord>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::missing_input(path, e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| Error::missing_input(path, e.to_string()))
}

/// Write the post index, pretty-printed, atomically.
pub fn write_records(path: &Path, records: &[PostRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    site_fs::write_text(path, &json)?;
    Ok(())
}
