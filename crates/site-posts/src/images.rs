//! Per-post image listings.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// File name of the listing written into each post folder.
pub const IMAGE_LISTING_FILE: &str = "images.json";

/// List the image files in one folder, sorted.
pub fn list_images(folder: &Path) -> Result<Vec<String>> {
    let names = site_fs::sorted_file_names(folder)?;
    Ok(names
        .into_iter()
        .filter(|name| site_fs::has_extension(Path::new(name), &IMAGE_EXTENSIONS))
        .collect())
}

/// Write an `images.json` listing into every post folder.
///
/// Folders without images get an empty array, so pages can always fetch
/// the listing. Returns `(folder, image count)` pairs in folder order.
pub fn write_image_listings(posts_root: &Path) -> Result<Vec<(String, usize)>> {
    if !posts_root.is_dir() {
        return Err(Error::missing_input(
            posts_root,
            "posts directory not found",
        ));
    }

    let folders = site_fs::sorted_dir_names(posts_root)?;
    let mut written = Vec::with_capacity(folders.len());
    for folder in folders {
        let folder_path = posts_root.join(&folder);
        let images = list_images(&folder_path)?;
        let json = serde_json::to_string_pretty(&images)?;
        site_fs::write_text(&folder_path.join(IMAGE_LISTING_FILE), &json)?;

        debug!(folder = %folder, images = images.len(), "wrote image listing");
        written.push((folder, images.len()));
    }
    Ok(written)
}
