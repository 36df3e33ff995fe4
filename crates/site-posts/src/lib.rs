//! Post indexing for the site maintenance toolkit
//!
//! Scrapes hand-authored post pages into an ordered JSON index, lists
//! per-post images, and renders the archive block consumed by the
//! synchronizer.

pub mod archive;
pub mod error;
pub mod extract;
pub mod images;
pub mod record;

pub use archive::{ArchiveLayout, render_archive};
pub use error::{Error, Result};
pub use extract::{PageContent, build_index, extract_page, extract_post};
pub use images::{IMAGE_LISTING_FILE, list_images, write_image_listings};
pub use record::{INDEX_FILE, PostRecord, compare_folders, load_records, sort_records, write_records};
