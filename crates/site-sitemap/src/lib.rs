//! Sitemap generation for the site maintenance toolkit
//!
//! Walks the site tree for HTML pages, maps them to URLs with crawl
//! priorities, and renders the sitemap XML. Writing the result to disk is
//! the caller's job.

pub mod entry;
pub mod error;
pub mod render;
pub mod walk;

pub use entry::{SitemapEntry, build_entries};
pub use error::{Error, Result};
pub use render::{SITEMAP_NAMESPACE, render_sitemap};
pub use walk::{DEFAULT_IGNORES, collect_pages};

use std::path::Path;

use chrono::{DateTime, Utc};

/// Walk `root` and render its sitemap in one step.
pub fn generate_sitemap(
    root: &Path,
    base_url: &str,
    posts_dir: &str,
    extra_ignores: &[String],
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let pages = collect_pages(root, extra_ignores)?;
    let entries = build_entries(&pages, base_url, posts_dir, generated_at);
    render_sitemap(&entries)
}
