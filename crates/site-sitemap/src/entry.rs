//! Sitemap entries and priority rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry of the generated sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// The absolute URL of the page.
    pub loc: String,
    /// Generation timestamp, stamped on every entry.
    pub lastmod: DateTime<Utc>,
    /// Crawl priority (0.0 to 1.0).
    pub priority: f32,
}

/// Build sitemap entries from relative page paths.
///
/// The root `index.html` becomes the site URL itself with top priority;
/// pages under the posts directory rank above the remaining pages.
pub fn build_entries(
    pages: &[String],
    base_url: &str,
    posts_dir: &str,
    generated_at: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    pages
        .iter()
        .map(|page| SitemapEntry {
            loc: page_url(base, page),
            lastmod: generated_at,
            priority: page_priority(page, posts_dir),
        })
        .collect()
}

fn page_url(base: &str, page: &str) -> String {
    if page == "index.html" {
        format!("{base}/")
    } else {
        format!("{base}/{page}")
    }
}

fn page_priority(page: &str, posts_dir: &str) -> f32 {
    if page == "index.html" {
        1.0
    } else if page.starts_with(&format!("{posts_dir}/")) {
        0.9
    } else {
        0.8
    }
}
