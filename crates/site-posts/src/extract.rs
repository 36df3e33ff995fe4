//! Post page scraping.
//!
//! Pulls the index fields out of a hand-authored post page with CSS
//! selectors. Every field has a default so a half-written page still
//! yields a usable record.

use std::path::Path;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{PostRecord, compare_folders};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".post-title h1").expect("Invalid title selector"));

static CATEGORY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".post-category").expect("Invalid category selector"));

static SUMMARY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".post-content-text p").expect("Invalid summary selector"));

const SUMMARY_WORD_LIMIT: usize = 30;
const THUMBNAIL_EXTENSIONS: [&str; 4] = ["jpg", "png", "jpeg", "webp"];

/// Fields scraped from one post page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub category: String,
    pub summary: String,
}

/// Scrape the index fields from post page HTML.
pub fn extract_page(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let title = select_text(&document, &TITLE_SELECTOR)
        .unwrap_or_else(|| "Untitled".to_string());
    let category = select_text(&document, &CATEGORY_SELECTOR)
        .map(|text| text.to_lowercase())
        .unwrap_or_else(|| "explore".to_string());
    let summary = select_text(&document, &SUMMARY_SELECTOR)
        .map(|text| truncate_words(&text, SUMMARY_WORD_LIMIT))
        .unwrap_or_else(|| "No summary available.".to_string());

    PageContent {
        title,
        category,
        summary,
    }
}

/// Build the record for one post folder.
///
/// Returns `None` for folders without any HTML page; those are asset
/// folders, not posts.
pub fn extract_post(posts_root: &Path, folder: &str) -> Result<Option<PostRecord>> {
    let folder_path = posts_root.join(folder);
    let Some(page) = first_html_page(&folder_path)? else {
        return Ok(None);
    };

    let page_path = folder_path.join(&page);
    let html =
        std::fs::read_to_string(&page_path).map_err(|e| Error::io(&page_path, e))?;
    let content = extract_page(&html);

    let thumbnail = find_thumbnail(&folder_path)?
        .map(|file| format!("{folder}/{file}"))
        .unwrap_or_default();

    Ok(Some(PostRecord {
        title: content.title,
        summary: content.summary,
        folder: folder.to_string(),
        thumbnail,
        category: content.category,
    }))
}

/// Build the full post index in display order.
pub fn build_index(posts_root: &Path) -> Result<Vec<PostRecord>> {
    if !posts_root.is_dir() {
        return Err(Error::missing_input(
            posts_root,
            "posts directory not found",
        ));
    }

    let mut folders = site_fs::sorted_dir_names(posts_root)?;
    folders.sort_by(|a, b| compare_folders(a, b));

    let mut records = Vec::new();
    for folder in folders {
        match extract_post(posts_root, &folder)? {
            Some(record) => {
                debug!(folder = %record.folder, title = %record.title, "indexed post");
                records.push(record);
            }
            None => debug!(folder = %folder, "skipped folder without a page"),
        }
    }
    Ok(records)
}

fn select_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(|element| {
        let raw: String = element.text().collect();
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    })
}

fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > limit {
        format!("{}...", words[..limit].join(" "))
    } else {
        text.to_string()
    }
}

fn first_html_page(folder: &Path) -> Result<Option<String>> {
    let names = site_fs::sorted_file_names(folder)?;
    Ok(names
        .into_iter()
        .find(|name| site_fs::has_extension(Path::new(name), &["html"])))
}

/// Look up the post's thumbnail image: any `thumbnail*` file first
/// (`thumbnail2.jpg` counts), the `image1.*` header image as fallback.
/// Only the thumbnail extensions are accepted, for either name.
fn find_thumbnail(folder: &Path) -> Result<Option<String>> {
    let names = site_fs::sorted_file_names(folder)?;

    let primary = names.iter().find(|name| is_thumbnail_file(name, "thumbnail"));
    if let Some(name) = primary {
        return Ok(Some(name.clone()));
    }

    Ok(names
        .into_iter()
        .find(|name| is_thumbnail_file(name, "image1.")))
}

fn is_thumbnail_file(name: &str, prefix: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.starts_with(prefix)
        && THUMBNAIL_EXTENSIONS
            .iter()
            .any(|ext| lower.ends_with(&format!(".{ext}")))
}
