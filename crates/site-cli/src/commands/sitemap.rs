//! Sitemap command: enumerate HTML pages and write the sitemap.

use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use site_sitemap::{build_entries, collect_pages, render_sitemap};

use crate::config::SiteConfig;
use crate::error::Result;

pub fn run_sitemap(root: &Path, dry_run: bool) -> Result<()> {
    let config = SiteConfig::load(root)?;

    if !dry_run {
        println!(
            "{} Generating sitemap for {}...",
            "=>".blue().bold(),
            config.base_url
        );
    }

    let pages = collect_pages(root, &config.sitemap.ignore)?;
    let entries = build_entries(&pages, &config.base_url, &config.posts_dir, Utc::now());
    let xml = render_sitemap(&entries)?;

    if dry_run {
        print!("{xml}");
        return Ok(());
    }

    let output_path = root.join(&config.sitemap.output);
    site_fs::write_text(&output_path, &xml)?;

    println!(
        "{} {} page(s) written to {}.",
        "OK".green().bold(),
        entries.len(),
        output_path.display()
    );
    Ok(())
}
