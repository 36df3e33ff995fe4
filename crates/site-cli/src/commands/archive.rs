//! Archive command: synchronize the rendered archive block into the
//! landing page.

use std::path::Path;

use colored::Colorize;
use site_content::{synchronize, unified_diff};
use site_posts::{INDEX_FILE, load_records, render_archive};

use crate::config::SiteConfig;
use crate::error::{CliError, Result};

pub fn run_archive(root: &Path, dry_run: bool, json: bool) -> Result<()> {
    let config = SiteConfig::load(root)?;
    let posts_root = config.posts_root(root);
    let index_path = posts_root.join(INDEX_FILE);
    let page_path = root.join(&config.archive.page);

    if !json {
        println!(
            "{} Synchronizing archive block into {}...",
            "=>".blue().bold(),
            config.archive.page
        );
    }

    let records = load_records(&index_path)?;
    let rendered = render_archive(&records, &config.archive_layout());
    let document = site_fs::read_text(&page_path)
        .map_err(|e| CliError::missing_input(&page_path, e.to_string()))?;

    let (updated, report) = synchronize(&document, &config.block_rule(), &rendered)?;
    let changed = updated != document;

    if !dry_run && changed {
        site_fs::write_text(&page_path, &updated)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if dry_run {
        let diff = unified_diff(
            &document,
            &updated,
            &config.archive.page,
            &format!("{} (updated)", config.archive.page),
        );
        if diff.is_empty() {
            println!(
                "{} {} is already up to date.",
                "OK".green().bold(),
                config.archive.page
            );
        } else {
            print!("{diff}");
            println!("{} No files were changed.", "DRY RUN".yellow().bold());
        }
    } else if changed {
        println!(
            "{} Archive block synchronized into {}.",
            "OK".green().bold(),
            config.archive.page
        );
    } else {
        println!(
            "{} {} is already up to date.",
            "OK".green().bold(),
            config.archive.page
        );
    }

    println!(
        "   removed: {}  malformed: {}  anchor: {}{}",
        report.removed,
        report.malformed,
        report.anchor.cyan(),
        if report.fallback { " (fallback)" } else { "" }
    );
    Ok(())
}
