//! Index command: rebuild the post index from the post folders.

use std::path::Path;

use colored::Colorize;
use site_posts::{INDEX_FILE, build_index, write_records};

use crate::config::SiteConfig;
use crate::error::Result;

pub fn run_index(root: &Path) -> Result<()> {
    let config = SiteConfig::load(root)?;
    let posts_root = config.posts_root(root);

    println!(
        "{} Indexing posts under {}...",
        "=>".blue().bold(),
        posts_root.display()
    );

    let records = build_index(&posts_root)?;
    for record in &records {
        println!("   {} {} {}", "-".green(), record.folder.cyan(), record.title.dimmed());
    }

    let index_path = posts_root.join(INDEX_FILE);
    write_records(&index_path, &records)?;

    println!(
        "{} {} post(s) indexed into {}.",
        "OK".green().bold(),
        records.len(),
        index_path.display()
    );
    Ok(())
}
