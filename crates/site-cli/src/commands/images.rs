//! Images command: write per-folder image listings.

use std::path::Path;

use colored::Colorize;
use site_posts::write_image_listings;

use crate::config::SiteConfig;
use crate::error::Result;

pub fn run_images(root: &Path) -> Result<()> {
    let config = SiteConfig::load(root)?;
    let posts_root = config.posts_root(root);

    println!(
        "{} Writing image listings under {}...",
        "=>".blue().bold(),
        posts_root.display()
    );

    let written = write_image_listings(&posts_root)?;
    for (folder, count) in &written {
        println!("   {} {} ({} images)", "-".green(), folder.cyan(), count);
    }

    println!(
        "{} {} folder(s) updated.",
        "OK".green().bold(),
        written.len()
    );
    Ok(())
}
