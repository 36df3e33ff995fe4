//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Maintenance toolkit for a static blog site.
///
/// Keeps the derived artifacts of a site checkout in sync with its post
/// folders: per-folder image listings, the post index, the archive block
/// embedded in the landing page, and the sitemap.
///
/// Examples:
///   site refresh                 Rebuild every derived artifact
///   site archive --dry-run       Preview the archive update as a diff
///   site sitemap --root ./site   Generate sitemap.xml for another checkout
#[derive(Debug, Parser)]
#[command(name = "site", version, about = "Static site maintenance toolkit")]
pub struct Cli {
    /// Root directory of the site checkout
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write an images.json listing into every post folder
    ///
    /// Examples:
    ///   site images
    ///   site images --root ./site
    Images,

    /// Scan post folders and rebuild the post index
    ///
    /// Examples:
    ///   site index
    ///   site index --verbose
    Index,

    /// Synchronize the rendered archive block into the landing page
    ///
    /// Examples:
    ///   site archive
    ///   site archive --dry-run
    ///   site archive --json
    Archive {
        /// Print the resulting change as a unified diff without writing
        #[arg(long)]
        dry_run: bool,

        /// Print the synchronization report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the sitemap for every HTML page under the root
    ///
    /// Examples:
    ///   site sitemap
    ///   site sitemap --dry-run
    Sitemap {
        /// Print the sitemap to stdout without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Run images, index, archive and sitemap in order
    ///
    /// Examples:
    ///   site refresh
    Refresh,
}
