//! Site configuration parsing for site.toml files.
//!
//! The configuration file is optional. A missing file yields the defaults,
//! while a malformed file is reported as a missing-input failure so the run
//! stops before touching any artifact.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use site_content::BlockRule;
use site_posts::ArchiveLayout;
use tracing::debug;

use crate::error::{CliError, Result};

/// File name of the optional configuration file, looked up at the site root.
pub const CONFIG_FILE: &str = "site.toml";

fn default_base_url() -> String {
    "https://example.com".to_string()
}

fn default_posts_dir() -> String {
    "blog-posts".to_string()
}

fn default_archive_page() -> String {
    "index.html".to_string()
}

fn default_archive_marker() -> String {
    "<!-- Archive Section -->".to_string()
}

fn default_archive_anchors() -> Vec<String> {
    vec!["<!-- Footer -->".to_string(), "</body>".to_string()]
}

fn default_archive_container() -> String {
    "div".to_string()
}

fn default_archive_heading() -> String {
    "Archive".to_string()
}

fn default_sitemap_output() -> String {
    "sitemap.xml".to_string()
}

/// Root configuration parsed from site.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Absolute URL the site is served from, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory under the site root that holds one folder per post
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// Archive block settings
    #[serde(default)]
    pub archive: ArchiveSection,

    /// Sitemap generation settings
    #[serde(default)]
    pub sitemap: SitemapSection,
}

/// Archive block section
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArchiveSection {
    /// Page the archive block is embedded in, relative to the site root
    #[serde(default = "default_archive_page")]
    pub page: String,

    /// Comment line that opens the managed block
    #[serde(default = "default_archive_marker")]
    pub marker: String,

    /// Insertion anchors, highest priority first
    #[serde(default = "default_archive_anchors")]
    pub anchors: Vec<String>,

    /// Container element the block scan balances
    #[serde(default = "default_archive_container")]
    pub container: String,

    /// Heading rendered at the top of the archive block
    #[serde(default = "default_archive_heading")]
    pub heading: String,
}

impl Default for ArchiveSection {
    fn default() -> Self {
        Self {
            page: default_archive_page(),
            marker: default_archive_marker(),
            anchors: default_archive_anchors(),
            container: default_archive_container(),
            heading: default_archive_heading(),
        }
    }
}

/// Sitemap section
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SitemapSection {
    /// Output file, relative to the site root
    #[serde(default = "default_sitemap_output")]
    pub output: String,

    /// Extra file or directory names to skip, on top of the built-in set
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            output: default_sitemap_output(),
            ignore: Vec::new(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            posts_dir: default_posts_dir(),
            archive: ArchiveSection::default(),
            sitemap: SitemapSection::default(),
        }
    }
}

impl SiteConfig {
    /// Load the configuration for a site checkout.
    ///
    /// A missing site.toml is not an error. Unreadable or malformed files
    /// are, since continuing with defaults would silently ignore operator
    /// intent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            debug!(root = %root.display(), "no site.toml, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)
            .map_err(|e| CliError::missing_input(&path, e.to_string()))?;
        let config: SiteConfig =
            toml::from_str(&text).map_err(|e| CliError::missing_input(&path, e.to_string()))?;
        debug!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }

    /// Directory that holds the post folders.
    pub fn posts_root(&self, root: &Path) -> PathBuf {
        root.join(&self.posts_dir)
    }

    /// Block rule for the archive region of the landing page.
    pub fn block_rule(&self) -> BlockRule {
        BlockRule::new(self.archive.marker.clone(), self.archive.anchors.clone())
            .with_container(self.archive.container.clone())
    }

    /// Layout passed to the archive renderer.
    pub fn archive_layout(&self) -> ArchiveLayout {
        ArchiveLayout {
            marker: self.archive.marker.clone(),
            heading: self.archive.heading.clone(),
            posts_dir: self.posts_dir.clone(),
        }
    }
}
