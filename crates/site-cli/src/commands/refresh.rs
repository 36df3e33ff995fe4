//! Refresh command: rebuild every derived artifact in dependency order.

use std::path::Path;

use crate::commands::{run_archive, run_images, run_index, run_sitemap};
use crate::error::Result;

/// Run the full pipeline. Each stage feeds the next, so the run stops at
/// the first failure and leaves later artifacts untouched.
pub fn run_refresh(root: &Path) -> Result<()> {
    run_images(root)?;
    run_index(root)?;
    run_archive(root, false, false)?;
    run_sitemap(root, false)
}
