//! Command implementations.

pub mod archive;
pub mod images;
pub mod index;
pub mod refresh;
pub mod sitemap;

pub use archive::run_archive;
pub use images::run_images;
pub use index::run_index;
pub use refresh::run_refresh;
pub use sitemap::run_sitemap;
