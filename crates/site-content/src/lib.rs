//! Document model and managed-block synchronizer
//!
//! The synchronizer keeps one generated HTML region (the managed block)
//! up to date inside a hand-authored page. It is a pure text transform:
//! remove every existing instance of the block, insert the freshly
//! rendered one before the best matching anchor, verify exactly one
//! instance remains.

pub mod diff;
pub mod document;
pub mod error;
pub mod scan;
pub mod sync;

pub use diff::unified_diff;
pub use document::Document;
pub use error::{Error, Result};
pub use scan::{BlockInstance, BlockRule, find_instances};
pub use sync::{SyncReport, synchronize};
