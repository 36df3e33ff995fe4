//! Filesystem primitives for the site maintenance toolkit
//!
//! Provides atomic, lock-guarded writes and forward-slash path helpers.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{read_text, sorted_dir_names, sorted_file_names, write_atomic, write_text};
pub use path::{has_extension, relative_url_path};
