//! fskit - small filesystem helpers
//!
//! This library provides a handful of independent, stateless filesystem
//! helpers plus one string helper for normalizing image filenames.
//!
//! # Features
//!
//! - Recursive directory listing with optional substring filtering
//! - Writing files while creating missing parent directories
//! - Conditional file deletion (missing files are a no-op)
//! - Recursive pruning of empty subdirectories
//! - WordPress upload filename normalization
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use fskit::{scan_dir_recursive, write_file_ensuring_path};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     write_file_ensuring_path(Path::new("out/reports/today.txt"), b"report body")?;
//!
//!     for file in scan_dir_recursive(Path::new("out"), Some(".txt")) {
//!         println!("{}", file.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fs;

// Re-exports for convenience
pub use error::{Error, Result};
pub use fs::{
    delete_file_if_exists, prune_empty_subdirectories, scan_dir_recursive,
    wordpress_upload_base_name, write_file_ensuring_path,
};
