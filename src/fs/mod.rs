//! Filesystem module.
//!
//! Provides:
//! - Recursive directory listing
//! - Path and directory management
//! - Filename manipulation

pub mod naming;
pub mod paths;
pub mod scan;

pub use naming::wordpress_upload_base_name;
pub use paths::{delete_file_if_exists, prune_empty_subdirectories, write_file_ensuring_path};
pub use scan::scan_dir_recursive;
