//! Error types for the fskit library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    // File system errors
    #[error("Directory \"{}\" was not created", .path.display())]
    DirectoryNotCreated {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
