//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Write `data` to a file whose parent directories may not exist yet.
///
/// An existing file is overwritten in place with no directory handling at
/// all. Otherwise the parent chain is built up one component at a time,
/// and a component that cannot be created aborts the write.
///
/// Returns the number of bytes written.
pub fn write_file_ensuring_path(path: &Path, data: &[u8]) -> Result<usize> {
    if path.exists() {
        std::fs::write(path, data)?;
        return Ok(data.len());
    }

    if let Some(parent) = path.parent() {
        let mut built = PathBuf::new();
        for component in parent.components() {
            built.push(component);
            if built.is_dir() {
                continue;
            }
            std::fs::create_dir(&built).map_err(|source| Error::DirectoryNotCreated {
                path: built.clone(),
                source,
            })?;
            tracing::debug!("Created directory {}", built.display());
        }
    }

    std::fs::write(path, data)?;
    Ok(data.len())
}

/// Delete a file if it exists.
///
/// Missing files are a silent no-op; directories are never touched.
pub fn delete_file_if_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        std::fs::remove_file(path)?;
        tracing::debug!("Deleted file {}", path.display());
    }
    Ok(())
}

/// Delete any empty subdirectories under the provided path.
///
/// Directories are pruned bottom-up: a subdirectory is removed once every
/// one of its children has been removed. The top-level `path` itself is
/// never deleted, however empty it ends up.
///
/// Returns `true` if `path` contains nothing after pruning.
pub fn prune_empty_subdirectories(path: &Path) -> Result<bool> {
    prune(path, true)
}

fn prune(path: &Path, is_root: bool) -> Result<bool> {
    let mut empty = true;

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();

        if child.is_dir() {
            if !prune(&child, false)? {
                empty = false;
            }
        } else {
            empty = false;
        }
    }

    if empty && !is_root {
        std::fs::remove_dir(path)?;
        tracing::debug!("Removed empty directory {}", path.display());
    }

    Ok(empty)
}
