//! Location of declared archives
//!
//! Local path entries resolve against the descriptor directory; coordinate
//! entries are looked up in the repository sources, in order.

use std::path::{Path, PathBuf};

use crate::config::{DependencyEntry, RepositorySource};
use crate::error::{Result, artifact};

/// Join a declared path onto the descriptor directory
pub fn absolutize(path: &Path, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Find the archive an entry refers to, before validation
///
/// # Errors
///
/// `UnresolvedRemoteDependency` when a coordinate entry is not held by any
/// local repository.
pub fn locate(
    entry: &DependencyEntry,
    repositories: &[RepositorySource],
    base_dir: &Path,
) -> Result<PathBuf> {
    if let Some(path) = &entry.path {
        return Ok(absolutize(path, base_dir));
    }

    let Some(coordinate) = entry.parsed_coordinate()? else {
        return Err(artifact::unresolved_remote(entry.identity()?));
    };

    repositories
        .iter()
        .find_map(|repository| repository.locate(&coordinate, base_dir))
        .ok_or_else(|| artifact::unresolved_remote(coordinate.to_string()))
}
