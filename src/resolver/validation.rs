//! Validation utilities for resolver
//!
//! Every resolved path must name an existing, readable regular file.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{Result, artifact};

/// Check that `path` is a readable archive and return its canonical form
///
/// # Errors
///
/// `MissingArtifact` if nothing exists at `path`, `UnreadableArtifact` if it
/// is not a regular file or cannot be opened.
pub fn check_artifact(path: &Path) -> Result<PathBuf> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(artifact::missing(path.display().to_string()));
        }
        Err(e) => return Err(artifact::unreadable(path.display().to_string(), e.to_string())),
    };

    if !metadata.is_file() {
        return Err(artifact::unreadable(
            path.display().to_string(),
            "not a regular file",
        ));
    }

    File::open(path).map_err(|e| artifact::unreadable(path.display().to_string(), e.to_string()))?;

    dunce::canonicalize(path)
        .map_err(|e| artifact::unreadable(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KilnError;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file() {
        let temp = TempDir::new().unwrap();
        let jar = temp.path().join("a.jar");
        std::fs::write(&jar, b"PK").unwrap();

        let checked = check_artifact(&jar).unwrap();
        assert!(checked.is_absolute());
        assert_eq!(checked, dunce::canonicalize(&jar).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = check_artifact(&temp.path().join("missing.jar")).unwrap_err();
        assert!(matches!(err, KilnError::MissingArtifact { .. }));
        assert!(err.to_string().contains("missing.jar"));
    }

    #[test]
    fn test_directory_is_not_an_archive() {
        let temp = TempDir::new().unwrap();
        let err = check_artifact(temp.path()).unwrap_err();
        assert!(matches!(err, KilnError::UnreadableArtifact { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let jar = temp.path().join("locked.jar");
        std::fs::write(&jar, b"PK").unwrap();
        std::fs::set_permissions(&jar, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Root can open anything; only assert when the open really fails
        if File::open(&jar).is_err() {
            let err = check_artifact(&jar).unwrap_err();
            assert!(matches!(err, KilnError::UnreadableArtifact { .. }));
        }

        std::fs::set_permissions(&jar, std::fs::Permissions::from_mode(0o644)).unwrap();
    }
}
