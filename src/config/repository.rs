//! Repository sources consulted for coordinate dependencies

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;
use crate::error::{Result, config};

/// A package source declared under `repositories:`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RepositorySource {
    /// Directory holding `<name>-<version>.jar` files
    Flat {
        /// Path relative to the descriptor directory
        path: PathBuf,
    },
    /// Directory in Maven layout
    Maven {
        /// Path relative to the descriptor directory
        path: PathBuf,
    },
    /// Network repository; recorded but never contacted
    Remote { url: String },
}

impl RepositorySource {
    /// Validate repository source
    pub fn validate(&self) -> Result<()> {
        match self {
            RepositorySource::Flat { path } | RepositorySource::Maven { path }
                if path.as_os_str().is_empty() =>
            {
                Err(config::invalid("Repository path cannot be empty"))
            }
            RepositorySource::Remote { url } if url.trim().is_empty() => {
                Err(config::invalid("Repository url cannot be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Find the archive for `coordinate` in this source
    ///
    /// Only local layouts are searched; remote sources always return `None`.
    pub fn locate(&self, coordinate: &Coordinate, base_dir: &Path) -> Option<PathBuf> {
        let candidate = match self {
            RepositorySource::Flat { path } => base_dir.join(path).join(coordinate.file_name()),
            RepositorySource::Maven { path } => base_dir.join(path).join(coordinate.maven_path()),
            RepositorySource::Remote { url } => {
                tracing::warn!(%url, %coordinate, "remote repositories are not consulted");
                return None;
            }
        };

        tracing::debug!(candidate = %candidate.display(), "probing repository");
        candidate.is_file().then_some(candidate)
    }

    /// Short description for display
    pub fn describe(&self) -> String {
        match self {
            RepositorySource::Flat { path } => format!("flat {}", path.display()),
            RepositorySource::Maven { path } => format!("maven {}", path.display()),
            RepositorySource::Remote { url } => format!("remote {url}"),
        }
    }
}
