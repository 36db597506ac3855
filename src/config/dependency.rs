//! `DependencyEntry` struct for the build descriptor
//!
//! A dependency declaration in kiln.yaml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, Scope};
use crate::error::{Result, config};

/// A dependency declaration in kiln.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyEntry {
    /// Logical identifier (defaults to the coordinate or the file stem)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Local archive path, relative to the descriptor directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Repository coordinate (`group:name:version`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<String>,

    /// Classpaths this dependency belongs to
    pub scope: Scope,
}

impl DependencyEntry {
    /// Create a new local file dependency
    pub fn file(path: impl Into<PathBuf>, scope: Scope) -> Self {
        Self {
            name: None,
            path: Some(path.into()),
            coordinate: None,
            scope,
        }
    }

    /// Create a new repository dependency
    pub fn remote(coordinate: impl Into<String>, scope: Scope) -> Self {
        Self {
            name: None,
            path: None,
            coordinate: Some(coordinate.into()),
            scope,
        }
    }

    /// Set an explicit logical identifier
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validate dependency
    pub fn validate(&self) -> Result<()> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(config::invalid("Dependency name cannot be empty"));
        }

        match (&self.path, &self.coordinate) {
            (Some(_), Some(_)) => Err(config::invalid(format!(
                "Dependency '{}' must not specify both 'path' and 'coordinate'",
                self.describe()
            ))),
            (None, None) => Err(config::invalid(
                "Dependency must have either 'path' or 'coordinate' specified",
            )),
            (Some(path), None) if path.as_os_str().is_empty() => {
                Err(config::invalid("Dependency path cannot be empty"))
            }
            (None, Some(_)) => self.parsed_coordinate().map(|_| ()),
            (Some(_), None) => Ok(()),
        }
    }

    /// Parse the coordinate, if this is a repository dependency
    pub fn parsed_coordinate(&self) -> Result<Option<Coordinate>> {
        self.coordinate
            .as_deref()
            .map(str::parse::<Coordinate>)
            .transpose()
    }

    /// Logical identifier used for duplicate detection
    ///
    /// Explicit name first, then the coordinate without its version, then the
    /// archive file stem.
    pub fn identity(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.trim().to_string());
        }
        if let Some(coordinate) = self.parsed_coordinate()? {
            return Ok(coordinate.identity());
        }
        Ok(self
            .path
            .as_deref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default())
    }

    fn describe(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.coordinate.clone())
            .or_else(|| self.path.as_ref().map(|p| p.display().to_string()))
            .unwrap_or_default()
    }
}
