//! Build descriptor (kiln.yaml) data structures
//!
//! The descriptor declares the project identity, an ordered list of
//! repository sources and an ordered list of dependency entries:
//!
//! ```yaml
//! group: io.github.heathensoft
//! version: 1.0-SNAPSHOT
//! repositories: []
//! dependencies:
//!   - path: libs/heathensoft-jlib-0.5.0.jar
//!     scope: implementation
//!   - path: libs/natives/lwjgl-natives-windows.jar
//!     scope: runtime-only
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{DependencyEntry, RepositorySource};
use crate::domain::ProjectIdentity;
use crate::error::{Result, config, fs};

/// Descriptor filename
pub const DESCRIPTOR_FILE: &str = "kiln.yaml";

/// Build descriptor from kiln.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Descriptor {
    /// Project group
    pub group: String,

    /// Project version (free text)
    pub version: String,

    /// Sources for dependencies without a local path
    #[serde(default)]
    pub repositories: Vec<RepositorySource>,

    /// Dependency entries in declaration order
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Descriptor {
    /// Create a new descriptor rooted at `base_dir`
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            repositories: Vec::new(),
            dependencies: Vec::new(),
            base_dir: base_dir.into(),
        }
    }

    /// Parse descriptor from YAML string
    ///
    /// The base directory is left empty (relative to the current directory).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let descriptor: Self = serde_yaml::from_str(yaml)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Load and validate a descriptor file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

        let mut descriptor: Self = serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        descriptor.validate()?;

        let absolute = dunce::canonicalize(path)?;
        descriptor.base_dir = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        tracing::debug!(
            path = %absolute.display(),
            dependencies = descriptor.dependencies.len(),
            repositories = descriptor.repositories.len(),
            "loaded descriptor"
        );

        Ok(descriptor)
    }

    /// Find the nearest kiln.yaml, walking up from `start`
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(DESCRIPTOR_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Validate descriptor
    pub fn validate(&self) -> Result<()> {
        if self.group.trim().is_empty() {
            return Err(config::invalid("'group' must not be empty"));
        }
        if self.version.trim().is_empty() {
            return Err(config::invalid("'version' must not be empty"));
        }

        for repository in &self.repositories {
            repository.validate()?;
        }

        for dep in &self.dependencies {
            dep.validate()?;
        }

        Ok(())
    }

    pub fn identity(&self) -> ProjectIdentity {
        ProjectIdentity {
            group: self.group.clone(),
            version: self.version.clone(),
        }
    }
}
