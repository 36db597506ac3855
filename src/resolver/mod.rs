//! Dependency resolution for Kiln
//!
//! This module handles:
//! - Locating declared archives (local paths and repository coordinates)
//! - Existence and readability checks
//! - Duplicate identity detection
//! - Building the compile and runtime classpaths
//!
//! Resolution is a single pass over the entries in declaration order. It
//! reads filesystem metadata only and returns nothing on failure.

pub mod local;
pub mod validation;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::{DependencyEntry, Descriptor, RepositorySource};
use crate::domain::{Classpaths, ResolvedArtifact};
use crate::error::{Result, artifact};

/// Dependency resolver for a descriptor
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    /// Directory relative paths resolve against
    base_dir: &'a Path,

    /// Sources for coordinate entries, in lookup order
    repositories: &'a [RepositorySource],
}

impl<'a> Resolver<'a> {
    pub fn new(base_dir: &'a Path, repositories: &'a [RepositorySource]) -> Self {
        Self {
            base_dir,
            repositories,
        }
    }

    /// Resolver using a descriptor's directory and repositories
    pub fn for_descriptor(descriptor: &'a Descriptor) -> Self {
        Self::new(&descriptor.base_dir, &descriptor.repositories)
    }

    /// Resolve entries into compile and runtime classpaths
    ///
    /// Output order follows declaration order. Entries naming the same
    /// archive collapse into one, keeping the first position and the broader
    /// scope.
    ///
    /// # Errors
    ///
    /// - `MissingArtifact` / `UnreadableArtifact` for a bad local path
    /// - `UnresolvedRemoteDependency` for a coordinate no repository holds
    /// - `DuplicateIdentity` when one identifier names two different archives
    pub fn resolve(&self, entries: &[DependencyEntry]) -> Result<Classpaths> {
        let mut artifacts: Vec<ResolvedArtifact> = Vec::with_capacity(entries.len());
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut by_path: HashMap<PathBuf, usize> = HashMap::new();

        for entry in entries {
            let name = entry.identity()?;
            let located = local::locate(entry, self.repositories, self.base_dir)?;
            let path = validation::check_artifact(&located)?;

            if let Some(&index) = by_name.get(&name) {
                let existing = &mut artifacts[index];
                if existing.path != path {
                    return Err(artifact::duplicate_identity(
                        name,
                        existing.path.display().to_string(),
                        path.display().to_string(),
                    ));
                }
                tracing::debug!(%name, "collapsing repeated declaration");
                existing.scope = existing.scope.widen(entry.scope);
                continue;
            }

            if let Some(&index) = by_path.get(&path) {
                let existing = &mut artifacts[index];
                tracing::debug!(
                    %name,
                    existing = %existing.name,
                    path = %path.display(),
                    "archive already declared under another name"
                );
                existing.scope = existing.scope.widen(entry.scope);
                by_name.insert(name, index);
                continue;
            }

            tracing::debug!(%name, path = %path.display(), scope = %entry.scope, "resolved");
            by_name.insert(name.clone(), artifacts.len());
            by_path.insert(path.clone(), artifacts.len());
            artifacts.push(ResolvedArtifact {
                name,
                path,
                scope: entry.scope,
            });
        }

        let classpaths = Classpaths::from_artifacts(artifacts);
        tracing::info!(
            compile = classpaths.compile.len(),
            runtime = classpaths.runtime.len(),
            "resolution complete"
        );
        Ok(classpaths)
    }
}

/// Resolve a loaded descriptor
pub fn resolve(descriptor: &Descriptor) -> Result<Classpaths> {
    Resolver::for_descriptor(descriptor).resolve(&descriptor.dependencies)
}
