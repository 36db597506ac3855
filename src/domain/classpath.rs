//! Resolved artifacts and the classpaths built from them

use std::ffi::OsString;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Scope;
use crate::error::{Result, fs};

/// A dependency after resolution: a logical name bound to an absolute archive path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArtifact {
    /// Logical identifier
    pub name: String,

    /// Absolute path of the archive
    pub path: PathBuf,

    /// Effective scope after collapsing duplicate declarations
    pub scope: Scope,
}

/// Output of a resolution pass
///
/// `compile` is always a subsequence of `runtime`, and neither holds the same
/// path twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classpaths {
    pub compile: Vec<PathBuf>,
    pub runtime: Vec<PathBuf>,

    /// Every artifact in declaration order
    pub artifacts: Vec<ResolvedArtifact>,
}

impl Classpaths {
    /// Build both classpaths from artifacts already deduplicated by path
    pub fn from_artifacts(artifacts: Vec<ResolvedArtifact>) -> Self {
        let compile = artifacts
            .iter()
            .filter(|a| a.scope.on_compile_classpath())
            .map(|a| a.path.clone())
            .collect();
        let runtime = artifacts.iter().map(|a| a.path.clone()).collect();

        Self {
            compile,
            runtime,
            artifacts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Compile classpath joined with the platform path separator
    pub fn compile_string(&self) -> Result<OsString> {
        join(&self.compile)
    }

    /// Runtime classpath joined with the platform path separator
    pub fn runtime_string(&self) -> Result<OsString> {
        join(&self.runtime)
    }
}

fn join(paths: &[PathBuf]) -> Result<OsString> {
    std::env::join_paths(paths)
        .map_err(|e| fs::io_error(format!("Cannot join classpath entries: {e}")))
}
