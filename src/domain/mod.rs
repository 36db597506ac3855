//! Domain models for Kiln
//!
//! This module contains pure domain objects: project identity, dependency
//! scopes, repository coordinates and resolved classpaths.

pub mod classpath;
pub mod coordinate;
pub mod scope;

use serde::Serialize;

pub use classpath::{Classpaths, ResolvedArtifact};
pub use coordinate::Coordinate;
pub use scope::Scope;

/// Project identity declared in the descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIdentity {
    pub group: String,
    pub version: String,
}

impl std::fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.group, self.version)
    }
}
