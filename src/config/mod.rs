//! Configuration file handling for Kiln
//!
//! This module contains data structures for the `kiln.yaml` build descriptor:
//! project identity, repository sources and dependency entries.

pub mod dependency;
pub mod descriptor;
pub mod repository;

// Re-export commonly used types
pub use dependency::DependencyEntry;
pub use descriptor::{DESCRIPTOR_FILE, Descriptor};
pub use repository::RepositorySource;
