//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::{DESCRIPTOR_FILE, Descriptor};
use crate::error::{Result, config, fs};

/// Locate and load the descriptor
///
/// If a file is provided, use it. Otherwise, search upwards from the
/// current directory for the nearest kiln.yaml.
pub fn load_descriptor(file: Option<PathBuf>) -> Result<Descriptor> {
    let path = match file {
        Some(path) => path,
        None => find_descriptor(&current_dir()?)?,
    };
    Descriptor::load(&path)
}

fn find_descriptor(start: &Path) -> Result<PathBuf> {
    Descriptor::find_from(start)
        .ok_or_else(|| config::not_found(start.join(DESCRIPTOR_FILE).display().to_string()))
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "group: g\nversion: '1'\n").unwrap();

        let descriptor = load_descriptor(Some(path)).unwrap();
        assert_eq!(descriptor.group, "g");
    }

    #[test]
    fn test_find_descriptor_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(DESCRIPTOR_FILE), "group: g\nversion: '1'\n").unwrap();
        let nested = temp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_descriptor(&nested).unwrap();
        assert_eq!(found, temp.path().join(DESCRIPTOR_FILE));
    }
}
