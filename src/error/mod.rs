//! Error types and handling for Kiln
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`artifact`]: Dependency resolution errors
//! - [`config`]: Descriptor errors
//! - [`fs`]: File system errors
//! - [`provision`]: Provisioning errors

pub mod artifact;
pub mod config;
pub mod fs;
pub mod provision;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Kiln operations
#[derive(Error, Diagnostic, Debug)]
pub enum KilnError {
    // Artifact errors
    #[error("Missing artifact: {path}")]
    #[diagnostic(
        code(kiln::artifact::missing),
        help("Check that the declared path exists relative to the descriptor directory")
    )]
    MissingArtifact { path: String },

    #[error("Artifact is not readable: {path}: {reason}")]
    #[diagnostic(code(kiln::artifact::unreadable))]
    UnreadableArtifact { path: String, reason: String },

    #[error("Duplicate identity '{name}': declared as both {first} and {second}")]
    #[diagnostic(
        code(kiln::artifact::duplicate_identity),
        help("Give one of the entries an explicit, distinct 'name'")
    )]
    DuplicateIdentity {
        name: String,
        first: String,
        second: String,
    },

    #[error("Unresolved remote dependency: {coordinate}")]
    #[diagnostic(
        code(kiln::artifact::unresolved_remote),
        help("Add a local 'flat' or 'maven' repository that holds it, or declare a 'path'")
    )]
    UnresolvedRemoteDependency { coordinate: String },

    #[error("Invalid coordinate '{coordinate}': {reason}")]
    #[diagnostic(
        code(kiln::artifact::invalid_coordinate),
        help("Coordinates use the form group:name:version")
    )]
    InvalidCoordinate { coordinate: String, reason: String },

    // Descriptor errors
    #[error("Descriptor not found: {path}")]
    #[diagnostic(
        code(kiln::config::not_found),
        help("Create a kiln.yaml or pass one with --file")
    )]
    DescriptorNotFound { path: String },

    #[error("Failed to parse descriptor: {path}: {reason}")]
    #[diagnostic(code(kiln::config::parse_failed))]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Invalid descriptor: {message}")]
    #[diagnostic(code(kiln::config::invalid))]
    DescriptorInvalid { message: String },

    // Provisioning errors
    #[error("Conflicting archives for '{file_name}': {first} and {second}")]
    #[diagnostic(
        code(kiln::provision::conflict),
        help("Two runtime archives share a file name and cannot be placed in one directory")
    )]
    ProvisionConflict {
        file_name: String,
        first: String,
        second: String,
    },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(kiln::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(kiln::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(kiln::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for KilnError {
    fn from(err: std::io::Error) -> Self {
        KilnError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for KilnError {
    fn from(err: serde_yaml::Error) -> Self {
        KilnError::DescriptorParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for KilnError {
    fn from(err: serde_json::Error) -> Self {
        KilnError::IoError {
            message: format!("Failed to encode JSON: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, KilnError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = artifact::missing("libs/a.jar");
        assert_eq!(err.to_string(), "Missing artifact: libs/a.jar");
    }

    #[test]
    fn test_error_code() {
        let err = artifact::missing("libs/a.jar");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("kiln::artifact::missing".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kiln_err: KilnError = io_err.into();
        assert!(matches!(kiln_err, KilnError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: yaml: content: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let yaml_err = parse_result.unwrap_err();
        let kiln_err: KilnError = yaml_err.into();
        assert!(matches!(kiln_err, KilnError::DescriptorParseFailed { .. }));
    }

    test_error_contains!(
        test_duplicate_identity,
        artifact::duplicate_identity("jlib", "/a/jlib.jar", "/b/jlib.jar"),
        "Duplicate identity 'jlib'",
        "/a/jlib.jar",
        "/b/jlib.jar"
    );

    test_error_contains!(
        test_unresolved_remote,
        artifact::unresolved_remote("org.lwjgl:lwjgl:3.3.1"),
        "Unresolved remote dependency",
        "org.lwjgl:lwjgl:3.3.1"
    );

    test_error_contains!(
        test_invalid_coordinate,
        artifact::invalid_coordinate("org.lwjgl", "expected three parts"),
        "Invalid coordinate 'org.lwjgl'"
    );

    test_error_contains!(
        test_unreadable,
        artifact::unreadable("/a.jar", "permission denied"),
        "not readable",
        "permission denied"
    );

    test_error_contains!(
        test_descriptor_not_found,
        config::not_found("/p/kiln.yaml"),
        "Descriptor not found"
    );

    test_error_contains!(
        test_descriptor_parse_failed,
        config::parse_failed("/p/kiln.yaml", "bad indent"),
        "Failed to parse descriptor",
        "bad indent"
    );

    test_error_contains!(
        test_descriptor_invalid,
        config::invalid("group must not be empty"),
        "Invalid descriptor"
    );

    test_error_contains!(
        test_provision_conflict,
        provision::conflict("a.jar", "/x/a.jar", "/y/a.jar"),
        "Conflicting archives for 'a.jar'"
    );

    test_error_contains!(
        test_file_write_failed,
        fs::write_failed("/out/a.jar", "disk full"),
        "Failed to write file",
        "disk full"
    );

    #[test]
    fn test_io_error_constructor() {
        let err = fs::io_error("some error");
        assert!(matches!(err, KilnError::IoError { .. }));
        assert!(err.to_string().contains("IO error"));
    }
}
