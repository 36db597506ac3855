//! Dependency resolution errors

use super::KilnError;

/// Creates a missing artifact error
pub fn missing(path: impl Into<String>) -> KilnError {
    KilnError::MissingArtifact { path: path.into() }
}

/// Creates an unreadable artifact error
pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> KilnError {
    KilnError::UnreadableArtifact {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate identity error
pub fn duplicate_identity(
    name: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> KilnError {
    KilnError::DuplicateIdentity {
        name: name.into(),
        first: first.into(),
        second: second.into(),
    }
}

/// Creates an unresolved remote dependency error
pub fn unresolved_remote(coordinate: impl Into<String>) -> KilnError {
    KilnError::UnresolvedRemoteDependency {
        coordinate: coordinate.into(),
    }
}

/// Creates an invalid coordinate error
pub fn invalid_coordinate(coordinate: impl Into<String>, reason: impl Into<String>) -> KilnError {
    KilnError::InvalidCoordinate {
        coordinate: coordinate.into(),
        reason: reason.into(),
    }
}
