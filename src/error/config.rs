//! Descriptor errors

use super::KilnError;

/// Creates a descriptor not found error
pub fn not_found(path: impl Into<String>) -> KilnError {
    KilnError::DescriptorNotFound { path: path.into() }
}

/// Creates a descriptor parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> KilnError {
    KilnError::DescriptorParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid descriptor error
pub fn invalid(message: impl Into<String>) -> KilnError {
    KilnError::DescriptorInvalid {
        message: message.into(),
    }
}
