//! Provisioning errors

use super::KilnError;

/// Creates a provision conflict error
pub fn conflict(
    file_name: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> KilnError {
    KilnError::ProvisionConflict {
        file_name: file_name.into(),
        first: first.into(),
        second: second.into(),
    }
}
