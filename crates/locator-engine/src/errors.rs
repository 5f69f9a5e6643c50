//! Error types for locator resolution

use thiserror::Error;

/// Locator error enumeration
///
/// Matching failures are not errors; they are reported as
/// [`Resolution::NotFound`](crate::types::Resolution::NotFound). Only
/// `find_first` turns a failed match into [`LocatorError::NoSuchElement`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// Locator text could not be parsed
    #[error("Invalid semantic locator at offset {position}: {message}")]
    InvalidLocator { position: usize, message: String },

    /// No element matched the locator
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// A tree capability broke its contract (e.g. unordered role lookup)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LocatorError {
    pub fn invalid(position: usize, message: impl Into<String>) -> Self {
        Self::InvalidLocator {
            position,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if the error reports a locator that matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, LocatorError::NoSuchElement(_))
    }

    /// Check if the error was caused by the caller's input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LocatorError::InvalidLocator { .. } | LocatorError::NoSuchElement(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_locator_message() {
        let err = LocatorError::invalid(3, "expected a role");
        assert_eq!(
            err.to_string(),
            "Invalid semantic locator at offset 3: expected a role"
        );
        assert!(err.is_user_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_internal_is_not_user_error() {
        let err = LocatorError::internal("role lookup out of order");
        assert!(!err.is_user_error());
    }
}
