//! Error types for the collect crate.

use thiserror::Error;

use crate::collection::Shape;

/// Errors that can occur when a collection has the wrong shape for an operation.
///
/// Most operations in this crate are infallible: "no result" is reported with
/// `None`. An error is only produced when the shape of the input could not be
/// checked at compile time, such as a dynamic JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectError {
    /// The operation needs one collection shape but received another value.
    #[error("expected a {expected}, got {actual}")]
    WrongShape {
        expected: Shape,
        actual: &'static str,
    },

    /// The value is neither a sequence nor a mapping.
    #[error("expected a sequence or mapping, got {actual}")]
    NotACollection { actual: &'static str },
}

impl CollectError {
    pub(crate) fn wrong_shape(expected: Shape, actual: &'static str) -> Self {
        tracing::debug!(%expected, actual, "collection shape mismatch");
        CollectError::WrongShape { expected, actual }
    }

    #[cfg_attr(not(feature = "json"), allow(dead_code))]
    pub(crate) fn not_a_collection(actual: &'static str) -> Self {
        tracing::debug!(actual, "value is not a collection");
        CollectError::NotACollection { actual }
    }
}

/// Result type for collect operations.
pub type Result<T> = std::result::Result<T, CollectError>;
