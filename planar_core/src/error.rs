//! Error types for dataset generation and surface rendering
//!
//! All failure paths in the crate surface as typed errors rather than
//! panics or silent NaN propagation, so degenerate parameters are caught
//! at the call site.

use std::fmt;

/// Result type alias for generation and rendering operations
pub type PlanarResult<T> = Result<T, PlanarError>;

/// Error type shared by the wave field, the sample generator, and the
/// surface renderer
#[derive(Debug, Clone, PartialEq)]
pub enum PlanarError {
    /// Invalid argument value
    InvalidParameter {
        parameter: String,
        value: String,
        constraint: String,
    },

    /// A computation whose result is undefined for the given batch
    DegenerateBatch { context: String, details: String },

    /// Empty point batch or dataset
    EmptyBatch { collection: String },

    /// Mutually exclusive layout requests given to the renderer
    ConflictingLayout { reason: String },

    /// Failure reported by the drawing backend
    Draw(String),
}

impl fmt::Display for PlanarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanarError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = '{}': must satisfy {}",
                    parameter, value, constraint
                )
            }
            PlanarError::DegenerateBatch { context, details } => {
                write!(f, "Degenerate batch in {}: {}", context, details)
            }
            PlanarError::EmptyBatch { collection } => {
                write!(f, "Empty batch: {}", collection)
            }
            PlanarError::ConflictingLayout { reason } => {
                write!(f, "Conflicting layout request: {}", reason)
            }
            PlanarError::Draw(details) => {
                write!(f, "Drawing backend failure: {}", details)
            }
        }
    }
}

impl std::error::Error for PlanarError {}

// Convenience constructors for common error patterns
impl PlanarError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        PlanarError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a degenerate batch error
    pub fn degenerate(context: impl Into<String>, details: impl Into<String>) -> Self {
        PlanarError::DegenerateBatch {
            context: context.into(),
            details: details.into(),
        }
    }

    /// Create an empty batch error
    pub fn empty_batch(collection: impl Into<String>) -> Self {
        PlanarError::EmptyBatch {
            collection: collection.into(),
        }
    }

    /// Create a conflicting layout error
    pub fn conflicting_layout(reason: impl Into<String>) -> Self {
        PlanarError::ConflictingLayout {
            reason: reason.into(),
        }
    }

    /// Create a drawing backend error
    pub fn draw(details: impl Into<String>) -> Self {
        PlanarError::Draw(details.into())
    }
}
