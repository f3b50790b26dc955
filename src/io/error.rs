//! Error types for template loading and generation

use crate::pipeline::mirror::MirrorAxis;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Template file could not be opened or read
    SourceUnavailable {
        /// Path to the template file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Template file is corrupt or in an unsupported format
    DecodeFailure {
        /// Path to the template file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Mirroring was required along an axis with an odd extent
    ///
    /// Only raised when a caller asks for a strict mirror; otherwise the
    /// mismatch is reported on the generation result.
    MirrorDimensionMismatch {
        /// Axis that could not be mirrored completely
        axis: MirrorAxis,
        /// Odd extent along that axis
        extent: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { path, source } => {
                write!(f, "Failed to open template '{}': {source}", path.display())
            }
            Self::DecodeFailure { path, source } => {
                write!(f, "Failed to decode template '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::MirrorDimensionMismatch { axis, extent } => {
                write!(f, "Cannot mirror {axis}: extent {extent} is odd")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable { source, .. } | Self::FileSystem { source, .. } => {
                Some(source)
            }
            Self::DecodeFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
