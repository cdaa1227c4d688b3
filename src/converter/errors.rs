//! Custom error types for coordinate conversion

use std::fmt;
use std::io;

use crate::coordinate::FormatTag;

/// Conversion error types
#[derive(Debug)]
pub enum ConversionError {
    /// Text does not match the grammar of the declared format
    FormatError {
        /// Format whose grammar was applied
        format: FormatTag,
        /// The offending token (or the whole input when no token could be isolated)
        token: String,
        /// What was wrong with it
        reason: String,
    },
    /// Numeric value outside the valid geodetic or projection domain
    DomainError(String),
    /// No conversion path between two format tags
    UnsupportedConversion {
        from: FormatTag,
        to: FormatTag,
        reason: String,
    },
    /// I/O error (history log, batch files)
    IoError(io::Error),
    /// History record could not be (de)serialized
    SerializationError(String),
    /// Generic error with message
    GenericError(String),
}

impl ConversionError {
    /// Shorthand for a `FormatError`
    pub fn format(format: FormatTag, token: &str, reason: impl Into<String>) -> Self {
        ConversionError::FormatError {
            format,
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for an `UnsupportedConversion`
    pub fn unsupported(from: FormatTag, to: FormatTag, reason: impl Into<String>) -> Self {
        ConversionError::UnsupportedConversion {
            from,
            to,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::FormatError { format, token, reason } => {
                write!(f, "Invalid {} input '{}': {}", format, token, reason)
            },
            ConversionError::DomainError(msg) => write!(f, "Domain error: {}", msg),
            ConversionError::UnsupportedConversion { from, to, reason } => {
                write!(f, "Unsupported conversion from {} to {}: {}", from, to, reason)
            },
            ConversionError::IoError(e) => write!(f, "I/O error: {}", e),
            ConversionError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ConversionError::GenericError(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversionError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConversionError {
    fn from(error: io::Error) -> Self {
        ConversionError::IoError(error)
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(error: serde_json::Error) -> Self {
        ConversionError::SerializationError(error.to_string())
    }
}

impl From<String> for ConversionError {
    fn from(msg: String) -> Self {
        ConversionError::GenericError(msg)
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
