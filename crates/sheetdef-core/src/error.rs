//! Error types for sheetdef operations.
//!
//! One taxonomy covers the whole pipeline: workbook loading, input
//! validation, code generation, and output writing. Schema extraction itself
//! is deliberately infallible (malformed sheets reduce the field list rather
//! than failing), so nothing here represents a "bad sheet".

use thiserror::Error;

/// Result type alias for sheetdef operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for loading, generation, and output writing.
///
/// # Examples
///
/// ```
/// use sheetdef_core::Error;
///
/// let err = Error::ValidationError {
///     field: "origin name".to_string(),
///     reason: "must not be empty".to_string(),
/// };
/// assert!(err.is_validation_error());
/// assert_eq!(
///     err.to_string(),
///     "validation failed for origin name: must not be empty"
/// );
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The workbook file does not exist.
    #[error("workbook not found: {path}")]
    WorkbookNotFound {
        /// Path that was looked up.
        path: String,
    },

    /// The input file extension is not a readable spreadsheet format.
    #[error("unsupported workbook format '{extension}' (expected: xlsx, xlsm, xls, or ods)")]
    UnsupportedFormat {
        /// Extension of the rejected file, lower-cased; empty when the path
        /// had none.
        extension: String,
    },

    /// The workbook could not be opened or parsed.
    #[error("failed to read workbook '{path}': {message}")]
    WorkbookRead {
        /// Path of the workbook being read.
        path: String,
        /// Description of the failure.
        message: String,
        /// Underlying reader error, when available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An input value failed validation.
    #[error("validation failed for {field}: {reason}")]
    ValidationError {
        /// Name of the rejected input.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Rendering the generated source failed.
    #[error("code generation failed: {message}")]
    GenerationError {
        /// Description of the failure.
        message: String,
        /// Underlying template error, when available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing the generated output failed. The generated text itself is
    /// unaffected and can be retried against a different destination.
    #[error("failed to write output '{path}': {source}")]
    WriteError {
        /// Destination path of the attempted write.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A command-line argument was invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a workbook-not-found error.
    #[must_use]
    pub const fn is_workbook_not_found(&self) -> bool {
        matches!(self, Self::WorkbookNotFound { .. })
    }

    /// Returns `true` if this is an unsupported-format error.
    #[must_use]
    pub const fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Returns `true` if this is a workbook read/parse error.
    #[must_use]
    pub const fn is_workbook_read(&self) -> bool {
        matches!(self, Self::WorkbookRead { .. })
    }

    /// Returns `true` if this is a validation error.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a generation error.
    #[must_use]
    pub const fn is_generation_error(&self) -> bool {
        matches!(self, Self::GenerationError { .. })
    }

    /// Returns `true` if this is an output write error.
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::WriteError { .. })
    }

    /// Returns `true` if this is an invalid-argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
