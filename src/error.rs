//! Error types for the codebook conversion pipeline.
//!
//! - [`CsvError`] - CSV reading/decoding errors
//! - [`ConvertError`] - codebook to field-definition errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading or decoding the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read input.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode input bytes.
    #[error("Failed to decode input as {encoding}: {message}")]
    Encoding { encoding: String, message: String },

    /// Malformed CSV row.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),

    /// Empty file.
    #[error("CSV input is empty")]
    EmptyInput,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Conversion Errors
// =============================================================================

/// Errors while deriving field definitions from codebook rows.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// `variable_num` did not parse as an integer.
    #[error("Invalid variable_num '{0}': not an integer")]
    BadVariableNum(String),

    /// A required codebook column is absent.
    #[error("Missing codebook column: {0}")]
    MissingColumn(&'static str),

    /// A grouping run contained no records.
    #[error("Empty variable group for variable_num '{0}'")]
    EmptyGroup(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by [`crate::convert::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Conversion error.
    #[error("Convert error: {0}")]
    Convert(#[from] ConvertError),

    /// Output writing error.
    #[error("Output error: {0}")]
    Output(#[from] csv::Error),

    /// Output I/O error.
    #[error("Output I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyInput;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        // ConvertError -> PipelineError
        let convert_err = ConvertError::MissingColumn("variable_num");
        let pipeline_err: PipelineError = convert_err.into();
        assert!(pipeline_err.to_string().contains("variable_num"));
    }

    #[test]
    fn test_bad_variable_num_format() {
        let err = ConvertError::BadVariableNum("abc".into());
        let msg = err.to_string();
        assert!(msg.contains("abc"));
        assert!(msg.contains("not an integer"));
    }
}
