//! # redcap-codebook - codebook to REDCap data dictionary conversion
//!
//! Converts flat codebook CSV exports (one row per variable option) into the
//! REDCap data dictionary format (one row per variable).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Codebook CSV│────▶│   Parser    │────▶│   Convert   │────▶│ REDCap CSV  │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (run group) │     │ (FieldDef)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use redcap_codebook::{convert_file, write_dictionary, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let conversion =
//!         convert_file(Path::new("codebook.csv"), &ConvertOptions::default()).unwrap();
//!     write_dictionary(&conversion.fields, std::io::stdout()).unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Target schema ([`FieldDef`])
//! - [`parser`] - CSV parsing with auto-detection
//! - [`convert`] - Grouping, field derivation, and pipeline

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Conversion
pub mod convert;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError, ConvertResult, CsvError, CsvResult, PipelineError, PipelineResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::FieldDef;

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_content,
    parse_csv_file, parse_csv_file_auto, ParseResult,
};

// =============================================================================
// Re-exports - Conversion
// =============================================================================

pub use convert::{
    as_field, consecutive_runs, convert, convert_bytes, convert_file, write_dictionary,
    Conversion, ConsecutiveRuns, ConvertOptions, CsvInfo, VariableRun,
};
