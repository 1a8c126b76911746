//! High-level pipeline API for codebook to REDCap conversion.
//!
//! Combines all steps: parsing, grouping, field derivation, and serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use redcap_codebook::{convert_file, write_dictionary, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let conversion = convert_file(Path::new("codebook.csv"), &ConvertOptions::default())?;
//!     write_dictionary(&conversion.fields, std::io::stdout())?;
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use super::codebook::convert;
use crate::error::{ConvertResult, PipelineResult};
use crate::models::FieldDef;
use crate::parser::{parse_bytes_auto, parse_csv_file, parse_csv_file_auto, ParseResult};

/// Options for the conversion pipeline.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Use a specific delimiter instead of auto-detection.
    pub delimiter: Option<char>,
}

/// Result of a complete conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Derived field definitions, one per variable run, in input order.
    pub fields: Vec<FieldDef>,

    /// Input CSV metadata.
    pub csv_info: CsvInfo,
}

/// Input CSV information.
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Convert a codebook CSV file into REDCap field definitions.
///
/// This is the main entry point. It:
/// 1. Parses the CSV with encoding/delimiter auto-detection
/// 2. Groups consecutive `variable_num` runs
/// 3. Derives one field definition per run
///
/// All field definitions are derived before returning, so a malformed
/// `variable_num` fails the whole run with nothing handed to the writer.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> PipelineResult<Conversion> {
    let parse_result = match options.delimiter {
        Some(delimiter) => parse_csv_file(path, delimiter)?,
        None => parse_csv_file_auto(path)?,
    };
    convert_parsed(parse_result)
}

/// Convert codebook CSV bytes into REDCap field definitions.
///
/// Same as [`convert_file`] but accepts raw bytes.
pub fn convert_bytes(bytes: &[u8]) -> PipelineResult<Conversion> {
    let parse_result = parse_bytes_auto(bytes)?;
    convert_parsed(parse_result)
}

fn convert_parsed(parse_result: ParseResult) -> PipelineResult<Conversion> {
    log::info!("Detected encoding: {}", parse_result.encoding);
    log::info!(
        "Detected delimiter: '{}'",
        format_delimiter(parse_result.delimiter)
    );
    log::info!("Read {} codebook rows", parse_result.records.len());
    log::debug!("Columns: {}", parse_result.headers.join(", "));

    let csv_info = CsvInfo {
        encoding: parse_result.encoding.clone(),
        delimiter: parse_result.delimiter,
        headers: parse_result.headers.clone(),
        row_count: parse_result.records.len(),
    };

    let fields: Vec<FieldDef> = convert(&parse_result.records).collect::<ConvertResult<_>>()?;

    log::info!(
        "Derived {} field definitions from {} rows",
        fields.len(),
        csv_info.row_count
    );
    for field in &fields {
        log::debug!("{} → {}", field.field_name, field.form_name);
    }

    Ok(Conversion { fields, csv_info })
}

/// Write field definitions as a REDCap data dictionary CSV.
///
/// The header row is written unconditionally, so empty input still produces
/// a header-only dictionary.
pub fn write_dictionary<W: Write>(fields: &[FieldDef], out: W) -> PipelineResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    wtr.write_record(FieldDef::FIELDS)?;
    for field in fields {
        wtr.serialize(field)?;
    }
    wtr.flush()?;

    Ok(())
}

fn format_delimiter(d: char) -> &'static str {
    match d {
        ',' => ",",
        ';' => ";",
        '\t' => "TAB",
        '|' => "|",
        _ => "?",
    }
}
