//! Domain models for the codebook conversion pipeline.
//!
//! This module contains the target schema:
//!
//! - [`FieldDef`] - one REDCap data dictionary row describing a single variable
//!
//! The schema is the standard REDCap data dictionary column set. Output
//! headers use the serde field identifiers below, in declaration order.

use serde::{Deserialize, Serialize};

// =============================================================================
// REDCap Field Definition
// =============================================================================

/// A single field definition in the REDCap data dictionary schema.
///
/// One is derived per codebook variable. [`FieldDef::default`] is the schema
/// default constructor: every column starts as the empty string, and the
/// conversion fills in only what the codebook provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Variable name, e.g. `v03_Age_Group`.
    pub field_name: String,
    /// Instrument (form) the field belongs to.
    pub form_name: String,
    pub section_header: String,
    /// REDCap field type (`text`, `dropdown`, `radio`, ...).
    pub field_type: String,
    pub field_label: String,
    pub select_choices_or_calculations: String,
    pub field_note: String,
    pub text_validation_type_or_show_slider_number: String,
    pub text_validation_min: String,
    pub text_validation_max: String,
    pub identifier: String,
    pub branching_logic: String,
    pub required_field: String,
    pub custom_alignment: String,
    pub question_number: String,
    pub matrix_group_name: String,
    pub matrix_ranking: String,
    pub field_annotation: String,
}

impl FieldDef {
    /// Schema column names, in output order.
    ///
    /// Must stay in sync with the struct declaration; the serializer relies
    /// on the same order.
    pub const FIELDS: [&'static str; 18] = [
        "field_name",
        "form_name",
        "section_header",
        "field_type",
        "field_label",
        "select_choices_or_calculations",
        "field_note",
        "text_validation_type_or_show_slider_number",
        "text_validation_min",
        "text_validation_max",
        "identifier",
        "branching_logic",
        "required_field",
        "custom_alignment",
        "question_number",
        "matrix_group_name",
        "matrix_ranking",
        "field_annotation",
    ];
}

// =============================================================================
// Tests
// =============================================================================
