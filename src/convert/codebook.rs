//! Derive REDCap field definitions from codebook variable runs.

use serde_json::Value;

use super::grouper::{consecutive_runs, VariableRun};
use crate::error::{ConvertError, ConvertResult};
use crate::models::FieldDef;

/// Convert codebook records into field definitions.
///
/// Partitions `records` into consecutive `variable_num` runs and derives one
/// [`FieldDef`] per run. Lazy: nothing is grouped or derived until the
/// iterator is consumed.
pub fn convert(records: &[Value]) -> impl Iterator<Item = ConvertResult<FieldDef>> + '_ {
    consecutive_runs(records).map(|run| run.and_then(|r| as_field(&r)))
}

/// Derive one field definition from a variable run.
///
/// Only the run's first record contributes: the remaining rows are the
/// variable's options, which the text simplification below ignores.
pub fn as_field(run: &VariableRun<'_>) -> ConvertResult<FieldDef> {
    let v_id: i64 = run
        .variable_num
        .trim()
        .parse()
        .map_err(|_| ConvertError::BadVariableNum(run.variable_num.to_string()))?;

    let record = run
        .rows
        .first()
        .ok_or_else(|| ConvertError::EmptyGroup(run.variable_num.to_string()))?;

    let name = column(record, "Variable Name")?;
    let var_type = column(record, "var_type")?;

    Ok(FieldDef {
        field_name: format!("v{:02}_{}", v_id, name.replace(' ', "_")),
        form_name: var_type.to_string(),
        // TODO: derive dropdown fields with choices from the run's option rows
        field_type: "text".to_string(),
        ..FieldDef::default()
    })
}

fn column<'a>(record: &'a Value, name: &'static str) -> ConvertResult<&'a str> {
    record
        .get(name)
        .and_then(Value::as_str)
        .ok_or(ConvertError::MissingColumn(name))
}
