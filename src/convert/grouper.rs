//! Group flat codebook rows into per-variable runs.
//!
//! A codebook export carries one row per variable *option*, so a variable
//! with several options spans several consecutive rows. This module merges
//! those rows back into one run per variable.
//!
//! # Architecture
//!
//! ```text
//! CSV input (flat rows)              →  Runs (one per variable)
//! ┌──────────────────────────────┐      ┌──────────────────────┐
//! │ variable_num: 3, option: 1   │      │ "3": [row, row]      │
//! │ variable_num: 3, option: 2   │  →   ├──────────────────────┤
//! │ variable_num: 4, option: 1   │      │ "4": [row]           │
//! └──────────────────────────────┘      └──────────────────────┘
//! ```
//!
//! Grouping is *consecutive*: only adjacent rows with an equal
//! `variable_num` value merge. Non-contiguous repeats form separate runs,
//! so unsorted input yields one output row per run, not per distinct value.
//! Keys compare as raw strings; integer parsing happens later, during field
//! derivation.

use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};

/// A consecutive run of codebook rows sharing one `variable_num` value.
#[derive(Debug, Clone)]
pub struct VariableRun<'a> {
    /// Raw `variable_num` string shared by every row in the run.
    pub variable_num: &'a str,
    /// The run's rows, in input order. Never empty.
    pub rows: &'a [Value],
}

/// Iterate over consecutive `variable_num` runs of `records`.
///
/// Yields `Err` if any record lacks the `variable_num` column, then stops.
pub fn consecutive_runs(records: &[Value]) -> ConsecutiveRuns<'_> {
    ConsecutiveRuns { records, pos: 0 }
}

/// Iterator returned by [`consecutive_runs`].
pub struct ConsecutiveRuns<'a> {
    records: &'a [Value],
    pos: usize,
}

fn variable_num(record: &Value) -> ConvertResult<&str> {
    record
        .get("variable_num")
        .and_then(Value::as_str)
        .ok_or(ConvertError::MissingColumn("variable_num"))
}

impl<'a> Iterator for ConsecutiveRuns<'a> {
    type Item = ConvertResult<VariableRun<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.records.len() {
            return None;
        }

        let start = self.pos;
        let key = match variable_num(&self.records[start]) {
            Ok(key) => key,
            Err(e) => {
                self.pos = self.records.len();
                return Some(Err(e));
            }
        };

        let mut end = start + 1;
        while end < self.records.len() {
            match variable_num(&self.records[end]) {
                Ok(next_key) if next_key == key => end += 1,
                Ok(_) => break,
                Err(e) => {
                    self.pos = self.records.len();
                    return Some(Err(e));
                }
            }
        }

        self.pos = end;
        Some(Ok(VariableRun {
            variable_num: key,
            rows: &self.records[start..end],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(num: &str) -> Value {
        json!({ "variable_num": num, "Variable Name": "X", "var_type": "t" })
    }

    #[test]
    fn test_adjacent_rows_merge() {
        let records = vec![row("3"), row("3"), row("4")];
        let runs: Vec<_> = consecutive_runs(&records)
            .collect::<ConvertResult<_>>()
            .unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].variable_num, "3");
        assert_eq!(runs[0].rows.len(), 2);
        assert_eq!(runs[1].variable_num, "4");
        assert_eq!(runs[1].rows.len(), 1);
    }

    #[test]
    fn test_non_contiguous_values_stay_separate() {
        let records = vec![row("1"), row("2"), row("1")];
        let runs: Vec<_> = consecutive_runs(&records)
            .collect::<ConvertResult<_>>()
            .unwrap();

        // 1,2,1 is three runs, not two
        assert_eq!(runs.len(), 3);
    }

    #[test]
    fn test_keys_compare_as_strings() {
        let records = vec![row("3"), row("03")];
        let runs: Vec<_> = consecutive_runs(&records)
            .collect::<ConvertResult<_>>()
            .unwrap();

        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let records: Vec<Value> = vec![];
        assert_eq!(consecutive_runs(&records).count(), 0);
    }

    #[test]
    fn test_missing_column_errors() {
        let records = vec![json!({ "Variable Name": "X" })];
        let mut runs = consecutive_runs(&records);

        assert!(matches!(
            runs.next(),
            Some(Err(ConvertError::MissingColumn("variable_num")))
        ));
        assert!(runs.next().is_none());
    }
}
