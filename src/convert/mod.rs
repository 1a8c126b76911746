//! Codebook conversion module.
//!
//! - Grouper: consecutive `variable_num` runs
//! - Codebook: field derivation per run
//! - Pipeline: end-to-end conversion and output

pub mod codebook;
pub mod grouper;
pub mod pipeline;

pub use codebook::{as_field, convert};
pub use grouper::{consecutive_runs, ConsecutiveRuns, VariableRun};
pub use pipeline::*;
