//! Mode handlers: one per payload shape, plus the interactive form.

pub mod form;
pub mod rows;
pub mod sample;
pub mod table;

use crate::cli::Cli;
use crate::payload::Submission;

/// The sample record with any CLI field overrides applied.
pub fn build_record(args: &Cli) -> Submission {
    let mut record = Submission::sample();
    if let Some(v) = &args.cmd_name {
        record.cmd_name = v.clone();
    }
    if let Some(v) = &args.data {
        record.data = v.clone();
    }
    if let Some(v) = &args.range {
        record.range = v.clone();
    }
    if let Some(v) = &args.status {
        record.status = v.clone();
    }
    record
}
