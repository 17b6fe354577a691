//! Parser for machine-readable history records
//!
//! One commit per line, fields separated by the ASCII unit separator:
//!
//! ```text
//! <hash> \x1f <parent hashes> \x1f <author> \x1f <date> \x1f <decorations> \x1f <subject>
//! ```
//!
//! which is what `git log --format=%H%x1f%P%x1f%an%x1f%aI%x1f%D%x1f%s` emits.

use crate::decoration::split_decorations;
use crate::error::{GraphError, GraphResult};
use crate::model::RawCommit;

pub const FIELD_SEPARATOR: char = '\x1f';

/// Format string producing records this module understands
pub const LOG_FORMAT: &str = "%H%x1f%P%x1f%an%x1f%aI%x1f%D%x1f%s";

const FIELD_COUNT: usize = 6;

/// Parse every non-blank line of `text` into a raw commit row
pub fn parse_log_records(text: &str) -> GraphResult<Vec<RawCommit>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_record(index + 1, line))
        .collect()
}

fn parse_record(line_number: usize, line: &str) -> GraphResult<RawCommit> {
    // The subject is last and may itself contain separators
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect();
    if fields.len() < FIELD_COUNT {
        return Err(GraphError::malformed_record(
            line_number,
            format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        ));
    }

    let hash = fields[0].trim();
    let date = fields[3].trim();

    Ok(RawCommit {
        id: (!hash.is_empty()).then(|| hash.to_string()),
        parent_ids: fields[1].split_whitespace().map(str::to_string).collect(),
        author: fields[2].to_string(),
        timestamp: (!date.is_empty()).then(|| date.to_string()),
        references: split_decorations(fields[4]),
        subject: fields[5].trim_end_matches('\r').to_string(),
    })
}
