use std::io::Read;

use crate::domain::value::Value;
use crate::io::format::{json, jsonl, yaml};
use crate::io::{Format, IoError};

/// Decodes input into the values to check.
///
/// A top-level array in JSON or YAML yields its elements; JSONL yields one value
/// per non-blank line.
pub fn read_values<R: Read>(reader: R, format: Format) -> Result<Vec<Value>, IoError> {
    let documents = match format {
        Format::Json => json::read_json(reader)?,
        Format::Yaml => yaml::read_yaml(reader)?,
        Format::Jsonl => jsonl::read_jsonl(reader)?,
    };
    Ok(documents.into_iter().map(Value::from).collect())
}
