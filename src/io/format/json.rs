use std::io::Read;

use serde_json::Value;

use crate::io::IoError;

pub fn read_json<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let document: Value = serde_json::from_reader(reader)?;
    Ok(split_top_level(document))
}

/// Top-level arrays hold one checked value per element.
pub(crate) fn split_top_level(document: Value) -> Vec<Value> {
    match document {
        Value::Array(items) => items,
        single => vec![single],
    }
}
