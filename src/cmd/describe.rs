use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use crate::domain::report::DescribeReport;
use crate::domain::value_type::ValueType;
use crate::engine::build;

/// Input arguments for the describe command API.
#[derive(Debug, Clone)]
pub struct DescribeCommandArgs {
    pub value_type: String,
    pub constraint: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DescribeCommandResponse {
    pub exit_code: i32,
    pub payload: JsonValue,
}

pub fn run(args: &DescribeCommandArgs) -> DescribeCommandResponse {
    let report = describe(args);
    match serde_json::to_value(&report) {
        Ok(payload) => DescribeCommandResponse {
            exit_code: 0,
            payload,
        },
        Err(_) => DescribeCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": "failed to serialize describe report"
            }),
        },
    }
}

/// Builds the constraint and renders it; a block that builds nothing has no description.
pub fn describe(args: &DescribeCommandArgs) -> DescribeReport {
    let value_type = ValueType::from_name(&args.value_type);
    let constraint = build::parse(value_type, &args.constraint);
    DescribeReport {
        value_type: value_type.to_string(),
        description: constraint.as_ref().map(ToString::to_string),
        note: constraint.as_ref().and_then(|c| c.note.clone()),
        bad_name: constraint.and_then(|c| c.bad_name),
    }
}
