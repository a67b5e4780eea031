use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use crate::domain::report::{CheckFailure, CheckReport};
use crate::domain::value::Value;
use crate::engine::Validator;
use crate::io::{self, Format, IoError};

/// Input arguments for the check command API.
#[derive(Debug, Clone)]
pub struct CheckCommandArgs {
    pub input: Option<PathBuf>,
    pub from: Option<Format>,
    pub constraint: String,
    /// Declared type name; when absent each value is checked as its own type.
    pub value_type: Option<String>,
    pub seed: Option<u64>,
    pub label: Option<String>,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckCommandResponse {
    pub exit_code: i32,
    pub payload: JsonValue,
}

pub fn run_with_stdin<R: Read>(args: &CheckCommandArgs, stdin: R) -> CheckCommandResponse {
    match execute(args, stdin) {
        Ok(report) => report_response(report),
        Err(CommandError::InputUsage(message)) => CheckCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "message": message,
            }),
        },
    }
}

/// Checks already decoded values; the report lists every failing value.
pub fn check_values(
    values: &[Value],
    constraint: &str,
    value_type: Option<&str>,
    validator: &Validator,
    label: Option<String>,
) -> CheckReport {
    let failures = values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let result = match value_type {
                Some(declared) => validator.check_as(value, declared, constraint),
                None => validator.check(value, constraint),
            };
            result.err().map(|violation| CheckFailure {
                path: format!("$[{index}]"),
                kind: violation.kind().to_string(),
                message: violation.to_string(),
            })
        })
        .collect();
    CheckReport {
        seed: validator.seed(),
        ..CheckReport::new(label, values.len(), failures)
    }
}

fn report_response(report: CheckReport) -> CheckCommandResponse {
    let exit_code = if report.matched { 0 } else { 2 };
    match serde_json::to_value(&report) {
        Ok(payload) => CheckCommandResponse { exit_code, payload },
        Err(_) => CheckCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": "failed to serialize check report"
            }),
        },
    }
}

fn execute<R: Read>(args: &CheckCommandArgs, stdin: R) -> Result<CheckReport, CommandError> {
    let format = io::resolve_input_format(args.from, args.input.as_deref())
        .map_err(map_io_as_input_usage)?;
    let values = load_input_values(args, stdin, format)?;
    let validator = match args.seed {
        Some(seed) => Validator::new().with_seed(seed),
        None => Validator::new(),
    };
    Ok(check_values(
        &values,
        &args.constraint,
        args.value_type.as_deref(),
        &validator,
        args.label.clone(),
    ))
}

fn load_input_values<R: Read>(
    args: &CheckCommandArgs,
    stdin: R,
    format: Format,
) -> Result<Vec<Value>, CommandError> {
    if let Some(path) = &args.input {
        let file = File::open(path).map_err(|err| {
            CommandError::InputUsage(format!(
                "failed to open input file `{}`: {err}",
                path.display()
            ))
        })?;
        io::reader::read_values(file, format).map_err(map_io_as_input_usage)
    } else {
        io::reader::read_values(stdin, format).map_err(map_io_as_input_usage)
    }
}

fn map_io_as_input_usage(error: IoError) -> CommandError {
    CommandError::InputUsage(error.to_string())
}

enum CommandError {
    InputUsage(String),
}
