use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use shapeq::cmd::{check, describe};
use shapeq::io::Format;
use shapeq::logging;

#[derive(Debug, Parser)]
#[command(
    name = "shapeq",
    version,
    about = "Check values against constraint directive strings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate every input value against a constraint string.
    Check(CheckArgs),
    /// Render the constraint a directive string builds for a type.
    Describe(DescribeArgs),
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    #[arg(long)]
    constraint: String,

    /// Declared type name; defaults to each value's own type.
    #[arg(long = "type")]
    value_type: Option<String>,

    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    from: Option<CliInputFormat>,

    /// Seed for the random traversal modes.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    label: Option<String>,
}

#[derive(Debug, clap::Args)]
struct DescribeArgs {
    #[arg(long = "type")]
    value_type: String,

    #[arg(long)]
    constraint: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliInputFormat {
    Json,
    Yaml,
    Jsonl,
}

impl From<CliInputFormat> for Format {
    fn from(value: CliInputFormat) -> Self {
        match value {
            CliInputFormat::Json => Self::Json,
            CliInputFormat::Yaml => Self::Yaml,
            CliInputFormat::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    if let Err(error) = logging::init_logging() {
        emit_error(
            "input_usage_error",
            error.to_string(),
            json!({"env": logging::LOG_ENV}),
            3,
        );
        return 3;
    }

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Describe(args) => run_describe(args),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_check(args: CheckArgs) -> i32 {
    let command_args = check::CheckCommandArgs {
        input: args.input,
        from: args.from.map(Into::into),
        constraint: args.constraint,
        value_type: args.value_type,
        seed: args.seed,
        label: args.label,
    };

    let stdin = io::stdin();
    let response = check::run_with_stdin(&command_args, stdin.lock());
    emit_response("check", response.exit_code, &response.payload)
}

fn run_describe(args: DescribeArgs) -> i32 {
    let response = describe::run(&describe::DescribeCommandArgs {
        value_type: args.value_type,
        constraint: args.constraint,
    });
    emit_response("describe", response.exit_code, &response.payload)
}

/// Reports go to stdout, errors to stderr.
fn emit_response(command: &str, exit_code: i32, payload: &Value) -> i32 {
    let emitted = match exit_code {
        0 | 2 => emit_json_stdout(payload),
        1 | 3 => emit_json_stderr(payload),
        other => {
            emit_error(
                "internal_error",
                format!("unexpected {command} exit code: {other}"),
                json!({"command": command}),
                1,
            );
            return 1;
        }
    };
    if emitted {
        exit_code
    } else {
        emit_error(
            "internal_error",
            format!("failed to serialize {command} response"),
            json!({"command": command}),
            1,
        );
        1
    }
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
