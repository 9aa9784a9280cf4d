//! CLI response formatting and output.
//!
//! Provides the JSON envelope, hook-text printing, and exit code mapping.

use serde::Serialize;
use std::io::{self, Write};
use trim_spaces_in_paths::error::Hint;
use trim_spaces_in_paths::output::EXIT_CONFIG;
use trim_spaces_in_paths::{Error, ErrorCode, Result, TrimReport};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_stream(mut handle: impl Write, payload: &str, context: &str) -> Result<()> {
    if let Err(e) = handle.write_all(payload.as_bytes()).and_then(|_| handle.flush()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(e.to_string(), Some(context.to_string())));
    }
    Ok(())
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    let payload = format!("{}\n", response.to_json()?);
    write_stream(io::stdout().lock(), &payload, "write stdout")
}

/// Print a report as JSON, with success mirroring the exit code.
pub fn print_json_report(report: &TrimReport) -> Result<()> {
    let mut response = CliResponse::success(report);
    response.success = report.errors.is_empty();
    print_response(&response)
}

/// Print a report as pre-commit hook text.
pub fn print_text_report(report: &TrimReport) -> Result<()> {
    write_stream(io::stdout().lock(), &report.render_stdout(), "write stdout")?;
    write_stream(io::stderr().lock(), &report.render_stderr(), "write stderr")
}

pub fn print_error(err: &Error, json: bool) -> Result<()> {
    if json {
        return print_response(&CliResponse::<()>::from_error(err));
    }

    let mut text = format!("{}\n", err.message);
    for hint in &err.hints {
        text.push_str(&format!("hint: {}\n", hint.message));
    }
    write_stream(io::stderr().lock(), &text, "write stderr")
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument
        | ErrorCode::GitNotARepository
        | ErrorCode::GitCommandFailed
        | ErrorCode::InternalIoError => EXIT_CONFIG,

        ErrorCode::InternalJsonError => 1,
    }
}
