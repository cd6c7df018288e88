//! Output formatting for CLI commands.
//!
//! Provides abstraction layer for outputting results in text or JSON format.

use anyhow::Result;
use nomen_core::{ErrorKind, Name};
use serde::Serialize;
use std::io::{self, Write};

/// A command result that can be shown as text or serialized as JSON.
pub trait Report: Serialize {
    /// Human-readable rendering, including the trailing newline.
    fn text(&self) -> String;
}

/// Renders command results and errors in the format chosen by `--json`.
#[derive(Debug, Clone, Copy)]
pub struct OutputWriter {
    json: bool,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Render a report to the string that goes to stdout.
    pub fn render<R: Report>(&self, report: &R) -> Result<String> {
        if self.json {
            Ok(format!("{}\n", serde_json::to_string_pretty(report)?))
        } else {
            Ok(report.text())
        }
    }

    /// Print a report to stdout.
    pub fn emit<R: Report>(&self, report: &R) -> Result<()> {
        let rendered = self.render(report)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Render a failed command: a JSON error object with `success: false`,
    /// or the error chain prefixed with `Error:`.
    pub fn render_error(&self, error: &anyhow::Error, result_code: u8) -> String {
        if !self.json {
            return format!("Error: {:#}\n", error);
        }

        let error_output = ErrorOutput {
            success: false,
            result_code,
            kind: contract_kind(error).map(|k| k.as_str()),
            error: format!("{:#}", error),
        };
        match serde_json::to_string_pretty(&error_output) {
            Ok(json) => format!("{}\n", json),
            Err(e) => format!("Error: {:#} (JSON encoding failed: {})\n", error, e),
        }
    }

    /// Print a failed command to stderr.
    pub fn emit_error(&self, error: &anyhow::Error, result_code: u8) {
        let rendered = self.render_error(error, result_code);
        if let Err(e) = io::stderr().lock().write_all(rendered.as_bytes()) {
            tracing::warn!(error = %e, "failed to write error report to stderr");
        }
    }
}

/// The contract kind behind an error, if it came from nomen_core.
pub fn contract_kind(error: &anyhow::Error) -> Option<ErrorKind> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<nomen_core::Error>())
        .map(|e| e.kind())
}

/// Result code for a failed command: 1 for bad input, 2 for internal defects.
pub fn result_code(error: &anyhow::Error) -> u8 {
    match contract_kind(error) {
        Some(ErrorKind::Postcondition) | Some(ErrorKind::InvalidState) => 2,
        Some(ErrorKind::Precondition) | None => 1,
    }
}

// ============================================================================
// Data Transfer Objects (DTOs) for JSON output
// ============================================================================

/// Error output structure.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub success: bool,
    pub result_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub error: String,
}

/// Output for `mask` and `unmask` commands.
#[derive(Debug, Serialize)]
pub struct CodecOutput {
    pub success: bool,
    pub result_code: u8,
    pub delimiter: char,
    pub input: String,
    pub output: String,
}

/// Output for commands that produce a name.
#[derive(Debug, Serialize)]
pub struct NameOutput {
    pub success: bool,
    pub result_code: u8,
    pub representation: &'static str,
    pub delimiter: char,
    pub count: usize,
    pub data: String,
    pub components: Vec<String>,
}

impl NameOutput {
    /// Snapshot a name for output.
    pub fn new(representation: &'static str, name: &dyn Name) -> Self {
        Self {
            success: true,
            result_code: 0,
            representation,
            delimiter: name.delimiter(),
            count: name.len(),
            data: name.as_data_string(),
            components: name.components(),
        }
    }
}

impl Report for NameOutput {
    /// Data string, then one component per line.
    fn text(&self) -> String {
        let mut text = format!("{}\n", self.data);
        for (i, component) in self.components.iter().enumerate() {
            text.push_str(&format!("  [{}] {}\n", i, component));
        }
        text.push_str(&format!("{} component(s)\n", self.count));
        text
    }
}

impl Report for CodecOutput {
    fn text(&self) -> String {
        format!("{}\n", self.output)
    }
}

/// Output for `convert` command.
#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub success: bool,
    pub result_code: u8,
    pub from: char,
    pub to: char,
    pub data: String,
    pub rendered: String,
}

impl Report for ConvertOutput {
    fn text(&self) -> String {
        format!("{}\n", self.rendered)
    }
}
