//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! support for parameter rows, validation reports, and progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use rpcdoc_schemas::params::{display_path, Violation};
use rpcdoc_schemas::{LoaderError, MethodDoc, MethodDocError, ParamRow};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format flattened parameter rows
    fn format_rows(&self, rows: &[ParamRow]) -> Result<String>;

    /// Format the outcome of a validation run
    fn format_validation_report(&self, report: &ValidationReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_rows(&self, rows: &[ParamRow]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_rows_human(rows)),
            _ => self.format(&rows),
        }
    }

    fn format_validation_report(&self, report: &ValidationReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// One line of `rpcdoc list` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSummary {
    pub method: String,
    pub network: String,
    pub cu: u32,
    pub request_type: &'static str,
    pub request_params: usize,
    pub response_type: &'static str,
    pub response_params: usize,
    pub snippets: Vec<&'static str>,
}

impl MethodSummary {
    pub fn from_doc(doc: &MethodDoc) -> Self {
        Self {
            method: doc.method.clone(),
            network: doc.network_display(),
            cu: doc.cu,
            request_type: doc.request.param_type.label(),
            request_params: doc.request.node_count(),
            response_type: doc.response.param_type.label(),
            response_params: doc.response.node_count(),
            snippets: doc
                .code_snippets
                .iter()
                .map(|snippet| snippet.language.tag())
                .collect(),
        }
    }

    /// Cells for the human table, matching [`MethodSummary::HEADERS`]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.method.clone(),
            self.network.clone(),
            self.cu.to_string(),
            format!("{} ({})", self.request_type, self.request_params),
            format!("{} ({})", self.response_type, self.response_params),
            self.snippets.join(", "),
        ]
    }

    pub const HEADERS: [&'static str; 6] =
        ["Method", "Network", "CU", "Request", "Response", "Snippets"];
}

/// A definition that failed to load or validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

impl ValidationFailure {
    /// Failure for a file that could not be read or parsed
    pub fn from_loader(error: &LoaderError) -> Self {
        let method = match error {
            LoaderError::DuplicateMethod { method, .. } => Some(method.clone()),
            _ => error.method_error().map(|e| e.method().to_string()),
        };
        let mut failure = match error.method_error() {
            Some(inner) => Self::from_method(error.path(), inner),
            None => Self {
                file: error.path().to_path_buf(),
                method: None,
                message: error.to_string(),
                location: None,
                violation: None,
            },
        };
        failure.method = method;
        failure
    }

    /// Failure for one record that parsed but broke a rule
    pub fn from_method(file: &Path, error: &MethodDocError) -> Self {
        let schema = error.schema_error();
        Self {
            file: file.to_path_buf(),
            method: Some(error.method().to_string()),
            message: error.to_string(),
            location: schema.and_then(|e| e.path()).map(display_path),
            violation: schema.and_then(|e| match e {
                rpcdoc_schemas::SchemaError::SchemaInvariantViolation { violation, .. } => {
                    Some(violation.clone())
                }
                _ => None,
            }),
        }
    }
}

/// Result of validating a set of definition files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Definitions examined; a file that fails to parse counts once
    pub checked: usize,
    /// Methods that passed every check, in load order
    pub valid: Vec<String>,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            format,
            use_color,
            show_progress: !quiet && io::stderr().is_terminal(),
            quiet,
            verbose,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            verbose,
            writer,
        }
    }

    /// Whether human status lines are written at all
    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        trace!(
            "Outputting data: {}",
            serde_json::to_string(value).unwrap_or_else(|_| "[failed to serialize]".to_string())
        );

        let formatted = self.format.format(value)?;
        self.finish_block(&formatted)
    }

    /// Write parameter rows
    pub fn rows(&mut self, rows: &[ParamRow]) -> Result<()> {
        let formatted = self.format.format_rows(rows)?;
        self.finish_block(&formatted)
    }

    /// Write a validation report
    pub fn validation_report(&mut self, report: &ValidationReport) -> Result<()> {
        let formatted = self.format.format_validation_report(report)?;
        self.finish_block(&formatted)
    }

    /// Machine formats get exactly one trailing newline
    fn finish_block(&mut self, formatted: &str) -> Result<()> {
        if self.is_human() {
            self.writeln(formatted)
        } else {
            self.writeln(formatted.trim_end_matches('\n'))
        }
    }

    /// Create a progress bar for long operations
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(length);
        pb.set_style(default_progress_style());
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    /// Check if verbose output should be shown
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Write debug information if verbose mode is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.is_verbose() && self.is_human() {
            if self.use_color {
                self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
            } else {
                self.writeln(&format!("DEBUG: {}", message))
            }
        } else {
            Ok(())
        }
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        // Column widths in characters, not bytes
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(&header_row.bold().to_string())?;
        } else {
            self.writeln(&header_row)?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => format!("{:width$}", cell, width = *width),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

/// Helper function to create a progress bar style
pub fn default_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

/// Helper function to create a spinner style
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Format parameter rows as an indented outline
fn format_rows_human(rows: &[ParamRow]) -> String {
    if rows.is_empty() {
        return "(no parameters)".to_string();
    }

    let mut output = String::new();
    for row in rows {
        output.push_str(&format!("{}{} <{}>", row.indent, row.name, row.type_label));
        if let Some(description) = &row.description {
            output.push_str(&format!(" - {}", description));
        }
        output.push('\n');

        for option in &row.enum_options {
            output.push_str(&format!("{}  • {}", row.indent, option.value));
            if option.is_default {
                output.push_str(" (default)");
            }
            if let Some(description) = &option.description {
                output.push_str(&format!(": {}", description));
            }
            output.push('\n');
        }
    }

    output.truncate(output.trim_end().len());
    output
}

/// Format a validation report for human reading
fn format_validation_report_human(report: &ValidationReport) -> String {
    let mut output = String::new();

    if report.is_valid() {
        output.push_str(&format!(
            "✅ All {} method definition(s) are valid",
            report.checked
        ));
        return output;
    }

    output.push_str(&format!(
        "❌ Validation Failed - {} Problem(s) in {} Definition(s)\n\n",
        report.failures.len(),
        report.checked
    ));

    for (i, failure) in report.failures.iter().enumerate() {
        output.push_str(&format!("{}. 📄 File: {}\n", i + 1, failure.file.display()));
        if let Some(method) = &failure.method {
            output.push_str(&format!("   🏷️  Method: {}\n", method));
        }
        if let Some(location) = &failure.location {
            output.push_str(&format!("   📍 Path: {}\n", location));
        }
        output.push_str(&format!("   💬 Message: {}\n", failure.message));
        if let Some(violation) = &failure.violation {
            output.push_str(&format!("   🔍 Rule: {}\n", violation.rule));
            output.push_str(&format!("      Expected: {}\n", violation.expected));
            output.push_str(&format!("      Actual: {}\n", violation.actual));
        }
        output.push('\n');
    }

    output.truncate(output.trim_end().len());
    output
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
