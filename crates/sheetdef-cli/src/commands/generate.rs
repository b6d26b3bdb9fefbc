//! Generate command implementation.
//!
//! Turns one workbook into one C# definition file. This command:
//! 1. Validates the encoding label and origin name
//! 2. Loads the workbook into memory
//! 3. Renders the generated source
//! 4. Writes it to the output file, or prints it to stdout

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use sheetdef_codegen::{CSharpDefineGenerator, EmitOptions, extract_schema};
use sheetdef_core::cli::{ExitCode, OutputFormat};
use sheetdef_core::{ExcludePrefix, OriginName};
use sheetdef_loader::{load_workbook, origin_from_path};
use tracing::info;

use crate::output;

/// Result of one generation run, reported after the output file is
/// written.
#[derive(Debug, Serialize)]
struct GenerateSummary {
    /// Source workbook path
    workbook: String,
    /// Origin name used in the banner
    origin: String,
    /// Name of the aggregating container class
    container: String,
    /// Total sheets in the workbook
    sheets: usize,
    /// Sheets that produced a class block
    classes: usize,
    /// Collection members in the container class
    container_members: usize,
    /// Encoding the output file was written in
    encoding: String,
    /// Encoded size of the output file
    bytes_written: usize,
    /// Destination path
    output: String,
}

/// Runs the generate command.
///
/// Without an output path the generated source is printed to stdout as-is,
/// so it can be piped or redirected; the formatted summary is only printed
/// when writing to a file.
///
/// # Errors
///
/// Returns an error if:
/// - The encoding label or origin name is invalid
/// - The workbook cannot be found, opened, or parsed
/// - Template rendering fails
/// - The output file cannot be written
pub fn run(
    workbook_path: &Path,
    output_path: Option<PathBuf>,
    namespace: Option<String>,
    exclude_prefix: Option<String>,
    encoding_label: &str,
    origin_override: Option<String>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    // Bad arguments fail before any workbook I/O happens.
    let encoding = output::resolve_encoding(encoding_label)?;
    let origin = match origin_override {
        Some(name) => OriginName::new(name)?,
        None => origin_from_path(workbook_path)?,
    };

    let workbook = load_workbook(workbook_path)
        .with_context(|| format!("failed to load workbook '{}'", workbook_path.display()))?;
    info!(origin = %origin, sheets = workbook.sheet_count(), "loaded workbook");

    let options = EmitOptions {
        exclude: exclude_prefix.map_or_else(ExcludePrefix::disabled, ExcludePrefix::new),
        namespace,
    };
    let generator = CSharpDefineGenerator::new()?;
    let source = generator.generate(&origin, &workbook, &options)?;

    let Some(output_path) = output_path else {
        // stdout carries the generated source itself, nothing else.
        print!("{source}");
        return Ok(ExitCode::SUCCESS);
    };

    let bytes_written = output::write_source(&output_path, &source, encoding)?;

    let classes = workbook
        .sheets
        .iter()
        .filter(|sheet| extract_schema(sheet, &options.exclude).is_some())
        .count();
    let container_members = workbook
        .sheets
        .iter()
        .filter(|sheet| !options.exclude.excludes(&sheet.name))
        .count();
    let summary = GenerateSummary {
        workbook: workbook_path.display().to_string(),
        origin: origin.as_str().to_string(),
        container: origin.container_name(),
        sheets: workbook.sheet_count(),
        classes,
        container_members,
        encoding: encoding.name().to_string(),
        bytes_written,
        output: output_path.display().to_string(),
    };

    let formatted = crate::formatters::format_output(&summary, output_format)?;
    println!("{formatted}");

    info!(
        output = %summary.output,
        bytes = summary.bytes_written,
        "generation complete"
    );
    Ok(ExitCode::SUCCESS)
}
