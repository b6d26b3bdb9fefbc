//! Inspect command implementation.
//!
//! Loads a workbook and reports what generation would do with it, without
//! producing any C# source: every sheet with its generated class name,
//! field count, and the reason it would be skipped. Useful for checking a
//! workbook and an exclusion prefix before wiring them into a build.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use sheetdef_codegen::{FieldDef, extract_schema, generated_type_name};
use sheetdef_core::cli::{ExitCode, OutputFormat};
use sheetdef_core::{ExcludePrefix, Sheet};
use sheetdef_loader::{load_workbook, origin_from_path};
use tracing::info;

/// What generation would do with one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum SheetStatus {
    /// The sheet produces a class block and a container member.
    Generated,
    /// The sheet name matches the exclusion prefix; nothing is emitted.
    Excluded,
    /// The sheet has fewer than two rows; only its container member is
    /// emitted.
    MissingHeaderRows,
}

/// Per-sheet inspection entry.
#[derive(Debug, Serialize)]
struct SheetReport {
    /// Sheet name as it appears in the workbook
    name: String,
    /// Class name generation would use
    class: String,
    /// What generation would do with this sheet
    status: SheetStatus,
    /// Column count, before any filtering
    columns: usize,
    /// Fields surviving extraction
    fields: usize,
    /// Rows below the two header rows
    data_rows: usize,
    /// Extracted fields, present with `--detailed`
    #[serde(skip_serializing_if = "Option::is_none")]
    field_list: Option<Vec<FieldDef>>,
}

/// Whole-workbook inspection report.
#[derive(Debug, Serialize)]
struct WorkbookReport {
    /// Source workbook path
    workbook: String,
    /// Origin name derived from the path
    origin: String,
    /// Container class name generation would use
    container: String,
    /// Total sheets in the workbook
    sheet_count: usize,
    /// Per-sheet entries in workbook order
    sheets: Vec<SheetReport>,
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the workbook cannot be found, opened, or parsed.
pub fn run(
    workbook_path: &Path,
    exclude_prefix: Option<String>,
    detailed: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let origin = origin_from_path(workbook_path)?;
    let workbook = load_workbook(workbook_path)
        .with_context(|| format!("failed to load workbook '{}'", workbook_path.display()))?;
    let exclude = exclude_prefix.map_or_else(ExcludePrefix::disabled, ExcludePrefix::new);

    let sheets: Vec<SheetReport> = workbook
        .sheets
        .iter()
        .map(|sheet| sheet_report(sheet, &exclude, detailed))
        .collect();
    let report = WorkbookReport {
        workbook: workbook_path.display().to_string(),
        origin: origin.as_str().to_string(),
        container: origin.container_name(),
        sheet_count: workbook.sheet_count(),
        sheets,
    };

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    info!(sheets = report.sheet_count, "inspection complete");
    Ok(ExitCode::SUCCESS)
}

fn sheet_report(sheet: &Sheet, exclude: &ExcludePrefix, detailed: bool) -> SheetReport {
    let schema = extract_schema(sheet, exclude);
    let status = if exclude.excludes(&sheet.name) {
        SheetStatus::Excluded
    } else if schema.is_none() {
        SheetStatus::MissingHeaderRows
    } else {
        SheetStatus::Generated
    };
    let fields = schema.as_ref().map_or(0, |schema| schema.fields.len());
    let field_list = if detailed {
        schema.map(|schema| schema.fields)
    } else {
        None
    };

    SheetReport {
        name: sheet.name.clone(),
        class: generated_type_name(&sheet.name),
        status,
        columns: sheet.columns.len(),
        fields,
        data_rows: sheet.data_row_count(),
        field_list,
    }
}
