//! Spreadsheet reading via calamine.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::debug;

use sheetdef_core::{Error, OriginName, Result, Row, Sheet, Workbook};

/// File extensions accepted by [`load_workbook`], lower-case.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// Loads a spreadsheet file into an in-memory [`Workbook`].
///
/// Sheets keep workbook tab order. Within each worksheet, the first row of
/// the used range supplies the ordered column names; every subsequent row
/// becomes a column-keyed map of trimmed cell strings, so sheet row 0 is the
/// type row, row 1 the comment row, and the rest sample data. Cells beyond
/// the header width are dropped. A worksheet with an empty used range yields
/// a sheet with no columns and no rows.
///
/// # Errors
///
/// Returns [`Error::WorkbookNotFound`] if `path` does not exist,
/// [`Error::UnsupportedFormat`] for an extension outside
/// [`SUPPORTED_EXTENSIONS`], and [`Error::WorkbookRead`] when calamine
/// fails to open the file or read a sheet.
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(Error::WorkbookNotFound {
            path: path.display().to_string(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::UnsupportedFormat { extension });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| Error::WorkbookRead {
        path: path.display().to_string(),
        message: "failed to open workbook".to_string(),
        source: Some(Box::new(e)),
    })?;

    let names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| Error::WorkbookRead {
                path: path.display().to_string(),
                message: format!("failed to read sheet '{name}'"),
                source: Some(Box::new(e)),
            })?;
        let sheet = sheet_from_range(name, &range);
        debug!(
            sheet = %sheet.name,
            columns = sheet.columns.len(),
            rows = sheet.rows.len(),
            "loaded sheet"
        );
        sheets.push(sheet);
    }

    Ok(Workbook { sheets })
}

/// Derives the origin name from the input path's file stem.
///
/// # Errors
///
/// Returns [`Error::ValidationError`] if the path has no usable file stem
/// (empty, or not valid UTF-8).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use sheetdef_loader::origin_from_path;
///
/// let origin = origin_from_path(Path::new("data/items.xlsx")).unwrap();
/// assert_eq!(origin.as_str(), "items");
/// ```
pub fn origin_from_path(path: &Path) -> Result<OriginName> {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    OriginName::new(stem)
}

fn sheet_from_range(name: String, range: &Range<Data>) -> Sheet {
    let mut rows_iter = range.rows();
    let Some(header) = rows_iter.next() else {
        return Sheet::new(name);
    };

    let columns: Vec<String> = header.iter().map(cell_text).collect();
    let mut sheet = Sheet::new(name).with_columns(columns.iter().cloned());

    for cells in rows_iter {
        let mut row = Row::with_capacity(columns.len());
        for (column, cell) in columns.iter().zip(cells.iter()) {
            row.insert(column.clone(), cell_text(cell));
        }
        sheet.push_row(row);
    }
    sheet
}

fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}
