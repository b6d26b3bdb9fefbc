//! In-memory workbook model shared by the loader and the code generator.
//!
//! A [`Workbook`] is an immutable snapshot of one spreadsheet file: ordered
//! [`Sheet`]s, each with ordered columns and rows keyed by column name. The
//! first two rows of a sheet carry schema information (field types and
//! comments) and are exposed through the fixed-shape [`HeaderRows`] record;
//! everything below them is sample data that code generation never reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of a sheet, keyed by column name.
///
/// A cell that was absent in the source is simply missing from the map; an
/// empty string means the cell exists but is blank. Consumers that care
/// about the difference (the type-row check does) must not collapse the two.
pub type Row = HashMap<String, String>;

/// An immutable spreadsheet snapshot: the ordered sheets of one workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// Sheets in workbook tab order.
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Creates an empty workbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sheet with the given name, if present.
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    /// Number of sheets in the workbook.
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Returns `true` if the workbook has no sheets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// One named table: ordered column identifiers plus ordered rows.
///
/// Row 0 is the type row and row 1 is the comment row. A sheet with fewer
/// than two rows has no usable schema; [`Sheet::header_rows`] returns `None`
/// for it and code generation emits no class block.
///
/// # Examples
///
/// ```
/// use sheetdef_core::{Row, Sheet};
///
/// let mut sheet = Sheet::new("Item").with_columns(["id", "name"]);
/// sheet.push_row(Row::from([
///     ("id".to_string(), "int".to_string()),
///     ("name".to_string(), "string".to_string()),
/// ]));
/// sheet.push_row(Row::from([
///     ("id".to_string(), "Identifier".to_string()),
/// ]));
///
/// let header = sheet.header_rows().unwrap();
/// assert_eq!(header.type_token("id"), Some("int"));
/// assert_eq!(header.comment("id"), "Identifier");
/// assert_eq!(header.comment("name"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Tab name from the source workbook.
    pub name: String,
    /// Column identifiers in sheet order.
    pub columns: Vec<String>,
    /// All rows below the column header, in sheet order.
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Creates an empty sheet with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Sets the ordered column identifiers.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Returns the fixed-shape header record when the sheet has at least the
    /// type row and the comment row, `None` otherwise.
    #[must_use]
    pub fn header_rows(&self) -> Option<HeaderRows<'_>> {
        match self.rows.as_slice() {
            [type_row, comment_row, ..] => Some(HeaderRows {
                type_row,
                comment_row,
            }),
            _ => None,
        }
    }

    /// Number of rows below the two header rows.
    #[must_use]
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(2)
    }
}

/// The first two rows of a processable sheet: per-column type tokens and
/// per-column comments.
///
/// Constructed only through [`Sheet::header_rows`], so holding one proves
/// the sheet had at least two rows.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRows<'a> {
    type_row: &'a Row,
    comment_row: &'a Row,
}

impl HeaderRows<'_> {
    /// Returns the type token for `column`, or `None` when the cell is
    /// absent from the type row.
    ///
    /// `Some("")` means the cell exists but is blank. Both the absent and
    /// the blank case mark a column as not exported, but callers should
    /// check them explicitly rather than coercing one into the other.
    #[must_use]
    pub fn type_token(&self, column: &str) -> Option<&str> {
        self.type_row.get(column).map(String::as_str)
    }

    /// Returns the comment for `column`. An absent comment cell is the
    /// empty string, not an error.
    #[must_use]
    pub fn comment(&self, column: &str) -> &str {
        self.comment_row.get(column).map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_item_sheet() -> Sheet {
        let mut sheet = Sheet::new("Item").with_columns(["id", "name", "note"]);
        sheet.push_row(Row::from([
            ("id".to_string(), "int".to_string()),
            ("name".to_string(), "string".to_string()),
            ("note".to_string(), String::new()),
        ]));
        sheet.push_row(Row::from([
            ("id".to_string(), "Identifier".to_string()),
            ("name".to_string(), "Display Name".to_string()),
        ]));
        sheet
    }

    #[test]
    fn test_header_rows_requires_two_rows() {
        let mut sheet = Sheet::new("Item").with_columns(["id"]);
        assert!(sheet.header_rows().is_none());

        sheet.push_row(Row::from([("id".to_string(), "int".to_string())]));
        assert!(sheet.header_rows().is_none());

        sheet.push_row(Row::new());
        assert!(sheet.header_rows().is_some());
    }

    #[test]
    fn test_type_token_tri_state() {
        let sheet = create_item_sheet();
        let header = sheet.header_rows().unwrap();

        assert_eq!(header.type_token("id"), Some("int"));
        assert_eq!(header.type_token("note"), Some(""));
        assert_eq!(header.type_token("missing"), None);
    }

    #[test]
    fn test_comment_defaults_to_empty() {
        let sheet = create_item_sheet();
        let header = sheet.header_rows().unwrap();

        assert_eq!(header.comment("id"), "Identifier");
        assert_eq!(header.comment("note"), "");
        assert_eq!(header.comment("missing"), "");
    }

    #[test]
    fn test_data_row_count() {
        let mut sheet = create_item_sheet();
        assert_eq!(sheet.data_row_count(), 0);

        sheet.push_row(Row::from([("id".to_string(), "1".to_string())]));
        sheet.push_row(Row::from([("id".to_string(), "2".to_string())]));
        assert_eq!(sheet.data_row_count(), 2);

        let empty = Sheet::new("Empty");
        assert_eq!(empty.data_row_count(), 0);
    }

    #[test]
    fn test_workbook_sheet_lookup() {
        let workbook = Workbook {
            sheets: vec![Sheet::new("Item"), Sheet::new("Skill")],
        };
        assert_eq!(workbook.sheet_count(), 2);
        assert!(!workbook.is_empty());
        assert!(workbook.sheet("Skill").is_some());
        assert!(workbook.sheet("Missing").is_none());
    }

    #[test]
    fn test_workbook_new_is_empty() {
        let workbook = Workbook::new();
        assert!(workbook.is_empty());
        assert_eq!(workbook.sheet_count(), 0);
    }

    #[test]
    fn test_sheet_serde_round_trip() {
        let sheet = create_item_sheet();
        let json = serde_json::to_string(&sheet).unwrap();
        let back: Sheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_workbook_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Workbook>();
        assert_send_sync::<Sheet>();
    }
}
