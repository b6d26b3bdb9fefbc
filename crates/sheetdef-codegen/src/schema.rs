//! Schema extraction from sheet header rows.
//!
//! The first data row of a sheet names each column's generated type and
//! the second carries its comment. [`extract_schema`] reads those two rows
//! and produces an ordered field list, silently dropping whatever cannot
//! be generated. Extraction never fails: a sheet that cannot yield a
//! schema simply yields nothing.

use serde::Serialize;
use tracing::debug;

use sheetdef_core::{ExcludePrefix, Sheet};

/// Suffix appended to a sheet name to form its generated class name.
pub const GENERATED_TYPE_SUFFIX: &str = "Config";

/// One generated field, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Field name, taken verbatim from the column identifier.
    pub name: String,
    /// Type token, taken verbatim from the type row.
    #[serde(rename = "type")]
    pub ty: String,
    /// Comment text, empty when the comment row has no entry.
    pub comment: String,
}

/// The extracted schema of one sheet: its generated class name source and
/// its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSchema {
    /// The sheet name the schema was extracted from.
    pub sheet_name: String,
    /// Fields in the sheet's column order.
    pub fields: Vec<FieldDef>,
}

impl SheetSchema {
    /// The generated class name for this sheet.
    #[must_use]
    pub fn type_name(&self) -> String {
        generated_type_name(&self.sheet_name)
    }
}

/// Forms the generated class name for a sheet.
///
/// # Examples
///
/// ```
/// assert_eq!(sheetdef_codegen::generated_type_name("Item"), "ItemConfig");
/// ```
#[must_use]
pub fn generated_type_name(sheet_name: &str) -> String {
    format!("{sheet_name}{GENERATED_TYPE_SUFFIX}")
}

/// Extracts the field schema of `sheet`, or `None` when the sheet produces
/// no class definition at all.
///
/// A sheet is rejected as a whole when its name matches `exclude` or when
/// it has fewer than two rows. Individual columns are dropped when their
/// name matches `exclude`, when the type row has no entry for them, or
/// when that entry is empty. A missing comment entry is not an error; the
/// field's comment is simply empty.
///
/// The returned field order is the sheet's column order. A sheet whose
/// columns are all dropped still yields `Some` with an empty field list.
#[must_use]
pub fn extract_schema(sheet: &Sheet, exclude: &ExcludePrefix) -> Option<SheetSchema> {
    if exclude.excludes(&sheet.name) {
        debug!(sheet = %sheet.name, "sheet excluded by name prefix");
        return None;
    }
    let header_rows = sheet.header_rows()?;

    let mut fields = Vec::with_capacity(sheet.columns.len());
    for column in &sheet.columns {
        if exclude.excludes(column) {
            debug!(sheet = %sheet.name, column = %column, "column excluded by name prefix");
            continue;
        }
        // The type row must have a non-empty entry for the column; a
        // present-but-empty cell is dropped the same way as an absent one.
        let ty = match header_rows.type_token(column) {
            None => {
                debug!(sheet = %sheet.name, column = %column, "column has no type row entry");
                continue;
            }
            Some(token) if token.is_empty() => {
                debug!(sheet = %sheet.name, column = %column, "column type entry is empty");
                continue;
            }
            Some(token) => token.to_string(),
        };
        fields.push(FieldDef {
            name: column.clone(),
            ty,
            comment: header_rows.comment(column).to_string(),
        });
    }

    Some(SheetSchema {
        sheet_name: sheet.name.clone(),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetdef_core::Row;

    fn row(cells: &[(&str, &str)]) -> Row {
        cells
            .iter()
            .map(|&(column, value)| (column.to_string(), value.to_string()))
            .collect()
    }

    fn create_item_sheet() -> Sheet {
        let mut sheet = Sheet::new("Item").with_columns(["id", "name", "price"]);
        sheet.push_row(row(&[
            ("id", "int"),
            ("name", "string"),
            ("price", "float"),
        ]));
        sheet.push_row(row(&[
            ("id", "Identifier"),
            ("name", "Display name"),
            ("price", "Unit price"),
        ]));
        sheet
    }

    #[test]
    fn test_extract_schema_preserves_column_order() {
        let sheet = create_item_sheet();
        let schema = extract_schema(&sheet, &ExcludePrefix::disabled())
            .expect("should extract schema");

        assert_eq!(schema.sheet_name, "Item");
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "price"]);
        assert_eq!(schema.fields[0].ty, "int");
        assert_eq!(schema.fields[2].comment, "Unit price");
    }

    #[test]
    fn test_extract_schema_rejects_sheet_with_excluded_name() {
        let mut sheet = create_item_sheet();
        sheet.name = "tmp_Item".to_string();

        assert!(extract_schema(&sheet, &ExcludePrefix::new("tmp_")).is_none());
    }

    #[test]
    fn test_extract_schema_rejects_sheet_without_header_rows() {
        let mut sheet = Sheet::new("Item").with_columns(["id"]);
        assert!(extract_schema(&sheet, &ExcludePrefix::disabled()).is_none());

        sheet.push_row(row(&[("id", "int")]));
        assert!(
            extract_schema(&sheet, &ExcludePrefix::disabled()).is_none(),
            "one row is not enough for type and comment"
        );
    }

    #[test]
    fn test_extract_schema_two_rows_suffice() {
        let sheet = create_item_sheet();
        assert!(extract_schema(&sheet, &ExcludePrefix::disabled()).is_some());
    }

    #[test]
    fn test_extract_schema_skips_excluded_columns() {
        let mut sheet = Sheet::new("Item").with_columns(["id", "tmp_note", "name"]);
        sheet.push_row(row(&[("id", "int"), ("tmp_note", "string"), ("name", "string")]));
        sheet.push_row(row(&[("id", ""), ("tmp_note", ""), ("name", "")]));

        let schema = extract_schema(&sheet, &ExcludePrefix::new("tmp_"))
            .expect("should extract schema");
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name"]);
    }

    #[test]
    fn test_extract_schema_skips_columns_without_type_token() {
        let mut sheet = Sheet::new("Item").with_columns(["id", "untyped", "blank"]);
        // "untyped" has no type row entry at all; "blank" has an empty one.
        sheet.push_row(row(&[("id", "int"), ("blank", "")]));
        sheet.push_row(row(&[("id", "Identifier")]));

        let schema = extract_schema(&sheet, &ExcludePrefix::disabled())
            .expect("should extract schema");
        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id"]);
    }

    #[test]
    fn test_extract_schema_column_dropped_by_prefix_and_blank_type() {
        // A scratch column both prefixed and left untyped drops exactly once.
        let mut sheet = Sheet::new("Item").with_columns(["id", "name", "dmg_id"]);
        sheet.push_row(row(&[("id", "int"), ("name", "string"), ("dmg_id", "")]));
        sheet.push_row(row(&[("id", "Identifier"), ("name", "Display Name")]));

        let schema = extract_schema(&sheet, &ExcludePrefix::new("dmg_"))
            .expect("should extract schema");
        assert_eq!(
            schema.fields,
            [
                FieldDef {
                    name: "id".to_string(),
                    ty: "int".to_string(),
                    comment: "Identifier".to_string(),
                },
                FieldDef {
                    name: "name".to_string(),
                    ty: "string".to_string(),
                    comment: "Display Name".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_extract_schema_missing_comment_is_empty() {
        let mut sheet = Sheet::new("Item").with_columns(["id", "name"]);
        sheet.push_row(row(&[("id", "int"), ("name", "string")]));
        sheet.push_row(row(&[("id", "Identifier")]));

        let schema = extract_schema(&sheet, &ExcludePrefix::disabled())
            .expect("should extract schema");
        assert_eq!(schema.fields[1].name, "name");
        assert_eq!(schema.fields[1].comment, "");
    }

    #[test]
    fn test_extract_schema_all_columns_dropped_yields_empty_fields() {
        let mut sheet = Sheet::new("Flags").with_columns(["tmp_a", "tmp_b"]);
        sheet.push_row(row(&[("tmp_a", "int"), ("tmp_b", "int")]));
        sheet.push_row(row(&[]));

        let schema = extract_schema(&sheet, &ExcludePrefix::new("tmp_"))
            .expect("empty schema is still a schema");
        assert!(schema.fields.is_empty());
        assert_eq!(schema.type_name(), "FlagsConfig");
    }

    #[test]
    fn test_extract_schema_type_tokens_verbatim() {
        let mut sheet = Sheet::new("Loot").with_columns(["drops"]);
        sheet.push_row(row(&[("drops", "List<int>")]));
        sheet.push_row(row(&[("drops", "Drop table")]));

        let schema = extract_schema(&sheet, &ExcludePrefix::disabled())
            .expect("should extract schema");
        assert_eq!(schema.fields[0].ty, "List<int>");
    }

    #[test]
    fn test_generated_type_name() {
        assert_eq!(generated_type_name("Item"), "ItemConfig");
        assert_eq!(generated_type_name("道具"), "道具Config");
        assert_eq!(generated_type_name(""), "Config");
    }

    #[test]
    fn test_field_def_serializes_type_key() {
        let field = FieldDef {
            name: "id".to_string(),
            ty: "int".to_string(),
            comment: "Identifier".to_string(),
        };
        let json = serde_json::to_value(&field).expect("should serialize");
        assert_eq!(json["type"], "int");
        assert_eq!(json["name"], "id");
    }
}
