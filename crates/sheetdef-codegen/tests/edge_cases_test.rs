//! Edge cases for C# generation: unusual names, characters, and shapes
//! that must pass through verbatim or degrade without errors.

use sheetdef_codegen::{CSharpDefineGenerator, EmitOptions, extract_schema, generated_type_name};
use sheetdef_core::{ExcludePrefix, OriginName, Row, Sheet, Workbook};

fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|&(column, value)| (column.to_string(), value.to_string()))
        .collect()
}

fn sheet_with_header(name: &str, columns: &[(&str, &str, &str)]) -> Sheet {
    let mut sheet =
        Sheet::new(name).with_columns(columns.iter().map(|&(column, _, _)| column));
    sheet.push_row(
        columns
            .iter()
            .map(|&(column, ty, _)| (column.to_string(), ty.to_string()))
            .collect(),
    );
    sheet.push_row(
        columns
            .iter()
            .map(|&(column, _, comment)| (column.to_string(), comment.to_string()))
            .collect(),
    );
    sheet
}

fn generate(workbook: &Workbook, options: &EmitOptions) -> String {
    let generator = CSharpDefineGenerator::new().expect("should create generator");
    let origin = OriginName::new("items").expect("valid origin");
    generator
        .generate(&origin, workbook, options)
        .expect("should generate")
}

#[test]
fn test_unicode_sheet_and_comments_pass_through() {
    let sheet = sheet_with_header("道具", &[("id", "int", "编号"), ("名称", "string", "显示名称")]);
    let workbook = Workbook {
        sheets: vec![sheet],
    };

    let source = generate(&workbook, &EmitOptions::default());
    assert!(source.contains("public class 道具Config"));
    assert!(source.contains("public int id; // 编号"));
    assert!(source.contains("public string 名称; // 显示名称"));
    assert!(source.contains("public List<道具Config> 道具 = new();"));
}

#[test]
fn test_html_sensitive_characters_not_escaped() {
    let sheet = sheet_with_header(
        "Loot",
        &[
            ("drops", "Dictionary<int, float>", "id -> weight"),
            ("rule", "string", "\"gold\" & <rare> items"),
        ],
    );
    let workbook = Workbook {
        sheets: vec![sheet],
    };

    let source = generate(&workbook, &EmitOptions::default());
    assert!(source.contains("public Dictionary<int, float> drops; // id -> weight"));
    assert!(source.contains("public string rule; // \"gold\" & <rare> items"));
    assert!(!source.contains("&lt;"));
    assert!(!source.contains("&amp;"));
    assert!(!source.contains("&quot;"));
}

#[test]
fn test_array_and_generic_type_tokens_verbatim() {
    let sheet = sheet_with_header(
        "Stage",
        &[
            ("waves", "int[]", "Wave sizes"),
            ("rewards", "List<List<int>>", "Grouped reward ids"),
        ],
    );
    let workbook = Workbook {
        sheets: vec![sheet],
    };

    let source = generate(&workbook, &EmitOptions::default());
    assert!(source.contains("public int[] waves; // Wave sizes"));
    assert!(source.contains("public List<List<int>> rewards; // Grouped reward ids"));
}

#[test]
fn test_long_comment_stays_on_one_line() {
    let comment = "a".repeat(500);
    let sheet = sheet_with_header("Item", &[("id", "int", comment.as_str())]);
    let workbook = Workbook {
        sheets: vec![sheet],
    };

    let source = generate(&workbook, &EmitOptions::default());
    let line = source
        .lines()
        .find(|line| line.contains("public int id;"))
        .expect("field line present");
    assert!(line.ends_with(&format!("// {comment}")));
}

#[test]
fn test_prefix_excluding_every_sheet_leaves_empty_container() {
    let workbook = Workbook {
        sheets: vec![
            sheet_with_header("tmp_A", &[("id", "int", "")]),
            sheet_with_header("tmp_B", &[("id", "int", "")]),
        ],
    };
    let options = EmitOptions {
        exclude: ExcludePrefix::new("tmp_"),
        ..EmitOptions::default()
    };

    let source = generate(&workbook, &options);
    assert!(!source.contains("tmp_"));
    assert!(source.contains("public class Items\n{\n}\n"));
}

#[test]
fn test_duplicate_sheet_names_render_independently() {
    // Garbage in, deterministic garbage out: duplicates each get a class
    // block and a container member, in workbook order.
    let workbook = Workbook {
        sheets: vec![
            sheet_with_header("Item", &[("id", "int", "first")]),
            sheet_with_header("Item", &[("id", "int", "second")]),
        ],
    };

    let source = generate(&workbook, &EmitOptions::default());
    assert_eq!(source.matches("public class ItemConfig\n").count(), 2);
    assert_eq!(
        source.matches("public List<ItemConfig> Item = new();").count(),
        2
    );
}

#[test]
fn test_many_columns_preserve_order() {
    let columns: Vec<String> = (0..64).map(|i| format!("col{i:02}")).collect();
    let mut sheet = Sheet::new("Wide").with_columns(columns.clone());
    sheet.push_row(
        columns
            .iter()
            .map(|column| (column.clone(), "int".to_string()))
            .collect(),
    );
    sheet.push_row(Row::new());
    let workbook = Workbook {
        sheets: vec![sheet],
    };

    let source = generate(&workbook, &EmitOptions::default());
    let mut last = 0;
    for column in &columns {
        let pos = source
            .find(&format!("public int {column};"))
            .expect("column present");
        assert!(pos > last, "column {column} out of order");
        last = pos;
    }
}

#[test]
fn test_namespace_with_dots_passes_verbatim() {
    let options = EmitOptions {
        namespace: Some("Company.Product.Generated".to_string()),
        ..EmitOptions::default()
    };
    let source = generate(&Workbook::new(), &options);
    assert!(source.contains("namespace Company.Product.Generated\n{"));
}

#[test]
fn test_whitespace_around_namespace_is_trimmed() {
    let options = EmitOptions {
        namespace: Some("  Game.Data  ".to_string()),
        ..EmitOptions::default()
    };
    let source = generate(&Workbook::new(), &options);
    assert!(source.contains("namespace Game.Data\n{"));
}

#[test]
fn test_extract_schema_does_not_read_data_rows() {
    let mut sheet = sheet_with_header("Item", &[("id", "int", "Identifier")]);
    // Data rows below the header carry arbitrary sample values.
    sheet.push_row(row(&[("id", "definitely not a type")]));
    sheet.push_row(row(&[("id", "")]));

    let schema =
        extract_schema(&sheet, &ExcludePrefix::disabled()).expect("should extract schema");
    assert_eq!(schema.fields.len(), 1);
    assert_eq!(schema.fields[0].ty, "int");
}

#[test]
fn test_generated_type_name_suffix_applies_to_odd_names() {
    assert_eq!(generated_type_name("tmp"), "tmpConfig");
    assert_eq!(generated_type_name("Item Drop"), "Item DropConfig");
    assert_eq!(generated_type_name("2024"), "2024Config");
}

#[test]
fn test_single_character_origin() {
    let generator = CSharpDefineGenerator::new().expect("should create generator");
    let origin = OriginName::new("x").expect("valid origin");
    let source = generator
        .generate(&origin, &Workbook::new(), &EmitOptions::default())
        .expect("should generate");

    assert!(source.contains("public class X\n"));
    assert!(source.contains("// Generated from x.xlsx"));
}
