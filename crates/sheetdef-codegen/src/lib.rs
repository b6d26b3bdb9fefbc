//! Code generation for the sheetdef schema compiler.
//!
//! This crate turns an in-memory [`sheetdef_core::Workbook`] into C#
//! source text. The pipeline has two stages: [`extract_schema`] reads the
//! first two rows of each sheet into an ordered field list, and
//! [`CSharpDefineGenerator`] renders those schemas through Handlebars
//! templates into one definition file per workbook.
//!
//! # Examples
//!
//! ```
//! use sheetdef_codegen::{CSharpDefineGenerator, EmitOptions};
//! use sheetdef_core::{OriginName, Row, Sheet, Workbook};
//!
//! let mut sheet = Sheet::new("Item").with_columns(["id"]);
//! sheet.push_row(Row::from([("id".to_string(), "int".to_string())]));
//! sheet.push_row(Row::from([("id".to_string(), "Identifier".to_string())]));
//! let workbook = Workbook { sheets: vec![sheet] };
//!
//! let generator = CSharpDefineGenerator::new()?;
//! let origin = OriginName::new("items")?;
//! let source = generator.generate(&origin, &workbook, &EmitOptions::default())?;
//!
//! assert!(source.contains("public class ItemConfig"));
//! assert!(source.contains("public List<ItemConfig> Item = new();"));
//! # Ok::<(), sheetdef_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod csharp;
mod schema;
mod template_engine;

pub use csharp::{CSharpDefineGenerator, EmitOptions};
pub use schema::{FieldDef, GENERATED_TYPE_SUFFIX, SheetSchema, extract_schema, generated_type_name};
pub use template_engine::TemplateEngine;
