//! Workbook loading for the sheetdef schema compiler.
//!
//! Reads `.xlsx`/`.xlsm`/`.xls`/`.ods` files into the in-memory
//! [`Workbook`](sheetdef_core::Workbook) model consumed by code generation:
//! the first row of each worksheet supplies the column names, every row
//! below it becomes a column-keyed map of cell strings.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod excel;

pub use excel::{SUPPORTED_EXTENSIONS, load_workbook, origin_from_path};
