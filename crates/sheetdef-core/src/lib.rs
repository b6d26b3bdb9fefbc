//! Core types for the sheetdef schema compiler.
//!
//! This crate provides the shared vocabulary of the workspace: the immutable
//! [`Workbook`] snapshot consumed by code generation, the validated domain
//! identifiers [`OriginName`] and [`ExcludePrefix`], the [`Error`] taxonomy,
//! and CLI support types.
//!
//! # Examples
//!
//! ```
//! use sheetdef_core::{ExcludePrefix, OriginName, Row, Sheet};
//!
//! let origin = OriginName::new("items")?;
//! assert_eq!(origin.container_name(), "Items");
//!
//! let mut sheet = Sheet::new("Item").with_columns(["id", "name"]);
//! assert!(sheet.header_rows().is_none());
//!
//! sheet.push_row(Row::from([
//!     ("id".to_string(), "int".to_string()),
//!     ("name".to_string(), "string".to_string()),
//! ]));
//! sheet.push_row(Row::from([("id".to_string(), "Identifier".to_string())]));
//! assert!(sheet.header_rows().is_some());
//!
//! let prefix = ExcludePrefix::new("tmp_");
//! assert!(prefix.excludes("tmp_scratch"));
//! # Ok::<(), sheetdef_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod error;
mod types;
mod workbook;

pub use error::{Error, Result};
pub use types::{ExcludePrefix, OriginName};
pub use workbook::{HeaderRows, Row, Sheet, Workbook};
