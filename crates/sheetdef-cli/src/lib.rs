//! sheetdef CLI library.
//!
//! This library exposes the command implementations, formatters, and
//! encoded output writing of the `sheetdef` binary so they can be tested
//! and reused.

#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_collect)]
#![allow(clippy::unnecessary_wraps)]

pub mod commands;
pub mod formatters;
pub mod output;
