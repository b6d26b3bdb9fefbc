//! C# definition generation: one source file per workbook.

mod generator;
mod types;

pub use generator::{CSharpDefineGenerator, EmitOptions};
