//! Render contexts for the built-in C# templates.
//!
//! Every field is precomputed by the generator so the templates stay pure
//! layout. Indent and namespace fragments live in the context rather than
//! in template logic, which keeps the emitted whitespace easy to audit.

use serde::Serialize;

/// Context for the `csharp/file` frame template.
#[derive(Debug, Clone, Serialize)]
pub struct FileContext {
    /// Generator identity and version written into the banner.
    pub generator: String,
    /// Origin name noted in the banner's "Generated from" line.
    pub origin: String,
    /// Namespace opener with its brace line, or empty when no namespace
    /// was requested.
    pub namespace_open: String,
    /// Namespace closing brace line, or empty.
    pub namespace_close: String,
    /// All class and container blocks, already rendered and concatenated.
    pub body: String,
}

/// Context for the `csharp/class` template, one sheet's class block.
#[derive(Debug, Clone, Serialize)]
pub struct ClassContext {
    /// Indent prefix applied to every line of the block.
    pub indent: String,
    /// Generated class name.
    pub type_name: String,
    /// Field lines in column order.
    pub fields: Vec<FieldContext>,
}

/// One field line of a class block.
#[derive(Debug, Clone, Serialize)]
pub struct FieldContext {
    /// Field name.
    pub name: String,
    /// C# type token, verbatim from the type row.
    pub field_type: String,
    /// Trailing line comment, possibly empty.
    pub comment: String,
}

/// Context for the `csharp/container` template.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerContext {
    /// Indent prefix applied to every line of the block.
    pub indent: String,
    /// Container class name.
    pub type_name: String,
    /// One collection member per retained sheet, in workbook order.
    pub members: Vec<ContainerMemberContext>,
}

/// One collection member of the container block.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerMemberContext {
    /// Member name, the sheet's own name.
    pub name: String,
    /// Collection element type, the sheet's generated class name.
    pub element_type: String,
}
