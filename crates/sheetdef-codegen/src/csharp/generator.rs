//! Whole-workbook C# definition generation.

use tracing::{debug, info};

use sheetdef_core::{ExcludePrefix, OriginName, Result, Workbook};

use crate::schema::{self, SheetSchema};
use crate::template_engine::TemplateEngine;

use super::types::{
    ClassContext, ContainerContext, ContainerMemberContext, FieldContext, FileContext,
};

/// Generator identity written into the output banner.
const GENERATOR_ID: &str = concat!("sheetdef ", env!("CARGO_PKG_VERSION"));

/// Indent unit applied per nesting level inside a namespace wrapper.
const INDENT_UNIT: &str = "\t";

/// Options controlling one generation run.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Name-prefix exclusion, applied to sheet names and column names
    /// alike.
    pub exclude: ExcludePrefix,
    /// Namespace qualifier wrapping the generated blocks. `None` or an
    /// empty string emits no wrapper and no indentation.
    pub namespace: Option<String>,
}

/// Generates one C# source file from a workbook.
///
/// Each processable sheet becomes a plain class, every retained sheet
/// becomes a `List<T>` member of a single container class named after the
/// origin, and the whole output is optionally wrapped in a namespace.
/// Generation is deterministic: the same workbook, origin, and options
/// always render byte-identical output.
///
/// # Examples
///
/// ```
/// use sheetdef_codegen::{CSharpDefineGenerator, EmitOptions};
/// use sheetdef_core::{OriginName, Workbook};
///
/// let generator = CSharpDefineGenerator::new()?;
/// let origin = OriginName::new("items")?;
/// let source = generator.generate(&origin, &Workbook::new(), &EmitOptions::default())?;
/// assert!(source.contains("public class Items"));
/// assert!(source.ends_with("// End of auto generated code\n"));
/// # Ok::<(), sheetdef_core::Error>(())
/// ```
#[derive(Debug)]
pub struct CSharpDefineGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl CSharpDefineGenerator<'_> {
    /// Creates a generator with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Renders the complete generated source for `workbook`.
    ///
    /// Sheets that yield no schema (excluded by name, or fewer than two
    /// rows) emit no class block. Sheets excluded by name also drop out of
    /// the container; merely unprocessable ones keep their container
    /// member. The returned text always ends with the end-of-file marker
    /// and a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`sheetdef_core::Error::GenerationError`] when template
    /// rendering fails.
    pub fn generate(
        &self,
        origin: &OriginName,
        workbook: &Workbook,
        options: &EmitOptions,
    ) -> Result<String> {
        let namespace = effective_namespace(options);
        let indent = if namespace.is_some() { INDENT_UNIT } else { "" };

        info!(
            origin = %origin,
            sheets = workbook.sheet_count(),
            namespace = namespace.unwrap_or("<none>"),
            "generating C# definitions"
        );

        let mut body = String::new();
        for sheet in &workbook.sheets {
            let Some(sheet_schema) = schema::extract_schema(sheet, &options.exclude) else {
                debug!(sheet = %sheet.name, "no class block for sheet");
                continue;
            };
            body.push_str(&self.render_class(&sheet_schema, indent)?);
        }
        body.push_str(&self.render_container(origin, workbook, options, indent)?);

        let (namespace_open, namespace_close) = namespace_fragments(namespace);
        self.engine.render(
            "csharp/file",
            &FileContext {
                generator: GENERATOR_ID.to_string(),
                origin: origin.as_str().to_string(),
                namespace_open,
                namespace_close,
                body,
            },
        )
    }

    fn render_class(&self, sheet_schema: &SheetSchema, indent: &str) -> Result<String> {
        debug!(
            sheet = %sheet_schema.sheet_name,
            fields = sheet_schema.fields.len(),
            "rendering class block"
        );
        let fields = sheet_schema
            .fields
            .iter()
            .map(|field| FieldContext {
                name: field.name.clone(),
                field_type: field.ty.clone(),
                comment: field.comment.clone(),
            })
            .collect();
        self.engine.render(
            "csharp/class",
            &ClassContext {
                indent: indent.to_string(),
                type_name: sheet_schema.type_name(),
                fields,
            },
        )
    }

    fn render_container(
        &self,
        origin: &OriginName,
        workbook: &Workbook,
        options: &EmitOptions,
        indent: &str,
    ) -> Result<String> {
        // Membership is decided by name exclusion alone; a sheet too short
        // to produce a class still gets its collection member.
        let members: Vec<ContainerMemberContext> = workbook
            .sheets
            .iter()
            .filter(|sheet| !options.exclude.excludes(&sheet.name))
            .map(|sheet| ContainerMemberContext {
                name: sheet.name.clone(),
                element_type: schema::generated_type_name(&sheet.name),
            })
            .collect();
        debug!(members = members.len(), "rendering container block");
        self.engine.render(
            "csharp/container",
            &ContainerContext {
                indent: indent.to_string(),
                type_name: origin.container_name(),
                members,
            },
        )
    }
}

fn effective_namespace(options: &EmitOptions) -> Option<&str> {
    options
        .namespace
        .as_deref()
        .map(str::trim)
        .filter(|namespace| !namespace.is_empty())
}

fn namespace_fragments(namespace: Option<&str>) -> (String, String) {
    namespace.map_or_else(
        || (String::new(), String::new()),
        |qualifier| (format!("namespace {qualifier}\n{{\n"), "}\n".to_string()),
    )
}
