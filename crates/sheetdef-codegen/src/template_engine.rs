//! Template engine for code generation using Handlebars.
//!
//! The built-in templates shape the generated C# source: one frame for the
//! whole file, one block per sheet class, one block for the container
//! class. All whitespace the templates emit is deliberate; the generator
//! precomputes indent and namespace fragments so rendering stays a pure
//! text layout step.

use handlebars::Handlebars;
use serde::Serialize;

use sheetdef_core::{Error, Result};

/// Template engine wrapping Handlebars with the built-in templates
/// registered.
///
/// Strict mode is on, so a missing context field is a render error rather
/// than silent empty output. HTML escaping is off because the rendered
/// text is C# source; `<`, `>` and `&` in type tokens and comments must
/// pass through verbatim.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails, which should not
    /// happen with the compiled-in templates.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing context fields
        handlebars.set_strict_mode(true);
        // Rendered output is source code, never markup
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_builtin_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_builtin_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        let builtins = [
            ("csharp/file", include_str!("../templates/csharp/file.cs.hbs")),
            (
                "csharp/class",
                include_str!("../templates/csharp/class.cs.hbs"),
            ),
            (
                "csharp/container",
                include_str!("../templates/csharp/container.cs.hbs"),
            ),
        ];
        for (name, template) in builtins {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| Error::GenerationError {
                    message: format!("failed to register built-in template '{name}'"),
                    source: Some(Box::new(e)),
                })?;
        }
        Ok(())
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or if rendering fails,
    /// for example when strict mode hits a missing context field.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::GenerationError {
                message: format!("template '{template_name}' rendering failed"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers an additional template under the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if the template string fails to parse.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::GenerationError {
                message: format!("failed to register template '{name}'"),
                source: Some(Box::new(e)),
            })
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new().expect("failed to create default TemplateEngine")
    }
}
