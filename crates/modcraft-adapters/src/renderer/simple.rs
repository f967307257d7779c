//! Simple variable substitution renderer.

use modcraft_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, Template},
    error::ModcraftResult,
};
use tracing::{instrument, trace};

/// Renders `{{ key }}` placeholders in a single pass.
///
/// Unknown placeholders are left in place; substituted values are never
/// scanned again.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %template.id))]
    fn render(&self, template: &Template, context: &RenderContext) -> ModcraftResult<String> {
        if !template.source.contains_placeholder() {
            trace!("stub has no placeholders");
            return Ok(template.body().to_string());
        }
        Ok(context.render(template.body()))
    }
}
