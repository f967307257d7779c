//! Template Service - stub lookup and rendering.
//!
//! Separated from ScaffoldService so `modcraft list` can inspect the store
//! without building a whole orchestrator.

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{TemplateRenderer, TemplateStore},
    },
    domain::{RenderContext, Template, TemplateId},
    error::{ModcraftError, ModcraftResult},
};

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a stub by id. Any store failure becomes `TemplateUnreadable`.
    pub fn get(&self, id: TemplateId) -> ModcraftResult<Template> {
        self.store.get(id).map_err(|e| match e {
            ModcraftError::Application(ApplicationError::TemplateUnreadable { .. }) => e,
            other => ApplicationError::TemplateUnreadable {
                id: id.to_string(),
                reason: other.to_string(),
            }
            .into(),
        })
    }

    /// Load `id` and substitute `context` into it.
    pub fn render(
        &self,
        renderer: &dyn TemplateRenderer,
        id: TemplateId,
        context: &RenderContext,
    ) -> ModcraftResult<String> {
        let template = self.get(id)?;
        debug!(template = %id, origin = %template.origin, "Rendering template");
        renderer.render(&template, context)
    }

    /// List all stubs.
    pub fn list(&self) -> ModcraftResult<Vec<Template>> {
        self.store.list()
    }
}
