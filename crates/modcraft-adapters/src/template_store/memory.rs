//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use modcraft_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Template, TemplateId},
    error::ModcraftResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateId, Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> ModcraftResult<Self> {
        let store = Self::new();
        for template in builtin_templates::all_templates() {
            store.insert(template)?;
        }
        Ok(store)
    }

    /// Add or replace a template.
    pub fn insert(&self, template: Template) -> ModcraftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(template.id, template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: TemplateId) -> ModcraftResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(&id).cloned().ok_or_else(|| {
            ApplicationError::TemplateUnreadable {
                id: id.to_string(),
                reason: "not in store".into(),
            }
            .into()
        })
    }

    fn list(&self) -> ModcraftResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut templates: Vec<Template> = inner.values().cloned().collect();
        templates.sort_by_key(|t| t.id);
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcraft_core::domain::TemplateOrigin;

    #[test]
    fn builtin_store_covers_every_id() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), TemplateId::ALL.len());
        for id in TemplateId::ALL {
            assert_eq!(store.get(id).unwrap().origin, TemplateOrigin::BuiltIn);
        }
    }

    #[test]
    fn empty_store_reports_unreadable_template() {
        let err = InMemoryStore::new().get(TemplateId::Model).unwrap_err();
        assert!(err.to_string().contains("model"));
    }

    #[test]
    fn insert_replaces() {
        let store = InMemoryStore::new();
        store.insert(Template::builtin(TemplateId::Job, "a")).unwrap();
        store.insert(Template::builtin(TemplateId::Job, "b")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(TemplateId::Job).unwrap().body(), "b");
    }
}
