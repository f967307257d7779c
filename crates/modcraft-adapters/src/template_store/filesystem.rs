//! Stub directory store.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use modcraft_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Template, TemplateId},
    error::ModcraftResult,
};

use super::InMemoryStore;

/// Reads `<dir>/<id>.stub` on every lookup.
///
/// Stubs are read lazily so edits show up without restarting anything and a
/// broken stub only fails the commands that use it.
pub struct FileSystemStore {
    dir: PathBuf,
    fallback: Option<InMemoryStore>,
}

impl FileSystemStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback: None,
        }
    }

    /// Serve ids without a stub file from `fallback`.
    pub fn with_fallback(mut self, fallback: InMemoryStore) -> Self {
        self.fallback = Some(fallback);
        self
    }

    fn stub_path(&self, id: TemplateId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    /// Stub files directly inside the directory whose name maps to an id.
    fn local_stubs(&self) -> Vec<(TemplateId, PathBuf)> {
        if !self.dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable stub directory entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?;
                if !name.ends_with(".stub") {
                    return None;
                }
                match TemplateId::from_str(name) {
                    Ok(id) => Some((id, entry.path().to_path_buf())),
                    Err(_) => {
                        debug!(file = name, "ignoring stub with unknown id");
                        None
                    }
                }
            })
            .collect()
    }
}

impl TemplateStore for FileSystemStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn get(&self, id: TemplateId) -> ModcraftResult<Template> {
        let path = self.stub_path(id);
        if path.is_file() {
            let body = std::fs::read_to_string(&path).map_err(|e| {
                ApplicationError::TemplateUnreadable {
                    id: id.to_string(),
                    reason: format!("{}: {e}", path.display()),
                }
            })?;
            debug!(path = %path.display(), "loaded stub from disk");
            return Ok(Template::from_file(id, body, path));
        }

        match &self.fallback {
            Some(fallback) => fallback.get(id),
            None => Err(ApplicationError::TemplateUnreadable {
                id: id.to_string(),
                reason: format!("no stub at {}", path.display()),
            }
            .into()),
        }
    }

    fn list(&self) -> ModcraftResult<Vec<Template>> {
        let mut templates = Vec::new();
        for (id, _) in self.local_stubs() {
            templates.push(self.get(id)?);
        }

        if let Some(fallback) = &self.fallback {
            for template in fallback.list()? {
                if !templates.iter().any(|t| t.id == template.id) {
                    templates.push(template);
                }
            }
        }

        templates.sort_by_key(|t| t.id);
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcraft_core::domain::TemplateOrigin;

    #[test]
    fn disk_stub_overrides_builtin() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("model.stub"), "custom {{ class }}").unwrap();

        let store = FileSystemStore::new(tmp.path())
            .with_fallback(InMemoryStore::with_builtin().unwrap());

        let model = store.get(TemplateId::Model).unwrap();
        assert_eq!(model.body(), "custom {{ class }}");
        assert_eq!(
            model.origin,
            TemplateOrigin::File(tmp.path().join("model.stub"))
        );
        assert_eq!(
            store.get(TemplateId::Job).unwrap().origin,
            TemplateOrigin::BuiltIn
        );
    }

    #[test]
    fn missing_stub_without_fallback_is_unreadable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = FileSystemStore::new(tmp.path())
            .get(TemplateId::Event)
            .unwrap_err();
        assert!(err.to_string().contains("event"));
    }

    #[test]
    fn list_merges_and_ignores_unknown_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("event.stub"), "e").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "n").unwrap();
        std::fs::write(tmp.path().join("mystery.stub"), "m").unwrap();

        let only_disk = FileSystemStore::new(tmp.path()).list().unwrap();
        assert_eq!(only_disk.len(), 1);
        assert_eq!(only_disk[0].id, TemplateId::Event);

        let merged = FileSystemStore::new(tmp.path())
            .with_fallback(InMemoryStore::with_builtin().unwrap())
            .list()
            .unwrap();
        assert_eq!(merged.len(), TemplateId::ALL.len());
    }
}
