use std::path::{Path, PathBuf};

use crate::domain::{
    entities::namespace::{DEFAULT_NAMESPACE_ROOT, NamespacePath},
    value_objects::{ArtifactKind, DEFAULT_EXTENSION},
};

/// Where modules live and how generated files are named.
///
/// Built by the CLI from configuration; the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Project root (holds `composer.json`, `bootstrap/`, `modules/`).
    pub base_path: PathBuf,
    /// Directory under `base_path` containing one directory per module.
    pub modules_dir: PathBuf,
    /// First namespace segment of every module.
    pub namespace_root: String,
    /// Extension of generated source files, without the dot.
    pub extension: String,
}

impl Workspace {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            modules_dir: PathBuf::from("modules"),
            namespace_root: DEFAULT_NAMESPACE_ROOT.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_modules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = dir.into();
        self
    }

    pub fn with_namespace_root(mut self, root: impl Into<String>) -> Self {
        self.namespace_root = root.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Absolute (or base-relative) root of a module.
    pub fn module_root(&self, module: &str) -> PathBuf {
        self.base_path.join(&self.modules_dir).join(module)
    }

    /// Module path as written into the autoload map, always `/`-separated.
    pub fn module_relative(&self, module: &str) -> String {
        let dir = self.modules_dir.to_string_lossy().replace('\\', "/");
        format!("{}/{module}", dir.trim_end_matches('/'))
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }

    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.base_path.join(relative)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Resolved output of placement planning for one artifact.
///
/// Created per invocation, consumed once by rendering and writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTarget {
    pub kind: ArtifactKind,
    /// Normalized entity name without the class suffix (`Invoice`).
    pub entity_name: String,
    /// Generated type name (`InvoiceController`).
    pub class_name: String,
    pub namespace: NamespacePath,
    pub file_path: PathBuf,
    /// Directories that did not exist at planning time, outermost first.
    pub ensure_dirs: Vec<PathBuf>,
}

impl ScaffoldTarget {
    /// `Namespace\Class`
    pub fn qualified_class(&self) -> String {
        self.namespace.qualify(&self.class_name)
    }
}
