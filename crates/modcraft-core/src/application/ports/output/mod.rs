//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modcraft-adapters` crate provides implementations.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::{RenderContext, Template, TemplateId, YesNo};
use crate::error::ModcraftResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modcraft_adapters::filesystem::LocalFilesystem` (production)
/// - `modcraft_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> ModcraftResult<()>;

    /// Create a new file. Fails with `ArtifactAlreadyExists` if anything
    /// already exists at `path`.
    fn create_file(&self, path: &Path, content: &str) -> ModcraftResult<()>;

    /// Replace the content of a file, creating it if needed.
    fn write_file(&self, path: &Path, content: &str) -> ModcraftResult<()>;

    fn read_to_string(&self, path: &Path) -> ModcraftResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for stub lookup.
///
/// Implemented by:
/// - `modcraft_adapters::template_store::InMemoryStore` (built-in stubs)
/// - `modcraft_adapters::template_store::FileSystemStore` (stub directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a stub by id.
    fn get(&self, id: TemplateId) -> ModcraftResult<Template>;

    /// List all available stubs.
    fn list(&self) -> ModcraftResult<Vec<Template>>;
}

/// Port for placeholder substitution.
///
/// Implemented by:
/// - `modcraft_adapters::renderer::SimpleRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &Template, context: &RenderContext) -> ModcraftResult<String>;
}

/// Port for the current local time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Port for the dependency refresh step run after a module is wired into the
/// autoload map.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyRefresher: Send + Sync {
    fn refresh(&self, project_root: &Path) -> ModcraftResult<()>;
}

/// One question put to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub label: String,
    pub hint: Option<String>,
    /// Empty answers are re-asked (or rejected) by the prompter.
    pub required: bool,
}

impl PromptSpec {
    pub fn required(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: None,
            required: true,
        }
    }

    pub fn optional(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: None,
            required: false,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Port for collecting operator answers.
///
/// Implementations own "required" validation: `ask` on a required spec never
/// returns an empty string.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&self, spec: &PromptSpec) -> ModcraftResult<String>;

    fn confirm(&self, spec: &PromptSpec) -> ModcraftResult<YesNo>;

    /// Indices of the selected `options`; `defaults` are pre-selected.
    fn select_many(
        &self,
        spec: &PromptSpec,
        options: &[String],
        defaults: &[usize],
    ) -> ModcraftResult<Vec<usize>>;
}
