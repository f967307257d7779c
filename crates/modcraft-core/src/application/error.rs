//! Application layer errors.
//!
//! These errors describe the state of the workspace on disk and of the
//! collaborators, not naming rules. Naming and registry text errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffold orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Every command except module creation needs the module to exist.
    #[error("Module not found: {}", path.display())]
    ModuleNotFound { path: PathBuf },

    #[error("Module already exists: {}", path.display())]
    ModuleAlreadyExists { path: PathBuf },

    /// The writer never overwrites.
    #[error("Artifact already exists: {}", path.display())]
    ArtifactAlreadyExists { path: PathBuf },

    #[error("Template '{id}' could not be read: {reason}")]
    TemplateUnreadable { id: String, reason: String },

    #[error("Registry file not found: {}", path.display())]
    RegistryNotFound { path: PathBuf },

    #[error("Anchor '{anchor}' not found in {}", path.display())]
    AnchorNotFound { path: PathBuf, anchor: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    #[error("Dependency refresh '{command}' failed: {reason}")]
    RefreshFailed { command: String, reason: String },

    #[error("Could not read answer: {reason}")]
    PromptFailed { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModuleNotFound { path } => vec![
                format!("No module directory at {}", path.display()),
                "Create it first with: modcraft module".into(),
                "Check paths.base and paths.modules_dir with: modcraft config list".into(),
            ],
            Self::ModuleAlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different module name".into(),
            ],
            Self::ArtifactAlreadyExists { path } => vec![
                format!("Existing file left untouched: {}", path.display()),
                "Choose a different name or sub-directory".into(),
            ],
            Self::TemplateUnreadable { id, .. } => vec![
                format!("Missing or unreadable stub: {id}.stub"),
                "Check paths.stubs_dir, or remove it to use the built-in stubs".into(),
            ],
            Self::RegistryNotFound { path } => vec![
                format!("Expected registry file at {}", path.display()),
                "Restore the file, then re-run the command".into(),
            ],
            Self::AnchorNotFound { anchor, .. } => vec![
                format!("The registry no longer contains '{anchor}'"),
                "Restore the anchor by hand, then re-run the command".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::RefreshFailed { command, .. } => vec![
                format!("Run '{command}' by hand"),
                "Set environment.refresh_command to change the command".into(),
            ],
            Self::PromptFailed { .. } => vec!["Answer every prompt, or pipe answers on stdin".into()],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModuleNotFound { .. } | Self::TemplateUnreadable { .. } => {
                ErrorCategory::NotFound
            }
            Self::ModuleAlreadyExists { .. } | Self::ArtifactAlreadyExists { .. } => {
                ErrorCategory::Conflict
            }
            Self::RegistryNotFound { .. } | Self::AnchorNotFound { .. } => ErrorCategory::Registry,
            Self::PromptFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RefreshFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
