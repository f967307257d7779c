// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("{field} is required and cannot be empty")]
    InvalidIdentifier { field: &'static str },

    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("Invalid sub-directory '{value}': {reason}")]
    InvalidSubDirectory { value: String, reason: String },

    #[error("Planned path {path} is outside module {module_root}")]
    OutsideModule { path: String, module_root: String },

    #[error("Expected a yes/no answer for '{question}', got '{answer}'")]
    InvalidChoice { question: String, answer: String },

    #[error("Unknown artifact kind: {0}")]
    UnknownArtifactKind(String),

    #[error("Unknown environment mode: {0}")]
    UnknownEnvironment(String),

    // ========================================================================
    // Registry Text Errors
    // ========================================================================
    #[error("Anchor '{anchor}' not found in {registry}")]
    AnchorNotFound {
        registry: &'static str,
        anchor: &'static str,
    },

    #[error("Block pattern for {registry} is invalid: {message}")]
    InvalidPattern {
        registry: &'static str,
        message: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { field } => vec![
                format!("Provide a non-empty {field}"),
                "Whitespace-only answers are treated as empty".into(),
            ],
            Self::InvalidModuleName { name, reason } => vec![
                format!("Module name '{name}' is invalid: {reason}"),
                "Use letters and digits, e.g. Billing or Inventory".into(),
            ],
            Self::InvalidEntityName { reason, .. } => vec![
                format!("Name rejected: {reason}"),
                "Give a bare class name such as Invoice; use the sub-directory answer for nesting"
                    .into(),
            ],
            Self::OutsideModule { module_root, .. } => vec![
                format!("Generated files must stay under {module_root}"),
                "Remove '..' or absolute parts from the answers".into(),
            ],
            Self::InvalidSubDirectory { reason, .. } => vec![
                format!("Sub-directory rejected: {reason}"),
                "Use a relative chain such as Admin or Admin/Reports".into(),
                "Leave the answer empty for no sub-directory".into(),
            ],
            Self::InvalidChoice { .. } => vec!["Answer with 'y'/'yes' or 'n'/'no'".into()],
            Self::UnknownArtifactKind(_) => vec!["Try: modcraft list".into()],
            Self::UnknownEnvironment(_) => {
                vec!["Valid modes are 'development' and 'production'".into()]
            }
            Self::AnchorNotFound { registry, anchor } => vec![
                format!("The registry file {registry} no longer contains '{anchor}'"),
                "Restore the anchor by hand, then re-run the command".into(),
            ],
            Self::InvalidPattern { .. } => vec!["This is a bug, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AnchorNotFound { .. } | Self::InvalidPattern { .. } => ErrorCategory::Registry,
            Self::UnknownArtifactKind(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Registry,
}
