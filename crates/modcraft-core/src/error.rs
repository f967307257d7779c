//! Unified error handling for modcraft core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for modcraft core operations.
#[derive(Debug, Error, Clone)]
pub enum ModcraftError {
    /// Errors from the domain layer (invalid names, broken registry text).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem state, templates, refresh).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ModcraftError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Try: modcraft config list".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in modcraft".into(),
                "Please report this issue at: https://github.com/cosecruz/modcraft/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Registry => ErrorCategory::Registry,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Coarse grouping used by the CLI for styling and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A name or answer was rejected.
    Validation,
    /// A module, stub or registry file is missing.
    NotFound,
    /// The target already exists.
    Conflict,
    /// A registry file lacks its anchor.
    Registry,
    Configuration,
    Internal,
}

pub type ModcraftResult<T> = Result<T, ModcraftError>;
