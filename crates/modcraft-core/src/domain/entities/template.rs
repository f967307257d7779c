use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::TemplateId;

/// A stub body as supplied by a template store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub source: TemplateSource,
    pub origin: TemplateOrigin,
}

impl Template {
    pub fn builtin(id: TemplateId, body: &'static str) -> Self {
        Self {
            id,
            source: TemplateSource::Static(body),
            origin: TemplateOrigin::BuiltIn,
        }
    }

    pub fn from_file(id: TemplateId, body: String, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            source: TemplateSource::Owned(body),
            origin: TemplateOrigin::File(path.into()),
        }
    }

    pub fn body(&self) -> &str {
        self.source.as_str()
    }
}

/// Source of template content: either compile-time or runtime.
///
/// `Static` references binary data. `Owned` holds stubs read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string literal
    Static(&'static str),

    /// Runtime-owned string
    Owned(String),
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    /// Quick heuristic for stubs that carry at least one placeholder.
    pub fn contains_placeholder(&self) -> bool {
        let s = self.as_str();
        s.contains("{{") && s.contains("}}")
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

/// Where a stub came from, for `list` output and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    BuiltIn,
    File(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => f.write_str("built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
