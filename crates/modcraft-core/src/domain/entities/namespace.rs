use std::fmt;

use crate::domain::{
    error::DomainError,
    naming::{NameNormalizer, ucfirst},
};

/// Separator used when a namespace is rendered into generated source.
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Root segment every module namespace starts with.
pub const DEFAULT_NAMESPACE_ROOT: &str = "Modules";

/// Fully-qualified namespace, kept as ordered segments.
///
/// `Display` renders with [`NAMESPACE_SEPARATOR`]; [`NamespacePath::join`]
/// renders with any other separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    /// Build `root . module . relative_dirs...`.
    ///
    /// Every entry of `relative_dirs` may itself be a `/` or `\` separated
    /// chain; separators are rewritten into namespace boundaries and each
    /// segment gets a capitalized first letter. Empty segments are dropped.
    pub fn resolve(
        root: &str,
        module_name: &str,
        relative_dirs: &[&str],
    ) -> Result<Self, DomainError> {
        let module = NameNormalizer::normalize_field("module name", module_name, None)?;

        let mut segments = Vec::with_capacity(relative_dirs.len() + 2);
        push_chain(&mut segments, root);
        segments.push(module.into_string());
        for dir in relative_dirs {
            push_chain(&mut segments, dir);
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn join(&self, separator: &str) -> String {
        self.segments.join(separator)
    }

    /// `Namespace\Class`
    pub fn qualify(&self, class_name: &str) -> String {
        format!("{self}{NAMESPACE_SEPARATOR}{class_name}")
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(NAMESPACE_SEPARATOR))
    }
}

fn push_chain(segments: &mut Vec<String>, chain: &str) {
    segments.extend(
        chain
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ucfirst),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_module_namespace() {
        let ns = NamespacePath::resolve("Modules", "billing", &["app/Http/Controllers"]).unwrap();
        assert_eq!(ns.to_string(), "Modules\\Billing\\App\\Http\\Controllers");
        assert_eq!(ns.join("."), "Modules.Billing.App.Http.Controllers");
    }

    #[test]
    fn rewrites_both_separators_and_keeps_order() {
        let ns =
            NamespacePath::resolve("Modules", "Shop", &["app/Events", "admin\\reports"]).unwrap();
        assert_eq!(
            ns.segments(),
            &["Modules", "Shop", "App", "Events", "Admin", "Reports"]
        );
    }

    #[test]
    fn empty_module_is_rejected() {
        assert!(NamespacePath::resolve("Modules", "  ", &[]).is_err());
    }

    #[test]
    fn qualified_class_name() {
        let ns = NamespacePath::resolve("Modules", "Shop", &["app/Events", "admin"]).unwrap();
        assert_eq!(
            ns.qualify("OrderPlaced"),
            "Modules\\Shop\\App\\Events\\Admin\\OrderPlaced"
        );
    }
}
