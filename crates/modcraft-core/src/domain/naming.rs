//! Identifier normalization.
//!
//! Turns free-text answers (module, entity, sub-directory) into the canonical
//! segments used for both file paths and namespaces. Capitalization is
//! first-letter only: `invoiceLine` becomes `InvoiceLine`, `invoice line`
//! becomes `Invoice line`. There is no word splitting here on purpose, the
//! generated names must match what the operator typed.

use std::fmt;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// A single normalized path/namespace component.
///
/// Invariant: non-empty, first character upper-cased when it has an upper
/// case form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalSegment(String);

impl CanonicalSegment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalSegment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stateless normalization rules.
pub struct NameNormalizer;

impl NameNormalizer {
    /// Normalize a required identifier, removing every occurrence of
    /// `kind_suffix` (case-insensitive) before capitalizing.
    ///
    /// ```
    /// use modcraft_core::domain::NameNormalizer;
    ///
    /// let seg = NameNormalizer::normalize("invoiceController", Some("Controller")).unwrap();
    /// assert_eq!(seg.as_str(), "Invoice");
    /// ```
    pub fn normalize(raw: &str, kind_suffix: Option<&str>) -> Result<CanonicalSegment, DomainError> {
        Self::normalize_field("name", raw, kind_suffix)
    }

    /// Same as [`Self::normalize`], naming `field` in the error.
    pub fn normalize_field(
        field: &'static str,
        raw: &str,
        kind_suffix: Option<&str>,
    ) -> Result<CanonicalSegment, DomainError> {
        let word = kind_suffix.filter(|w| !w.is_empty());
        let mut current = raw.trim().to_string();

        // Capitalizing can create a new match (`ſeeder` -> `Seeder`), so
        // repeat until the result is a fixed point.
        loop {
            let stripped = match word {
                Some(word) => strip_all_ignore_case(&current, word),
                None => current.clone(),
            };
            let stripped = stripped.trim();
            if stripped.is_empty() {
                return Err(DomainError::InvalidIdentifier { field });
            }

            let next = ucfirst(stripped);
            if next == current {
                return Ok(CanonicalSegment(next));
            }
            current = next;
        }
    }

    /// Normalize an entity name. The result becomes a file stem and a class
    /// name, so it must be a single path component.
    pub fn entity_name(
        raw: &str,
        kind_suffix: Option<&str>,
    ) -> Result<CanonicalSegment, DomainError> {
        let segment = Self::normalize_field("entity name", raw, kind_suffix)?;
        if let Some(reason) = path_syntax(segment.as_str()) {
            return Err(DomainError::InvalidEntityName {
                name: segment.into_string(),
                reason: format!("entity names {reason}"),
            });
        }
        Ok(segment)
    }

    /// Normalize a module name. Module names become a single directory under
    /// the modules root, so separators and dot segments are rejected.
    pub fn module_name(raw: &str) -> Result<CanonicalSegment, DomainError> {
        let segment = Self::normalize_field("module name", raw, None)?;
        if let Some(reason) = path_syntax(segment.as_str()) {
            return Err(DomainError::InvalidModuleName {
                name: segment.into_string(),
                reason: format!("module names {reason}"),
            });
        }
        Ok(segment)
    }

    /// Derive a migration table name from an entity name.
    ///
    /// `UserProfile` → `user_profiles`, `Tag` → `tags`, `Cats` → `cats`.
    pub fn table_name(entity: &str) -> Result<String, DomainError> {
        let entity = entity.trim();
        if entity.is_empty() {
            return Err(DomainError::InvalidIdentifier {
                field: "table name",
            });
        }

        let mut snake = String::with_capacity(entity.len() + 4);
        let mut previous: Option<char> = None;
        for c in entity.chars() {
            if let Some(p) = previous {
                if p.is_lowercase() && c.is_uppercase() {
                    snake.push('_');
                }
            }
            snake.push(c);
            previous = Some(c);
        }

        let mut table = snake.to_lowercase();
        if !table.ends_with('s') {
            table.push('s');
        }
        Ok(table)
    }
}

/// Capitalize the first character, leaving the rest untouched.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Why `name` cannot be used as a single path component, if it cannot.
fn path_syntax(name: &str) -> Option<&'static str> {
    if name.contains(['/', '\\']) {
        Some("cannot contain path separators")
    } else if name.starts_with('.') {
        Some("cannot start with '.'")
    } else {
        None
    }
}

/// Remove every case-insensitive occurrence of `word` from `s`, repeating
/// until none is left (`ReqRequestuest` loses both).
///
/// ASCII case folding keeps byte offsets aligned with the original string.
fn strip_all_ignore_case(s: &str, word: &str) -> String {
    let needle = word.to_ascii_lowercase();
    let mut out = s.to_string();

    while let Some(start) = out.to_ascii_lowercase().find(&needle) {
        out.replace_range(start..start + needle.len(), "");
    }
    out
}

// ── Sub-directory ────────────────────────────────────────────────────────────

/// An optional sub-directory chain below an artifact kind's sub-tree.
///
/// Absence is modelled as `Option<SubDirectory>`; every non-empty answer is a
/// literal (the string `"0"` included).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubDirectory {
    segments: Vec<CanonicalSegment>,
}

impl SubDirectory {
    /// Parse an operator answer. Empty or whitespace-only input is `None`.
    ///
    /// Both `/` and `\` split segments; each segment is capitalized.
    pub fn parse(raw: &str) -> Result<Option<Self>, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let mut segments = Vec::new();
        for part in trimmed.split(['/', '\\']) {
            let part = part.trim();
            if part.is_empty() {
                return Err(DomainError::InvalidSubDirectory {
                    value: raw.to_string(),
                    reason: "empty path segment".into(),
                });
            }
            if part == "." || part == ".." {
                return Err(DomainError::InvalidSubDirectory {
                    value: raw.to_string(),
                    reason: "relative segments are not allowed".into(),
                });
            }
            segments.push(CanonicalSegment(ucfirst(part)));
        }

        Ok(Some(Self { segments }))
    }

    pub fn segments(&self) -> &[CanonicalSegment] {
        &self.segments
    }

    /// The chain as a relative path, e.g. `Admin/Reports`.
    pub fn to_path(&self) -> PathBuf {
        self.segments.iter().map(CanonicalSegment::as_str).collect()
    }
}

impl fmt::Display for SubDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.segments.iter().map(CanonicalSegment::as_str).collect();
        f.write_str(&joined.join("/"))
    }
}
