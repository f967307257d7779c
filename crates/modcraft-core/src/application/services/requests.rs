//! Typed inputs and outputs of the scaffold operations.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{ArtifactKind, ModelExtra, ModuleOptions, RegistryKind, SubDirectory};

/// `modcraft module`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRequest {
    pub name: String,
    pub options: ModuleOptions,
    /// Patch the autoload map and provider list, then refresh dependencies.
    pub wire_registries: bool,
}

/// Any single-file artifact inside an existing module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub module: String,
    pub sub_directory: Option<SubDirectory>,
    pub name: String,
}

impl ArtifactRequest {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            sub_directory: None,
            name: name.into(),
        }
    }

    pub fn in_sub_directory(mut self, sub_directory: Option<SubDirectory>) -> Self {
        self.sub_directory = sub_directory;
        self
    }
}

/// `modcraft model`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub artifact: ArtifactRequest,
    pub extras: Vec<ModelExtra>,
}

/// `modcraft event`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRequest {
    pub artifact: ArtifactRequest,
    pub listener: Option<String>,
}

/// `modcraft migration`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    pub module: String,
    /// Entity or table name; snake-cased and pluralized.
    pub table: String,
}

/// Outcome of one registry patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchOutcome {
    Inserted,
    AlreadyPresent,
}

impl PatchOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryPatch {
    pub registry: RegistryKind,
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

/// A dependent artifact that was not written because it already existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

/// Everything one scaffold operation did, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub kind: ArtifactKind,
    pub module: String,
    pub created_dirs: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    pub skipped: Vec<SkippedArtifact>,
    pub registries: Vec<RegistryPatch>,
    pub refreshed: bool,
}

impl ScaffoldReport {
    pub fn new(kind: ArtifactKind, module: impl Into<String>) -> Self {
        Self {
            kind,
            module: module.into(),
            created_dirs: Vec::new(),
            written_files: Vec::new(),
            skipped: Vec::new(),
            registries: Vec::new(),
            refreshed: false,
        }
    }

    /// The file written for the requested artifact, if any.
    pub fn primary_file(&self) -> Option<&PathBuf> {
        self.written_files.first()
    }
}
