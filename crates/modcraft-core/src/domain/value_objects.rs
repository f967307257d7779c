//! Domain value objects: ArtifactKind, TemplateId, YesNo, EnvironmentMode.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! Every per-kind convention (sub-tree, suffix, template) is answered by a
//! `match` on the kind so adding a kind is a compile-error-guided change.
//!
//! # Adding New Kinds
//!
//! 1. Add the enum variant to `ArtifactKind`
//! 2. Fill in the `as_str`, `subtree`, `strip_word`, `class_suffix` and
//!    `template` arms
//! 3. Add a built-in stub in `modcraft-adapters`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default file extension of generated artifacts.
pub const DEFAULT_EXTENSION: &str = "php";

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// Everything the tool knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Module,
    Controller,
    Model,
    Event,
    Listener,
    Job,
    Migration,
    HttpRequest,
    HttpResource,
    DomainCollection,
    Factory,
    Seeder,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 12] = [
        Self::Module,
        Self::Controller,
        Self::Model,
        Self::Event,
        Self::Listener,
        Self::Job,
        Self::Migration,
        Self::HttpRequest,
        Self::HttpResource,
        Self::DomainCollection,
        Self::Factory,
        Self::Seeder,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Event => "event",
            Self::Listener => "listener",
            Self::Job => "job",
            Self::Migration => "migration",
            Self::HttpRequest => "http-request",
            Self::HttpResource => "http-resource",
            Self::DomainCollection => "domain-collection",
            Self::Factory => "factory",
            Self::Seeder => "seeder",
        }
    }

    /// Sub-tree below the module root, `/`-separated. Empty for `Module`.
    pub const fn subtree(&self) -> &'static str {
        match self {
            Self::Module => "",
            Self::Controller => "app/Http/Controllers",
            Self::Model => "app/Models",
            Self::Event => "app/Events",
            Self::Listener => "app/Listeners",
            Self::Job => "app/Jobs",
            Self::Migration => "database/migrations",
            Self::HttpRequest => "app/Http/Requests",
            Self::HttpResource => "app/Http/Resources",
            Self::DomainCollection => "domain/Collections",
            Self::Factory => "database/factories",
            Self::Seeder => "database/seeders",
        }
    }

    /// Word removed from the entity name before normalization.
    pub const fn strip_word(&self) -> Option<&'static str> {
        match self {
            Self::Controller => Some("Controller"),
            Self::Model => Some("Model"),
            Self::HttpRequest => Some("Request"),
            Self::HttpResource => Some("Resource"),
            Self::DomainCollection => Some("Collection"),
            Self::Factory => Some("Factory"),
            Self::Seeder => Some("Seeder"),
            _ => None,
        }
    }

    /// Word appended to the normalized entity name to form the class name.
    pub const fn class_suffix(&self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::HttpRequest => "Request",
            Self::HttpResource => "Resource",
            Self::DomainCollection => "Collection",
            Self::Factory => "Factory",
            Self::Seeder => "Seeder",
            _ => "",
        }
    }

    /// Template rendered for the primary file of this kind.
    pub const fn template(&self) -> Option<TemplateId> {
        match self {
            Self::Module => None,
            Self::Controller => Some(TemplateId::Controller),
            Self::Model => Some(TemplateId::Model),
            Self::Event => Some(TemplateId::Event),
            Self::Listener => Some(TemplateId::Listener),
            Self::Job => Some(TemplateId::Job),
            Self::Migration => Some(TemplateId::Migration),
            Self::HttpRequest => Some(TemplateId::Request),
            Self::HttpResource => Some(TemplateId::Resource),
            Self::DomainCollection => Some(TemplateId::DomainCollection),
            Self::Factory => Some(TemplateId::Factory),
            Self::Seeder => Some(TemplateId::Seeder),
        }
    }

    /// Whether an optional sub-directory below the sub-tree is offered.
    pub const fn accepts_sub_directory(&self) -> bool {
        matches!(
            self,
            Self::Controller
                | Self::Model
                | Self::Event
                | Self::Listener
                | Self::HttpRequest
                | Self::HttpResource
                | Self::DomainCollection
        )
    }

    /// Whether creating this kind may cascade into dependent artifacts.
    pub const fn cascades(&self) -> bool {
        matches!(self, Self::Model | Self::Event)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lowered)
            .ok_or_else(|| DomainError::UnknownArtifactKind(s.to_string()))
    }
}

// ── TemplateId ───────────────────────────────────────────────────────────────

/// Identifier of a stub body in the template store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateId {
    Controller,
    Model,
    Event,
    Listener,
    Job,
    Migration,
    Request,
    Resource,
    DomainCollection,
    Factory,
    Seeder,
    ModuleConfig,
    RouteWeb,
    RouteApi,
    RouteServiceProvider,
    EventServiceProvider,
    ModuleServiceProvider,
}

impl TemplateId {
    pub const ALL: [TemplateId; 17] = [
        Self::Controller,
        Self::Model,
        Self::Event,
        Self::Listener,
        Self::Job,
        Self::Migration,
        Self::Request,
        Self::Resource,
        Self::DomainCollection,
        Self::Factory,
        Self::Seeder,
        Self::ModuleConfig,
        Self::RouteWeb,
        Self::RouteApi,
        Self::RouteServiceProvider,
        Self::EventServiceProvider,
        Self::ModuleServiceProvider,
    ];

    /// Store key; file stores append `.stub`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "module-controller.api",
            Self::Model => "model",
            Self::Event => "event",
            Self::Listener => "event-listener",
            Self::Job => "job.queued",
            Self::Migration => "migration.create",
            Self::Request => "request",
            Self::Resource => "resource",
            Self::DomainCollection => "module-resource-collection",
            Self::Factory => "module-factory",
            Self::Seeder => "module-seeder",
            Self::ModuleConfig => "module-config",
            Self::RouteWeb => "module-route-web",
            Self::RouteApi => "module-route-api",
            Self::RouteServiceProvider => "module-route-service-provider",
            Self::EventServiceProvider => "module-event-service-provider",
            Self::ModuleServiceProvider => "module-service-provider",
        }
    }

    /// Stub file name, e.g. `model.stub`.
    pub fn file_name(&self) -> String {
        format!("{}.stub", self.as_str())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_end_matches(".stub");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| DomainError::UnknownArtifactKind(format!("template {s}")))
    }
}

// ── YesNo ────────────────────────────────────────────────────────────────────

/// A yes/no answer, decided once by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
    Invalid,
}

impl YesNo {
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Self::Yes,
            "n" | "no" => Self::No,
            _ => Self::Invalid,
        }
    }

    /// Collapse to a boolean, rejecting `Invalid`.
    pub fn into_bool(self, question: &str, answer: &str) -> Result<bool, DomainError> {
        match self {
            Self::Yes => Ok(true),
            Self::No => Ok(false),
            Self::Invalid => Err(DomainError::InvalidChoice {
                question: question.to_string(),
                answer: answer.to_string(),
            }),
        }
    }
}

// ── EnvironmentMode ──────────────────────────────────────────────────────────

/// Execution mode of the host project. Registry wiring and dependency
/// refresh for new modules only happen in `Development`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    Development,
    #[default]
    Production,
}

impl EnvironmentMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub const fn wires_registries(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(DomainError::UnknownEnvironment(other.to_string())),
        }
    }
}

// ── ModelExtra ───────────────────────────────────────────────────────────────

/// Dependents that can be generated alongside a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelExtra {
    Migration,
    Factory,
    Seeder,
    Controller,
}

impl ModelExtra {
    pub const ALL: [ModelExtra; 4] = [
        Self::Migration,
        Self::Factory,
        Self::Seeder,
        Self::Controller,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Migration => "Migration",
            Self::Factory => "Factory",
            Self::Seeder => "Seeder",
            Self::Controller => "Controller",
        }
    }
}
