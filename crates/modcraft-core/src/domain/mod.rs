// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for modcraft.
//!
//! Pure naming, placement and text-patching rules. All I/O (filesystem,
//! template store, clock, dependency refresh) is reached through ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or clock access
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    DEFAULT_NAMESPACE_ROOT, FIXED_DIRECTORIES, ModuleFile, ModuleLayout, ModuleOptions,
    NAMESPACE_SEPARATOR, NamespacePath, PROVIDERS_DIR, RegistryAnchor, RegistryEntry,
    RegistryKind, RenderContext, ScaffoldTarget, Template, TemplateOrigin, TemplateSource,
    TextPatch, Workspace,
};

pub use error::{DomainError, ErrorCategory};

pub use naming::{CanonicalSegment, NameNormalizer, SubDirectory};

pub use value_objects::{
    ArtifactKind, DEFAULT_EXTENSION, EnvironmentMode, ModelExtra, TemplateId, YesNo,
};

pub use validation::DomainValidator;
