//! Application layer for modcraft.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Interview, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Naming, placement and patching rules live in `crate::domain`; this layer
//! sequences them against the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactRequest, EventRequest, Interview, MigrationRequest, ModelRequest, ModuleRequest,
    PatchOutcome, RegistryPatch, ScaffoldReport, ScaffoldService, ScaffoldState, SkippedArtifact,
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Clock, DependencyRefresher, Filesystem, PromptSpec, Prompter, TemplateRenderer, TemplateStore,
};

pub use error::ApplicationError;
