//! Application services - orchestrate use cases.
//!
//! [`ScaffoldService`] drives every command. The smaller services it is
//! built from are public so the CLI can reuse them (`Interview` for the
//! question flow, `TemplateService` for `modcraft list`).

mod artifact_writer;
mod placement;
mod registry_patcher;

pub mod interview;
pub mod requests;
pub mod scaffold_service;
pub mod template_service;

pub use artifact_writer::{ArtifactWriter, WriteOutcome};
pub use interview::Interview;
pub use placement::{MIGRATION_TIMESTAMP, PlacementPlanner};
pub use registry_patcher::RegistryPatcher;
pub use requests::{
    ArtifactRequest, EventRequest, MigrationRequest, ModelRequest, ModuleRequest, PatchOutcome,
    RegistryPatch, ScaffoldReport, SkippedArtifact,
};
pub use scaffold_service::{ScaffoldService, ScaffoldState};
pub use template_service::TemplateService;
