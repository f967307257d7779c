//! Naming, placement and registry-patching rules for modcraft, plus the
//! orchestrator that applies them through ports.
//!
//! ```text
//!   modcraft-cli ──▶ application::ScaffoldService ──▶ domain (pure)
//!                         │
//!                         ▼ ports (Filesystem, TemplateStore, TemplateRenderer,
//!                           Clock, DependencyRefresher, Prompter)
//!                         ▲
//!   modcraft-adapters ────┘
//! ```
//!
//! ```rust,ignore
//! use modcraft_core::prelude::*;
//!
//! let service = ScaffoldService::new(store, renderer, filesystem, clock, refresher)
//!     .with_workspace(Workspace::new("."));
//! let report = service.create_controller(&ArtifactRequest::new("Billing", "Invoice"))?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The types most callers need.
pub mod prelude {
    pub use crate::application::{
        ArtifactRequest, EventRequest, Interview, MigrationRequest, ModelRequest, ModuleRequest,
        ScaffoldReport, ScaffoldService, TemplateService,
        ports::{
            Clock, DependencyRefresher, Filesystem, PromptSpec, Prompter, TemplateRenderer,
            TemplateStore,
        },
    };
    pub use crate::domain::{
        ArtifactKind, EnvironmentMode, ModelExtra, ModuleOptions, RenderContext, SubDirectory,
        Template, TemplateId, Workspace, YesNo,
    };
    pub use crate::error::{ModcraftError, ModcraftResult};
}
