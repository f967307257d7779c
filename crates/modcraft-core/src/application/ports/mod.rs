//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modcraft-adapters` (and the
//! prompt implementations in `modcraft-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Stub lookup
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `Clock`: Migration timestamps
//!   - `DependencyRefresher`: Autoload refresh after wiring a module
//!   - `Prompter`: Operator answers
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ScaffoldService` operations, invoked by the CLI

pub mod output;

pub use output::{
    Clock, DependencyRefresher, Filesystem, PromptSpec, Prompter, TemplateRenderer, TemplateStore,
};

#[cfg(test)]
pub use output::{
    MockClock, MockDependencyRefresher, MockFilesystem, MockPrompter, MockTemplateRenderer,
    MockTemplateStore,
};
