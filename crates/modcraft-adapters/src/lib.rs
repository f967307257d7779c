//! Infrastructure adapters for modcraft.
//!
//! This crate implements the ports defined in `modcraft-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod clock;
pub mod filesystem;
pub mod prompter;
pub mod refresher;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::ScriptedPrompter;
pub use refresher::{CommandRefresher, DEFAULT_REFRESH_COMMAND, NoopRefresher};
pub use renderer::SimpleRenderer;
pub use template_store::{FileSystemStore, InMemoryStore};
