//! Template stores.
//!
//! [`InMemoryStore`] holds the built-in stubs; [`FileSystemStore`] reads a
//! project's stub directory and falls back to an in-memory store for ids the
//! project does not override.

mod filesystem;
mod memory;

pub use filesystem::FileSystemStore;
pub use memory::InMemoryStore;
