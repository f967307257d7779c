use std::path::Path;

use tracing::info;

use crate::{
    application::{ApplicationError, ports::Filesystem, services::requests::PatchOutcome},
    domain::{DomainError, RegistryAnchor, RegistryEntry, TextPatch},
    error::{ModcraftError, ModcraftResult},
};

/// Read-modify-write of a registry file around its anchor.
pub struct RegistryPatcher<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> RegistryPatcher<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Insert `entry` after the last `anchor` token in `path`.
    ///
    /// Registering an entry that is already inside the block is a successful
    /// no-op; the file is not rewritten.
    pub fn patch(
        &self,
        path: &Path,
        anchor: &RegistryAnchor,
        entry: &RegistryEntry,
    ) -> ModcraftResult<PatchOutcome> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::RegistryNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.fs.read_to_string(path)?;
        let patch = anchor.apply(&content, entry).map_err(|e| match e {
            DomainError::AnchorNotFound { anchor, .. } => {
                ModcraftError::from(ApplicationError::AnchorNotFound {
                    path: path.to_path_buf(),
                    anchor: anchor.to_string(),
                })
            }
            other => other.into(),
        })?;

        match patch {
            TextPatch::AlreadyPresent => {
                info!(
                    registry = %path.display(),
                    key = %entry.dedupe_key(),
                    "Entry already registered, skipping"
                );
                Ok(PatchOutcome::AlreadyPresent)
            }
            TextPatch::Inserted(updated) => {
                self.fs.write_file(path, &updated)?;
                info!(registry = %path.display(), key = %entry.dedupe_key(), "Registered entry");
                Ok(PatchOutcome::Inserted)
            }
        }
    }
}
