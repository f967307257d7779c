use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ScaffoldTarget,
    error::ModcraftResult,
};

/// Create-only writer for planned artifacts.
pub struct ArtifactWriter<'a> {
    fs: &'a dyn Filesystem,
}

/// What a successful write touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub created_dirs: Vec<PathBuf>,
    pub file: PathBuf,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Write `content` to the target path.
    ///
    /// An existing file is never touched: the call fails with
    /// `ArtifactAlreadyExists` before any directory is created.
    pub fn write(&self, target: &ScaffoldTarget, content: &str) -> ModcraftResult<WriteOutcome> {
        if self.fs.exists(&target.file_path) {
            return Err(ApplicationError::ArtifactAlreadyExists {
                path: target.file_path.clone(),
            }
            .into());
        }

        let mut created_dirs = Vec::new();
        for dir in &target.ensure_dirs {
            if !self.fs.exists(dir) {
                debug!(dir = %dir.display(), "Creating directory");
                self.fs.create_dir_all(dir)?;
                created_dirs.push(dir.clone());
            }
        }

        self.fs.create_file(&target.file_path, content)?;
        info!(path = %target.file_path.display(), kind = %target.kind, "Wrote artifact");

        Ok(WriteOutcome {
            created_dirs,
            file: target.file_path.clone(),
        })
    }
}
