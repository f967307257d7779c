//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use modcraft_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ModcraftError, ModcraftResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModcraftResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_file(&self, path: &Path, content: &str) -> ModcraftResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => ApplicationError::ArtifactAlreadyExists {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => map_io_error(path, e, "create file"),
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ModcraftResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ModcraftResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ModcraftError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_file_refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Invoice.php");
        let fs = LocalFilesystem::new();

        fs.create_file(&path, "first").unwrap();
        let err = fs.create_file(&path, "second").unwrap_err();

        assert!(matches!(
            err,
            ModcraftError::Application(ApplicationError::ArtifactAlreadyExists { .. })
        ));
        assert_eq!(fs.read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn create_file_needs_parent_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .create_file(&tmp.path().join("missing/Invoice.php"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            ModcraftError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("composer.json");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "{}").unwrap();
        fs.write_file(&path, "{\"a\":1}").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "{\"a\":1}");
        assert!(fs.exists(&path));
        assert!(!fs.is_dir(&path));
    }
}
