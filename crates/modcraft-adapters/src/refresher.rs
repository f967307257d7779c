//! Dependency refresh adapters.
//!
//! After a module is wired into the autoload map the project's class loader
//! has to be regenerated. [`CommandRefresher`] runs an external command for
//! that (by default `composer dump-autoload`).

use std::path::Path;
use std::process::Command;

use tracing::{debug, info, instrument};

use modcraft_core::{
    application::{ApplicationError, ports::DependencyRefresher},
    error::{ModcraftError, ModcraftResult},
};

pub const DEFAULT_REFRESH_COMMAND: &str = "composer dump-autoload";

/// Runs a command line in the project root.
#[derive(Debug, Clone)]
pub struct CommandRefresher {
    program: String,
    args: Vec<String>,
}

impl CommandRefresher {
    /// Split `command_line` on whitespace into program and arguments.
    pub fn new(command_line: &str) -> ModcraftResult<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| ModcraftError::Configuration {
            message: "the refresh command is empty".into(),
        })?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl DependencyRefresher for CommandRefresher {
    #[instrument(skip(self), fields(command = %self.command_line()))]
    fn refresh(&self, project_root: &Path) -> ModcraftResult<()> {
        let failed = |reason: String| ApplicationError::RefreshFailed {
            command: self.command_line(),
            reason,
        };

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_root)
            .output()
            .map_err(|e| failed(e.to_string()))?;

        debug!(stdout = %String::from_utf8_lossy(&output.stdout), "refresh output");
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(failed(reason).into());
        }

        info!("Dependencies refreshed");
        Ok(())
    }
}

/// Does nothing; for tests and `--no-refresh`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRefresher;

impl DependencyRefresher for NoopRefresher {
    fn refresh(&self, project_root: &Path) -> ModcraftResult<()> {
        debug!(root = %project_root.display(), "dependency refresh disabled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_line() {
        let r = CommandRefresher::new("  composer   dump-autoload -o ").unwrap();
        assert_eq!(r.command_line(), "composer dump-autoload -o");
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(matches!(
            CommandRefresher::new("   "),
            Err(ModcraftError::Configuration { .. })
        ));
    }

    #[test]
    fn missing_program_is_a_refresh_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let err = CommandRefresher::new("modcraft-definitely-not-installed-xyz")
            .unwrap()
            .refresh(tmp.path())
            .unwrap_err();
        assert!(matches!(
            err,
            ModcraftError::Application(ApplicationError::RefreshFailed { .. })
        ));
    }
}
