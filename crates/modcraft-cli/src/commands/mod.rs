//! Command handlers.
//!
//! Each handler receives owned, already-validated data and returns a
//! [`CliResult`]. The scaffold handlers share one [`Session`], which wires
//! the real adapters into a [`ScaffoldService`].

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod scaffold;

use std::path::Path;

use tracing::{debug, info};

use modcraft_adapters::{
    CommandRefresher, FileSystemStore, InMemoryStore, LocalFilesystem, NoopRefresher,
    SimpleRenderer, SystemClock, builtin_templates,
};
use modcraft_core::{
    application::{DependencyRefresher, ScaffoldService, TemplateStore},
    error::ModcraftResult,
};

use crate::{config::AppConfig, error::CliResult, output};

/// Stub store for this project: overrides from the stub directory when one
/// exists, with the built-in stubs behind them.
pub fn template_store(config: &AppConfig) -> CliResult<Box<dyn TemplateStore>> {
    let builtin = InMemoryStore::with_builtin()?;
    let store: Box<dyn TemplateStore> =
        match builtin_templates::discover_stub_dir(&config.paths.base, &config.paths.stubs_dir) {
            Some(dir) => {
                info!(dir = %dir.display(), "using stub overrides");
                Box::new(FileSystemStore::new(dir).with_fallback(builtin))
            }
            None => {
                debug!("no stub directory found, using built-in stubs");
                Box::new(builtin)
            }
        };
    Ok(store)
}

/// Everything a scaffold command needs, built from configuration.
pub struct Session {
    pub config: AppConfig,
    pub service: ScaffoldService,
}

impl Session {
    pub fn open(config: AppConfig, refresh: bool, show_progress: bool) -> CliResult<Self> {
        let refresher: Box<dyn DependencyRefresher> = if refresh {
            Box::new(ProgressRefresher {
                inner: CommandRefresher::new(&config.environment.refresh_command)?,
                visible: show_progress,
            })
        } else {
            Box::new(NoopRefresher)
        };

        let service = ScaffoldService::new(
            template_store(&config)?,
            Box::new(SimpleRenderer::new()),
            Box::new(LocalFilesystem::new()),
            Box::new(SystemClock),
            refresher,
        )
        .with_workspace(config.workspace());

        Ok(Self { config, service })
    }
}

/// Shows a spinner while the refresh command runs.
struct ProgressRefresher {
    inner: CommandRefresher,
    visible: bool,
}

impl DependencyRefresher for ProgressRefresher {
    fn refresh(&self, project_root: &Path) -> ModcraftResult<()> {
        let spinner = output::spinner(
            self.visible,
            format!("Running {}", self.inner.command_line()),
        );
        let result = self.inner.refresh(project_root);
        spinner.finish_and_clear();
        result
    }
}
