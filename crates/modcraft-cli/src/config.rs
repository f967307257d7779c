//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`Workspace`] built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables `MODCRAFT_<SECTION>__<KEY>`
//!    (e.g. `MODCRAFT_ENVIRONMENT__MODE=development`); `.env` is loaded
//!    into the environment first.
//! 2. The file given with `--config`, otherwise `./modcraft.toml`
//! 3. The per-user file (`<config dir>/modcraft/config.toml`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use modcraft_adapters::DEFAULT_REFRESH_COMMAND;
use modcraft_core::domain::{DEFAULT_EXTENSION, DEFAULT_NAMESPACE_ROOT, EnvironmentMode, Workspace};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "modcraft.toml";

const ENV_PREFIX: &str = "MODCRAFT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub environment: EnvironmentConfig,
    pub output: OutputConfig,
}

/// Where the project, its modules and its stubs live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Project root holding `composer.json` and `bootstrap/`.
    pub base: PathBuf,
    pub modules_dir: PathBuf,
    /// Stub overrides, relative to `base`.
    pub stubs_dir: PathBuf,
    pub namespace_root: String,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// New modules are wired into the registries only in `development`.
    pub mode: EnvironmentMode,
    pub refresh_command: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                base: PathBuf::from("."),
                modules_dir: PathBuf::from("modules"),
                stubs_dir: PathBuf::from("stubs"),
                namespace_root: DEFAULT_NAMESPACE_ROOT.into(),
                extension: DEFAULT_EXTENSION.into(),
            },
            environment: EnvironmentConfig {
                mode: EnvironmentMode::default(),
                refresh_command: DEFAULT_REFRESH_COMMAND.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        if let Some(user) = Self::user_config_path() {
            builder = builder.add_source(config::File::from(user).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
            None => builder.add_source(config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Workspace handed to the scaffold service.
    pub fn workspace(&self) -> Workspace {
        Workspace::new(&self.paths.base)
            .with_modules_dir(&self.paths.modules_dir)
            .with_namespace_root(&self.paths.namespace_root)
            .with_extension(&self.paths.extension)
    }

    /// Path of the file `config path` reports: the explicit one, else the
    /// local file if present, else the per-user file.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local;
        }
        Self::user_config_path().unwrap_or(local)
    }

    /// Per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "modcraft", "modcraft")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Value of a dotted key, as printed by `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "paths.base" => self.paths.base.display().to_string(),
            "paths.modules_dir" => self.paths.modules_dir.display().to_string(),
            "paths.stubs_dir" => self.paths.stubs_dir.display().to_string(),
            "paths.namespace_root" => self.paths.namespace_root.clone(),
            "paths.extension" => self.paths.extension.clone(),
            "environment.mode" => self.environment.mode.to_string(),
            "environment.refresh_command" => self.environment.refresh_command.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.environment.mode, EnvironmentMode::Production);
        assert_eq!(cfg.environment.refresh_command, "composer dump-autoload");
        assert_eq!(cfg.paths.modules_dir, PathBuf::from("modules"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(
            &path,
            "[paths]\nmodules_dir = \"src/Modules\"\n\n[environment]\nmode = \"development\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.paths.modules_dir, PathBuf::from("src/Modules"));
        assert_eq!(cfg.paths.extension, "php");
        assert!(cfg.environment.mode.wires_registries());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/modcraft.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn workspace_from_config() {
        let mut cfg = AppConfig::default();
        cfg.paths.base = PathBuf::from("/srv/app");
        let ws = cfg.workspace();
        assert_eq!(ws.module_root("Billing"), PathBuf::from("/srv/app/modules/Billing"));
        assert_eq!(ws.namespace_root, "Modules");
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("environment.mode").as_deref(), Some("production"));
        assert_eq!(cfg.get("paths.stubs_dir").as_deref(), Some("stubs"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }
}
