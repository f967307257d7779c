use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{error::DomainError, naming::CanonicalSegment, value_objects::TemplateId};

/// Directories every module gets, relative to the module root.
pub const FIXED_DIRECTORIES: &[&str] = &[
    "config",
    "routes",
    "database/factories",
    "database/migrations",
    "database/seeders",
    "domain/Actions",
    "domain/Aggregates",
    "domain/Collections",
    "domain/Contracts",
    "domain/DataFactories",
    "domain/DataTransferObjects",
    "domain/Queries",
    "domain/QueryBuilders",
    "app/Exceptions",
    "app/Http/Controllers",
    "app/Http/Requests",
    "app/Http/Resources",
    "app/Models",
    "app/Providers",
    "tests/ArchTest",
    "tests/Feature",
    "tests/Unit",
];

/// Directory holding the module's providers; also their namespace sub-tree.
pub const PROVIDERS_DIR: &str = "app/Providers";

/// Optional directories offered when a module is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleOptions {
    /// `domain/Processes`
    pub process_manager: bool,
    /// `app/Events`
    pub events: bool,
    /// `app/Listeners`
    pub listeners: bool,
    /// `app/Http/Middleware`
    pub middleware: bool,
}

impl ModuleOptions {
    fn directories(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.process_manager, "domain/Processes"),
            (self.events, "app/Events"),
            (self.listeners, "app/Listeners"),
            (self.middleware, "app/Http/Middleware"),
        ]
        .into_iter()
        .filter_map(|(wanted, dir)| wanted.then_some(dir))
    }
}

/// A file written when a module is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    /// Directory relative to the module root, `/`-separated.
    pub dir: &'static str,
    /// File name without extension; also the class name for providers.
    pub stem: String,
    pub template: TemplateId,
}

impl ModuleFile {
    fn new(dir: &'static str, stem: impl Into<String>, template: TemplateId) -> Self {
        Self {
            dir,
            stem: stem.into(),
            template,
        }
    }

    pub fn is_provider(&self) -> bool {
        self.dir == PROVIDERS_DIR
    }

    pub fn relative_dir(&self) -> PathBuf {
        self.dir.split('/').collect()
    }
}

/// The directory tree and boilerplate files of a new module.
#[derive(Debug, Clone)]
pub struct ModuleLayout {
    directories: Vec<PathBuf>,
    files: Vec<ModuleFile>,
}

impl ModuleLayout {
    pub fn plan(module: &CanonicalSegment, options: &ModuleOptions) -> Self {
        let directories = FIXED_DIRECTORIES
            .iter()
            .copied()
            .chain(options.directories())
            .map(|dir| dir.split('/').collect())
            .collect();

        let files = vec![
            ModuleFile::new("config", "config", TemplateId::ModuleConfig),
            ModuleFile::new("routes", "web", TemplateId::RouteWeb),
            ModuleFile::new("routes", "api", TemplateId::RouteApi),
            ModuleFile::new(
                PROVIDERS_DIR,
                "RouteServiceProvider",
                TemplateId::RouteServiceProvider,
            ),
            ModuleFile::new(
                PROVIDERS_DIR,
                "EventServiceProvider",
                TemplateId::EventServiceProvider,
            ),
            ModuleFile::new(
                PROVIDERS_DIR,
                Self::service_provider_class(module),
                TemplateId::ModuleServiceProvider,
            ),
        ];

        Self { directories, files }
    }

    /// `<Module>ServiceProvider`
    pub fn service_provider_class(module: &CanonicalSegment) -> String {
        format!("{module}ServiceProvider")
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[ModuleFile] {
        &self.files
    }

    /// Reject layouts that would write the same path twice or escape the
    /// module root.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for dir in &self.directories {
            if dir.is_absolute() || !seen.insert(dir.clone()) {
                return Err(DomainError::InvalidSubDirectory {
                    value: dir.display().to_string(),
                    reason: "duplicate or absolute module directory".into(),
                });
            }
        }

        let mut files = HashSet::new();
        for file in &self.files {
            if !files.insert((file.dir, file.stem.as_str())) {
                return Err(DomainError::InvalidSubDirectory {
                    value: format!("{}/{}", file.dir, file.stem),
                    reason: "duplicate module file".into(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::naming::NameNormalizer;

    #[test]
    fn default_layout_has_fixed_tree_only() {
        let module = NameNormalizer::module_name("billing").unwrap();
        let layout = ModuleLayout::plan(&module, &ModuleOptions::default());

        assert_eq!(layout.directories().len(), FIXED_DIRECTORIES.len());
        assert!(layout.validate().is_ok());
        assert!(
            layout
                .directories()
                .contains(&PathBuf::from("app").join("Http").join("Controllers"))
        );
    }

    #[test]
    fn options_add_directories() {
        let module = NameNormalizer::module_name("billing").unwrap();
        let options = ModuleOptions {
            process_manager: true,
            middleware: true,
            ..Default::default()
        };
        let layout = ModuleLayout::plan(&module, &options);

        assert!(layout.directories().contains(&PathBuf::from("domain/Processes")));
        assert!(layout.directories().contains(&PathBuf::from("app/Http/Middleware")));
        assert!(!layout.directories().contains(&PathBuf::from("app/Events")));
    }

    #[test]
    fn module_provider_is_named_after_the_module() {
        let module = NameNormalizer::module_name("billing").unwrap();
        let layout = ModuleLayout::plan(&module, &ModuleOptions::default());

        let providers: Vec<&str> = layout
            .files()
            .iter()
            .filter(|f| f.is_provider())
            .map(|f| f.stem.as_str())
            .collect();
        assert_eq!(
            providers,
            ["RouteServiceProvider", "EventServiceProvider", "BillingServiceProvider"]
        );
    }
}
