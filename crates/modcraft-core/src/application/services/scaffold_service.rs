//! Scaffold Service - main application orchestrator.
//!
//! Every command runs through the same forward-only state machine:
//!
//! ```text
//! ValidatingModule → PlanningDirectories → WritingPrimaryArtifact
//!     → WritingDependentArtifacts → PatchingRegistries → Done
//! ```
//!
//! Any error moves the run to `Failed` and is returned as-is. Nothing is
//! retried and files already written stay on disk.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, DependencyRefresher, Filesystem, TemplateRenderer, TemplateStore},
        services::{
            artifact_writer::{ArtifactWriter, WriteOutcome},
            placement::PlacementPlanner,
            registry_patcher::RegistryPatcher,
            requests::{
                ArtifactRequest, EventRequest, MigrationRequest, ModelRequest, ModuleRequest,
                RegistryPatch, ScaffoldReport, SkippedArtifact,
            },
            template_service::TemplateService,
        },
    },
    domain::{
        ArtifactKind, DomainValidator, ModelExtra, ModuleLayout, NameNormalizer, NamespacePath,
        PROVIDERS_DIR, RegistryEntry, RegistryKind, RenderContext, ScaffoldTarget, TextPatch,
        Workspace,
    },
    error::{ModcraftError, ModcraftResult},
};

/// `{{ rootNamespace }}` of generated controllers.
const ROOT_NAMESPACE: &str = "App\\";

/// Orchestrator states, in the only order they can be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScaffoldState {
    ValidatingModule,
    PlanningDirectories,
    WritingPrimaryArtifact,
    WritingDependentArtifacts,
    PatchingRegistries,
    Done,
    Failed,
}

/// Tracks the state of one run and accumulates its report.
struct Progress {
    state: ScaffoldState,
    report: ScaffoldReport,
}

impl Progress {
    fn start(kind: ArtifactKind, module: &str) -> Self {
        debug!(kind = %kind, state = ?ScaffoldState::ValidatingModule, "Scaffold started");
        Self {
            state: ScaffoldState::ValidatingModule,
            report: ScaffoldReport::new(kind, module),
        }
    }

    fn enter(&mut self, next: ScaffoldState) {
        debug_assert!(next > self.state, "{:?} -> {next:?} is not forward", self.state);
        debug!(from = ?self.state, to = ?next, "State transition");
        self.state = next;
    }

    fn record(&mut self, outcome: WriteOutcome) {
        self.report.created_dirs.extend(outcome.created_dirs);
        self.report.written_files.push(outcome.file);
    }

    fn finish(mut self, result: ModcraftResult<()>) -> ModcraftResult<ScaffoldReport> {
        match result {
            Ok(()) => {
                self.enter(ScaffoldState::Done);
                info!(
                    kind = %self.report.kind,
                    files = self.report.written_files.len(),
                    "Scaffold completed successfully"
                );
                Ok(self.report)
            }
            Err(e) => {
                warn!(state = ?self.state, error = %e, "Scaffold failed");
                self.state = ScaffoldState::Failed;
                Err(e)
            }
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    templates: TemplateService,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
    refresher: Box<dyn DependencyRefresher>,
    workspace: Workspace,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use modcraft_core::{application::ScaffoldService, domain::Workspace};
    ///
    /// let service = ScaffoldService::new(store, renderer, filesystem, clock, refresher)
    ///     .with_workspace(Workspace::new("."));
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
        refresher: Box<dyn DependencyRefresher>,
    ) -> Self {
        Self {
            templates: TemplateService::new(store),
            renderer,
            filesystem,
            clock,
            refresher,
            workspace: Workspace::default(),
        }
    }

    pub fn with_workspace(mut self, workspace: Workspace) -> Self {
        self.workspace = workspace;
        self
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    // -------------------------------------------------------------------------
    // Module
    // -------------------------------------------------------------------------

    /// Create a module tree with its boilerplate files, optionally wiring it
    /// into the autoload map and provider list.
    #[instrument(skip_all, fields(module = %request.name, wire = request.wire_registries))]
    pub fn create_module(&self, request: &ModuleRequest) -> ModcraftResult<ScaffoldReport> {
        let mut run = Progress::start(ArtifactKind::Module, &request.name);
        let result = self.run_module(&mut run, request);
        run.finish(result)
    }

    fn run_module(&self, run: &mut Progress, request: &ModuleRequest) -> ModcraftResult<()> {
        let fs = self.filesystem.as_ref();
        let module = NameNormalizer::module_name(&request.name)?;
        let root = self.workspace.module_root(module.as_str());
        run.report.module = module.to_string();

        if fs.exists(&root) {
            return Err(ApplicationError::ModuleAlreadyExists { path: root }.into());
        }

        run.enter(ScaffoldState::PlanningDirectories);
        let layout = ModuleLayout::plan(&module, &request.options);
        DomainValidator::validate_layout(&layout)?;

        let root_ns = &self.workspace.namespace_root;
        let providers_ns = NamespacePath::resolve(root_ns, module.as_str(), &[PROVIDERS_DIR])?;
        let key = module.as_str().to_lowercase();

        // Render everything up front so a missing stub fails before any write.
        let mut files = Vec::with_capacity(layout.files().len());
        for file in layout.files() {
            let context = RenderContext::for_class(providers_ns.to_string(), &file.stem)
                .with_variable("key", &key);
            let content = self
                .templates
                .render(self.renderer.as_ref(), file.template, &context)?;
            let path = root
                .join(file.relative_dir())
                .join(self.workspace.file_name(&file.stem));
            files.push((path, content));
        }

        run.enter(ScaffoldState::WritingPrimaryArtifact);
        fs.create_dir_all(&root)?;
        run.report.created_dirs.push(root.clone());
        for dir in layout.directories() {
            let path = root.join(dir);
            fs.create_dir_all(&path)?;
            run.report.created_dirs.push(path);
        }
        for (path, content) in files {
            fs.create_file(&path, &content)?;
            debug!(path = %path.display(), "Wrote module file");
            run.report.written_files.push(path);
        }

        if !request.wire_registries {
            info!("Registry wiring not requested, leaving autoload map and providers untouched");
            return Ok(());
        }

        run.enter(ScaffoldState::PatchingRegistries);
        let relative = self.workspace.module_relative(module.as_str());
        for dir in ["app", "domain"] {
            let prefix = NamespacePath::resolve(root_ns, module.as_str(), &[dir])?;
            let entry = RegistryEntry::Autoload {
                prefix: format!("{prefix}\\"),
                path: format!("{relative}/{dir}/"),
            };
            self.patch(run, RegistryKind::Autoload, module.as_str(), &entry)?;
        }

        let provider = providers_ns.qualify(&ModuleLayout::service_provider_class(&module));
        let entry = RegistryEntry::Provider { class: provider };
        self.patch(run, RegistryKind::BootstrapProviders, module.as_str(), &entry)?;

        info!("Refreshing dependencies");
        self.refresher.refresh(&self.workspace.base_path)?;
        run.report.refreshed = true;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Single-file artifacts
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(module = %request.module, name = %request.name))]
    pub fn create_controller(&self, request: &ArtifactRequest) -> ModcraftResult<ScaffoldReport> {
        self.create_single(ArtifactKind::Controller, request)
    }

    #[instrument(skip_all, fields(module = %request.module, name = %request.name))]
    pub fn create_job(&self, request: &ArtifactRequest) -> ModcraftResult<ScaffoldReport> {
        self.create_single(ArtifactKind::Job, request)
    }

    #[instrument(skip_all, fields(module = %request.module, name = %request.name))]
    pub fn create_http_request(&self, request: &ArtifactRequest) -> ModcraftResult<ScaffoldReport> {
        self.create_single(ArtifactKind::HttpRequest, request)
    }

    #[instrument(skip_all, fields(module = %request.module, name = %request.name))]
    pub fn create_http_resource(
        &self,
        request: &ArtifactRequest,
    ) -> ModcraftResult<ScaffoldReport> {
        self.create_single(ArtifactKind::HttpResource, request)
    }

    #[instrument(skip_all, fields(module = %request.module, name = %request.name))]
    pub fn create_domain_collection(
        &self,
        request: &ArtifactRequest,
    ) -> ModcraftResult<ScaffoldReport> {
        self.create_single(ArtifactKind::DomainCollection, request)
    }

    #[instrument(skip_all, fields(module = %request.module, table = %request.table))]
    pub fn create_migration(&self, request: &MigrationRequest) -> ModcraftResult<ScaffoldReport> {
        let artifact = ArtifactRequest::new(&request.module, &request.table);
        self.create_single(ArtifactKind::Migration, &artifact)
    }

    fn create_single(
        &self,
        kind: ArtifactKind,
        request: &ArtifactRequest,
    ) -> ModcraftResult<ScaffoldReport> {
        let mut run = Progress::start(kind, &request.module);
        let result = self.run_single(&mut run, kind, request);
        run.finish(result)
    }

    fn run_single(
        &self,
        run: &mut Progress,
        kind: ArtifactKind,
        request: &ArtifactRequest,
    ) -> ModcraftResult<()> {
        let planner = self.planner();
        let (module, _) = planner.require_module(&request.module)?;
        run.report.module = module.to_string();

        run.enter(ScaffoldState::PlanningDirectories);
        let target = planner.plan(kind, module.as_str(), request.sub_directory.as_ref(), &request.name)?;

        run.enter(ScaffoldState::WritingPrimaryArtifact);
        let context = self.context_for(&target)?;
        self.write_primary(run, &target, &context)
    }

    // -------------------------------------------------------------------------
    // Cascading artifacts
    // -------------------------------------------------------------------------

    /// Create a model plus the selected extras. Extras that already exist are
    /// skipped.
    #[instrument(skip_all, fields(module = %request.artifact.module, name = %request.artifact.name))]
    pub fn create_model(&self, request: &ModelRequest) -> ModcraftResult<ScaffoldReport> {
        let mut run = Progress::start(ArtifactKind::Model, &request.artifact.module);
        let result = self.run_model(&mut run, request);
        run.finish(result)
    }

    fn run_model(&self, run: &mut Progress, request: &ModelRequest) -> ModcraftResult<()> {
        let planner = self.planner();
        let artifact = &request.artifact;
        let (module, _) = planner.require_module(&artifact.module)?;
        let module = module.as_str();
        run.report.module = module.to_string();

        run.enter(ScaffoldState::PlanningDirectories);
        let sub = artifact.sub_directory.as_ref();
        let model = planner.plan(ArtifactKind::Model, module, sub, &artifact.name)?;
        let entity = model.entity_name.as_str();

        // Fixed order, each extra at most once.
        let extras: Vec<ModelExtra> = ModelExtra::ALL
            .into_iter()
            .filter(|extra| request.extras.contains(extra))
            .collect();
        let mut dependents = Vec::with_capacity(extras.len());
        for extra in extras {
            let target = match extra {
                ModelExtra::Migration => planner.plan(ArtifactKind::Migration, module, None, entity)?,
                ModelExtra::Factory => planner.plan(ArtifactKind::Factory, module, None, entity)?,
                ModelExtra::Seeder => planner.plan(ArtifactKind::Seeder, module, None, entity)?,
                ModelExtra::Controller => {
                    planner.plan(ArtifactKind::Controller, module, sub, entity)?
                }
            };
            let mut context = self.context_for(&target)?;
            if extra == ModelExtra::Factory {
                context = context
                    .with_variable("factoryNamespace", target.namespace.to_string())
                    .with_variable("namespacedModelPath", model.qualified_class())
                    .with_variable("namespacedModel", &model.class_name)
                    .with_variable("factory", &model.class_name);
            }
            dependents.push((target, context));
        }

        run.enter(ScaffoldState::WritingPrimaryArtifact);
        let context = self.context_for(&model)?;
        self.write_primary(run, &model, &context)?;

        if dependents.is_empty() {
            return Ok(());
        }
        run.enter(ScaffoldState::WritingDependentArtifacts);
        for (target, context) in &dependents {
            self.write_dependent(run, target, context)?;
        }
        Ok(())
    }

    /// Create an event, optionally a listener, and register the pair in the
    /// module's listener map.
    #[instrument(skip_all, fields(module = %request.artifact.module, event = %request.artifact.name))]
    pub fn create_event(&self, request: &EventRequest) -> ModcraftResult<ScaffoldReport> {
        let mut run = Progress::start(ArtifactKind::Event, &request.artifact.module);
        let result = self.run_event(&mut run, request);
        run.finish(result)
    }

    fn run_event(&self, run: &mut Progress, request: &EventRequest) -> ModcraftResult<()> {
        let planner = self.planner();
        let artifact = &request.artifact;
        let (module, _) = planner.require_module(&artifact.module)?;
        let module = module.as_str();
        run.report.module = module.to_string();

        run.enter(ScaffoldState::PlanningDirectories);
        let sub = artifact.sub_directory.as_ref();
        let event = planner.plan(ArtifactKind::Event, module, sub, &artifact.name)?;
        let listener = request
            .listener
            .as_deref()
            .map(|name| planner.plan(ArtifactKind::Listener, module, sub, name))
            .transpose()?;

        let entry = RegistryEntry::Listener {
            event: event.qualified_class(),
            listeners: listener.iter().map(ScaffoldTarget::qualified_class).collect(),
        };

        run.enter(ScaffoldState::WritingPrimaryArtifact);
        // Re-running for an event that is already written and registered is
        // a no-op; an existing but unregistered event is still a conflict.
        if self.filesystem.exists(&event.file_path)
            && self.is_registered(RegistryKind::ListenerMap, module, &entry)
        {
            Self::skip(run, &event);
        } else {
            let context = self.context_for(&event)?;
            self.write_primary(run, &event, &context)?;
        }

        if let Some(listener) = &listener {
            run.enter(ScaffoldState::WritingDependentArtifacts);
            let context = self
                .context_for(listener)?
                .with_variable("event", &event.class_name)
                .with_variable("eventPath", event.qualified_class());
            self.write_dependent(run, listener, &context)?;
        }

        run.enter(ScaffoldState::PatchingRegistries);
        self.patch(run, RegistryKind::ListenerMap, module, &entry)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn planner(&self) -> PlacementPlanner<'_> {
        PlacementPlanner::new(
            self.filesystem.as_ref(),
            self.clock.as_ref(),
            &self.workspace,
        )
    }

    /// Placeholders every artifact of `target.kind` receives.
    fn context_for(&self, target: &ScaffoldTarget) -> ModcraftResult<RenderContext> {
        let context = RenderContext::for_class(target.namespace.to_string(), &target.class_name);
        Ok(match target.kind {
            ArtifactKind::Controller => context.with_variable("rootNamespace", ROOT_NAMESPACE),
            ArtifactKind::Migration => {
                context.with_variable("table", NameNormalizer::table_name(&target.entity_name)?)
            }
            _ => context,
        })
    }

    fn render(&self, target: &ScaffoldTarget, context: &RenderContext) -> ModcraftResult<String> {
        let id = target.kind.template().ok_or_else(|| ModcraftError::Internal {
            message: format!("no template for {}", target.kind),
        })?;
        self.templates.render(self.renderer.as_ref(), id, context)
    }

    fn write_primary(
        &self,
        run: &mut Progress,
        target: &ScaffoldTarget,
        context: &RenderContext,
    ) -> ModcraftResult<()> {
        let content = self.render(target, context)?;
        let outcome = ArtifactWriter::new(self.filesystem.as_ref()).write(target, &content)?;
        run.record(outcome);
        Ok(())
    }

    /// Like [`Self::write_primary`], but an existing file is skipped.
    fn write_dependent(
        &self,
        run: &mut Progress,
        target: &ScaffoldTarget,
        context: &RenderContext,
    ) -> ModcraftResult<()> {
        if self.filesystem.exists(&target.file_path) {
            Self::skip(run, target);
            return Ok(());
        }
        self.write_primary(run, target, context)
    }

    fn skip(run: &mut Progress, target: &ScaffoldTarget) {
        info!(
            kind = %target.kind,
            path = %target.file_path.display(),
            "Artifact already exists, skipping"
        );
        run.report.skipped.push(SkippedArtifact {
            kind: target.kind,
            path: target.file_path.clone(),
        });
    }

    /// `true` when `entry` is already in the registry. An unreadable registry
    /// or a missing anchor counts as not registered.
    fn is_registered(&self, registry: RegistryKind, module: &str, entry: &RegistryEntry) -> bool {
        let path = registry.path(&self.workspace, module);
        self.filesystem
            .read_to_string(&path)
            .ok()
            .and_then(|content| registry.anchor().apply(&content, entry).ok())
            .is_some_and(|patch| patch == TextPatch::AlreadyPresent)
    }

    fn patch(
        &self,
        run: &mut Progress,
        registry: RegistryKind,
        module: &str,
        entry: &RegistryEntry,
    ) -> ModcraftResult<()> {
        let path: PathBuf = registry.path(&self.workspace, module);
        let outcome = RegistryPatcher::new(self.filesystem.as_ref()).patch(
            &path,
            &registry.anchor(),
            entry,
        )?;
        run.report.registries.push(RegistryPatch {
            registry,
            path,
            outcome,
        });
        Ok(())
    }
}
