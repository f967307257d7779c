//! Placement planning: where an artifact goes and what it is called.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem},
    },
    domain::{
        ArtifactKind, CanonicalSegment, DomainValidator, NameNormalizer, NamespacePath,
        ScaffoldTarget, SubDirectory, Workspace,
    },
    error::ModcraftResult,
};

/// `strftime` prefix of migration file names.
pub const MIGRATION_TIMESTAMP: &str = "%Y_%m_%d_%H%M%S";

/// Computes [`ScaffoldTarget`]s. Reads the filesystem, never writes it.
pub struct PlacementPlanner<'a> {
    fs: &'a dyn Filesystem,
    clock: &'a dyn Clock,
    workspace: &'a Workspace,
}

impl<'a> PlacementPlanner<'a> {
    pub fn new(fs: &'a dyn Filesystem, clock: &'a dyn Clock, workspace: &'a Workspace) -> Self {
        Self {
            fs,
            clock,
            workspace,
        }
    }

    /// Normalize `module` and check its root is a directory.
    pub fn require_module(&self, module: &str) -> ModcraftResult<(CanonicalSegment, PathBuf)> {
        let module = NameNormalizer::module_name(module)?;
        let root = self.workspace.module_root(module.as_str());

        if !self.fs.is_dir(&root) {
            return Err(ApplicationError::ModuleNotFound { path: root }.into());
        }
        Ok((module, root))
    }

    /// Plan one artifact inside an existing module.
    ///
    /// A sub-directory is ignored for kinds that do not accept one.
    pub fn plan(
        &self,
        kind: ArtifactKind,
        module: &str,
        sub_directory: Option<&SubDirectory>,
        entity: &str,
    ) -> ModcraftResult<ScaffoldTarget> {
        let (module, root) = self.require_module(module)?;
        let sub_directory = sub_directory.filter(|_| kind.accepts_sub_directory());

        let subtree_dir: PathBuf = root.join(kind.subtree().split('/').collect::<PathBuf>());
        let target_dir = match sub_directory {
            Some(sub) => subtree_dir.join(sub.to_path()),
            None => subtree_dir.clone(),
        };

        let mut ensure_dirs = Vec::new();
        if !self.fs.exists(&subtree_dir) {
            ensure_dirs.push(subtree_dir.clone());
        }
        if target_dir != subtree_dir && !self.fs.exists(&target_dir) {
            ensure_dirs.push(target_dir.clone());
        }

        let entity = NameNormalizer::entity_name(entity, kind.strip_word())?;
        let (class_name, stem) = match kind {
            ArtifactKind::Migration => {
                let table = NameNormalizer::table_name(entity.as_str())?;
                let stamp = self.clock.now().format(MIGRATION_TIMESTAMP);
                (
                    format!("Create{entity}Table"),
                    format!("{stamp}_create_{table}_table"),
                )
            }
            _ => {
                let class = format!("{entity}{}", kind.class_suffix());
                (class.clone(), class)
            }
        };

        let sub_chain = sub_directory.map(ToString::to_string);
        let mut relative_dirs = vec![kind.subtree()];
        if let Some(chain) = sub_chain.as_deref() {
            relative_dirs.push(chain);
        }
        let namespace = NamespacePath::resolve(
            &self.workspace.namespace_root,
            module.as_str(),
            &relative_dirs,
        )?;

        let target = ScaffoldTarget {
            kind,
            entity_name: entity.into_string(),
            class_name,
            namespace,
            file_path: target_dir.join(self.workspace.file_name(&stem)),
            ensure_dirs,
        };
        DomainValidator::validate_target(&target, &root)?;

        debug!(
            kind = %kind,
            path = %target.file_path.display(),
            namespace = %target.namespace,
            "Planned artifact"
        );
        Ok(target)
    }
}
