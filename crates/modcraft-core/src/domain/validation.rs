use std::path::{Component, Path};

use crate::domain::{
    entities::{ModuleLayout, ScaffoldTarget},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Planning produces targets and layouts; nothing is written until they pass
/// through here.
pub struct DomainValidator;

impl DomainValidator {
    /// `module_root` is the directory every planned file must live under.
    pub fn validate_target(target: &ScaffoldTarget, module_root: &Path) -> Result<(), DomainError> {
        if target.class_name.trim().is_empty() {
            return Err(DomainError::InvalidIdentifier { field: "class name" });
        }

        let path = &target.file_path;
        let climbs = path.components().any(|c| c == Component::ParentDir);
        if climbs || !path.starts_with(module_root) {
            return Err(DomainError::OutsideModule {
                path: path.display().to_string(),
                module_root: module_root.display().to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_layout(layout: &ModuleLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
