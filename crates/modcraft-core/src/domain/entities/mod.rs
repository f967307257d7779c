pub mod module_layout;
pub mod namespace;
pub mod registry;
pub mod render_context;
pub mod scaffold_target;
pub mod template;

pub use module_layout::{FIXED_DIRECTORIES, ModuleFile, ModuleLayout, ModuleOptions, PROVIDERS_DIR};
pub use namespace::{DEFAULT_NAMESPACE_ROOT, NAMESPACE_SEPARATOR, NamespacePath};
pub use registry::{RegistryAnchor, RegistryEntry, RegistryKind, TextPatch};
pub use render_context::RenderContext;
pub use scaffold_target::{ScaffoldTarget, Workspace};
pub use template::{Template, TemplateOrigin, TemplateSource};
