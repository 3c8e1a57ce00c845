mod instantiator;
mod module;
mod registry;
mod resolver;

pub use instantiator::{InstantiateErrorKind, InstantiatorErrorKind};
pub use module::ModuleErrorKind;
pub use registry::RegistryErrorKind;
pub use resolver::{CycleErrorKind, ResolveErrorKind};
