use super::registry::RegistryErrorKind;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ModuleErrorKind {
    #[error("{} is not a module: no module definition registered", type_info.name)]
    InvalidModule { type_info: TypeInfo },
    #[error("{} is not a service: no provider token declared for it", type_info.name)]
    InvalidService { type_info: TypeInfo },
    #[error(transparent)]
    Registry(#[from] RegistryErrorKind),
}
