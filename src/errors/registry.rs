use crate::{any::TypeInfo, token::InjectToken};

#[derive(thiserror::Error, Debug)]
pub enum RegistryErrorKind {
    #[error("Invalid injection token: {token:?}")]
    InvalidToken { token: InjectToken },
    #[error("Invalid provider for {}: no injectable definition registered", type_info.name)]
    InvalidProvider { type_info: TypeInfo },
}
