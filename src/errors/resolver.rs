use alloc::{boxed::Box, fmt};
use core::{
    any::TypeId,
    fmt::{Display, Formatter},
};

use super::instantiator::{InstantiateErrorKind, InstantiatorErrorKind};
use crate::{any::TypeInfo, token::InjectToken};

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Invalid injection token: {token:?}")]
    InvalidToken { token: InjectToken },
    #[error("No provider found for token {token}")]
    NoProviderFound { token: InjectToken },
    #[error("Invalid provider for {}: no injectable definition registered", type_info.name)]
    InvalidProvider { type_info: TypeInfo },
    #[error(transparent)]
    Cycle(CycleErrorKind),
    #[error("Incorrect provider value type. Actual: {actual:?}, expected: {expected:?}")]
    IncorrectType { expected: TypeId, actual: TypeId },
    #[error(transparent)]
    Instantiator(InstantiatorErrorKind<Box<ResolveErrorKind>, InstantiateErrorKind>),
}

#[derive(thiserror::Error, Debug)]
pub enum CycleErrorKind {
    CircularDependency { token: InjectToken, chain: Box<[InjectToken]> },
}

impl Display for CycleErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CycleErrorKind::CircularDependency { token, chain } => {
                write!(f, "Circular dependency detected: ")?;
                for link in chain {
                    write!(f, "{link} -> ")?;
                }
                write!(f, "{token}")?;
            }
        }
        Ok(())
    }
}
