use alloc::{boxed::Box, vec::Vec};

use crate::{
    any::TypeInfo,
    errors::InstantiateErrorKind,
    metadata::{annotate_injectable, Injectable, ResolvedArgs},
    token::InjectToken,
    utils::thread_safety::{BoxAnyThreadSafety, RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

#[cfg(feature = "thread_safe")]
pub(crate) type FactoryFn = alloc::sync::Arc<dyn Fn(ResolvedArgs) -> Result<BoxAnyThreadSafety, InstantiateErrorKind> + Send + Sync>;

#[cfg(not(feature = "thread_safe"))]
pub(crate) type FactoryFn = alloc::rc::Rc<dyn Fn(ResolvedArgs) -> Result<BoxAnyThreadSafety, InstantiateErrorKind>>;

/// A registered recipe for producing a token's value.
///
/// Exactly one construction strategy applies per provider; the variants
/// make any other combination unrepresentable.
#[derive(Clone)]
pub enum Provider {
    Class(ClassProvider),
    Value(ValueProvider),
    Factory(FactoryProvider),
}

#[derive(Clone, Copy)]
pub struct ClassProvider {
    pub(crate) type_info: TypeInfo,
}

#[derive(Clone)]
pub struct ValueProvider {
    pub(crate) type_info: TypeInfo,
    pub(crate) value: RcAnyThreadSafety,
}

#[derive(Clone)]
pub struct FactoryProvider {
    pub(crate) deps: Vec<InjectToken>,
    pub(crate) factory: FactoryFn,
}

impl Provider {
    /// A class strategy: resolution constructs a `T` with its declared
    /// dependencies. Publishes `T`'s injectable facts.
    #[must_use]
    pub fn class<T: Injectable>() -> Self {
        annotate_injectable::<T>();
        Self::class_of(TypeInfo::of::<T>())
    }

    /// A class strategy by type identity. `Container::set` rejects it if
    /// no injectable definition is published for the type.
    #[inline]
    #[must_use]
    pub fn class_of(type_info: TypeInfo) -> Self {
        Self::Class(ClassProvider { type_info })
    }

    /// A value strategy: `value` is returned as-is on every resolution.
    #[must_use]
    pub fn value<T: SendSafety + SyncSafety + 'static>(value: T) -> Self {
        Self::Value(ValueProvider {
            type_info: TypeInfo::of_val(&value),
            value: RcThreadSafety::new(value),
        })
    }

    /// A factory strategy: every token in `deps` is resolved in declared
    /// order and the resolved values are passed to `factory` positionally.
    #[must_use]
    pub fn factory<T, F>(deps: impl IntoIterator<Item = InjectToken>, factory: F) -> Self
    where
        T: SendSafety + SyncSafety + 'static,
        F: Fn(ResolvedArgs) -> Result<T, InstantiateErrorKind> + SendSafety + SyncSafety + 'static,
    {
        let factory: FactoryFn = RcThreadSafety::new(move |args| factory(args).map(|value| Box::new(value) as BoxAnyThreadSafety));
        Self::Factory(FactoryProvider {
            deps: deps.into_iter().collect(),
            factory,
        })
    }

    #[must_use]
    pub(crate) fn strategy_name(&self) -> &'static str {
        match self {
            Self::Class(_) => "class",
            Self::Value(_) => "value",
            Self::Factory(_) => "factory",
        }
    }
}

impl core::fmt::Debug for Provider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Class(class) => f.debug_tuple("Class").field(&class.type_info.name).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(&value.type_info.name).finish(),
            Self::Factory(factory) => f.debug_struct("Factory").field("deps", &factory.deps).finish(),
        }
    }
}
