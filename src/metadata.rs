use alloc::{collections::BTreeMap, vec, vec::Vec};
use core::any::TypeId;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    any::TypeInfo,
    errors::InstantiateErrorKind,
    module::{Module, ModuleDef},
    token::InjectToken,
    utils::thread_safety::{BoxAnyThreadSafety, MutAnyThreadSafety, RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// A constructor-parameter injection site: resolve `token` and pass the
/// value at position `index`.
#[derive(Debug, Clone)]
pub struct CtorSite {
    pub token: InjectToken,
    pub index: usize,
    pub optional: bool,
}

/// A property injection site: resolve `token` after construction and hand
/// the value to `assign`, which writes it onto the instance under `key`.
#[derive(Clone)]
pub struct PropSite {
    pub token: InjectToken,
    pub key: &'static str,
    pub optional: bool,
    pub assign: AssignFn,
}

pub type AssignFn = fn(MutAnyThreadSafety<'_>, RcAnyThreadSafety) -> Result<(), InstantiateErrorKind>;
pub type ConstructFn = fn(ResolvedArgs) -> Result<BoxAnyThreadSafety, InstantiateErrorKind>;

/// Positional constructor arguments, assembled by the resolver.
///
/// Slots for optional sites whose token had no provider are left empty;
/// [`ResolvedArgs::take`] on such a slot reports the missing argument.
pub struct ResolvedArgs {
    values: Vec<Option<RcAnyThreadSafety>>,
}

impl ResolvedArgs {
    #[inline]
    #[must_use]
    pub(crate) fn new(values: Vec<Option<RcAnyThreadSafety>>) -> Self {
        Self { values }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Takes the required argument at `index`.
    ///
    /// # Errors
    /// - Returns [`InstantiateErrorKind::MissingArgument`] if the slot is empty or out of range
    /// - Returns [`InstantiateErrorKind::IncorrectArgumentType`] if the value is not a `T`
    pub fn take<T: SendSafety + SyncSafety + 'static>(&mut self, index: usize) -> Result<RcThreadSafety<T>, InstantiateErrorKind> {
        self.values
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(InstantiateErrorKind::MissingArgument { index })?
            .downcast()
            .map_err(|_| InstantiateErrorKind::IncorrectArgumentType { index })
    }

    /// Takes the optional argument at `index`, `None` if its provider was absent.
    ///
    /// # Errors
    /// Returns [`InstantiateErrorKind::IncorrectArgumentType`] if a present value is not a `T`
    pub fn take_opt<T: SendSafety + SyncSafety + 'static>(&mut self, index: usize) -> Result<Option<RcThreadSafety<T>>, InstantiateErrorKind> {
        match self.values.get_mut(index).and_then(Option::take) {
            Some(value) => value
                .downcast()
                .map(Some)
                .map_err(|_| InstantiateErrorKind::IncorrectArgumentType { index }),
            None => Ok(None),
        }
    }
}

/// Writes a property-injected value onto a constructed instance.
///
/// Helper for [`PropSite::assign`] hooks: downcasts the instance to `S` and
/// the value to `D`, then delegates the field write to `set`.
///
/// # Errors
/// Returns [`InstantiateErrorKind::IncorrectPropertyType`] if either downcast fails
pub fn assign_prop<S, D>(
    key: &'static str,
    instance: MutAnyThreadSafety<'_>,
    value: RcAnyThreadSafety,
    set: impl FnOnce(&mut S, RcThreadSafety<D>),
) -> Result<(), InstantiateErrorKind>
where
    S: 'static,
    D: SendSafety + SyncSafety + 'static,
{
    let target = instance
        .downcast_mut::<S>()
        .ok_or(InstantiateErrorKind::IncorrectPropertyType { key })?;
    let value = value.downcast::<D>().map_err(|_| InstantiateErrorKind::IncorrectPropertyType { key })?;
    set(target, value);
    Ok(())
}

/// The per-class injection facts: constructor sites, property sites,
/// best-effort parameter types and the construction hook.
pub struct InjectableDef {
    pub(crate) type_info: TypeInfo,
    pub(crate) ctor_arity: usize,
    pub(crate) ctor_sites: Vec<CtorSite>,
    pub(crate) prop_sites: Vec<PropSite>,
    pub(crate) param_types: Vec<Option<TypeInfo>>,
    pub(crate) construct: ConstructFn,
}

impl InjectableDef {
    #[must_use]
    pub fn new<T: 'static>(ctor_arity: usize, construct: ConstructFn) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            ctor_arity,
            ctor_sites: Vec::new(),
            prop_sites: Vec::new(),
            param_types: vec![None; ctor_arity],
            construct,
        }
    }

    #[must_use]
    pub fn ctor_site(self, index: usize, token: impl Into<InjectToken>) -> Self {
        self.add_ctor_site(index, token.into(), false)
    }

    #[must_use]
    pub fn ctor_site_optional(self, index: usize, token: impl Into<InjectToken>) -> Self {
        self.add_ctor_site(index, token.into(), true)
    }

    #[must_use]
    pub fn prop_site(self, key: &'static str, token: impl Into<InjectToken>, assign: AssignFn) -> Self {
        self.add_prop_site(key, token.into(), false, assign)
    }

    #[must_use]
    pub fn prop_site_optional(self, key: &'static str, token: impl Into<InjectToken>, assign: AssignFn) -> Self {
        self.add_prop_site(key, token.into(), true, assign)
    }

    /// Records the reflected type of the constructor parameter at `index`,
    /// enabling implicit resolution for parameters without an explicit site.
    #[must_use]
    pub fn param_type<P: 'static>(mut self, index: usize) -> Self {
        debug_assert!(index < self.ctor_arity, "parameter index out of range");
        if let Some(slot) = self.param_types.get_mut(index) {
            *slot = Some(TypeInfo::of::<P>());
        }
        self
    }

    #[must_use]
    fn add_ctor_site(mut self, index: usize, token: InjectToken, optional: bool) -> Self {
        debug_assert!(index < self.ctor_arity, "constructor site index out of range");
        self.ctor_sites.push(CtorSite { token, index, optional });
        self
    }

    #[must_use]
    fn add_prop_site(mut self, key: &'static str, token: InjectToken, optional: bool, assign: AssignFn) -> Self {
        self.prop_sites.push(PropSite {
            token,
            key,
            optional,
            assign,
        });
        self
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }
}

/// A class that can be constructed by the resolver.
///
/// The annotation syntax producing these facts is outside the container;
/// implementing this trait is the explicit equivalent.
pub trait Injectable: Sized + 'static {
    fn definition() -> InjectableDef;
}

/// The `{token}` self-declaration a class carries when it is used as a
/// bare-class module provider.
#[derive(Debug, Clone)]
pub struct ServiceDecl {
    pub token: InjectToken,
}

struct ClassFacts {
    type_info: TypeInfo,
    injectable: Option<fn() -> InjectableDef>,
    service: Option<ServiceDecl>,
    module: Option<fn() -> ModuleDef>,
}

static FACTS: Mutex<BTreeMap<TypeId, ClassFacts>> = Mutex::new(BTreeMap::new());

fn with_facts<T: 'static>(update: impl FnOnce(&mut ClassFacts)) {
    let type_info = TypeInfo::of::<T>();
    let mut facts = FACTS.lock();
    update(facts.entry(type_info.id).or_insert(ClassFacts {
        type_info,
        injectable: None,
        service: None,
        module: None,
    }));
}

/// Publishes the injectable facts of `T`. Re-publication overwrites.
pub fn annotate_injectable<T: Injectable>() {
    with_facts::<T>(|facts| facts.injectable = Some(T::definition));
    debug!(class = TypeInfo::of::<T>().name, "Injectable annotated");
}

/// Publishes the injectable facts of `T` together with its self-declared
/// provider token, making `T` usable as a bare-class module provider.
pub fn annotate_service<T: Injectable>(token: impl Into<InjectToken>) {
    let token = token.into();
    with_facts::<T>(|facts| {
        facts.injectable = Some(T::definition);
        facts.service = Some(ServiceDecl { token: token.clone() });
    });
    debug!(class = TypeInfo::of::<T>().name, token = %token, "Service annotated");
}

/// Publishes the module facts of `M`.
pub fn annotate_module<M: Module>() {
    with_facts::<M>(|facts| facts.module = Some(M::definition));
    debug!(module = TypeInfo::of::<M>().name, "Module annotated");
}

pub(crate) fn injectable_def(id: &TypeId) -> Option<InjectableDef> {
    let definition = FACTS.lock().get(id).and_then(|facts| facts.injectable);
    definition.map(|definition| definition())
}

pub(crate) fn service_decl(id: &TypeId) -> Option<ServiceDecl> {
    FACTS.lock().get(id).and_then(|facts| facts.service.clone())
}

pub(crate) fn module_def(id: &TypeId) -> Option<ModuleDef> {
    let definition = FACTS.lock().get(id).and_then(|facts| facts.module);
    definition.map(|definition| definition())
}
