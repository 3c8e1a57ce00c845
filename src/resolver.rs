use alloc::{boxed::Box, vec, vec::Vec};
use tracing::{debug, info_span};

use crate::{
    errors::{InstantiateErrorKind, InstantiatorErrorKind, ResolveErrorKind},
    metadata::{self, InjectableDef, ResolvedArgs},
    token::InjectToken,
    utils::thread_safety::{BoxAnyThreadSafety, RcAnyThreadSafety},
    Container,
};

/// RAII entry on the container's resolution stack.
///
/// Entering a token already on the stack fails with the circular-dependency
/// error instead of recursing until stack exhaustion.
pub(crate) struct ResolutionGuard<'a> {
    container: &'a Container,
}

impl<'a> ResolutionGuard<'a> {
    pub(crate) fn enter(container: &'a Container, token: &InjectToken) -> Result<Self, ResolveErrorKind> {
        container.resolving_push(token)?;
        Ok(Self { container })
    }
}

impl Drop for ResolutionGuard<'_> {
    fn drop(&mut self) {
        self.container.resolving_pop();
    }
}

/// Builds one instance of the class described by `def`, satisfying all
/// declared constructor and property sites through `container`.
pub(crate) fn construct(container: &Container, def: &InjectableDef) -> Result<BoxAnyThreadSafety, ResolveErrorKind> {
    let span = info_span!("construct", class = def.type_info.name);
    let _guard = span.enter();

    let mut args: Vec<Option<RcAnyThreadSafety>> = Vec::new();
    args.resize_with(def.ctor_arity, || None);
    let mut covered = vec![false; def.ctor_arity];

    for site in &def.ctor_sites {
        if let Some(flag) = covered.get_mut(site.index) {
            *flag = true;
        }
        if site.optional && !container.has(site.token.clone()) {
            debug!(token = %site.token, index = site.index, "Optional dependency missing");
            continue;
        }
        let value = container.get_raw(site.token.clone()).map_err(deps_err)?;
        if let Some(slot) = args.get_mut(site.index) {
            *slot = Some(value);
        }
    }

    // Implicit fallback for parameters without an explicit site: the
    // reflected parameter type stands in as a token. Bounded to types with
    // published injectable facts; anything else leaves the slot empty.
    for index in 0..def.ctor_arity {
        if covered[index] {
            continue;
        }
        let Some(param_type) = def.param_types[index] else {
            continue;
        };
        let token = InjectToken::Type(param_type);
        if container.has(token.clone()) {
            args[index] = Some(container.get_raw(token).map_err(deps_err)?);
        } else if let Some(dep_def) = metadata::injectable_def(&param_type.id) {
            let _resolving = ResolutionGuard::enter(container, &token)?;
            let instance = construct(container, &dep_def)?;
            args[index] = Some(RcAnyThreadSafety::from(instance));
            debug!(class = param_type.name, index, "Parameter type resolved directly");
        }
    }

    let mut instance = (def.construct)(ResolvedArgs::new(args)).map_err(factory_err)?;
    debug!("Constructed");

    for prop in &def.prop_sites {
        if prop.optional && !container.has(prop.token.clone()) {
            debug!(token = %prop.token, key = prop.key, "Optional property missing");
            continue;
        }
        let value = container.get_raw(prop.token.clone()).map_err(deps_err)?;
        (prop.assign)(&mut *instance, value).map_err(factory_err)?;
        debug!(key = prop.key, "Property injected");
    }

    Ok(instance)
}

fn deps_err(err: ResolveErrorKind) -> ResolveErrorKind {
    ResolveErrorKind::Instantiator(InstantiatorErrorKind::Deps(Box::new(err)))
}

fn factory_err(err: InstantiateErrorKind) -> ResolveErrorKind {
    ResolveErrorKind::Instantiator(InstantiatorErrorKind::Factory(err))
}
