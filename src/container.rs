use alloc::{boxed::Box, vec::Vec};
use core::any::TypeId;
use parking_lot::Mutex;
use tracing::{debug, error, info_span};

use crate::{
    cache::SingletonCache,
    errors::{CycleErrorKind, InstantiatorErrorKind, ModuleErrorKind, RegistryErrorKind, ResolveErrorKind},
    metadata::{self, annotate_injectable, Injectable, ResolvedArgs},
    module::{self, Module, ModuleDef, RegisteredModules},
    provider::Provider,
    registry::{AliasMap, ProviderRegistry},
    resolver::{self, ResolutionGuard},
    token::InjectToken,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// The container facade: provider registry, singleton cache, alias map and
/// registered-modules set behind one shared handle.
///
/// Cloning shares the handle; [`Container::create_child_container`] makes
/// an independent snapshot. Interior structures are individually locked and
/// no lock is held across recursive resolution, but a container is meant to
/// be owned by one logical execution context; use child containers to
/// isolate parallel scopes.
#[derive(Clone, Default)]
pub struct Container {
    inner: RcThreadSafety<ContainerInner>,
}

#[derive(Default)]
pub(crate) struct ContainerInner {
    registry: Mutex<ProviderRegistry>,
    cache: Mutex<SingletonCache>,
    aliases: Mutex<AliasMap>,
    modules: Mutex<RegisteredModules>,
    resolving: Mutex<Vec<InjectToken>>,
}

/// Snapshot of a container's registered tokens and module names.
#[derive(Debug)]
pub struct ContainerListing {
    pub tokens: Vec<InjectToken>,
    pub modules: Vec<&'static str>,
}

impl Container {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider descriptor under `token`. Re-registration
    /// overwrites the previous descriptor and drops any cached singleton
    /// for the token, so a later `get` reads the new provider.
    ///
    /// Registering a class provider under a token different from the class
    /// itself records an alias, so a later look-up by either succeeds.
    ///
    /// # Errors
    /// - Returns [`RegistryErrorKind::InvalidToken`] if the token carries no usable identity
    /// - Returns [`RegistryErrorKind::InvalidProvider`] if a class provider's type has no
    ///   injectable definition published
    pub fn set(&self, token: impl Into<InjectToken>, provider: Provider) -> Result<(), RegistryErrorKind> {
        let token = token.into();
        let span = info_span!("set", token = %token, strategy = provider.strategy_name());
        let _guard = span.enter();

        if !token.is_renderable() {
            let err = RegistryErrorKind::InvalidToken { token };
            error!("{}", err);
            return Err(err);
        }

        if let Provider::Class(class) = &provider {
            if metadata::injectable_def(&class.type_info.id).is_none() {
                let err = RegistryErrorKind::InvalidProvider {
                    type_info: class.type_info,
                };
                error!("{}", err);
                return Err(err);
            }

            let class_token = InjectToken::Type(class.type_info);
            if class_token != token {
                self.inner.aliases.lock().insert(class_token, token.clone());
                debug!("Alias recorded");
            }
        }

        self.inner.cache.lock().remove(&token);
        self.inner.registry.lock().insert(token, provider);
        debug!("Provider registered");
        Ok(())
    }

    /// Expands the module `M` into this container. Registering the same
    /// module twice is a no-op.
    ///
    /// # Errors
    /// - Returns [`ModuleErrorKind::InvalidModule`] if an imported type has no module definition
    /// - Returns [`ModuleErrorKind::InvalidService`] if a bare-class provider lacks a service declaration
    /// - Returns [`ModuleErrorKind::Registry`] if a provider entry fails registration
    pub fn register_module<M: Module>(&self) -> Result<(), ModuleErrorKind> {
        metadata::annotate_module::<M>();
        module::register_module(self, crate::TypeInfo::of::<M>())
    }

    /// Expands a plain module configuration. Configurations are expected to
    /// be built fresh each time and are not deduplicated themselves;
    /// imported module classes still are.
    ///
    /// # Errors
    /// Same conditions as [`Container::register_module`]
    pub fn register_module_config(&self, config: &ModuleDef) -> Result<(), ModuleErrorKind> {
        module::register_module_config(self, config)
    }

    /// Resolves `token` to its value, producing and caching it on first use.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NoProviderFound`] if no descriptor is registered
    /// - Returns [`ResolveErrorKind::IncorrectType`] if the value is not a `T`
    /// - Returns [`ResolveErrorKind::Cycle`] on a circular dependency
    pub fn get<T: SendSafety + SyncSafety + 'static>(&self, token: impl Into<InjectToken>) -> Result<RcThreadSafety<T>, ResolveErrorKind> {
        let instance = self.get_raw(token)?;
        let actual = (*instance).type_id();
        instance.downcast().map_err(|_| {
            let err = ResolveErrorKind::IncorrectType {
                expected: TypeId::of::<T>(),
                actual,
            };
            error!("{}", err);
            err
        })
    }

    /// Type-erased [`Container::get`].
    ///
    /// # Errors
    /// Same conditions as [`Container::get`], minus the downcast check
    pub fn get_raw(&self, token: impl Into<InjectToken>) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
        let token = token.into();
        let span = info_span!("get", token = %token);
        let _guard = span.enter();

        if !token.is_renderable() {
            let err = ResolveErrorKind::InvalidToken { token };
            error!("{}", err);
            return Err(err);
        }

        let canonical = self.inner.aliases.lock().resolve(token);

        if let Some(instance) = self.inner.cache.lock().get(&canonical) {
            debug!("Found in cache");
            return Ok(instance);
        }
        debug!("Not found in cache");

        let Some(provider) = self.inner.registry.lock().get(&canonical) else {
            let err = ResolveErrorKind::NoProviderFound { token: canonical };
            error!("{}", err);
            return Err(err);
        };

        let instance = {
            let _resolving = ResolutionGuard::enter(self, &canonical)?;
            match provider {
                Provider::Value(value) => value.value.clone(),
                Provider::Factory(factory) => {
                    let mut values = Vec::with_capacity(factory.deps.len());
                    for dep in &factory.deps {
                        let value = self
                            .get_raw(dep.clone())
                            .map_err(|err| ResolveErrorKind::Instantiator(InstantiatorErrorKind::Deps(Box::new(err))))?;
                        values.push(Some(value));
                    }
                    let produced = (factory.factory)(ResolvedArgs::new(values))
                        .map_err(|err| ResolveErrorKind::Instantiator(InstantiatorErrorKind::Factory(err)))?;
                    debug!("Resolved");
                    RcAnyThreadSafety::from(produced)
                }
                Provider::Class(class) => {
                    let Some(def) = metadata::injectable_def(&class.type_info.id) else {
                        let err = ResolveErrorKind::InvalidProvider {
                            type_info: class.type_info,
                        };
                        error!("{}", err);
                        return Err(err);
                    };
                    let produced = resolver::construct(self, &def)?;
                    debug!("Resolved");
                    RcAnyThreadSafety::from(produced)
                }
            }
        };

        self.inner.cache.lock().insert(canonical, instance.clone());
        debug!("Cached");
        Ok(instance)
    }

    /// Reports whether a descriptor is registered for `token` (after alias
    /// resolution). Never instantiates.
    #[must_use]
    pub fn has(&self, token: impl Into<InjectToken>) -> bool {
        let token = token.into();
        if !token.is_renderable() {
            return false;
        }
        let canonical = self.inner.aliases.lock().resolve(token);
        self.inner.registry.lock().contains(&canonical)
    }

    /// Constructs a `T` directly, with full dependency injection but
    /// independent of the registry: the produced instance is neither cached
    /// nor registered.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind`] for any dependency failure inside the graph
    /// - Returns [`ResolveErrorKind::Cycle`] on a circular dependency
    pub fn resolve<T: Injectable>(&self) -> Result<T, ResolveErrorKind> {
        annotate_injectable::<T>();
        let def = T::definition();
        let token = InjectToken::Type(def.type_info());

        let boxed = {
            let _resolving = ResolutionGuard::enter(self, &token)?;
            resolver::construct(self, &def)?
        };
        let actual = (*boxed).type_id();
        boxed.downcast().map(|instance| *instance).map_err(|_| {
            let err = ResolveErrorKind::IncorrectType {
                expected: TypeId::of::<T>(),
                actual,
            };
            error!("{}", err);
            err
        })
    }

    /// Creates a container whose registry, cache, aliases and
    /// registered-modules set are snapshots of this one. Later changes on
    /// either side are invisible to the other.
    #[must_use]
    pub fn create_child_container(&self) -> Container {
        let child = Container {
            inner: RcThreadSafety::new(ContainerInner {
                registry: Mutex::new(self.inner.registry.lock().clone()),
                cache: Mutex::new(self.inner.cache.lock().snapshot()),
                aliases: Mutex::new(self.inner.aliases.lock().clone()),
                modules: Mutex::new(self.inner.modules.lock().clone()),
                resolving: Mutex::new(Vec::new()),
            }),
        };
        debug!("Child container created");
        child
    }

    /// Returns the container to its just-constructed state.
    pub fn clear(&self) {
        self.inner.registry.lock().clear();
        self.inner.cache.lock().clear();
        self.inner.aliases.lock().clear();
        self.inner.modules.lock().clear();
        debug!("Container cleared");
    }

    /// Registered tokens and module names, for introspection.
    #[must_use]
    pub fn list(&self) -> ContainerListing {
        ContainerListing {
            tokens: self.inner.registry.lock().tokens(),
            modules: self.inner.modules.lock().names(),
        }
    }
}

impl Container {
    pub(crate) fn module_seen(&self, id: &TypeId) -> bool {
        self.inner.modules.lock().contains(id)
    }

    pub(crate) fn mark_module(&self, type_info: crate::TypeInfo) {
        self.inner.modules.lock().insert(type_info);
    }

    pub(crate) fn resolving_push(&self, token: &InjectToken) -> Result<(), ResolveErrorKind> {
        let mut resolving = self.inner.resolving.lock();
        if let Some(position) = resolving.iter().position(|entry| entry == token) {
            let chain = resolving[position..].to_vec().into_boxed_slice();
            let err = ResolveErrorKind::Cycle(CycleErrorKind::CircularDependency {
                token: token.clone(),
                chain,
            });
            error!("{}", err);
            return Err(err);
        }
        resolving.push(token.clone());
        Ok(())
    }

    pub(crate) fn resolving_pop(&self) {
        self.inner.resolving.lock().pop();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::{
        boxed::Box,
        format,
        string::{String, ToString},
        vec,
    };

    use tracing_test::traced_test;

    use super::{Container, ContainerInner};
    use crate::{
        assign_prop,
        metadata::{annotate_injectable, InjectableDef},
        token::{InjectToken, Symbol, Token},
        utils::thread_safety::RcThreadSafety,
        Injectable, Provider, RegistryErrorKind, ResolveErrorKind, TypeInfo,
    };

    struct Logger {
        level: u8,
    }

    struct Service {
        logger: RcThreadSafety<Logger>,
        retries: RcThreadSafety<u8>,
    }

    impl Injectable for Service {
        fn definition() -> InjectableDef {
            InjectableDef::new::<Self>(2, |mut args| {
                Ok(Box::new(Service {
                    logger: args.take(0)?,
                    retries: args.take(1)?,
                }))
            })
            .ctor_site(0, "logger")
            .ctor_site(1, "retries")
        }
    }

    #[test]
    #[traced_test]
    fn test_singleton_identity() {
        let container = Container::new();
        container.set("logger", Provider::value(Logger { level: 3 })).unwrap();
        container.set("retries", Provider::value(5u8)).unwrap();
        container.set("service", Provider::class::<Service>()).unwrap();

        let first = container.get::<Service>("service").unwrap();
        let second = container.get::<Service>("service").unwrap();

        assert!(RcThreadSafety::ptr_eq(&first, &second));
        assert_eq!(first.logger.level, 3);
        assert_eq!(*first.retries, 5);
    }

    #[test]
    #[traced_test]
    fn test_reregistration_resets_identity() {
        let container = Container::new();
        container.set("retries", Provider::value(1u8)).unwrap();

        let first = container.get::<u8>("retries").unwrap();
        container.set("retries", Provider::value(2u8)).unwrap();
        let second = container.get::<u8>("retries").unwrap();

        assert!(!RcThreadSafety::ptr_eq(&first, &second));
        assert_eq!(*first, 1);
        assert_eq!(*second, 2);
    }

    #[test]
    #[traced_test]
    fn test_alias_equivalence() {
        struct Repo;

        impl Injectable for Repo {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(0, |_| Ok(Box::new(Repo)))
            }
        }

        let token: Token<Repo> = Token::new("REPO");
        let container = Container::new();
        container.set(&token, Provider::class::<Repo>()).unwrap();

        assert!(container.has(InjectToken::of::<Repo>()));

        let by_token = container.get::<Repo>(&token).unwrap();
        let by_class = container.get::<Repo>(InjectToken::of::<Repo>()).unwrap();

        assert!(RcThreadSafety::ptr_eq(&by_token, &by_class));
    }

    #[test]
    #[traced_test]
    fn test_missing_provider() {
        let container = Container::new();
        let token: Token<u8> = Token::new("MISSING");

        assert!(!container.has(&token));
        assert!(matches!(
            container.get::<u8>(&token),
            Err(ResolveErrorKind::NoProviderFound { .. })
        ));
    }

    #[test]
    #[traced_test]
    fn test_constructor_injection_positions() {
        struct Pair {
            left: RcThreadSafety<u8>,
            right: RcThreadSafety<u16>,
        }

        impl Injectable for Pair {
            fn definition() -> InjectableDef {
                // Sites declared out of order on purpose; indices decide.
                InjectableDef::new::<Self>(2, |mut args| {
                    Ok(Box::new(Pair {
                        left: args.take(0)?,
                        right: args.take(1)?,
                    }))
                })
                .ctor_site(1, "right")
                .ctor_site(0, "left")
            }
        }

        let container = Container::new();
        container.set("left", Provider::value(1u8)).unwrap();
        container.set("right", Provider::value(2u16)).unwrap();

        let pair = container.resolve::<Pair>().unwrap();
        assert_eq!(*pair.left, 1);
        assert_eq!(*pair.right, 2);
    }

    #[test]
    #[traced_test]
    fn test_property_injection_after_construction() {
        struct Auditor {
            sink: Option<RcThreadSafety<Logger>>,
        }

        impl Injectable for Auditor {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(0, |_| Ok(Box::new(Auditor { sink: None })))
                    .prop_site("sink", "logger", |instance, value| {
                        assign_prop("sink", instance, value, |auditor: &mut Auditor, sink| auditor.sink = Some(sink))
                    })
            }
        }

        let container = Container::new();
        container.set("logger", Provider::value(Logger { level: 1 })).unwrap();

        let auditor = container.resolve::<Auditor>().unwrap();
        assert_eq!(auditor.sink.unwrap().level, 1);
    }

    #[test]
    #[traced_test]
    fn test_factory_deps_order() {
        let container = Container::new();
        container.set("a", Provider::value(1u8)).unwrap();
        container.set("b", Provider::value(2u8)).unwrap();
        container
            .set(
                "sum",
                Provider::factory(vec![InjectToken::from("a"), InjectToken::from("b")], |mut args| {
                    let a = args.take::<u8>(0)?;
                    let b = args.take::<u8>(1)?;
                    Ok(u16::from(*a) * 10 + u16::from(*b))
                }),
            )
            .unwrap();

        assert_eq!(*container.get::<u16>("sum").unwrap(), 12);
    }

    #[test]
    #[traced_test]
    fn test_factory_failure_propagates() {
        let container = Container::new();
        container
            .set(
                "flaky",
                Provider::factory([], |_args| -> Result<u8, crate::InstantiateErrorKind> {
                    Err(anyhow::anyhow!("backend unavailable").into())
                }),
            )
            .unwrap();

        let err = container.get::<u8>("flaky").unwrap_err();
        assert!(matches!(err, ResolveErrorKind::Instantiator(_)));
        assert!(format!("{err}").contains("backend unavailable"));
    }

    #[test]
    #[traced_test]
    fn test_factory_missing_dep_propagates() {
        let container = Container::new();
        container
            .set(
                "derived",
                Provider::factory([InjectToken::from("absent")], |mut args| args.take::<u8>(0).map(|value| *value)),
            )
            .unwrap();

        let err = container.get::<u8>("derived").unwrap_err();
        assert!(matches!(err, ResolveErrorKind::Instantiator(_)));
        assert!(format!("{err}").contains("No provider found"));
    }

    #[test]
    #[traced_test]
    fn test_child_isolation() {
        let parent = Container::new();
        parent.set("config", Provider::value(1u8)).unwrap();

        let child = parent.create_child_container();
        child.set("config", Provider::value(2u8)).unwrap();

        assert_eq!(*parent.get::<u8>("config").unwrap(), 1);
        assert_eq!(*child.get::<u8>("config").unwrap(), 2);

        parent.set("late", Provider::value(3u8)).unwrap();
        assert!(!child.has("late"));
    }

    #[test]
    #[traced_test]
    fn test_child_shares_cached_singletons() {
        let parent = Container::new();
        parent.set("logger", Provider::value(Logger { level: 7 })).unwrap();

        let resolved = parent.get::<Logger>("logger").unwrap();
        let child = parent.create_child_container();

        assert!(RcThreadSafety::ptr_eq(&resolved, &child.get::<Logger>("logger").unwrap()));
    }

    #[test]
    #[traced_test]
    fn test_clear_resets() {
        let container = Container::new();
        let symbol = Symbol::new("db");
        container.set("config", Provider::value(1u8)).unwrap();
        container.set(symbol.clone(), Provider::value(2u8)).unwrap();

        container.clear();

        assert!(!container.has("config"));
        assert!(!container.has(symbol));
        assert!(container.list().tokens.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_list_reports_tokens() {
        let container = Container::new();
        container.set("config", Provider::value(1u8)).unwrap();
        container.set("logger", Provider::value(Logger { level: 1 })).unwrap();

        let listing = container.list();
        assert_eq!(listing.tokens.len(), 2);
        assert!(listing.tokens.contains(&InjectToken::from("config")));
        assert!(container.has("config"));
    }

    #[test]
    #[traced_test]
    fn test_circular_dependency_fails_fast() {
        #[derive(Debug)]
        struct Ping {
            _pong: RcThreadSafety<Pong>,
        }
        #[derive(Debug)]
        struct Pong {
            _ping: RcThreadSafety<Ping>,
        }

        impl Injectable for Ping {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(1, |mut args| Ok(Box::new(Ping { _pong: args.take(0)? }))).ctor_site(0, InjectToken::of::<Pong>())
            }
        }

        impl Injectable for Pong {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(1, |mut args| Ok(Box::new(Pong { _ping: args.take(0)? }))).ctor_site(0, InjectToken::of::<Ping>())
            }
        }

        let container = Container::new();
        container.set(InjectToken::of::<Ping>(), Provider::class::<Ping>()).unwrap();
        container.set(InjectToken::of::<Pong>(), Provider::class::<Pong>()).unwrap();

        let err = container.get::<Ping>(InjectToken::of::<Ping>()).unwrap_err();
        let rendered = format!("{err}");
        assert!(rendered.contains("Circular dependency detected"), "got: {rendered}");
        assert!(rendered.contains(" -> "));

        // The stack unwinds: unrelated resolution still works.
        container.set("retries", Provider::value(1u8)).unwrap();
        assert_eq!(*container.get::<u8>("retries").unwrap(), 1);
    }

    #[test]
    #[traced_test]
    fn test_invalid_token_rejected() {
        let container = Container::new();

        assert!(matches!(
            container.set("", Provider::value(1u8)),
            Err(RegistryErrorKind::InvalidToken { .. })
        ));
        assert!(matches!(
            container.get::<u8>(""),
            Err(ResolveErrorKind::InvalidToken { .. })
        ));
        assert!(!container.has(""));
    }

    #[test]
    #[traced_test]
    fn test_unpublished_class_provider_rejected_at_set() {
        struct Bare;

        let container = Container::new();
        let result = container.set("bare", Provider::class_of(TypeInfo::of::<Bare>()));

        assert!(matches!(result, Err(RegistryErrorKind::InvalidProvider { .. })));
        assert!(!container.has("bare"));
    }

    #[test]
    #[traced_test]
    fn test_incorrect_type_downcast() {
        let container = Container::new();
        container.set("config", Provider::value(1u8)).unwrap();

        assert!(matches!(
            container.get::<u16>("config"),
            Err(ResolveErrorKind::IncorrectType { .. })
        ));
    }

    #[test]
    #[traced_test]
    fn test_implicit_param_type_fallback() {
        struct Clock;

        impl Injectable for Clock {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(0, |_| Ok(Box::new(Clock)))
            }
        }

        struct Scheduler {
            clock: RcThreadSafety<Clock>,
        }

        impl Injectable for Scheduler {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(1, |mut args| Ok(Box::new(Scheduler { clock: args.take(0)? }))).param_type::<Clock>(0)
            }
        }

        // Registered under its own type: resolved through the registry and cached.
        let container = Container::new();
        container.set(InjectToken::of::<Clock>(), Provider::class::<Clock>()).unwrap();
        let scheduler = container.resolve::<Scheduler>().unwrap();
        let registered_clock = container.get::<Clock>(InjectToken::of::<Clock>()).unwrap();
        assert!(RcThreadSafety::ptr_eq(&scheduler.clock, &registered_clock));

        // Unregistered but annotated: constructed directly, nothing cached.
        let container = Container::new();
        annotate_injectable::<Clock>();
        let scheduler = container.resolve::<Scheduler>();
        assert!(scheduler.is_ok());
        assert!(!container.has(InjectToken::of::<Clock>()));
    }

    #[test]
    #[traced_test]
    fn test_unresolvable_param_type_surfaces_missing_argument() {
        #[derive(Debug)]
        struct NeverAnnotated;

        #[derive(Debug)]
        struct Needy {
            _dep: RcThreadSafety<NeverAnnotated>,
        }

        impl Injectable for Needy {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(1, |mut args| Ok(Box::new(Needy { _dep: args.take(0)? }))).param_type::<NeverAnnotated>(0)
            }
        }

        let container = Container::new();
        let err = container.resolve::<Needy>().unwrap_err();
        assert!(format!("{err}").contains("Missing required argument"));
    }

    #[test]
    #[traced_test]
    fn test_optional_sites_tolerate_missing_providers() {
        struct Report {
            retries: Option<RcThreadSafety<u8>>,
            sink: Option<RcThreadSafety<Logger>>,
        }

        impl Injectable for Report {
            fn definition() -> InjectableDef {
                InjectableDef::new::<Self>(1, |mut args| {
                    Ok(Box::new(Report {
                        retries: args.take_opt(0)?,
                        sink: None,
                    }))
                })
                .ctor_site_optional(0, "retries")
                .prop_site_optional("sink", "logger", |instance, value| {
                    assign_prop("sink", instance, value, |report: &mut Report, sink| report.sink = Some(sink))
                })
            }
        }

        let container = Container::new();
        let report = container.resolve::<Report>().unwrap();
        assert!(report.retries.is_none());
        assert!(report.sink.is_none());

        container.set("retries", Provider::value(4u8)).unwrap();
        container.set("logger", Provider::value(Logger { level: 2 })).unwrap();
        let report = container.resolve::<Report>().unwrap();
        assert_eq!(*report.retries.unwrap(), 4);
        assert_eq!(report.sink.unwrap().level, 2);
    }

    #[test]
    #[traced_test]
    fn test_string_and_symbol_tokens() {
        let container = Container::new();
        let symbol = Symbol::new("session");
        container.set(String::from("config"), Provider::value(1u8)).unwrap();
        container.set(symbol.clone(), Provider::value(2u8)).unwrap();

        assert_eq!(*container.get::<u8>("config").unwrap(), 1);
        assert_eq!(*container.get::<u8>(symbol).unwrap(), 2);
        assert!(!container.has(Symbol::new("session")));
    }

    #[test]
    fn test_thread_safe() {
        #[cfg(feature = "thread_safe")]
        fn impl_bounds<T: Send + Sync + 'static>() {}

        #[cfg(feature = "thread_safe")]
        impl_bounds::<(Container, ContainerInner)>();

        let container = Container::new();
        container.set("retries", Provider::value(1u8)).unwrap();

        #[cfg(feature = "thread_safe")]
        std::thread::spawn(move || {
            assert_eq!(*container.get::<u8>("retries").unwrap(), 1);
        })
        .join()
        .unwrap();
    }
}
