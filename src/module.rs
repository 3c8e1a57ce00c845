use alloc::{collections::BTreeMap, vec::Vec};
use core::any::TypeId;
use tracing::{debug, error};

use crate::{
    any::TypeInfo,
    errors::ModuleErrorKind,
    metadata::{self, annotate_injectable, Injectable},
    provider::Provider,
    token::InjectToken,
    Container,
};

/// A bundle of provider declarations and imports, expanded into a
/// container's registry on registration.
///
/// The annotation syntax producing module facts is outside the container;
/// implementing this trait is the explicit equivalent.
pub trait Module: 'static {
    fn definition() -> ModuleDef;
}

pub struct ModuleDef {
    pub(crate) imports: Vec<ModuleImport>,
    pub(crate) providers: Vec<ProviderDecl>,
    pub(crate) exports: Vec<InjectToken>,
}

impl Default for ModuleDef {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleDef {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            imports: Vec::new(),
            providers: Vec::new(),
            exports: Vec::new(),
        }
    }

    #[must_use]
    pub fn import<M: Module>(mut self) -> Self {
        self.imports.push(ModuleImport::of::<M>());
        self
    }

    #[must_use]
    pub fn import_entry(mut self, import: ModuleImport) -> Self {
        self.imports.push(import);
        self
    }

    #[must_use]
    pub fn provider(mut self, decl: ProviderDecl) -> Self {
        self.providers.push(decl);
        self
    }

    /// Records an exported token. Exports are informational: they are not
    /// enforced as a visibility boundary.
    #[must_use]
    pub fn export(mut self, token: impl Into<InjectToken>) -> Self {
        self.exports.push(token.into());
        self
    }
}

/// A reference to an imported module.
#[derive(Clone, Copy)]
pub struct ModuleImport {
    pub(crate) type_info: TypeInfo,
    pub(crate) publish: Option<fn()>,
}

impl ModuleImport {
    #[must_use]
    pub fn of<M: Module>() -> Self {
        Self {
            type_info: TypeInfo::of::<M>(),
            publish: Some(metadata::annotate_module::<M>),
        }
    }

    /// A raw reference by type identity. Expansion fails with
    /// [`ModuleErrorKind::InvalidModule`] unless module facts for the type
    /// have been published beforehand.
    #[must_use]
    pub fn by_type(type_info: TypeInfo) -> Self {
        Self { type_info, publish: None }
    }
}

/// One provider declaration inside a module.
#[derive(Clone)]
pub enum ProviderDecl {
    /// A bare class shorthand; its token comes from the class's service
    /// declaration.
    Shorthand(TypeInfo),
    /// An explicit `{token, provider}` entry.
    Entry { token: InjectToken, provider: Provider },
}

impl ProviderDecl {
    /// Declares `T` as a bare-class provider. `T`'s service declaration
    /// (see [`crate::annotate_service`]) must be published before the
    /// module expands.
    #[must_use]
    pub fn service<T: Injectable>() -> Self {
        annotate_injectable::<T>();
        Self::Shorthand(TypeInfo::of::<T>())
    }

    #[must_use]
    pub fn entry(token: impl Into<InjectToken>, provider: Provider) -> Self {
        Self::Entry {
            token: token.into(),
            provider,
        }
    }
}

/// The modules already expanded into a container, keyed by type identity.
#[derive(Clone, Default)]
pub(crate) struct RegisteredModules {
    map: BTreeMap<TypeId, TypeInfo>,
}

impl RegisteredModules {
    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, id: &TypeId) -> bool {
        self.map.contains_key(id)
    }

    #[inline]
    pub(crate) fn insert(&mut self, type_info: TypeInfo) {
        self.map.insert(type_info.id, type_info);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.map.values().map(TypeInfo::short_name).collect()
    }
}

/// Expands the module registered under `type_info` into the container.
///
/// Idempotent per container: a module already in the registered set is
/// skipped. The module is marked registered before its imports expand, so
/// import cycles terminate.
pub(crate) fn register_module(container: &Container, type_info: TypeInfo) -> Result<(), ModuleErrorKind> {
    if container.module_seen(&type_info.id) {
        debug!(module = type_info.name, "Module already registered");
        return Ok(());
    }

    let Some(def) = metadata::module_def(&type_info.id) else {
        let err = ModuleErrorKind::InvalidModule { type_info };
        error!("{}", err);
        return Err(err);
    };

    container.mark_module(type_info);
    expand(container, &def)?;
    debug!(module = type_info.name, "Module registered");
    Ok(())
}

/// Expands a plain module configuration: same steps as
/// [`register_module`], but the configuration itself is not tracked in the
/// registered set. Imported module classes are still deduplicated.
pub(crate) fn register_module_config(container: &Container, def: &ModuleDef) -> Result<(), ModuleErrorKind> {
    expand(container, def)
}

fn expand(container: &Container, def: &ModuleDef) -> Result<(), ModuleErrorKind> {
    for import in &def.imports {
        if let Some(publish) = import.publish {
            publish();
        }
        register_module(container, import.type_info)?;
    }
    for decl in &def.providers {
        register_provider_decl(container, decl)?;
    }
    // Exports are not a visibility boundary; they are surfaced for
    // introspection only.
    if !def.exports.is_empty() {
        debug!(exports = def.exports.len(), "Exports recorded");
    }
    Ok(())
}

fn register_provider_decl(container: &Container, decl: &ProviderDecl) -> Result<(), ModuleErrorKind> {
    match decl {
        ProviderDecl::Shorthand(type_info) => {
            let Some(service) = metadata::service_decl(&type_info.id) else {
                let err = ModuleErrorKind::InvalidService { type_info: *type_info };
                error!("{}", err);
                return Err(err);
            };
            container.set(service.token, Provider::class_of(*type_info))?;
        }
        ProviderDecl::Entry { token, provider } => {
            container.set(token.clone(), provider.clone())?;
        }
    }
    Ok(())
}
