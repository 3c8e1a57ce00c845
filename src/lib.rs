#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod cache;
pub(crate) mod container;
pub(crate) mod errors;
pub(crate) mod metadata;
pub(crate) mod module;
pub(crate) mod provider;
pub(crate) mod registry;
pub(crate) mod resolver;
pub(crate) mod token;

pub mod utils;

pub use any::TypeInfo;
pub use container::{Container, ContainerListing};
pub use errors::{CycleErrorKind, InstantiateErrorKind, InstantiatorErrorKind, ModuleErrorKind, RegistryErrorKind, ResolveErrorKind};
pub use metadata::{
    annotate_injectable, annotate_module, annotate_service, assign_prop, AssignFn, ConstructFn, CtorSite, Injectable, InjectableDef,
    PropSite, ResolvedArgs, ServiceDecl,
};
pub use module::{Module, ModuleDef, ModuleImport, ProviderDecl};
pub use provider::{ClassProvider, FactoryProvider, Provider, ValueProvider};
pub use token::{InjectToken, Symbol, Token};
