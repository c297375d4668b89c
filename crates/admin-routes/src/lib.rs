//! # Admin Routes
//!
//! Route tables for the admin single-page application:
//! - **Dynamic routes**: every route module discovered under `modules/`,
//!   behind the not-found catch-all
//! - **Basic routes**: login, password change, root redirect, main-out
//!   routes, redirect helper and the not-found catch-all, always available
//!
//! Route modules come from a [`ModuleSource`]: either an explicit
//! [`ModuleRegistry`] or an [`FsModuleSource`] scanning a directory of TOML
//! module files. Views are never loaded while the tables are built; each
//! component route holds a [`ViewFactory`] the router invokes on navigation.
//!
//! ## Example
//!
//! ```
//! use admin_routes::{parse_module, ModuleRegistry, RouteTableBuilder};
//!
//! let registry = ModuleRegistry::new().with_module("./modules/about.toml", || {
//!     parse_module(r#"
//!         [default]
//!         path = "/about"
//!         name = "About"
//!         component = "/@/views/sys/about/index.vue"
//!     "#)
//! });
//!
//! let tables = RouteTableBuilder::new().build(&registry).unwrap();
//! assert_eq!(tables.dynamic().len(), 2);
//! assert_eq!(tables.basic()[2].path, "/");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod basic;
mod builder;
pub mod codegen;
pub mod config;
mod decl;
mod descriptor;
mod error;
mod fs_source;
mod i18n;
mod module;
mod pages;
mod registry;
mod tables;
mod view;

pub use basic::{BasicRouteSet, PAGE_NOT_FOUND_NAME, REDIRECT_NAME};
pub use builder::RouteTableBuilder;
pub use config::RouteConfig;
pub use decl::{parse_module, RouteDecl};
pub use descriptor::{RouteDescriptor, RouteMeta, RouteTarget};
pub use error::RouteError;
pub use fs_source::{FsModuleSource, ModuleFileEntry, DEFAULT_PATTERN};
pub use i18n::{KeyEcho, MessageCatalog, Translate};
pub use module::{Discovery, LoadedModule, RouteModule};
pub use pages::PageEnum;
pub use registry::{ModuleRegistry, ModuleSource};
pub use tables::{duplicate_names, RouteTables};
pub use view::{ViewFactory, ViewHandle, EXCEPTION_COMPONENT, LAYOUT};
