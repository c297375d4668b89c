/// Route table builder
///
/// Flattens discovered route modules into the dynamic (permission-aware)
/// table and assembles the basic (always available) table around the
/// hand-written routes.

use crate::basic::{login_route, mod_pwd_route, root_route, BasicRouteSet};
use crate::descriptor::RouteDescriptor;
use crate::i18n::{KeyEcho, Translate};
use crate::module::Discovery;
use crate::pages::PageEnum;
use crate::registry::ModuleSource;
use crate::tables::RouteTables;
use anyhow::Result;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Builds both route tables from a discovery mapping and injected collaborators
///
/// # Examples
///
/// ```
/// use admin_routes::{Discovery, LoadedModule, RouteDescriptor, RouteTableBuilder};
///
/// let builder = RouteTableBuilder::new();
/// let discovery = Discovery::new().with_module(
///     "./modules/about.toml",
///     LoadedModule::with_default(RouteDescriptor::redirect("/about", "About", "/about/index")),
/// );
///
/// let dynamic = builder.build_dynamic_routes(discovery);
/// assert_eq!(dynamic.len(), 2);
/// assert_eq!(dynamic[0].name, "PageNotFound");
/// assert_eq!(dynamic[1].name, "About");
///
/// let basic = builder.build_basic_routes();
/// assert_eq!(basic[0].path, "/login");
/// assert_eq!(basic.last().unwrap().name, "PageNotFound");
/// ```
#[derive(Clone)]
pub struct RouteTableBuilder {
    translator: Arc<dyn Translate>,
    home: String,
    basic: BasicRouteSet,
}

impl RouteTableBuilder {
    /// Builder with untranslated titles, `/dashboard` as home and the default
    /// collaborator routes
    pub fn new() -> Self {
        Self {
            translator: Arc::new(KeyEcho),
            home: PageEnum::BaseHome.path().to_string(),
            basic: BasicRouteSet::default(),
        }
    }

    pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Target of the root redirect
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    pub fn with_basic_routes(mut self, basic: BasicRouteSet) -> Self {
        self.basic = basic;
        self
    }

    pub fn basic_routes(&self) -> &BasicRouteSet {
        &self.basic
    }

    /// `[PageNotFound, ...routes of every module in discovery order]`
    ///
    /// A module without a default export contributes nothing. Duplicate
    /// names or paths pass through untouched.
    pub fn build_dynamic_routes(&self, discovery: Discovery) -> Vec<RouteDescriptor> {
        let modules: Vec<RouteDescriptor> = discovery
            .into_iter()
            .flat_map(|(_, module)| module.into_routes())
            .collect();

        std::iter::once(self.basic.page_not_found.clone())
            .chain(modules)
            .collect()
    }

    /// `[Login, ModPwd, Root, ...MainOut, Redirect, PageNotFound]`
    pub fn build_basic_routes(&self) -> Vec<RouteDescriptor> {
        let t = self.translator.as_ref();

        [login_route(t), mod_pwd_route(t), root_route(&self.home)]
            .into_iter()
            .chain(self.basic.main_out.iter().cloned())
            .chain([self.basic.redirect.clone(), self.basic.page_not_found.clone()])
            .collect()
    }

    /// Runs discovery to completion, then builds both tables
    pub fn build(&self, source: &dyn ModuleSource) -> Result<RouteTables> {
        let discovery = source.discover()?;
        let module_count = discovery.len();

        let tables = RouteTables::new(self.build_dynamic_routes(discovery), self.build_basic_routes());

        info!(
            "Built route tables: {} dynamic routes from {} modules, {} basic routes",
            tables.dynamic().len(),
            module_count,
            tables.basic().len()
        );

        Ok(tables)
    }
}

impl Default for RouteTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RouteTableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTableBuilder")
            .field("home", &self.home)
            .field("basic", &self.basic)
            .finish_non_exhaustive()
    }
}
