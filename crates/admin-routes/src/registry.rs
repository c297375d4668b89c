/// Module sources: where the builder's discovery mapping comes from

use crate::module::{Discovery, LoadedModule};
use anyhow::Result;
use std::fmt;
use tracing::debug;

/// Anything that can produce a fully-resolved [`Discovery`]
///
/// Discovery is eager: every module is loaded before the builder runs.
pub trait ModuleSource {
    fn discover(&self) -> Result<Discovery>;
}

impl ModuleSource for Discovery {
    fn discover(&self) -> Result<Discovery> {
        Ok(self.clone())
    }
}

type ModuleLoader = Box<dyn Fn() -> LoadedModule + Send + Sync>;

/// Explicit, statically written list of route modules
///
/// Modules are loaded in registration order.
///
/// # Examples
///
/// ```
/// use admin_routes::{LoadedModule, ModuleRegistry, ModuleSource, RouteDescriptor};
///
/// let registry = ModuleRegistry::new()
///     .with_module("./modules/home.toml", || {
///         LoadedModule::with_default(RouteDescriptor::redirect("/home", "Home", "/dashboard"))
///     })
///     .with_module("./modules/empty.toml", LoadedModule::empty);
///
/// let discovery = registry.discover().unwrap();
/// assert_eq!(discovery.len(), 2);
/// ```
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<(String, ModuleLoader)>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, key: impl Into<String>, loader: F)
    where
        F: Fn() -> LoadedModule + Send + Sync + 'static,
    {
        self.modules.push((key.into(), Box::new(loader)));
    }

    pub fn with_module<F>(mut self, key: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> LoadedModule + Send + Sync + 'static,
    {
        self.register(key, loader);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleSource for ModuleRegistry {
    fn discover(&self) -> Result<Discovery> {
        Ok(self
            .modules
            .iter()
            .map(|(key, loader)| {
                let module = loader();
                debug!("Loaded route module {} ({} routes)", key, module.route_count());
                (key.as_str(), module)
            })
            .collect())
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
