/// Route modules and the discovery mapping they are collected into

use crate::descriptor::RouteDescriptor;

/// The default export of a route module: one descriptor or several
#[derive(Debug, Clone, PartialEq)]
pub enum RouteModule {
    Single(RouteDescriptor),
    Many(Vec<RouteDescriptor>),
}

impl RouteModule {
    /// Normalizes the export to a sequence, keeping declaration order
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_routes::{RouteDescriptor, RouteModule};
    ///
    /// let single = RouteModule::Single(RouteDescriptor::redirect("/", "Root", "/home"));
    /// assert_eq!(single.into_routes().len(), 1);
    /// ```
    pub fn into_routes(self) -> Vec<RouteDescriptor> {
        match self {
            RouteModule::Single(route) => vec![route],
            RouteModule::Many(routes) => routes,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RouteModule::Single(_) => 1,
            RouteModule::Many(routes) => routes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RouteDescriptor> for RouteModule {
    fn from(route: RouteDescriptor) -> Self {
        RouteModule::Single(route)
    }
}

impl From<Vec<RouteDescriptor>> for RouteModule {
    fn from(routes: Vec<RouteDescriptor>) -> Self {
        RouteModule::Many(routes)
    }
}

/// Loaded content of one discovered module file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedModule {
    pub default_export: Option<RouteModule>,
}

impl LoadedModule {
    /// A module without a default export
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_default(module: impl Into<RouteModule>) -> Self {
        Self {
            default_export: Some(module.into()),
        }
    }

    /// Routes this module contributes; none when the default export is absent
    pub fn into_routes(self) -> Vec<RouteDescriptor> {
        self.default_export
            .map(RouteModule::into_routes)
            .unwrap_or_default()
    }

    pub fn route_count(&self) -> usize {
        self.default_export.as_ref().map_or(0, RouteModule::len)
    }
}

/// Ordered mapping of module key to loaded module
///
/// Iteration order is insertion order and is the order the builder merges in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discovery {
    entries: Vec<(String, LoadedModule)>,
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, module: LoadedModule) {
        self.entries.push((key.into(), module));
    }

    /// Builder-style [`Discovery::insert`]
    pub fn with_module(mut self, key: impl Into<String>, module: LoadedModule) -> Self {
        self.insert(key, module);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LoadedModule)> {
        self.entries.iter().map(|(key, module)| (key.as_str(), module))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Discovery {
    type Item = (String, LoadedModule);
    type IntoIter = std::vec::IntoIter<(String, LoadedModule)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, LoadedModule)> for Discovery {
    fn from_iter<I: IntoIterator<Item = (K, LoadedModule)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, module)| (key.into(), module)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_default_contributes_nothing() {
        assert!(LoadedModule::empty().into_routes().is_empty());
        assert_eq!(LoadedModule::empty().route_count(), 0);
    }

    #[test]
    fn test_discovery_keeps_insertion_order() {
        let discovery = Discovery::new()
            .with_module("./modules/z.toml", LoadedModule::empty())
            .with_module("./modules/a.toml", LoadedModule::empty());

        let keys: Vec<&str> = discovery.keys().collect();
        assert_eq!(keys, vec!["./modules/z.toml", "./modules/a.toml"]);
    }
}
