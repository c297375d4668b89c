/// The built route tables and their process-wide slot

use crate::descriptor::RouteDescriptor;
use crate::error::RouteError;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::BTreeMap;

static TABLES: OnceCell<RouteTables> = OnceCell::new();

/// Dynamic and basic route tables, read-only once built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteTables {
    dynamic: Vec<RouteDescriptor>,
    basic: Vec<RouteDescriptor>,
}

impl RouteTables {
    pub fn new(dynamic: Vec<RouteDescriptor>, basic: Vec<RouteDescriptor>) -> Self {
        Self { dynamic, basic }
    }

    /// Permission-aware routes: the not-found route followed by every discovered route
    pub fn dynamic(&self) -> &[RouteDescriptor] {
        &self.dynamic
    }

    /// Routes available without permissions
    pub fn basic(&self) -> &[RouteDescriptor] {
        &self.basic
    }

    /// Stores the tables for the lifetime of the process
    ///
    /// Tables are built once; a second call fails and leaves the first
    /// tables in place.
    pub fn install(self) -> Result<&'static RouteTables, RouteError> {
        TABLES
            .try_insert(self)
            .map_err(|_| RouteError::AlreadyInitialized)
    }

    /// Tables stored by [`RouteTables::install`], if any
    pub fn global() -> Option<&'static RouteTables> {
        TABLES.get()
    }
}

/// Top-level route names appearing more than once, with their counts
///
/// Diagnostic only: the router decides what a duplicate means.
///
/// # Examples
///
/// ```
/// use admin_routes::{duplicate_names, RouteDescriptor};
///
/// let routes = vec![
///     RouteDescriptor::redirect("/a", "Home", "/x"),
///     RouteDescriptor::redirect("/b", "Home", "/y"),
///     RouteDescriptor::redirect("/c", "Other", "/z"),
/// ];
/// assert_eq!(duplicate_names(&routes), vec![("Home".to_string(), 2)]);
/// ```
pub fn duplicate_names(routes: &[RouteDescriptor]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for route in routes {
        *counts.entry(route.name.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}
