/// TOML route module declarations
///
/// A module file declares its default export either as a `[default]` table
/// (one route) or as `[[default]]` tables (several routes):
///
/// ```toml
/// [default]
/// path = "/dashboard"
/// name = "Dashboard"
/// component = "LAYOUT"
/// redirect = "/dashboard/analysis"
///
/// [default.meta]
/// title = "routes.dashboard.dashboard"
///
/// [[default.children]]
/// path = "analysis"
/// name = "Analysis"
/// component = "/@/views/dashboard/analysis/index.vue"
/// ```
///
/// Malformed content never fails a build: the affected routes are dropped
/// and a warning is logged.

use crate::descriptor::{RouteDescriptor, RouteMeta, RouteTarget};
use crate::error::RouteError;
use crate::module::{LoadedModule, RouteModule};
use crate::view::ViewFactory;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct ModuleFile {
    // Kept raw so one bad entry never takes its siblings down with it
    #[serde(default)]
    default: Option<toml::Value>,
}

/// One route as written in a module file
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDecl {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub meta: BTreeMap<String, toml::Value>,
    #[serde(default, deserialize_with = "lenient_routes")]
    pub children: Vec<RouteDecl>,
}

/// Deserializes a route array entry by entry, skipping entries that do not parse
fn lenient_routes<'de, D>(deserializer: D) -> Result<Vec<RouteDecl>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Vec::<toml::Value>::deserialize(deserializer)?;
    Ok(decls_from_values("<children>", entries))
}

fn decl_from_value(key: &str, value: toml::Value) -> Option<RouteDecl> {
    value
        .try_into::<RouteDecl>()
        .map_err(|e| warn!("Route module {}: skipping malformed route: {}", key, e))
        .ok()
}

fn decls_from_values(key: &str, values: Vec<toml::Value>) -> Vec<RouteDecl> {
    values
        .into_iter()
        .filter_map(|value| decl_from_value(key, value))
        .collect()
}

fn into_descriptors(key: &str, decls: Vec<RouteDecl>) -> Vec<RouteDescriptor> {
    decls
        .into_iter()
        .filter_map(|decl| {
            decl.into_descriptor()
                .map_err(|e| warn!("Route module {}: {}", key, e))
                .ok()
        })
        .collect()
}

impl RouteDecl {
    /// Converts the declaration into a descriptor
    ///
    /// A declaration naming both a component and a redirect keeps the
    /// component as its target and records the redirect under `meta.redirect`.
    /// Invalid children are dropped individually.
    pub fn into_descriptor(self) -> Result<RouteDescriptor, RouteError> {
        let mut meta = convert_meta(&self.name, self.meta);

        let target = match (self.component, self.redirect) {
            (Some(component), redirect) => {
                if let Some(to) = redirect {
                    meta.insert("redirect".to_string(), to.into());
                }
                RouteTarget::Component(ViewFactory::deferred(component))
            }
            (None, Some(to)) => RouteTarget::Redirect(to),
            (None, None) => {
                return Err(RouteError::MissingTarget {
                    path: self.path,
                    name: self.name,
                })
            }
        };

        let children = self
            .children
            .into_iter()
            .filter_map(|child| {
                child
                    .into_descriptor()
                    .map_err(|e| warn!("Dropping child route of `{}`: {}", self.name, e))
                    .ok()
            })
            .collect();

        Ok(RouteDescriptor {
            path: self.path,
            name: self.name,
            target,
            meta,
            children,
        })
    }
}

fn convert_meta(route: &str, meta: BTreeMap<String, toml::Value>) -> RouteMeta {
    meta.into_iter()
        .filter_map(|(key, value)| match serde_json::to_value(value) {
            Ok(json) => Some((key, json)),
            Err(e) => {
                warn!("Dropping meta `{}` of route `{}`: {}", key, route, e);
                None
            }
        })
        .collect()
}

/// Parses a TOML route module
///
/// # Examples
///
/// ```
/// use admin_routes::parse_module;
///
/// let module = parse_module(r#"
///     [[default]]
///     path = "/about"
///     name = "About"
///     component = "/@/views/sys/about/index.vue"
/// "#);
/// assert_eq!(module.route_count(), 1);
///
/// assert_eq!(parse_module("# nothing exported").route_count(), 0);
/// ```
pub fn parse_module(source: &str) -> LoadedModule {
    load_module("<inline>", source)
}

/// Parses a module, naming it by `key` in warnings
pub(crate) fn load_module(key: &str, source: &str) -> LoadedModule {
    let file: ModuleFile = match toml::from_str(source) {
        Ok(file) => file,
        Err(e) => {
            warn!("Route module {} is malformed and contributes no routes: {}", key, e);
            return LoadedModule::empty();
        }
    };

    let default_export = file.default.and_then(|value| match value {
        toml::Value::Array(entries) => Some(RouteModule::Many(into_descriptors(
            key,
            decls_from_values(key, entries),
        ))),
        value @ toml::Value::Table(_) => {
            let decl = decl_from_value(key, value)?;
            match decl.into_descriptor() {
                Ok(route) => Some(RouteModule::Single(route)),
                Err(e) => {
                    warn!("Route module {}: {}", key, e);
                    None
                }
            }
        }
        other => {
            warn!(
                "Route module {}: default export must be a table or an array of tables, found {}",
                key,
                other.type_str()
            );
            None
        }
    });

    LoadedModule { default_export }
}
