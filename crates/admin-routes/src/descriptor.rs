/// Route descriptors: one navigable path of the application

use crate::view::ViewFactory;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Display and behavior hints attached to a route (title, icon, hideMenu, ...)
///
/// Opaque to the builder; values are passed through to the router unexamined.
pub type RouteMeta = BTreeMap<String, Value>;

/// What a route does when navigated to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteTarget {
    /// Render a view, loaded on demand
    Component(ViewFactory),
    /// Forward to another path
    Redirect(String),
}

/// A single route: path, name, target, meta and nested children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDescriptor {
    /// URL pattern like "/users/:id"
    pub path: String,
    /// Logical identifier, expected to be unique across a table
    pub name: String,
    #[serde(flatten)]
    pub target: RouteTarget,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: RouteMeta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    /// Creates a route that renders the given view
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_routes::{RouteDescriptor, ViewFactory};
    ///
    /// let route = RouteDescriptor::component(
    ///     "/login",
    ///     "Login",
    ///     ViewFactory::deferred("/@/views/sys/login/Login.vue"),
    /// );
    /// assert!(!route.is_redirect());
    /// ```
    pub fn component(path: impl Into<String>, name: impl Into<String>, view: ViewFactory) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            target: RouteTarget::Component(view),
            meta: RouteMeta::new(),
            children: Vec::new(),
        }
    }

    /// Creates a route that forwards to `to`
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_routes::RouteDescriptor;
    ///
    /// let route = RouteDescriptor::redirect("/", "Root", "/dashboard");
    /// assert_eq!(route.redirect_target(), Some("/dashboard"));
    /// ```
    pub fn redirect(path: impl Into<String>, name: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            target: RouteTarget::Redirect(to.into()),
            meta: RouteMeta::new(),
            children: Vec::new(),
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Sets a metadata entry
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_routes::RouteDescriptor;
    ///
    /// let route = RouteDescriptor::redirect("/", "Root", "/dashboard")
    ///     .with_meta("title", "Root")
    ///     .with_meta("hideMenu", true);
    ///
    /// assert_eq!(route.get_meta("title"), Some(&serde_json::json!("Root")));
    /// assert!(route.has_meta("hideMenu"));
    /// ```
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Merges several metadata entries at once
    pub fn with_metadata(mut self, meta: RouteMeta) -> Self {
        self.meta.extend(meta);
        self
    }

    pub fn with_child(mut self, child: RouteDescriptor) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteDescriptor>,
    {
        self.children.extend(children);
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&Value> {
        self.meta.get(key)
    }

    pub fn has_meta(&self, key: &str) -> bool {
        self.meta.contains_key(key)
    }

    /// Title hint, when set as a string
    pub fn title(&self) -> Option<&str> {
        self.meta.get("title").and_then(Value::as_str)
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    /// Redirect target path, `None` for component routes
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::Component(_) => None,
        }
    }

    /// View factory, `None` for redirect routes
    pub fn view(&self) -> Option<&ViewFactory> {
        match &self.target {
            RouteTarget::Component(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}
