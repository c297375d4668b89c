/// Deferred view loading for route components
///
/// A route that renders something does not hold the view itself, only a
/// factory that produces it on navigation. Nothing is loaded while the route
/// tables are being built.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Component id for the shared application layout
pub const LAYOUT: &str = "LAYOUT";

/// Component id for the exception page
pub const EXCEPTION_COMPONENT: &str = "/@/views/sys/exception/Exception.vue";

/// A loaded view, identified by the component id it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle {
    pub id: String,
}

impl ViewHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

type Loader = Arc<dyn Fn() -> ViewHandle + Send + Sync>;

/// Zero-argument factory producing a [`ViewHandle`] on demand
///
/// Cloning a factory shares the loader; it does not invoke it.
///
/// # Examples
///
/// ```
/// use admin_routes::ViewFactory;
///
/// let factory = ViewFactory::deferred("/@/views/sys/login/Login.vue");
/// assert_eq!(factory.id(), "/@/views/sys/login/Login.vue");
/// assert_eq!(factory.load().id, "/@/views/sys/login/Login.vue");
/// ```
#[derive(Clone)]
pub struct ViewFactory {
    id: String,
    loader: Loader,
}

impl ViewFactory {
    /// Factory whose loader resolves the view by its component id
    pub fn deferred(id: impl Into<String>) -> Self {
        let id = id.into();
        let handle_id = id.clone();
        Self {
            id,
            loader: Arc::new(move || ViewHandle::new(handle_id.clone())),
        }
    }

    /// Factory with a custom loader
    pub fn with_loader<F>(id: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> ViewHandle + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            loader: Arc::new(loader),
        }
    }

    /// Shared application layout
    pub fn layout() -> Self {
        Self::deferred(LAYOUT)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Invokes the loader. Called by the router when it navigates to the route.
    pub fn load(&self) -> ViewHandle {
        (self.loader)()
    }
}

impl fmt::Debug for ViewFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewFactory").field(&self.id).finish()
    }
}

// Two factories are the same view when they resolve the same component id.
impl PartialEq for ViewFactory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Serialize for ViewFactory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_loader_runs_only_on_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let factory = ViewFactory::with_loader("Login", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ViewHandle::new("Login")
        });

        let cloned = factory.clone();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(cloned.load(), ViewHandle::new("Login"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_serializes_as_component_id() {
        let json = serde_json::to_string(&ViewFactory::layout()).unwrap();
        assert_eq!(json, "\"LAYOUT\"");
    }
}
