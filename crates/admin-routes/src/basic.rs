/// Hand-written routes shared by both route tables
///
/// The not-found catch-all, the redirect helper and the main-out routes are
/// supplied here as defaults and bundled in [`BasicRouteSet`] so an
/// application can substitute its own.

use crate::descriptor::RouteDescriptor;
use crate::i18n::Translate;
use crate::view::{ViewFactory, EXCEPTION_COMPONENT};

pub const PAGE_NOT_FOUND_NAME: &str = "PageNotFound";
pub const REDIRECT_NAME: &str = "Redirect";

const CATCH_ALL_PATH: &str = "/:path(.*)*";

/// Catch-all route rendering the exception page inside the layout
pub fn page_not_found_route() -> RouteDescriptor {
    RouteDescriptor::component(CATCH_ALL_PATH, PAGE_NOT_FOUND_NAME, ViewFactory::layout())
        .with_meta("title", "ErrorPage")
        .with_meta("hideBreadcrumb", true)
        .with_meta("hideMenu", true)
        .with_child(
            RouteDescriptor::component(
                CATCH_ALL_PATH,
                PAGE_NOT_FOUND_NAME,
                ViewFactory::deferred(EXCEPTION_COMPONENT),
            )
            .with_meta("title", "ErrorPage")
            .with_meta("hideBreadcrumb", true)
            .with_meta("hideMenu", true),
        )
}

/// Helper route that bounces through `/redirect/<path>` to force a reload
pub fn redirect_route() -> RouteDescriptor {
    RouteDescriptor::component("/redirect", "RedirectTo", ViewFactory::layout())
        .with_meta("title", REDIRECT_NAME)
        .with_meta("hideBreadcrumb", true)
        .with_meta("hideMenu", true)
        .with_child(
            RouteDescriptor::component(
                "/redirect/:path(.*)",
                REDIRECT_NAME,
                ViewFactory::deferred("/@/views/sys/redirect/index.vue"),
            )
            .with_meta("title", REDIRECT_NAME)
            .with_meta("hideBreadcrumb", true),
        )
}

/// Routes rendered outside the main layout
pub fn main_out_routes() -> Vec<RouteDescriptor> {
    vec![RouteDescriptor::component(
        "/main-out",
        "MainOut",
        ViewFactory::deferred("/@/demo/main-out/index.vue"),
    )
    .with_meta("title", "MainOut")
    .with_meta("ignoreAuth", true)]
}

/// Root path, forwarding to the home page
pub fn root_route(home: &str) -> RouteDescriptor {
    RouteDescriptor::redirect("/", "Root", home).with_meta("title", "Root")
}

pub fn login_route(t: &dyn Translate) -> RouteDescriptor {
    RouteDescriptor::component(
        "/login",
        "Login",
        ViewFactory::deferred("/@/views/sys/login/Login.vue"),
    )
    .with_meta("title", t.translate("routes.basic.login"))
}

pub fn mod_pwd_route(t: &dyn Translate) -> RouteDescriptor {
    RouteDescriptor::component(
        "/modPwd",
        "ModPwd",
        ViewFactory::deferred("/@/views/sys/account/modPwd.vue"),
    )
    .with_meta("icon", "ion:key-outline")
    .with_meta("title", t.translate("sys.account.modifyPwd"))
}

/// Collaborator routes the builder places around its own
#[derive(Debug, Clone, PartialEq)]
pub struct BasicRouteSet {
    pub page_not_found: RouteDescriptor,
    pub redirect: RouteDescriptor,
    pub main_out: Vec<RouteDescriptor>,
}

impl BasicRouteSet {
    pub fn with_main_out(mut self, routes: Vec<RouteDescriptor>) -> Self {
        self.main_out = routes;
        self
    }

    pub fn with_page_not_found(mut self, route: RouteDescriptor) -> Self {
        self.page_not_found = route;
        self
    }

    pub fn with_redirect(mut self, route: RouteDescriptor) -> Self {
        self.redirect = route;
        self
    }
}

impl Default for BasicRouteSet {
    fn default() -> Self {
        Self {
            page_not_found: page_not_found_route(),
            redirect: redirect_route(),
            main_out: main_out_routes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::KeyEcho;

    #[test]
    fn test_not_found_nests_exception_page() {
        let route = page_not_found_route();
        assert_eq!(route.view().map(|v| v.id()), Some("LAYOUT"));
        assert_eq!(route.children.len(), 1);
        assert_eq!(route.children[0].view().map(|v| v.id()), Some(EXCEPTION_COMPONENT));
    }

    #[test]
    fn test_titles_go_through_translator() {
        assert_eq!(login_route(&KeyEcho).title(), Some("routes.basic.login"));
        assert_eq!(mod_pwd_route(&KeyEcho).title(), Some("sys.account.modifyPwd"));
    }
}
