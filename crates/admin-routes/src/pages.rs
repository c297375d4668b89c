use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageEnum {
    BaseLogin,
    BaseHome,
    ErrorPage,
    ErrorLogPage,
}

impl PageEnum {
    /// Concrete path of the page
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_routes::PageEnum;
    ///
    /// assert_eq!(PageEnum::BaseHome.path(), "/dashboard");
    /// ```
    pub const fn path(self) -> &'static str {
        match self {
            PageEnum::BaseLogin => "/login",
            PageEnum::BaseHome => "/dashboard",
            PageEnum::ErrorPage => "/exception",
            PageEnum::ErrorLogPage => "/error-log/list",
        }
    }
}

impl fmt::Display for PageEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
