// File: src/config.rs
// Purpose: Configuration parsing from routes.toml

use crate::builder::RouteTableBuilder;
use crate::fs_source::{FsModuleSource, DEFAULT_PATTERN};
use crate::i18n::MessageCatalog;
use crate::pages::PageEnum;
use crate::tables::RouteTables;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Overrides `i18n.locale` when set
pub const LOCALE_ENV: &str = "ADMIN_ROUTES_LOCALE";

/// Route table configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Where route modules are discovered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory containing route module files (default: "src/router/routes/modules")
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,

    /// Glob relative to `modules_dir` (default: "**/*.toml")
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

/// Well-known page paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Target of the root redirect (default: "/dashboard")
    #[serde(default = "default_home")]
    pub home: String,
}

/// Translation of route titles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Directory holding `<locale>.json` message files
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
}

// Default values
fn default_modules_dir() -> String {
    "src/router/routes/modules".to_string()
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_home() -> String {
    PageEnum::BaseHome.path().to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_locales_dir() -> String {
    "locales".to_string()
}

// Default implementations
impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            modules_dir: default_modules_dir(),
            pattern: default_pattern(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            locales_dir: default_locales_dir(),
        }
    }
}

impl RouteConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RouteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("routes.toml")
    }

    /// Applies environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(locale) = std::env::var(LOCALE_ENV) {
            if !locale.trim().is_empty() {
                self.i18n.locale = locale;
            }
        }
        self
    }

    pub fn module_source(&self) -> Result<FsModuleSource> {
        FsModuleSource::with_pattern(&self.discovery.modules_dir, &self.discovery.pattern)
    }

    /// Builder wired with this configuration's home page and message catalog
    pub fn builder(&self) -> Result<RouteTableBuilder> {
        let catalog = MessageCatalog::load(&self.i18n.locales_dir, &self.i18n.locale)?;

        Ok(RouteTableBuilder::new()
            .with_home(self.pages.home.clone())
            .with_translator(catalog))
    }

    /// Discovers modules and builds both tables
    pub fn build_tables(&self) -> Result<RouteTables> {
        let source = self.module_source()?;
        self.builder()?.build(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouteConfig::default();
        assert_eq!(config.discovery.modules_dir, "src/router/routes/modules");
        assert_eq!(config.discovery.pattern, "**/*.toml");
        assert_eq!(config.pages.home, "/dashboard");
        assert_eq!(config.i18n.locale, "en");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<RouteConfig>("").unwrap_or_default();
        assert_eq!(config.pages.home, "/dashboard");
        assert_eq!(config.i18n.locales_dir, "locales");
    }

    #[test]
    fn test_custom_sections() {
        let toml = r#"
            [discovery]
            modules_dir = "routes/modules"

            [pages]
            home = "/workbench"

            [i18n]
            locale = "zh_CN"
        "#;
        let config: RouteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.discovery.modules_dir, "routes/modules");
        assert_eq!(config.discovery.pattern, "**/*.toml");
        assert_eq!(config.pages.home, "/workbench");
        assert_eq!(config.i18n.locale, "zh_CN");
        assert_eq!(config.i18n.locales_dir, "locales");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = RouteConfig::load("does/not/exist/routes.toml").unwrap();
        assert_eq!(config.pages.home, "/dashboard");
    }
}
