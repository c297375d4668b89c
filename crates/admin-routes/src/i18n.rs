/// Translation lookup injected into the route builder
///
/// Titles of the hand-written routes are message keys such as
/// `routes.basic.login`; the builder resolves them through a [`Translate`]
/// implementation instead of a global i18n singleton.

use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Maps a message key to display text
pub trait Translate: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Returns every key unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl Translate for KeyEcho {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Messages of one locale, keyed by dotted path
///
/// Missing keys translate to themselves.
///
/// # Examples
///
/// ```
/// use admin_routes::{MessageCatalog, Translate};
///
/// let catalog = MessageCatalog::from_json(
///     "en",
///     r#"{ "routes": { "basic": { "login": "Login" } } }"#,
/// ).unwrap();
///
/// assert_eq!(catalog.translate("routes.basic.login"), "Login");
/// assert_eq!(catalog.translate("routes.basic.missing"), "routes.basic.missing");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Parses nested JSON messages
    pub fn from_json(locale: impl Into<String>, source: &str) -> Result<Self> {
        let locale = locale.into();
        let value: Value = serde_json::from_str(source)
            .with_context(|| format!("Failed to parse messages for locale {}", locale))?;

        let mut messages = HashMap::new();
        flatten("", &value, &mut messages);

        Ok(Self { locale, messages })
    }

    /// Loads `<locales_dir>/<locale>.json`
    ///
    /// A missing file yields an empty catalog, so every title falls back to
    /// its key.
    pub fn load(locales_dir: impl AsRef<Path>, locale: &str) -> Result<Self> {
        let path = locales_dir.as_ref().join(format!("{}.json", locale));

        if !path.exists() {
            warn!("No messages for locale {} at {:?}, titles fall back to keys", locale, path);
            return Ok(Self::new(locale));
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read messages file: {:?}", path))?;

        Self::from_json(locale, &content)
    }

    pub fn with_message(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(key.into(), message.into());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Null => {}
        // Numbers and booleans render as text; arrays are not messages
        Value::Number(_) | Value::Bool(_) => {
            out.insert(prefix.to_string(), value.to_string());
        }
        Value::Array(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_closure_translator() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.translate("login"), "LOGIN");
    }

    #[test]
    fn test_flatten_nested_messages() {
        let catalog = MessageCatalog::from_json(
            "zh_CN",
            r#"{ "sys": { "account": { "modifyPwd": "修改密码" } }, "count": 3 }"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("sys.account.modifyPwd"), Some("修改密码"));
        assert_eq!(catalog.get("count"), Some("3"));
    }

    #[test]
    fn test_load_missing_locale_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = MessageCatalog::load(temp_dir.path(), "fr").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.locale(), "fr");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("en.json"),
            r#"{ "routes": { "basic": { "login": "Login" } } }"#,
        )
        .unwrap();

        let catalog = MessageCatalog::load(temp_dir.path(), "en").unwrap();
        assert_eq!(catalog.translate("routes.basic.login"), "Login");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(MessageCatalog::from_json("en", "{").is_err());
    }
}
