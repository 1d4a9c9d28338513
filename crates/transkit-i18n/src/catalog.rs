//! Message catalogs and their on-disk layout

use crate::error::{I18nError, I18nResult};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Identifies one catalog: a domain in a locale
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogKey {
    pub domain: String,
    pub locale: String,
}

impl CatalogKey {
    pub fn new(domain: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            locale: locale.into(),
        }
    }

    /// Key under which the catalog is cached, `<domain>_<locale>`
    pub fn cache_key(&self) -> String {
        format!("{}_{}", self.domain, self.locale)
    }

    /// File name of the catalog, `<domain>_<locale>.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", self.cache_key())
    }

    /// Full path of the catalog below `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.locale)
    }
}

/// Flat mapping of message keys to translated strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a decoded JSON document.
    ///
    /// The document must be an object. Entries whose value is not a string
    /// cannot be rendered as messages and are skipped with a warning.
    pub fn from_json(value: Value, origin: &Path) -> I18nResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_object(map, origin)),
            other => Err(I18nError::InvalidCatalog {
                path: origin.to_path_buf(),
                reason: format!("expected an object, found {}", json_type_name(&other)),
            }),
        }
    }

    /// Build a catalog from a JSON object
    pub fn from_object(map: Map<String, Value>, origin: &Path) -> Self {
        let mut messages = HashMap::with_capacity(map.len());

        for (key, value) in map {
            match value {
                Value::String(text) => {
                    messages.insert(key, text);
                }
                other => warn!(
                    "Skipping message '{}' in {:?}: expected a string, found {}",
                    key,
                    origin,
                    json_type_name(&other)
                ),
            }
        }

        Self { messages }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Read the catalog for `key` from `dir`
pub async fn read_catalog(dir: &Path, key: &CatalogKey) -> I18nResult<Catalog> {
    let path = key.path_in(dir);
    debug!("Reading catalog file: {:?}", path);

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => I18nError::CatalogNotFound { path: path.clone() },
            _ => I18nError::Io {
                path: path.clone(),
                source,
            },
        })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| I18nError::Parse {
        path: path.clone(),
        source,
    })?;

    let catalog = Catalog::from_json(value, &path)?;
    debug!("Loaded {} messages for {}", catalog.len(), key);

    Ok(catalog)
}

/// Human name of a JSON value's type, for diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_key_naming() {
        let key = CatalogKey::new("messages", "en");
        assert_eq!(key.cache_key(), "messages_en");
        assert_eq!(key.file_name(), "messages_en.json");
        assert_eq!(
            key.path_in(Path::new("translations")),
            PathBuf::from("translations/messages_en.json")
        );
        assert_eq!(key.to_string(), "messages/en");
    }

    #[test]
    fn test_from_json_skips_non_string_values() {
        let value = json!({
            "hello": "Hello",
            "count": 3,
            "nested": {"a": "b"},
        });

        let catalog = Catalog::from_json(value, Path::new("messages_en.json")).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("hello"), Some("Hello"));
        assert!(!catalog.contains("count"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let result = Catalog::from_json(json!(["hello"]), Path::new("messages_en.json"));
        match result {
            Err(I18nError::InvalidCatalog { reason, .. }) => {
                assert_eq!(reason, "expected an object, found array");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_catalog() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("messages_uk.json"),
            r#"{"hello": "Привіт", "bye": "Бувай"}"#,
        )
        .unwrap();

        let catalog = read_catalog(dir.path(), &CatalogKey::new("messages", "uk"))
            .await
            .unwrap();
        assert_eq!(catalog.get("hello"), Some("Привіт"));
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_read_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let err = read_catalog(dir.path(), &CatalogKey::new("messages", "fr"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_read_malformed_catalog() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("messages_en.json"), "{not json").unwrap();

        let err = read_catalog(dir.path(), &CatalogKey::new("messages", "en"))
            .await
            .unwrap_err();
        assert!(matches!(err, I18nError::Parse { .. }));
    }
}
