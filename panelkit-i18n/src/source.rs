//! Catalog resource transports

use crate::error::CatalogFetchError;
use crate::locale::LocaleCode;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Transport for per-`(locale, namespace)` catalog resources.
///
/// A fetch must be free of side effects on the locale state: switches that
/// lose the race discard fetched results without any rollback.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw content of one catalog resource.
    async fn load_namespace(
        &self,
        locale: &LocaleCode,
        namespace: &str,
    ) -> Result<Value, CatalogFetchError>;
}

/// Catalog source reading a directory tree laid out as
/// `<base>/<locale>/<namespace>.json`.
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    base_dir: PathBuf,
}

impl FsCatalogSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory holding the per-locale catalog subdirectories.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resource_path(&self, locale: &LocaleCode, namespace: &str) -> PathBuf {
        self.base_dir
            .join(locale.as_str())
            .join(format!("{namespace}.json"))
    }

    /// Candidate locale codes discovered from the directory layout.
    ///
    /// Every subdirectory whose name has the `language_REGION` shape counts;
    /// the result is sorted for a stable listing. This mirrors how the
    /// console enumerates its shipped languages at build time.
    pub async fn discover_locales(&self) -> Result<Vec<LocaleCode>, CatalogFetchError> {
        let mut codes = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if let Ok(code) = LocaleCode::parse(name) {
                    codes.push(code);
                }
            }
        }
        codes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(codes)
    }
}

#[async_trait]
impl CatalogSource for FsCatalogSource {
    async fn load_namespace(
        &self,
        locale: &LocaleCode,
        namespace: &str,
    ) -> Result<Value, CatalogFetchError> {
        let path = self.resource_path(locale, namespace);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(CatalogFetchError::NotFound)
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// In-memory catalog source for embedded resources and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    resources: HashMap<(LocaleCode, String), Value>,
}

impl StaticCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and register one resource, replacing any previous entry for
    /// the same locale and namespace.
    pub fn insert_json(
        &mut self,
        locale: LocaleCode,
        namespace: impl Into<String>,
        json: &str,
    ) -> Result<(), CatalogFetchError> {
        let value = serde_json::from_str(json)?;
        self.resources.insert((locale, namespace.into()), value);
        Ok(())
    }

    /// Register an already-parsed resource.
    pub fn insert_value(&mut self, locale: LocaleCode, namespace: impl Into<String>, value: Value) {
        self.resources.insert((locale, namespace.into()), value);
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load_namespace(
        &self,
        locale: &LocaleCode,
        namespace: &str,
    ) -> Result<Value, CatalogFetchError> {
        self.resources
            .get(&(locale.clone(), namespace.to_string()))
            .cloned()
            .ok_or(CatalogFetchError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(code: &str) -> LocaleCode {
        LocaleCode::parse(code).unwrap()
    }

    #[test]
    fn test_resource_path_layout() {
        let source = FsCatalogSource::new("/srv/panelkit/lang");
        let path = source.resource_path(&locale("es_ES"), "servers");
        assert_eq!(path, PathBuf::from("/srv/panelkit/lang/es_ES/servers.json"));
    }

    #[tokio::test]
    async fn test_static_source_fetch() {
        let mut source = StaticCatalogSource::new();
        source
            .insert_json(locale("en_US"), "common", r#"{"Save": "Save"}"#)
            .unwrap();

        let value = source
            .load_namespace(&locale("en_US"), "common")
            .await
            .unwrap();
        assert_eq!(value["Save"], "Save");

        let missing = source.load_namespace(&locale("en_US"), "servers").await;
        assert!(matches!(missing, Err(CatalogFetchError::NotFound)));
    }

    #[test]
    fn test_static_source_rejects_invalid_json() {
        let mut source = StaticCatalogSource::new();
        let result = source.insert_json(locale("en_US"), "common", "{not json");
        assert!(matches!(result, Err(CatalogFetchError::Parse(_))));
    }
}
