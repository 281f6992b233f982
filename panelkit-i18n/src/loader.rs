//! Concurrent catalog loading with the namespace fallback chain

use crate::catalog::TranslationCatalog;
use crate::error::CatalogFetchError;
use crate::locale::LocaleCode;
use crate::source::CatalogSource;
use futures::future;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Loads complete per-locale catalogs through a [`CatalogSource`].
///
/// Loading cannot fail: every configured namespace resolves to the
/// requested locale's content, the fallback locale's content, or an empty
/// mapping, in that order. Unusable resources surface as log output, never
/// as errors.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    namespaces: Arc<[String]>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>, namespaces: Vec<String>) -> Self {
        Self {
            source,
            namespaces: namespaces.into(),
        }
    }

    /// Load the catalog for `locale`, fetching all namespaces concurrently
    /// and substituting `fallback` content where the locale has none.
    pub async fn load(&self, locale: &LocaleCode, fallback: &LocaleCode) -> TranslationCatalog {
        let fetches = self.namespaces.iter().map(|namespace| async move {
            let mapping = self.load_one(locale, fallback, namespace).await;
            (namespace.clone(), mapping)
        });
        let namespaces: HashMap<String, Map<String, Value>> =
            future::join_all(fetches).await.into_iter().collect();
        debug!(
            "Loaded catalog for {} ({} namespaces)",
            locale,
            namespaces.len()
        );
        TranslationCatalog::new(locale.clone(), namespaces)
    }

    async fn load_one(
        &self,
        locale: &LocaleCode,
        fallback: &LocaleCode,
        namespace: &str,
    ) -> Map<String, Value> {
        match self.fetch_mapping(locale, namespace).await {
            Ok(mapping) => return mapping,
            Err(reason) => {
                debug!(
                    "Namespace '{}' unavailable for {}: {}",
                    namespace, locale, reason
                );
            }
        }

        if fallback != locale {
            match self.fetch_mapping(fallback, namespace).await {
                Ok(mapping) => {
                    warn!(
                        "Namespace '{}' for {} substituted with {} content",
                        namespace, locale, fallback
                    );
                    return mapping;
                }
                Err(reason) => {
                    debug!(
                        "Namespace '{}' unavailable for fallback {}: {}",
                        namespace, fallback, reason
                    );
                }
            }
        }

        warn!(
            "No catalog content for namespace '{}' in {} or {}, leaving it empty",
            namespace, locale, fallback
        );
        Map::new()
    }

    async fn fetch_mapping(
        &self,
        locale: &LocaleCode,
        namespace: &str,
    ) -> Result<Map<String, Value>, CatalogFetchError> {
        match self.source.load_namespace(locale, namespace).await? {
            Value::Object(mapping) => Ok(mapping),
            _ => Err(CatalogFetchError::NotAMapping),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticCatalogSource;

    fn locale(code: &str) -> LocaleCode {
        LocaleCode::parse(code).unwrap()
    }

    fn loader(source: StaticCatalogSource, namespaces: &[&str]) -> CatalogLoader {
        CatalogLoader::new(
            Arc::new(source),
            namespaces.iter().map(|ns| ns.to_string()).collect(),
        )
    }

    #[tokio::test]
    async fn test_locale_content_preferred_over_fallback() {
        let mut source = StaticCatalogSource::new();
        source
            .insert_json(locale("es_ES"), "common", r#"{"Save": "Guardar"}"#)
            .unwrap();
        source
            .insert_json(locale("en_US"), "common", r#"{"Save": "Save"}"#)
            .unwrap();

        let catalog = loader(source, &["common"])
            .load(&locale("es_ES"), &locale("en_US"))
            .await;
        assert_eq!(catalog.lookup("common", "Save"), Some("Guardar"));
    }

    #[tokio::test]
    async fn test_missing_namespace_takes_fallback_content() {
        let mut source = StaticCatalogSource::new();
        source
            .insert_json(locale("en_US"), "users", r#"{"Role": "Rol"}"#)
            .unwrap();

        let catalog = loader(source, &["users"])
            .load(&locale("es_ES"), &locale("en_US"))
            .await;
        assert_eq!(catalog.lookup("users", "Role"), Some("Rol"));
    }

    #[tokio::test]
    async fn test_double_failure_leaves_namespace_empty() {
        let source = StaticCatalogSource::new();
        let catalog = loader(source, &["common", "users"])
            .load(&locale("es_ES"), &locale("en_US"))
            .await;

        let mut names: Vec<&str> = catalog.namespace_names().collect();
        names.sort_unstable();
        assert_eq!(names, ["common", "users"]);
        assert_eq!(catalog.namespace("users").map(|ns| ns.len()), Some(0));
    }

    #[tokio::test]
    async fn test_non_mapping_resource_treated_as_unusable() {
        let mut source = StaticCatalogSource::new();
        source
            .insert_json(locale("es_ES"), "common", r#"["not", "a", "mapping"]"#)
            .unwrap();
        source
            .insert_json(locale("en_US"), "common", r#"{"Save": "Save"}"#)
            .unwrap();

        let catalog = loader(source, &["common"])
            .load(&locale("es_ES"), &locale("en_US"))
            .await;
        assert_eq!(catalog.lookup("common", "Save"), Some("Save"));
    }

    #[tokio::test]
    async fn test_loading_the_fallback_locale_itself() {
        let mut source = StaticCatalogSource::new();
        source
            .insert_json(locale("en_US"), "common", r#"{"Save": "Save"}"#)
            .unwrap();

        // fallback == locale: the second fetch is skipped, not repeated.
        let catalog = loader(source, &["common", "servers"])
            .load(&locale("en_US"), &locale("en_US"))
            .await;
        assert_eq!(catalog.lookup("common", "Save"), Some("Save"));
        assert_eq!(catalog.namespace("servers").map(|ns| ns.len()), Some(0));
    }
}
