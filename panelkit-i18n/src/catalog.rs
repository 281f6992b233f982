//! Loaded translation catalogs and key resolution

use crate::locale::LocaleCode;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Message mappings for one locale, keyed by namespace.
///
/// Every configured namespace is present once loading finishes; a namespace
/// whose resources could not be fetched anywhere holds an empty mapping
/// rather than disappearing.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationCatalog {
    locale: LocaleCode,
    namespaces: HashMap<String, Map<String, Value>>,
}

impl TranslationCatalog {
    pub(crate) fn new(locale: LocaleCode, namespaces: HashMap<String, Map<String, Value>>) -> Self {
        Self { locale, namespaces }
    }

    /// The locale this catalog was loaded for.
    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    /// The raw mapping for one namespace, if the namespace was configured.
    pub fn namespace(&self, namespace: &str) -> Option<&Map<String, Value>> {
        self.namespaces.get(namespace)
    }

    /// Names of all namespaces the catalog holds.
    pub fn namespace_names(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Resolve a dot-separated key inside a namespace to a message template.
    ///
    /// Each segment before the last must be a nested mapping and the leaf
    /// must be a string; anything else resolves to `None`.
    pub fn lookup(&self, namespace: &str, key: &str) -> Option<&str> {
        let root = self.namespaces.get(namespace)?;
        let mut segments = key.split('.');
        let mut node = root.get(segments.next()?)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    /// Whether a key resolves to a message template in this catalog.
    pub fn contains(&self, namespace: &str, key: &str) -> bool {
        self.lookup(namespace, key).is_some()
    }
}
