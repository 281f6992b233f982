//! Startup configuration for the localization subsystem

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Translation domains shipped with the console UI.
///
/// Every locale provides one catalog resource per domain; the list is
/// identical across locales.
pub const DEFAULT_NAMESPACES: &[&str] = &[
    "common",
    "env",
    "errors",
    "files",
    "hotkeys",
    "nodes",
    "oauth",
    "operators",
    "scopes",
    "servers",
    "settings",
    "templates",
    "users",
    "backup",
    "plugins",
    "uptime",
    "admin",
    "roles",
];

/// Static localization configuration, supplied once at startup.
///
/// Deserializing validates individual locale codes but not the relations
/// between fields; call [`validate`](Self::validate) (or construct through
/// [`new`](Self::new)) before handing the configuration to the manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Supported locales, in negotiation and listing order
    pub supported: Vec<LocaleCode>,
    /// The designated default, also the fallback for missing translations
    pub default_locale: LocaleCode,
    /// Translation domains to load for every locale
    pub namespaces: Vec<String>,
}

impl I18nConfig {
    /// Build a validated configuration.
    pub fn new(
        supported: Vec<LocaleCode>,
        default_locale: LocaleCode,
        namespaces: Vec<String>,
    ) -> I18nResult<Self> {
        let config = Self {
            supported,
            default_locale,
            namespaces,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a validated configuration over the default namespace list.
    pub fn with_default_namespaces(
        supported: Vec<LocaleCode>,
        default_locale: LocaleCode,
    ) -> I18nResult<Self> {
        Self::new(
            supported,
            default_locale,
            DEFAULT_NAMESPACES.iter().map(|ns| ns.to_string()).collect(),
        )
    }

    /// Check the relations the field types cannot express.
    pub fn validate(&self) -> I18nResult<()> {
        if self.supported.is_empty() {
            return Err(I18nError::InvalidConfig(
                "supported locale set is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for code in &self.supported {
            if !seen.insert(code) {
                return Err(I18nError::InvalidConfig(format!(
                    "duplicate supported locale: {code}"
                )));
            }
        }

        if !self.supported.contains(&self.default_locale) {
            return Err(I18nError::InvalidConfig(format!(
                "default locale {} is not in the supported set",
                self.default_locale
            )));
        }

        if self.namespaces.is_empty() {
            return Err(I18nError::InvalidConfig(
                "namespace list is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for namespace in &self.namespaces {
            if !seen.insert(namespace.as_str()) {
                return Err(I18nError::InvalidConfig(format!(
                    "duplicate namespace: {namespace}"
                )));
            }
        }

        Ok(())
    }

    /// Whether a locale code belongs to the supported set.
    pub fn is_supported(&self, code: &LocaleCode) -> bool {
        self.supported.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(code: &str) -> LocaleCode {
        LocaleCode::parse(code).unwrap()
    }

    fn namespaces(list: &[&str]) -> Vec<String> {
        list.iter().map(|ns| ns.to_string()).collect()
    }

    #[test]
    fn test_valid_config() {
        let config = I18nConfig::new(
            vec![locale("en_US"), locale("es_ES")],
            locale("en_US"),
            namespaces(&["common", "servers"]),
        )
        .unwrap();
        assert!(config.is_supported(&locale("es_ES")));
        assert!(!config.is_supported(&locale("fr_FR")));
    }

    #[test]
    fn test_empty_supported_set_rejected() {
        let result = I18nConfig::new(vec![], locale("en_US"), namespaces(&["common"]));
        assert!(matches!(result, Err(I18nError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_outside_supported_rejected() {
        let result = I18nConfig::new(
            vec![locale("es_ES")],
            locale("en_US"),
            namespaces(&["common"]),
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("not in the supported set"));
    }

    #[test]
    fn test_duplicate_locale_rejected() {
        let result = I18nConfig::new(
            vec![locale("en_US"), locale("en_US")],
            locale("en_US"),
            namespaces(&["common"]),
        );
        assert!(matches!(result, Err(I18nError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_namespaces_rejected() {
        let result = I18nConfig::new(vec![locale("en_US")], locale("en_US"), vec![]);
        assert!(matches!(result, Err(I18nError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_namespace_list() {
        let config =
            I18nConfig::with_default_namespaces(vec![locale("en_US")], locale("en_US")).unwrap();
        assert_eq!(config.namespaces.len(), DEFAULT_NAMESPACES.len());
        assert!(config.namespaces.iter().any(|ns| ns == "servers"));
    }

    #[test]
    fn test_deserialized_config_still_needs_validation() {
        let config: I18nConfig = serde_json::from_str(
            r#"{
                "supported": ["es_ES"],
                "default_locale": "en_US",
                "namespaces": ["common"]
            }"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
