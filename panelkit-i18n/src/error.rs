//! Error types for localization operations

use crate::locale::LocaleCode;
use panelkit_common::PanelError;
use thiserror::Error;

/// Result type for localization operations
pub type I18nResult<T> = Result<T, I18nError>;

/// Errors that can occur during localization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// A string does not have the `language_REGION` locale shape
    #[error("Invalid locale code: {0:?}")]
    InvalidLocaleCode(String),

    /// A well-formed locale code outside the configured supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(LocaleCode),

    /// The startup configuration was rejected
    #[error("Invalid localization configuration: {0}")]
    InvalidConfig(String),
}

/// Errors produced when fetching a single catalog resource
#[derive(Error, Debug)]
pub enum CatalogFetchError {
    /// No resource exists for the requested locale and namespace
    #[error("Resource not found")]
    NotFound,

    /// The resource parsed but its top level is not a JSON mapping
    #[error("Resource is not a JSON mapping")]
    NotAMapping,

    /// The resource could not be read from the underlying transport
    #[error("Failed to read resource: {0}")]
    Io(#[from] std::io::Error),

    /// The resource is not syntactically valid JSON
    #[error("Resource is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors produced when persisting the locale preference
#[derive(Error, Debug)]
pub enum PreferenceStoreError {
    /// The store rejects writes, e.g. client storage is disabled
    #[error("Preference storage is disabled")]
    Disabled,

    /// The preference could not be written
    #[error("Failed to write preference: {0}")]
    Io(#[from] std::io::Error),
}

impl From<I18nError> for PanelError {
    fn from(err: I18nError) -> Self {
        match &err {
            I18nError::UnsupportedLocale(code) => {
                let locale = code.to_string();
                PanelError::localization_with_locale(err.to_string(), locale)
            }
            _ => PanelError::localization(err.to_string()),
        }
    }
}
