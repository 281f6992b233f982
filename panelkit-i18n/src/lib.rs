//! Localization core for the PanelKit console
//!
//! This crate owns everything between raw translation resources and a UI
//! that renders them: negotiating the startup locale from the persisted
//! preference and the environment's language list, loading per-namespace
//! catalogs with a fallback chain, classifying text direction, and holding
//! the switchable locale state the rest of the console observes.
//!
//! Message *formatting* (interpolation, plurals) is deliberately out of
//! scope; [`LocaleManager::message`] hands back raw templates for the
//! hosting layer's formatter.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use panelkit_i18n::{
//!     I18nConfig, LocaleCode, LocaleManager, MemoryPreferenceStore, StaticCatalogSource,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let en = LocaleCode::parse("en_US")?;
//! let es = LocaleCode::parse("es_ES")?;
//! let config = I18nConfig::new(vec![en.clone(), es.clone()], en, vec!["common".to_string()])?;
//!
//! let mut source = StaticCatalogSource::new();
//! source.insert_json(es, "common", r#"{"Save": "Guardar"}"#)?;
//!
//! let manager = LocaleManager::initialize(
//!     config,
//!     Arc::new(source),
//!     Arc::new(MemoryPreferenceStore::new()),
//!     &["es-ES"],
//! )
//! .await?;
//!
//! assert_eq!(manager.current_locale().as_str(), "es_ES");
//! assert_eq!(manager.message("common", "Save"), "Guardar");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod direction;
pub mod error;
pub mod loader;
pub mod locale;
pub mod manager;
pub mod prefs;
pub mod registry;
pub mod resolver;
pub mod source;

pub use catalog::TranslationCatalog;
pub use config::{I18nConfig, DEFAULT_NAMESPACES};
pub use direction::{is_right_to_left, Direction};
pub use error::{CatalogFetchError, I18nError, I18nResult, PreferenceStoreError};
pub use loader::CatalogLoader;
pub use locale::LocaleCode;
pub use manager::{LocaleManager, LocaleSnapshot, SwitchOutcome};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use registry::{display_label, locale_listing, LocaleEntry};
pub use resolver::{resolve_locale, system_languages};
pub use source::{CatalogSource, FsCatalogSource, StaticCatalogSource};
