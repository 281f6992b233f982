//! Process-wide locale state and runtime locale switching

use crate::catalog::TranslationCatalog;
use crate::config::I18nConfig;
use crate::direction::Direction;
use crate::error::{I18nError, I18nResult};
use crate::loader::CatalogLoader;
use crate::locale::LocaleCode;
use crate::prefs::PreferenceStore;
use crate::registry::{locale_listing, LocaleEntry};
use crate::resolver::resolve_locale;
use crate::source::CatalogSource;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Outcome of a completed [`LocaleManager::switch_locale`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The switch committed; the state now reflects the requested locale
    Committed,
    /// A newer switch was requested while this one was loading; its result
    /// was discarded and the state was left alone
    Superseded,
}

/// The locale and direction as published to subscribers.
///
/// UI layers mirror these onto the document `lang` and `dir` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSnapshot {
    pub locale: LocaleCode,
    pub direction: Direction,
}

/// Mutable locale state, guarded by the manager's lock.
struct LocaleState {
    current: LocaleCode,
    direction: Direction,
    fallback_catalog: Arc<TranslationCatalog>,
    active_catalog: Arc<TranslationCatalog>,
    /// Most recently issued switch token; an in-flight switch commits only
    /// if it still holds this value after its load completes.
    switch_token: u64,
}

/// Single holder of the current locale, its catalogs and its direction.
///
/// All reads go through short lock acquisitions; catalog loads for a switch
/// run without any lock held. Concurrent switches race under
/// last-request-wins semantics.
pub struct LocaleManager {
    config: I18nConfig,
    loader: CatalogLoader,
    prefs: Arc<dyn PreferenceStore>,
    state: RwLock<LocaleState>,
    snapshot_tx: watch::Sender<LocaleSnapshot>,
}

impl LocaleManager {
    /// Build the manager and activate the startup locale.
    ///
    /// The startup locale comes from the persisted preference when it names
    /// a supported locale, otherwise from negotiating `env_languages`
    /// against the supported set, otherwise from the configured default.
    /// The fallback locale's catalog is fully loaded before the startup
    /// locale's catalog is installed, so key-level fallback works from the
    /// first render.
    pub async fn initialize<S: AsRef<str>>(
        config: I18nConfig,
        source: Arc<dyn CatalogSource>,
        prefs: Arc<dyn PreferenceStore>,
        env_languages: &[S],
    ) -> I18nResult<Self> {
        config.validate()?;

        let persisted = prefs.load();
        let initial = resolve_locale(persisted.as_deref(), env_languages, &config);
        info!("Starting with locale {}", initial);

        let loader = CatalogLoader::new(source, config.namespaces.clone());
        let fallback_catalog = Arc::new(
            loader
                .load(&config.default_locale, &config.default_locale)
                .await,
        );
        let active_catalog = if initial == config.default_locale {
            Arc::clone(&fallback_catalog)
        } else {
            Arc::new(loader.load(&initial, &config.default_locale).await)
        };

        let direction = Direction::of(&initial);
        let (snapshot_tx, _) = watch::channel(LocaleSnapshot {
            locale: initial.clone(),
            direction,
        });

        Ok(Self {
            config,
            loader,
            prefs,
            state: RwLock::new(LocaleState {
                current: initial,
                direction,
                fallback_catalog,
                active_catalog,
                switch_token: 0,
            }),
            snapshot_tx,
        })
    }

    /// Switch to a supported locale, loading its catalog before committing.
    ///
    /// Unsupported codes are rejected without touching the state. Every
    /// accepted call runs its catalog load to completion, but when calls
    /// overlap only the most recently requested one commits, persists the
    /// preference and notifies subscribers; the others report
    /// [`SwitchOutcome::Superseded`].
    pub async fn switch_locale(&self, code: LocaleCode) -> I18nResult<SwitchOutcome> {
        if !self.config.is_supported(&code) {
            return Err(I18nError::UnsupportedLocale(code));
        }

        let token = {
            let mut state = self.state.write();
            state.switch_token += 1;
            state.switch_token
        };
        debug!("Switching locale to {} (request {})", code, token);

        // The fallback catalog was loaded at startup and never changes, so
        // only the target locale's catalog is fetched here. No lock is held
        // while the source is doing I/O.
        let active_catalog = Arc::new(self.loader.load(&code, &self.config.default_locale).await);

        let mut state = self.state.write();
        if state.switch_token != token {
            debug!("Discarding superseded switch to {} (request {})", code, token);
            return Ok(SwitchOutcome::Superseded);
        }

        let direction = Direction::of(&code);
        state.current = code.clone();
        state.direction = direction;
        state.active_catalog = active_catalog;

        // Publish and persist while still holding the lock so subscribers
        // and the store observe commits in commit order.
        self.snapshot_tx.send_replace(LocaleSnapshot {
            locale: code.clone(),
            direction,
        });
        if let Err(err) = self.prefs.store(&code) {
            warn!("Could not persist locale preference {}: {}", code, err);
        }

        info!("Locale switched to {} ({})", code, direction);
        Ok(SwitchOutcome::Committed)
    }

    /// The currently active locale.
    pub fn current_locale(&self) -> LocaleCode {
        self.state.read().current.clone()
    }

    /// Direction of the currently active locale.
    pub fn direction(&self) -> Direction {
        self.state.read().direction
    }

    /// A consistent view of the current locale and its direction.
    pub fn snapshot(&self) -> LocaleSnapshot {
        let state = self.state.read();
        LocaleSnapshot {
            locale: state.current.clone(),
            direction: state.direction,
        }
    }

    /// Subscribe to locale changes. The receiver immediately holds the
    /// current snapshot and sees every subsequent commit.
    pub fn subscribe(&self) -> watch::Receiver<LocaleSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The catalog backing the current locale.
    pub fn active_catalog(&self) -> Arc<TranslationCatalog> {
        Arc::clone(&self.state.read().active_catalog)
    }

    /// The fallback locale's catalog, loaded once at startup.
    pub fn fallback_catalog(&self) -> Arc<TranslationCatalog> {
        Arc::clone(&self.state.read().fallback_catalog)
    }

    /// The configuration the manager was built with.
    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// Selector listing of the supported locales, labeled and deduplicated.
    pub fn locale_listing(&self) -> Vec<LocaleEntry> {
        locale_listing(self.config.supported.iter().map(|code| code.as_str()))
    }

    /// Resolve a message template for the current locale.
    ///
    /// Looks in the active catalog first, then in the fallback catalog, and
    /// finally renders the dotted key itself so missing entries stay visible
    /// in the UI instead of disappearing.
    pub fn message(&self, namespace: &str, key: &str) -> String {
        {
            let state = self.state.read();
            if let Some(template) = state.active_catalog.lookup(namespace, key) {
                return template.to_string();
            }
            if let Some(template) = state.fallback_catalog.lookup(namespace, key) {
                return template.to_string();
            }
        }
        warn!("Missing translation for {}.{}", namespace, key);
        format!("{namespace}.{key}")
    }

    /// Whether a key resolves in the active or fallback catalog.
    pub fn has_message(&self, namespace: &str, key: &str) -> bool {
        let state = self.state.read();
        state.active_catalog.contains(namespace, key)
            || state.fallback_catalog.contains(namespace, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferenceStore;
    use crate::source::StaticCatalogSource;

    fn locale(code: &str) -> LocaleCode {
        LocaleCode::parse(code).unwrap()
    }

    async fn manager() -> LocaleManager {
        let config = I18nConfig::new(
            vec![locale("en_US"), locale("es_ES")],
            locale("en_US"),
            vec!["common".to_string()],
        )
        .unwrap();
        let mut source = StaticCatalogSource::new();
        source
            .insert_json(locale("en_US"), "common", r#"{"Save": "Save"}"#)
            .unwrap();
        let empty: &[&str] = &[];
        LocaleManager::initialize(
            config,
            Arc::new(source),
            Arc::new(MemoryPreferenceStore::new()),
            empty,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_switch_rejected() {
        let manager = manager().await;
        let result = manager.switch_locale(locale("fr_FR")).await;
        assert!(matches!(result, Err(I18nError::UnsupportedLocale(_))));
        assert_eq!(manager.current_locale(), locale("en_US"));
    }

    #[tokio::test]
    async fn test_missing_message_renders_dotted_key() {
        let manager = manager().await;
        assert_eq!(manager.message("common", "Save"), "Save");
        assert_eq!(manager.message("common", "nav.Home"), "common.nav.Home");
        assert!(!manager.has_message("common", "nav.Home"));
    }

    #[tokio::test]
    async fn test_listing_matches_supported_set() {
        let manager = manager().await;
        let codes: Vec<String> = manager
            .locale_listing()
            .into_iter()
            .map(|entry| entry.code.to_string())
            .collect();
        assert_eq!(codes, ["en_US", "es_ES"]);
    }
}
