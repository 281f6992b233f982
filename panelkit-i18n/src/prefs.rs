//! Persisted locale preference storage

use crate::error::PreferenceStoreError;
use crate::locale::LocaleCode;
use parking_lot::Mutex;
use std::path::PathBuf;

/// Client-scoped persistence for the locale preference.
///
/// Holds at most one string value across restarts. Reads are best-effort
/// and return raw strings; validation happens in the resolver. Writes may
/// fail without affecting the switch that triggered them.
pub trait PreferenceStore: Send + Sync {
    /// The stored locale code, if any.
    fn load(&self) -> Option<String>;

    /// Store the locale code, replacing any previous value.
    fn store(&self, code: &LocaleCode) -> Result<(), PreferenceStoreError>;
}

/// Preference persisted as a single small file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn store(&self, code: &LocaleCode) -> Result<(), PreferenceStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, code.as_str())?;
        Ok(())
    }
}

/// In-memory preference store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
    rejects_writes: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a persisted value.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
            rejects_writes: false,
        }
    }

    /// Make every write fail, the way disabled client storage does.
    pub fn rejecting_writes(mut self) -> Self {
        self.rejects_writes = true;
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.lock().clone()
    }

    fn store(&self, code: &LocaleCode) -> Result<(), PreferenceStoreError> {
        if self.rejects_writes {
            return Err(PreferenceStoreError::Disabled);
        }
        *self.value.lock() = Some(code.as_str().to_string());
        Ok(())
    }
}
