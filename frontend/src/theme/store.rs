//! Persisted theme preference.
//!
//! A single key in origin-scoped key-value storage holds the user's explicit
//! choice. Anything that cannot be decoded is treated exactly like a missing
//! key. A preference written by the legacy boolean variant is read from the
//! legacy key when the primary key has nothing usable. Reads never write;
//! moving the legacy value under the primary key is the separate, explicit
//! [`PreferenceStore::migrate_legacy`], run once by the bootstrapper.

use shared::{StorageEncoding, Theme, ThemeConfig};

use super::ThemeError;

/// Raw key-value access, `window.localStorage` in the browser.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

pub struct PreferenceStore {
    storage: Option<Box<dyn PreferenceStorage>>,
    key: String,
    legacy_key: Option<String>,
    encoding: StorageEncoding,
}

impl PreferenceStore {
    pub fn new(storage: Option<Box<dyn PreferenceStorage>>, config: &ThemeConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
            legacy_key: config.legacy_key().map(str::to_string),
            encoding: config.encoding,
        }
    }

    /// Stored preference, or `None` when absent, malformed or unreadable. Never fails.
    pub fn get_stored(&self) -> Option<Theme> {
        match self.try_get_stored() {
            Ok(theme) => theme,
            Err(ThemeError::StorageUnavailable) => None,
            Err(error) => {
                log::warn!("Failed to access theme preference: {error}");
                None
            }
        }
    }

    /// Like [`get_stored`](Self::get_stored) but reports storage failures.
    /// A malformed value is still `Ok(None)`.
    pub fn try_get_stored(&self) -> Result<Option<Theme>, ThemeError> {
        let storage = self.storage()?;
        match self.read_primary(storage)? {
            Some(theme) => Ok(Some(theme)),
            None => self.read_legacy(storage),
        }
    }

    /// Rewrites a legacy boolean preference under the primary key.
    ///
    /// Does nothing when the primary key already holds a valid value or the
    /// legacy key holds nothing usable. Returns the migrated theme.
    pub fn migrate_legacy(&self) -> Option<Theme> {
        let legacy_key = self.legacy_key.as_deref()?;
        let storage = self.storage().ok()?;

        let migrated = self.read_primary(storage).and_then(|primary| match primary {
            Some(_) => Ok(None),
            None => self.read_legacy(storage),
        });
        let theme = match migrated {
            Ok(theme) => theme?,
            Err(error) => {
                log::warn!("Failed to read theme preference for migration: {error}");
                return None;
            }
        };

        match storage.write(&self.key, &self.encoding.encode(theme)) {
            Ok(()) => {
                log::info!("Migrated theme preference '{theme}' from '{legacy_key}' to '{}'", self.key);
                Some(theme)
            }
            Err(error) => {
                log::warn!("Failed to migrate theme preference from '{legacy_key}': {error}");
                None
            }
        }
    }

    /// Persists `theme`. Write failures are logged and dropped.
    pub fn set_stored(&self, theme: Theme) {
        match self.try_set_stored(theme) {
            Ok(()) | Err(ThemeError::StorageUnavailable) => {}
            Err(error) => log::warn!("Failed to save theme preference: {error}"),
        }
    }

    pub fn try_set_stored(&self, theme: Theme) -> Result<(), ThemeError> {
        self.storage()?.write(&self.key, &self.encoding.encode(theme))
    }

    fn storage(&self) -> Result<&dyn PreferenceStorage, ThemeError> {
        self.storage
            .as_deref()
            .ok_or(ThemeError::StorageUnavailable)
    }

    fn read_primary(&self, storage: &dyn PreferenceStorage) -> Result<Option<Theme>, ThemeError> {
        let Some(raw) = storage.read(&self.key)? else {
            return Ok(None);
        };
        let decoded = self.encoding.decode(&raw);
        if decoded.is_none() {
            log::warn!("Ignoring unrecognized theme preference {raw:?} under '{}'", self.key);
        }
        Ok(decoded)
    }

    fn read_legacy(&self, storage: &dyn PreferenceStorage) -> Result<Option<Theme>, ThemeError> {
        let Some(legacy_key) = self.legacy_key.as_deref() else {
            return Ok(None);
        };
        Ok(storage
            .read(legacy_key)?
            .and_then(|raw| StorageEncoding::JsonBool.decode(&raw)))
    }
}
