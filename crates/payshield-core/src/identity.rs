//! Durable identity storage.
//!
//! Every screening request is keyed to a stable user and device identity.
//! Identifiers are minted once (UUID v4) and persisted under well-known keys
//! so that later sessions reuse them instead of generating fresh ones.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Storage key for the persistent user identifier.
pub const USER_ID_KEY: &str = "user_id";

/// Storage key for the persistent device identifier.
pub const DEVICE_ID_KEY: &str = "device_id";

/// A durable string-to-string store for identity material.
///
/// Implementations are deliberately infallible: a store that cannot read or
/// write behaves as if the key were absent, so identity resolution always
/// yields an identifier even on a degraded host.
pub trait IdentityStore {
    /// Return the stored value for `key`, if any.
    #[must_use]
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str);

    /// Return the stored value for `key`, generating and persisting one if
    /// absent.
    #[must_use]
    fn get_or_create(&self, key: &str, generate: impl FnOnce() -> String) -> String {
        if let Some(existing) = self.get(key) {
            return existing;
        }
        let value = generate();
        self.put(key, &value);
        value
    }
}

/// Resolve the stable user identifier, minting a UUID v4 on first use.
#[must_use]
pub fn resolve_user_id(store: &impl IdentityStore) -> String {
    store.get_or_create(USER_ID_KEY, || Uuid::new_v4().to_string())
}

/// Resolve the stable device identifier, minting a UUID v4 on first use.
#[must_use]
pub fn resolve_device_id(store: &impl IdentityStore) -> String {
    store.get_or_create(DEVICE_ID_KEY, || Uuid::new_v4().to_string())
}

/// In-memory store backed by a shared map.
///
/// Clones share the same underlying map, so every handle sees the same
/// identity material for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
    }
}

/// JSON-file-backed store.
///
/// The file holds a flat string-to-string object. Read and write faults are
/// logged and absorbed; a corrupt or missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> HashMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %error,
                    "identity file is not valid JSON, treating as empty"
                );
                HashMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(error) = std::fs::create_dir_all(parent) {
                tracing::warn!(
                    path = %parent.display(),
                    error = %error,
                    "failed to create identity directory"
                );
                return;
            }
        }
        let rendered = match serde_json::to_string_pretty(entries) {
            Ok(rendered) => rendered,
            Err(error) => {
                tracing::warn!(error = %error, "failed to serialize identity entries");
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, rendered) {
            tracing::warn!(
                path = %self.path.display(),
                error = %error,
                "failed to write identity file"
            );
        }
    }
}

impl IdentityStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_identity_path() -> PathBuf {
        std::env::temp_dir().join(format!("payshield-identity-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert!(store.get(USER_ID_KEY).is_none());

        store.put(USER_ID_KEY, "abc");

        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("abc"));
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.put(DEVICE_ID_KEY, "device-1");

        assert_eq!(clone.get(DEVICE_ID_KEY).as_deref(), Some("device-1"));
    }

    #[test]
    fn get_or_create_skips_generation_when_present() {
        let store = MemoryStore::new();
        store.put(USER_ID_KEY, "existing");

        let value = store.get_or_create(USER_ID_KEY, || panic!("should not generate"));

        assert_eq!(value, "existing");
    }

    #[test]
    fn resolved_identifiers_are_stable_and_distinct() {
        let store = MemoryStore::new();

        let user = resolve_user_id(&store);
        let device = resolve_device_id(&store);

        assert_eq!(resolve_user_id(&store), user);
        assert_eq!(resolve_device_id(&store), device);
        assert_ne!(user, device);

        assert!(Uuid::parse_str(&user).is_ok());
        assert!(Uuid::parse_str(&device).is_ok());
    }

    #[test]
    fn file_store_persists_across_handles() {
        let path = temp_identity_path();

        let user = resolve_user_id(&FileStore::new(&path));
        let reopened = FileStore::new(&path);

        assert_eq!(resolve_user_id(&reopened), user);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn file_store_treats_corrupt_file_as_empty() {
        let path = temp_identity_path();
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get(USER_ID_KEY).is_none());

        store.put(USER_ID_KEY, "fresh");
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("fresh"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn file_store_keeps_unrelated_keys_on_put() {
        let path = temp_identity_path();
        let store = FileStore::new(&path);

        store.put(USER_ID_KEY, "user-1");
        store.put(DEVICE_ID_KEY, "device-1");

        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("user-1"));
        assert_eq!(store.get(DEVICE_ID_KEY).as_deref(), Some("device-1"));

        std::fs::remove_file(&path).ok();
    }
}
