//! On-device session state: remembered credentials, the cached session
//! and registration-wizard progress.
//!
//! All state goes through the injected [`KeyValueStore`] port under
//! namespaced keys, never through module globals, so the service stays
//! testable against the in-memory store. Payloads are stored as JSON; a
//! malformed stored payload is discarded with a warning instead of
//! surfacing an error to the caller.

use anyhow::Result;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::traits::KeyValueStore;
use shared::{AuthSession, RegistrationProgress, RememberedCredentials};

const REMEMBERED_CREDENTIALS_KEY: &str = "mapu::remembered_credentials";
const SESSION_KEY: &str = "mapu::session";
const REGISTRATION_PROGRESS_KEY: &str = "mapu::registration_progress";

/// Service for everything the app persists on the device itself.
pub struct SessionService<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> SessionService<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Store sign-in credentials for the "remember me" checkbox.
    pub fn remember_credentials(&self, email: &str, password: &str) -> Result<()> {
        debug!("Remembering credentials for {}", email);
        self.write_json(
            REMEMBERED_CREDENTIALS_KEY,
            &RememberedCredentials {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
    }

    pub fn remembered_credentials(&self) -> Result<Option<RememberedCredentials>> {
        self.read_json(REMEMBERED_CREDENTIALS_KEY)
    }

    pub fn forget_credentials(&self) -> Result<()> {
        self.store.remove(REMEMBERED_CREDENTIALS_KEY)
    }

    /// Cache the authenticated session so the app can skip the sign-in
    /// screen on the next launch.
    pub fn cache_session(&self, session: &AuthSession) -> Result<()> {
        debug!("Caching session for uid {}", session.uid);
        self.write_json(SESSION_KEY, session)
    }

    pub fn cached_session(&self) -> Result<Option<AuthSession>> {
        self.read_json(SESSION_KEY)
    }

    pub fn clear_session(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)
    }

    /// Checkpoint the registration wizard so a closed app can resume at
    /// the same step.
    pub fn save_registration_progress(&self, progress: &RegistrationProgress) -> Result<()> {
        debug!("Saving registration progress at step {}", progress.step);
        self.write_json(REGISTRATION_PROGRESS_KEY, progress)
    }

    pub fn registration_progress(&self) -> Result<Option<RegistrationProgress>> {
        self.read_json(REGISTRATION_PROGRESS_KEY)
    }

    pub fn clear_registration_progress(&self) -> Result<()> {
        self.store.remove(REGISTRATION_PROGRESS_KEY)
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_string(value)?;
        self.store.set(key, &payload)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!("Discarding malformed entry under '{}': {}", key, err);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryKeyValueStore;
    use serde_json::json;
    use shared::AccountRole;

    #[test]
    fn test_remembered_credentials_round_trip() {
        let service = SessionService::new(MemoryKeyValueStore::new());

        assert!(service.remembered_credentials().unwrap().is_none());

        service.remember_credentials("ana@example.com", "Segura#2024").unwrap();
        let credentials = service.remembered_credentials().unwrap().unwrap();
        assert_eq!(credentials.email, "ana@example.com");
        assert_eq!(credentials.password, "Segura#2024");

        service.forget_credentials().unwrap();
        assert!(service.remembered_credentials().unwrap().is_none());
    }

    #[test]
    fn test_session_cache_round_trip() {
        let service = SessionService::new(MemoryKeyValueStore::new());
        let session = AuthSession {
            uid: "uid-1".to_string(),
            email: "ana@example.com".to_string(),
        };

        service.cache_session(&session).unwrap();
        assert_eq!(service.cached_session().unwrap(), Some(session));

        service.clear_session().unwrap();
        assert!(service.cached_session().unwrap().is_none());
    }

    #[test]
    fn test_registration_progress_round_trip() {
        let service = SessionService::new(MemoryKeyValueStore::new());
        let progress = RegistrationProgress {
            role: AccountRole::Business,
            step: 3,
            form: json!({ "nombre": "Hotel Granada" }),
        };

        service.save_registration_progress(&progress).unwrap();
        assert_eq!(service.registration_progress().unwrap(), Some(progress));

        service.clear_registration_progress().unwrap();
        assert!(service.registration_progress().unwrap().is_none());
    }

    #[test]
    fn test_malformed_stored_payload_reads_back_as_none() {
        let store = MemoryKeyValueStore::new();
        store.set(super::SESSION_KEY, "{not json").unwrap();

        let service = SessionService::new(store);
        assert!(service.cached_session().unwrap().is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let service = SessionService::new(MemoryKeyValueStore::new());

        service.remember_credentials("ana@example.com", "secreto1").unwrap();
        service
            .cache_session(&AuthSession {
                uid: "uid-1".to_string(),
                email: "ana@example.com".to_string(),
            })
            .unwrap();

        service.clear_session().unwrap();
        assert!(service.cached_session().unwrap().is_none());
        assert!(service.remembered_credentials().unwrap().is_some());
    }
}
