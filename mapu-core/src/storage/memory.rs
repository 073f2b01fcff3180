//! In-memory backends for tests and local development.
//!
//! These hold everything in a `HashMap` behind a `Mutex` and implement the
//! same port traits as the real backends, so services can be exercised
//! without any network or device storage.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use serde_json::Value;
use shared::AuthSession;

use crate::storage::traits::{AuthError, BlobStore, DocumentStore, IdentityGateway, KeyValueStore};

/// In-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| anyhow!("key-value store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow!("key-value store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow!("key-value store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

/// In-memory [`DocumentStore`] keyed by collection, then document id.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, HashMap<String, Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("document store lock poisoned"))?;
        Ok(collections.get(collection).and_then(|docs| docs.get(id)).cloned())
    }

    fn set_document(&self, collection: &str, id: &str, record: Value) -> Result<()> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("document store lock poisoned"))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), record);
        Ok(())
    }

    fn update_document(&self, collection: &str, id: &str, partial: Value) -> Result<()> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("document store lock poisoned"))?;
        let document = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| anyhow!("Document not found: {}/{}", collection, id))?;

        match (document.as_object_mut(), partial.as_object()) {
            (Some(existing), Some(updates)) => {
                for (key, value) in updates {
                    existing.insert(key.clone(), value.clone());
                }
                Ok(())
            }
            _ => Err(anyhow!("update_document requires object records")),
        }
    }

    fn query_where(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Value>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| anyhow!("document store lock poisoned"))?;
        let matches = collections
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }
}

/// In-memory [`IdentityGateway`] with pre-registrable accounts.
#[derive(Debug, Default)]
pub struct MemoryIdentityGateway {
    accounts: Mutex<HashMap<String, (String, String)>>,
}

impl MemoryIdentityGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityGateway for MemoryIdentityGateway {
    fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let mut accounts = self
            .accounts
            .lock()
            .map_err(|_| AuthError::Backend("internal/lock-poisoned".to_string()))?;
        if accounts.contains_key(email) {
            return Err(AuthError::EmailAlreadyInUse);
        }
        let uid = format!("uid-{}", accounts.len() + 1);
        accounts.insert(email.to_string(), (uid.clone(), password.to_string()));
        Ok(AuthSession {
            uid,
            email: email.to_string(),
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|_| AuthError::Backend("internal/lock-poisoned".to_string()))?;
        let (uid, stored_password) = accounts.get(email).ok_or(AuthError::UserNotFound)?;
        if stored_password != password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(AuthSession {
            uid: uid.clone(),
            email: email.to_string(),
        })
    }

    fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|_| AuthError::Backend("internal/lock-poisoned".to_string()))?;
        if accounts.contains_key(email) {
            Ok(())
        } else {
            Err(AuthError::UserNotFound)
        }
    }
}

/// In-memory [`BlobStore`] handing out `memory://` URLs.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn upload_blob(&self, path: &str, bytes: &[u8]) -> Result<String> {
        let mut blobs = self.blobs.lock().map_err(|_| anyhow!("blob store lock poisoned"))?;
        blobs.insert(path.to_string(), bytes.to_vec());
        Ok(format!("memory://{}", path))
    }

    fn delete_blob(&self, path: &str) -> Result<()> {
        let mut blobs = self.blobs.lock().map_err(|_| anyhow!("blob store lock poisoned"))?;
        blobs
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| anyhow!("Blob not found: {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_value_round_trip() {
        let store = MemoryKeyValueStore::new();

        assert_eq!(store.get("missing").unwrap(), None);

        store.set("clave", "valor").unwrap();
        assert_eq!(store.get("clave").unwrap(), Some("valor".to_string()));

        store.remove("clave").unwrap();
        assert_eq!(store.get("clave").unwrap(), None);
    }

    #[test]
    fn test_document_set_get_update() {
        let store = MemoryDocumentStore::new();

        assert_eq!(store.get_document("turistas", "uid-1").unwrap(), None);

        store
            .set_document("turistas", "uid-1", json!({"first_name": "Ana", "phone": "88776655"}))
            .unwrap();
        store
            .update_document("turistas", "uid-1", json!({"phone": "22334455"}))
            .unwrap();

        let record = store.get_document("turistas", "uid-1").unwrap().unwrap();
        assert_eq!(record["first_name"], "Ana");
        assert_eq!(record["phone"], "22334455");

        assert!(store.update_document("turistas", "uid-2", json!({})).is_err());
    }

    #[test]
    fn test_identity_gateway_sign_up_and_sign_in() {
        let gateway = MemoryIdentityGateway::new();

        let session = gateway.sign_up("ana@example.com", "Segura#2024").unwrap();
        assert_eq!(session.email, "ana@example.com");

        assert_eq!(
            gateway.sign_up("ana@example.com", "otra"),
            Err(AuthError::EmailAlreadyInUse)
        );

        let signed_in = gateway.sign_in("ana@example.com", "Segura#2024").unwrap();
        assert_eq!(signed_in.uid, session.uid);

        assert_eq!(
            gateway.sign_in("ana@example.com", "incorrecta"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            gateway.sign_in("nadie@example.com", "x"),
            Err(AuthError::UserNotFound)
        );
    }

    #[test]
    fn test_password_reset_requires_known_account() {
        let gateway = MemoryIdentityGateway::new();
        gateway.sign_up("ana@example.com", "Segura#2024").unwrap();

        assert!(gateway.send_password_reset("ana@example.com").is_ok());
        assert_eq!(
            gateway.send_password_reset("nadie@example.com"),
            Err(AuthError::UserNotFound)
        );
    }

    #[test]
    fn test_auth_error_codes_are_stable() {
        assert_eq!(AuthError::EmailAlreadyInUse.code(), "auth/email-already-in-use");
        assert_eq!(AuthError::UserNotFound.code(), "auth/user-not-found");
        assert_eq!(AuthError::Backend("custom/code".to_string()).code(), "custom/code");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Correo o contraseña incorrectos");
    }

    #[test]
    fn test_blob_store_upload_and_delete() {
        let store = MemoryBlobStore::new();

        let url = store.upload_blob("logos/uid-1.png", &[1, 2, 3]).unwrap();
        assert_eq!(url, "memory://logos/uid-1.png");

        store.delete_blob("logos/uid-1.png").unwrap();
        assert!(store.delete_blob("logos/uid-1.png").is_err());
    }

    #[test]
    fn test_query_where_matches_field_equality() {
        let store = MemoryDocumentStore::new();
        store
            .set_document("centros_turisticos", "a", json!({"department": "Granada"}))
            .unwrap();
        store
            .set_document("centros_turisticos", "b", json!({"department": "Rivas"}))
            .unwrap();

        let results = store
            .query_where("centros_turisticos", "department", &json!("Granada"))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["department"], "Granada");

        assert!(store.query_where("otros", "x", &json!(1)).unwrap().is_empty());
    }
}
