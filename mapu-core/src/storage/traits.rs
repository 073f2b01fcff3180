//! # Storage Traits
//!
//! Port traits for the external collaborators the mobile app talks to:
//! the managed identity backend, the document database, binary object
//! storage and on-device key-value persistence. The domain layer only ever
//! sees these traits, so backends can be swapped without touching it.

use anyhow::Result;
use serde_json::Value;
use shared::AuthSession;

/// Coded failure from the identity backend.
///
/// The display text is what the app shows the user; [`AuthError::code`]
/// is the stable backend code for logging and branching.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("El correo electrónico ya está en uso")]
    EmailAlreadyInUse,
    #[error("Correo o contraseña incorrectos")]
    InvalidCredentials,
    #[error("No existe una cuenta con ese correo")]
    UserNotFound,
    #[error("La contraseña es demasiado débil")]
    WeakPassword,
    #[error("Demasiados intentos, intenta más tarde")]
    TooManyRequests,
    #[error("Sin conexión, revisa tu internet")]
    Network,
    #[error("Error del servidor ({0})")]
    Backend(String),
}

impl AuthError {
    /// Stable error code as reported by the backend SDK.
    pub fn code(&self) -> &str {
        match self {
            AuthError::EmailAlreadyInUse => "auth/email-already-in-use",
            AuthError::InvalidCredentials => "auth/invalid-credential",
            AuthError::UserNotFound => "auth/user-not-found",
            AuthError::WeakPassword => "auth/weak-password",
            AuthError::TooManyRequests => "auth/too-many-requests",
            AuthError::Network => "auth/network-request-failed",
            AuthError::Backend(code) => code,
        }
    }
}

/// Email+password identity backend.
pub trait IdentityGateway: Send + Sync {
    /// Register a new account, returning the created session.
    fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Authenticate an existing account.
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Trigger a password-reset email.
    fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

/// Document database holding one record per user id, one collection per
/// account role.
pub trait DocumentStore: Send + Sync {
    /// Fetch a record, `Ok(None)` when the document does not exist.
    fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Create or fully replace a record.
    fn set_document(&self, collection: &str, id: &str, record: Value) -> Result<()>;

    /// Merge the top-level fields of `partial` into an existing record.
    /// Fails when the document does not exist.
    fn update_document(&self, collection: &str, id: &str, partial: Value) -> Result<()>;

    /// All records in `collection` whose `field` equals `value`.
    fn query_where(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Value>>;
}

/// Binary object storage for profile photos and business logos/covers.
pub trait BlobStore: Send + Sync {
    /// Upload bytes under `path`, returning the public download URL.
    fn upload_blob(&self, path: &str, bytes: &[u8]) -> Result<String>;

    fn delete_blob(&self, path: &str) -> Result<()>;
}

/// On-device key-value persistence for remembered credentials, the cached
/// session and registration-wizard progress.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}
