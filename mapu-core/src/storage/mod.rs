//! Port traits for the app's external backends, plus in-memory
//! implementations used by the service tests.

pub mod memory;
pub mod traits;

pub use memory::{MemoryBlobStore, MemoryDocumentStore, MemoryIdentityGateway, MemoryKeyValueStore};
pub use traits::{AuthError, BlobStore, DocumentStore, IdentityGateway, KeyValueStore};
