//! Record store adapter
//!
//! Collection-scoped CRUD against the document store. `MongoStore` is the
//! production backend; `MemoryStore` backs tests and local development.
//! Collection names come from `TenantRouter`, never raw `Host` strings.

pub mod error;
pub mod memory;
pub mod mongo;
pub mod record;
pub mod tenants;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use record::{Record, RecordId};
pub use tenants::TenantRouter;

use async_trait::async_trait;

/// Store operations over one collection
///
/// Identifiers are assigned by the store on insert, never by the caller.
/// `replace` and `remove` report whether a document matched so callers can
/// log no-ops without treating them as failures.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every document in the collection, in the store's natural order
    async fn list(&self, collection: &str) -> StoreResult<Vec<Record>>;

    /// The document with the given identifier, or `None` when absent
    async fn get(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Record>>;

    /// Persist a new document and return its store-assigned identifier
    async fn insert(&self, collection: &str, record: &Record) -> StoreResult<RecordId>;

    /// Full-document replace keyed by identifier; `false` when no match
    async fn replace(&self, collection: &str, id: &RecordId, record: &Record)
        -> StoreResult<bool>;

    /// Remove the document with the given identifier; `false` when no match
    async fn remove(&self, collection: &str, id: &RecordId) -> StoreResult<bool>;
}
