//! Port traits for the backing document store.
//!
//! The remote store is abstracted behind one minimal CRUD + subscribe
//! contract over raw JSON documents. Everything above this trait is typed;
//! everything below it is whatever the hosted database happens to be.

pub mod error;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::broadcast;

pub use error::StoreError;

/// One complete, self-consistent collection snapshot: every document,
/// de-duplicated by ID and ordered by ascending document ID.
pub type Snapshot = Arc<Vec<Value>>;

/// A live change feed for one collection.
///
/// `initial` is the snapshot at subscription time; `receiver` delivers one
/// new snapshot per committed write, in commit order, with no gap between
/// the two (implementations must capture both under the same lock).
pub struct SnapshotStream {
    pub initial: Snapshot,
    pub receiver: broadcast::Receiver<Snapshot>,
}

/// The five-method contract (plus subscribe) against the remote document
/// store. Every stored document is a JSON object carrying its own `id`
/// field; implementations inject it on `insert` and `put`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Full, snapshot-consistent scan of one collection.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Point lookup. Absence is `Ok(None)`, not an error.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Create a document with a store-assigned identifier, returned to the
    /// caller and injected into the stored object as `id`.
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// Whole-document upsert at a caller-supplied identifier.
    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError>;

    /// Field-level merge: only the supplied top-level fields change.
    /// Fails with `NotFound` if the document does not exist, so a
    /// concurrent delete wins over an in-flight update.
    async fn patch(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError>;

    /// Idempotent removal; deleting a missing document is a no-op.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Open a live change feed for one collection.
    async fn subscribe(&self, collection: &str) -> Result<SnapshotStream, StoreError>;
}
