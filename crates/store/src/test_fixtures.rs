//! Shared backend doubles for store tests.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::infrastructure::memory::MemoryBackend;
use crate::infrastructure::ports::{DocumentBackend, SnapshotStream, StoreError};

/// Backend whose every call never resolves, for exercising the timeout
/// boundary.
pub(crate) struct HangingBackend;

#[async_trait]
impl DocumentBackend for HangingBackend {
    async fn list(&self, _collection: &str) -> Result<Vec<Value>, StoreError> {
        std::future::pending().await
    }

    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Value>, StoreError> {
        std::future::pending().await
    }

    async fn insert(&self, _collection: &str, _document: Value) -> Result<String, StoreError> {
        std::future::pending().await
    }

    async fn put(&self, _collection: &str, _id: &str, _document: Value) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn patch(
        &self,
        _collection: &str,
        _id: &str,
        _fields: Map<String, Value>,
    ) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn subscribe(&self, _collection: &str) -> Result<SnapshotStream, StoreError> {
        std::future::pending().await
    }
}

/// Delegates to an in-memory backend but fails `delete` for a chosen set
/// of document IDs, for exercising cascade abort behavior.
pub(crate) struct FaultInjectingBackend {
    inner: Arc<MemoryBackend>,
    undeletable: Mutex<HashSet<String>>,
}

impl FaultInjectingBackend {
    pub(crate) fn new(inner: Arc<MemoryBackend>) -> Self {
        Self {
            inner,
            undeletable: Mutex::new(HashSet::new()),
        }
    }

    pub(crate) async fn refuse_delete_of(&self, id: impl Into<String>) {
        self.undeletable.lock().await.insert(id.into());
    }
}

#[async_trait]
impl DocumentBackend for FaultInjectingBackend {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        self.inner.list(collection).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        self.inner.get(collection, id).await
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        self.inner.insert(collection, document).await
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError> {
        self.inner.put(collection, id, document).await
    }

    async fn patch(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.inner.patch(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if self.undeletable.lock().await.contains(id) {
            return Err(StoreError::backend("delete", "injected delete fault"));
        }
        self.inner.delete(collection, id).await
    }

    async fn subscribe(&self, collection: &str) -> Result<SnapshotStream, StoreError> {
        self.inner.subscribe(collection).await
    }
}
