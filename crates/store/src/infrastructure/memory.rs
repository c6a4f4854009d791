//! In-memory implementation of the document backend.
//!
//! Reference implementation of the port contract and the backing store for
//! tests. Each collection is a `BTreeMap` keyed by document ID (which gives
//! snapshots their de-duplicated, stable ordering for free) plus a
//! broadcast channel of full snapshots. Mutation and publication happen
//! under the same collection lock, so every subscriber observes snapshots
//! in commit order and `subscribe` sees no gap between its initial
//! snapshot and the feed.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use tokio::sync::{broadcast, Mutex};
use uuid::Uuid;

use super::ports::{DocumentBackend, Snapshot, SnapshotStream, StoreError};

const CHANNEL_CAPACITY: usize = 64;

struct CollectionState {
    documents: Mutex<BTreeMap<String, Value>>,
    updates: broadcast::Sender<Snapshot>,
}

impl CollectionState {
    fn new() -> Self {
        let (updates, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            documents: Mutex::new(BTreeMap::new()),
            updates,
        }
    }

    /// Publish the current contents to all subscribers. Must be called
    /// while the documents lock is held.
    fn publish(&self, documents: &BTreeMap<String, Value>) {
        let snapshot: Snapshot = Arc::new(documents.values().cloned().collect());
        // No receivers is fine; the next subscriber starts from `initial`.
        let _ = self.updates.send(snapshot);
    }
}

/// In-memory document store with per-collection snapshot feeds.
#[derive(Default)]
pub struct MemoryBackend {
    collections: DashMap<String, Arc<CollectionState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, name: &str) -> Arc<CollectionState> {
        self.collections
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(CollectionState::new()))
            .clone()
    }
}

fn as_object(operation: &'static str, document: Value) -> Result<Map<String, Value>, StoreError> {
    match document {
        Value::Object(obj) => Ok(obj),
        other => Err(StoreError::backend(
            operation,
            format!("document must be a JSON object, got {other}"),
        )),
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let state = self.collection(collection);
        let documents = state.documents.lock().await;
        Ok(documents.values().cloned().collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let state = self.collection(collection);
        let documents = state.documents.lock().await;
        Ok(documents.get(id).cloned())
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let mut obj = as_object("insert", document)?;
        let id = Uuid::new_v4().to_string();
        obj.insert("id".to_string(), Value::String(id.clone()));

        let state = self.collection(collection);
        let mut documents = state.documents.lock().await;
        documents.insert(id.clone(), Value::Object(obj));
        state.publish(&documents);
        tracing::debug!(collection, id = %id, "inserted document");
        Ok(id)
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError> {
        let mut obj = as_object("put", document)?;
        obj.insert("id".to_string(), Value::String(id.to_string()));

        let state = self.collection(collection);
        let mut documents = state.documents.lock().await;
        documents.insert(id.to_string(), Value::Object(obj));
        state.publish(&documents);
        tracing::debug!(collection, id, "put document");
        Ok(())
    }

    async fn patch(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError> {
        let state = self.collection(collection);
        let mut documents = state.documents.lock().await;
        let existing = documents
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        let Value::Object(obj) = existing else {
            return Err(StoreError::backend("patch", "stored document is not an object"));
        };
        for (key, value) in fields {
            obj.insert(key, value);
        }
        // The identifier is structural, not a mergeable field.
        obj.insert("id".to_string(), Value::String(id.to_string()));
        state.publish(&documents);
        tracing::debug!(collection, id, "patched document");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let state = self.collection(collection);
        let mut documents = state.documents.lock().await;
        if documents.remove(id).is_some() {
            state.publish(&documents);
            tracing::debug!(collection, id, "deleted document");
        }
        Ok(())
    }

    async fn subscribe(&self, collection: &str) -> Result<SnapshotStream, StoreError> {
        let state = self.collection(collection);
        let documents = state.documents.lock().await;
        let initial: Snapshot = Arc::new(documents.values().cloned().collect());
        let receiver = state.updates.subscribe();
        Ok(SnapshotStream { initial, receiver })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(obj) => obj,
            _ => unreachable!("test fields are objects"),
        }
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_injects_them() {
        let backend = MemoryBackend::new();
        let a = backend
            .insert("things", json!({"name": "a"}))
            .await
            .expect("insert a");
        let b = backend
            .insert("things", json!({"name": "b"}))
            .await
            .expect("insert b");
        assert_ne!(a, b);

        let stored = backend
            .get("things", &a)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(stored["id"], a);
        assert_eq!(stored["name"], "a");
    }

    #[tokio::test]
    async fn patch_merges_only_supplied_fields() {
        let backend = MemoryBackend::new();
        let id = backend
            .insert("things", json!({"name": "sword", "weight": 3, "rarity": "common"}))
            .await
            .expect("insert");

        backend
            .patch("things", &id, fields(json!({"rarity": "rare"})))
            .await
            .expect("patch");

        let stored = backend
            .get("things", &id)
            .await
            .expect("get")
            .expect("present");
        assert_eq!(stored["rarity"], "rare");
        assert_eq!(stored["name"], "sword");
        assert_eq!(stored["weight"], 3);
    }

    #[tokio::test]
    async fn patch_cannot_clobber_the_identifier() {
        let backend = MemoryBackend::new();
        let id = backend
            .insert("things", json!({"name": "sword"}))
            .await
            .expect("insert");

        backend
            .patch("things", &id, fields(json!({"id": "forged", "name": "axe"})))
            .await
            .expect("patch");

        let stored = backend
            .get("things", &id)
            .await
            .expect("get")
            .expect("still under original id");
        assert_eq!(stored["id"], id);
        assert_eq!(stored["name"], "axe");
        assert!(backend
            .get("things", "forged")
            .await
            .expect("get")
            .is_none());
    }

    #[tokio::test]
    async fn patch_on_missing_document_is_not_found() {
        let backend = MemoryBackend::new();
        let err = backend
            .patch("things", "nope", fields(json!({"name": "x"})))
            .await
            .expect_err("missing document");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let backend = MemoryBackend::new();
        let id = backend
            .insert("things", json!({"name": "a"}))
            .await
            .expect("insert");
        backend.delete("things", &id).await.expect("first delete");
        backend.delete("things", &id).await.expect("second delete");
        assert!(backend.get("things", &id).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn snapshots_are_ordered_by_id_and_delivered_per_write() {
        let backend = MemoryBackend::new();
        backend
            .put("things", "b", json!({"name": "second"}))
            .await
            .expect("put b");
        backend
            .put("things", "a", json!({"name": "first"}))
            .await
            .expect("put a");

        let mut stream = backend.subscribe("things").await.expect("subscribe");
        let ids: Vec<_> = stream
            .initial
            .iter()
            .map(|doc| doc["id"].as_str().map(str::to_owned))
            .collect();
        assert_eq!(
            ids,
            vec![Some("a".to_string()), Some("b".to_string())],
            "initial snapshot is ordered by document id"
        );

        backend
            .put("things", "c", json!({"name": "third"}))
            .await
            .expect("put c");
        let next = stream.receiver.recv().await.expect("one delivery");
        assert_eq!(next.len(), 3);

        // Deleting a missing document changes nothing and publishes nothing.
        backend.delete("things", "ghost").await.expect("no-op");
        assert!(matches!(
            stream.receiver.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
