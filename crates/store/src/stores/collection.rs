//! Generic typed accessor over one named collection.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use lorekeeper_domain::{Record, RecordId};

use super::subscription::Subscription;
use crate::config::StoreConfig;
use crate::infrastructure::ports::{DocumentBackend, StoreError};

/// Typed store for one collection of `T` records.
///
/// All operations are boundary calls against the remote backend and are
/// bounded by the configured timeout; expiry surfaces as
/// [`StoreError::Unavailable`] rather than hanging, and nothing is retried
/// internally.
///
/// The conflict-resolution policy is explicit: [`update`](Self::update)
/// merges at field granularity (last write wins per field, so concurrent
/// editors cannot clobber each other's unrelated fields), while
/// [`set`](Self::set) replaces whole documents and is reserved for
/// identity-keyed records.
pub struct CollectionStore<T: Record> {
    backend: Arc<dyn DocumentBackend>,
    config: StoreConfig,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            config: self.config.clone(),
            _record: PhantomData,
        }
    }
}

pub(crate) fn decode_one<T: Record>(document: Value) -> Result<T, StoreError> {
    serde_json::from_value(document).map_err(StoreError::serialization)
}

pub(crate) fn decode_snapshot<T: Record>(documents: &[Value]) -> Result<Vec<T>, StoreError> {
    documents
        .iter()
        .map(|doc| decode_one(doc.clone()))
        .collect()
}

impl<T: Record> CollectionStore<T> {
    pub fn new(backend: Arc<dyn DocumentBackend>, config: StoreConfig) -> Self {
        Self {
            backend,
            config,
            _record: PhantomData,
        }
    }

    /// Run one boundary call under the configured timeout.
    async fn bounded<R>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<R, StoreError>>,
    ) -> Result<R, StoreError> {
        match tokio::time::timeout(self.config.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::unavailable(operation)),
        }
    }

    /// Full, unordered-from-the-caller's-view snapshot of the collection.
    pub async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let raw = self
            .bounded("get_all", self.backend.list(T::COLLECTION))
            .await?;
        decode_snapshot(&raw)
    }

    /// Point lookup. Absence is a valid result, distinct from failure.
    pub async fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let raw = self
            .bounded("get", self.backend.get(T::COLLECTION, &id.to_store_id()))
            .await?;
        raw.map(decode_one).transpose()
    }

    /// Create a record. The identifier is assigned by the store, never by
    /// the caller, and the created record is returned with it populated.
    pub async fn add(&self, draft: T::Draft) -> Result<T, StoreError> {
        let value = serde_json::to_value(&draft).map_err(StoreError::serialization)?;
        let Value::Object(mut obj) = value else {
            return Err(StoreError::serialization("draft must serialize to an object"));
        };
        let assigned = self
            .bounded(
                "add",
                self.backend.insert(T::COLLECTION, Value::Object(obj.clone())),
            )
            .await?;
        obj.insert("id".to_string(), Value::String(assigned.clone()));
        let record = decode_one(Value::Object(obj))?;
        tracing::debug!(collection = T::COLLECTION, id = %assigned, "created record");
        Ok(record)
    }

    /// Whole-document upsert at a caller-supplied identifier. Used only
    /// for records keyed by an external identity (e.g. users keyed by the
    /// auth provider's ID); everything else creates through [`add`](Self::add).
    pub async fn set(&self, id: &T::Id, draft: T::Draft) -> Result<(), StoreError> {
        let value = serde_json::to_value(&draft).map_err(StoreError::serialization)?;
        if !value.is_object() {
            return Err(StoreError::serialization("draft must serialize to an object"));
        }
        self.bounded(
            "set",
            self.backend.put(T::COLLECTION, &id.to_store_id(), value),
        )
        .await?;
        tracing::debug!(collection = T::COLLECTION, id = %id, "set record");
        Ok(())
    }

    /// Field-level merge: only the fields present in `patch` change.
    /// Fails with [`StoreError::NotFound`] if the record does not exist -
    /// a concurrent delete wins over an in-flight update.
    pub async fn update(&self, id: &T::Id, patch: T::Patch) -> Result<(), StoreError> {
        let value = serde_json::to_value(&patch).map_err(StoreError::serialization)?;
        let Value::Object(fields) = value else {
            return Err(StoreError::serialization("patch must serialize to an object"));
        };
        self.bounded(
            "update",
            self.backend.patch(T::COLLECTION, &id.to_store_id(), fields),
        )
        .await?;
        tracing::debug!(collection = T::COLLECTION, id = %id, "updated record");
        Ok(())
    }

    /// Remove a record. Deleting a nonexistent identifier is a no-op.
    pub async fn delete(&self, id: &T::Id) -> Result<(), StoreError> {
        self.bounded(
            "delete",
            self.backend.delete(T::COLLECTION, &id.to_store_id()),
        )
        .await?;
        tracing::debug!(collection = T::COLLECTION, id = %id, "deleted record");
        Ok(())
    }

    /// Register `callback` to receive the full current snapshot immediately
    /// and again after every subsequent write to this collection, from any
    /// writer. Deliveries to one subscriber are totally ordered in commit
    /// order. The returned handle cancels delivery; see [`Subscription`].
    pub async fn subscribe<F>(&self, callback: F) -> Result<Subscription, StoreError>
    where
        F: Fn(Vec<T>) + Send + 'static,
    {
        let stream = self
            .bounded("subscribe", self.backend.subscribe(T::COLLECTION))
            .await?;
        let initial = decode_snapshot::<T>(&stream.initial)?;
        tracing::debug!(
            collection = T::COLLECTION,
            records = initial.len(),
            "opened subscription"
        );
        Ok(Subscription::spawn(
            initial,
            stream.receiver,
            decode_snapshot::<T>,
            callback,
        ))
    }
}
