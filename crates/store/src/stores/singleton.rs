//! Store specialization for exactly-one-document collections.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::subscription::Subscription;
use crate::config::StoreConfig;
use crate::infrastructure::ports::{DocumentBackend, StoreError};

/// Accessor for a collection holding a single document at a fixed
/// identifier (global settings).
///
/// Unlike the generic store's field-merge `update`, saving here is always a
/// whole-document replace: the document is edited and submitted as one
/// form, and a partial merge could silently resurrect stale sub-fields
/// from a previous save. The document is created lazily on first
/// [`save`](Self::save); reads before that return `None`, not an error.
pub struct SingletonStore<T> {
    backend: Arc<dyn DocumentBackend>,
    config: StoreConfig,
    collection: &'static str,
    document_id: &'static str,
    _document: PhantomData<fn() -> T>,
}

impl<T> Clone for SingletonStore<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            config: self.config.clone(),
            collection: self.collection,
            document_id: self.document_id,
            _document: PhantomData,
        }
    }
}

impl<T> SingletonStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(
        backend: Arc<dyn DocumentBackend>,
        config: StoreConfig,
        collection: &'static str,
        document_id: &'static str,
    ) -> Self {
        Self {
            backend,
            config,
            collection,
            document_id,
            _document: PhantomData,
        }
    }

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

    /// The current document, or `None` before the first save.
    pub async fn get(&self) -> Result<Option<T>, StoreError> {
        let raw = self
            .bounded("get", self.backend.get(self.collection, self.document_id))
            .await?;
        raw.map(|doc| serde_json::from_value(doc).map_err(StoreError::serialization))
            .transpose()
    }

    /// Whole-document replace at the fixed identifier.
    pub async fn save(&self, document: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(document).map_err(StoreError::serialization)?;
        if !value.is_object() {
            return Err(StoreError::serialization(
                "singleton document must serialize to an object",
            ));
        }
        self.bounded(
            "save",
            self.backend.put(self.collection, self.document_id, value),
        )
        .await?;
        tracing::debug!(collection = self.collection, id = self.document_id, "saved document");
        Ok(())
    }

    /// Deliver the document (or `None` before the first save) immediately
    /// and on every subsequent change.
    pub async fn subscribe<F>(&self, callback: F) -> Result<Subscription, StoreError>
    where
        F: Fn(Option<T>) + Send + 'static,
    {
        let stream = self
            .bounded("subscribe", self.backend.subscribe(self.collection))
            .await?;
        let document_id = self.document_id;
        let decode = move |documents: &[Value]| -> Result<Option<T>, StoreError> {
            documents
                .iter()
                .find(|doc| doc.get("id").and_then(Value::as_str) == Some(document_id))
                .map(|doc| serde_json::from_value(doc.clone()).map_err(StoreError::serialization))
                .transpose()
        };
        let initial = decode(&stream.initial)?;
        Ok(Subscription::spawn(
            initial,
            stream.receiver,
            decode,
            callback,
        ))
    }
}
