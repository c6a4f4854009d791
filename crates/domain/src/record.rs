//! The generic record contract shared by every stored entity.
//!
//! Each collection in the backing document store holds exactly one record
//! type. A record names its collection, its ID type, the payload used to
//! create it (`Draft`, everything except the ID), and the payload used to
//! mutate it (`Patch`, every field optional). Patches serialize only the
//! fields that were actually supplied, which is what gives `update` its
//! field-level-merge semantics: concurrent editors resolve conflicts by
//! last-write-wins per field, never per document.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ids::RecordId;

/// A stored entity: one record type per named collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Name of the collection this record lives in.
    const COLLECTION: &'static str;

    /// Typed identifier. Store-assigned on `add`, caller-supplied on `set`.
    type Id: RecordId;

    /// Creation payload: every field except the identifier.
    type Draft: Serialize + Send + Sync + 'static;

    /// Partial-update payload: every field optional, omitted fields are
    /// left untouched by `update`.
    type Patch: Serialize + Send + Sync + 'static;

    fn record_id(&self) -> Self::Id;
}

/// A record that holds a foreign reference to a parent record in another
/// collection. A child must never outlive its parent; the cascading store
/// enforces this by deleting children before the parent.
pub trait ChildOf<P: Record>: Record {
    fn parent_id(&self) -> P::Id;
}
