//! Reactive typed record stores over a pluggable document backend.
//!
//! The layering runs port-inward: `infrastructure::ports::DocumentBackend`
//! abstracts the remote document database as raw JSON CRUD plus
//! per-collection snapshot feeds, the `stores` layer adds record typing,
//! timeouts, conflict policy, cascading deletes, and cancelable
//! subscriptions on top of it, and [`app::Stores`] wires one typed store
//! per collection over a single shared backend handle.

pub mod app;
pub mod auth;
pub mod config;
pub mod infrastructure;
pub mod stores;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use app::Stores;
pub use auth::AuthSession;
pub use config::StoreConfig;
pub use infrastructure::memory::MemoryBackend;
pub use infrastructure::ports::{DocumentBackend, SnapshotStream, StoreError};
pub use stores::{CascadingStore, CollectionStore, ReadySet, SingletonStore, SourceFlag, Subscription};
