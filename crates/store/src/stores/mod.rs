//! Typed store layer over the document backend port.

pub mod cascade;
pub mod collection;
pub mod readiness;
pub mod singleton;
pub mod subscription;

pub use cascade::CascadingStore;
pub use collection::CollectionStore;
pub use readiness::{ReadySet, SourceFlag};
pub use singleton::SingletonStore;
pub use subscription::Subscription;
