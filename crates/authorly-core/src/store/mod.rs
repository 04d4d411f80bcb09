pub mod thread_store;
pub mod views;

pub use thread_store::{LifecycleChange, StoreError, ThreadStore, UndoRecord};
pub use views::visible_threads;
