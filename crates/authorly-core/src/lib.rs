pub mod constants;
pub mod models;
pub mod search;
pub mod seed;
pub mod store;
pub mod tracing_setup;

pub use models::{
    Intent, Message, Participant, Sender, Thread, ThreadFields, ThreadState, Verification,
    ViewMode,
};
pub use store::{LifecycleChange, StoreError, ThreadStore};
