pub mod message;
pub mod participant;
pub mod thread;
pub mod view_mode;

pub use message::{Message, Sender};
pub use participant::{Participant, Verification};
pub use thread::{Intent, Thread, ThreadFields, ThreadState};
pub use view_mode::ViewMode;
