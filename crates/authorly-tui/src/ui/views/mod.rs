pub mod inbox;
pub mod modals;
pub mod thread;

pub use inbox::render_inbox_pane;
pub use modals::{render_compose_modal, render_overflow_menu, render_request_preview};
pub use thread::render_thread_pane;
