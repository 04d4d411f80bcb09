//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Display name for the current user's side of a conversation
pub const SELF_DISPLAY_NAME: &str = "You";

/// Maximum messages the composer may send in one session.
/// At the limit the store returns `SendLimitReached` and the UI disables
/// the composer with a hint instead of failing silently.
pub const SESSION_SEND_LIMIT: u32 = 50;

/// How long a lifecycle toast (and its undo affordance) stays visible
pub const UNDO_TOAST_SECS: u64 = 6;

/// Environment variable that enables file logging when set to a path
pub const LOG_FILE_ENV: &str = "AUTHORLY_LOG_FILE";
