use serde::{Deserialize, Serialize};

/// Which side of the conversation authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Counterpart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    /// Display timestamp (e.g. "10:42 AM", "Yesterday") - opaque, not sortable
    pub timestamp: String,
    /// Read receipt for user-sent messages. Only meaningful once the thread
    /// has left the requested state; None means "not shown".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

impl Message {
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
