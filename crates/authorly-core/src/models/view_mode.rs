use serde::{Deserialize, Serialize};

/// Which slice of the thread collection the list is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Inbox,
    Archived,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Archived => "Archived",
        }
    }

    /// Whether a thread with the given archived flag belongs to this view
    pub fn includes_archived(&self, archived: bool) -> bool {
        match self {
            Self::Inbox => !archived,
            Self::Archived => archived,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Inbox => Self::Archived,
            Self::Archived => Self::Inbox,
        }
    }
}
