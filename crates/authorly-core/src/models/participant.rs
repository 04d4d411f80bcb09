use serde::{Deserialize, Serialize};

/// Identity verification badges for a counterpart.
///
/// The three badges are independent: a participant can carry any subset.
/// ISNI and ORCID are stored as the raw identifier strings and are only
/// displayed (and searched), never validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verification {
    pub domain_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isni: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
}

impl Verification {
    /// Number of badges this participant carries (0-3)
    pub fn badge_count(&self) -> usize {
        usize::from(self.domain_verified)
            + usize::from(self.isni.is_some())
            + usize::from(self.orcid.is_some())
    }

    pub fn is_verified(&self) -> bool {
        self.badge_count() > 0
    }
}

/// The counterpart in a conversation with the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// Platform handle, displayed with a leading '@'
    pub handle: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub verification: Verification,
}

impl Participant {
    /// "City, ST" location line for headers and list rows
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_count() {
        let mut v = Verification::default();
        assert_eq!(v.badge_count(), 0);
        assert!(!v.is_verified());

        v.domain_verified = true;
        assert_eq!(v.badge_count(), 1);

        v.isni = Some("0000 0001 2103 2683".to_string());
        v.orcid = Some("0000-0002-1825-0097".to_string());
        assert_eq!(v.badge_count(), 3);
        assert!(v.is_verified());
    }
}
