//! Theme (topic) payloads exchanged with `api/themes`.

use serde::{Deserialize, Serialize};

/// A theme users can subscribe to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme identifier.
    pub id: u64,
    /// Theme title.
    pub titre: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Identifiers of subscribed users.
    #[serde(default)]
    pub abonnes: Vec<u64>,
}

impl Theme {
    /// Returns true if the given user is subscribed to this theme.
    #[must_use]
    pub fn is_subscribed(&self, user_id: u64) -> bool {
        self.abonnes.contains(&user_id)
    }
}

/// Response of `GET api/themes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Themes {
    /// All themes.
    pub themes: Vec<Theme>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_lookup() {
        let themes: Themes = serde_json::from_str(
            r#"{"themes":[{"id":1,"titre":"Rust","description":"Systems","abonnes":[2,5]}]}"#,
        )
        .expect("should parse");

        let theme = &themes.themes[0];
        assert!(theme.is_subscribed(5));
        assert!(!theme.is_subscribed(3));
    }
}
