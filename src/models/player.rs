//! Player: a trimmed, non-empty name that is unique within a roster.

use crate::models::session::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player in the roster. The name is the only identity a player has.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Player(String);

impl Player {
    /// Create a player from raw input. Surrounding whitespace is trimmed; a blank name is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, SessionError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Player {
    type Error = SessionError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Player> for String {
    fn from(player: Player) -> Self {
        player.0
    }
}

impl AsRef<str> for Player {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let p = Player::new("  Alice \t").unwrap();
        assert_eq!(p.name(), "Alice");
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(Player::new("   "), Err(SessionError::EmptyPlayerName));
        assert_eq!(Player::new(""), Err(SessionError::EmptyPlayerName));
    }

    #[test]
    fn deserializing_goes_through_validation() {
        let p: Player = serde_json::from_str("\"  Carol \"").unwrap();
        assert_eq!(p.name(), "Carol");
        assert!(serde_json::from_str::<Player>("\"   \"").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let p = Player::new("Bob").unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"Bob\"");
    }
}
