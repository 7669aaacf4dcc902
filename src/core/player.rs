//! Player count and clause-level player-count qualifiers.
//!
//! ## PlayerCount
//!
//! Validated 1-5 player count. Every setup API takes it as context.
//!
//! ## PlayerCondition
//!
//! The qualifier printed at the head of a scheme clause, such as
//! `2-3 players:` or `1 or 4 players:`. A clause only applies when its
//! condition admits the actual player count.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::SetupError;

/// Number of players at the table, always within `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Smallest supported table.
    pub const MIN: u8 = 1;
    /// Largest supported table.
    pub const MAX: u8 = 5;

    /// Create a validated player count.
    ///
    /// ```
    /// use legendary_setup::core::PlayerCount;
    ///
    /// assert_eq!(PlayerCount::new(3).unwrap().get(), 3);
    /// assert!(PlayerCount::new(0).is_err());
    /// assert!(PlayerCount::new(6).is_err());
    /// ```
    pub fn new(count: u8) -> Result<Self, SetupError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(SetupError::InvalidPlayerCount(count))
        }
    }

    /// Raw count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Count widened for arithmetic.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Iterate over every supported player count.
    pub fn all() -> impl Iterator<Item = PlayerCount> {
        (Self::MIN..=Self::MAX).map(PlayerCount)
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 1 {
            write!(f, "1 player")
        } else {
            write!(f, "{} players", self.0)
        }
    }
}

/// Player-count qualifier attached to a clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCondition {
    /// Inclusive range, e.g. `2-3 players`.
    Range { low: u8, high: u8 },
    /// Explicit list, e.g. `1 or 4 players`, `2, 3 or 5 players`.
    List(SmallVec<[u8; 4]>),
}

impl PlayerCondition {
    /// Parse the numeric part of a qualifier (`"2-3"`, `"1 or 4"`, `"5"`).
    ///
    /// Returns `None` when no number is present.
    #[must_use]
    pub fn parse(condition: &str) -> Option<Self> {
        let condition = condition.trim();
        if let Some((low, high)) = condition.split_once(['-', '–']) {
            let low = low.trim().parse().ok()?;
            let high = high.trim().parse().ok()?;
            return Some(Self::Range { low, high });
        }

        let numbers: SmallVec<[u8; 4]> = condition
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse().ok())
            .collect();
        if numbers.is_empty() {
            None
        } else {
            Some(Self::List(numbers))
        }
    }

    /// Whether the condition holds for this table.
    #[must_use]
    pub fn admits(&self, players: PlayerCount) -> bool {
        let n = players.get();
        match self {
            Self::Range { low, high } => (*low..=*high).contains(&n),
            Self::List(values) => values.contains(&n),
        }
    }
}

impl std::fmt::Display for PlayerCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range { low, high } => write!(f, "{low}-{high}"),
            Self::List(values) => {
                let parts: Vec<String> = values.iter().map(u8::to_string).collect();
                write!(f, "{}", parts.join(" or "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: u8) -> PlayerCount {
        PlayerCount::new(n).unwrap()
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(PlayerCount::new(1).is_ok());
        assert!(PlayerCount::new(5).is_ok());
        assert!(matches!(
            PlayerCount::new(9),
            Err(SetupError::InvalidPlayerCount(9))
        ));
        assert_eq!(PlayerCount::all().count(), 5);
    }

    #[test]
    fn test_range_condition() {
        let cond = PlayerCondition::parse("2-3").unwrap();
        assert_eq!(cond, PlayerCondition::Range { low: 2, high: 3 });
        assert!(!cond.admits(players(1)));
        assert!(cond.admits(players(2)));
        assert!(cond.admits(players(3)));
        assert!(!cond.admits(players(4)));
    }

    #[test]
    fn test_list_condition() {
        let cond = PlayerCondition::parse("1 or 4").unwrap();
        assert!(cond.admits(players(1)));
        assert!(!cond.admits(players(2)));
        assert!(cond.admits(players(4)));
        assert_eq!(cond.to_string(), "1 or 4");

        let comma = PlayerCondition::parse("2, 3 or 5").unwrap();
        assert!(comma.admits(players(5)));
        assert!(!comma.admits(players(4)));
    }

    #[test]
    fn test_unparseable_condition() {
        assert!(PlayerCondition::parse("or").is_none());
        assert!(PlayerCondition::parse("").is_none());
    }
}
