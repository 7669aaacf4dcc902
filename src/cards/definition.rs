//! Entity definitions - static catalog data.
//!
//! Records arrive from the catalog-loading collaborator as JSON objects.
//! Every entity carries a `name` and a `/`-joined `set` string; heroes and
//! groups carry their cards, masterminds their "always leads" reference and
//! schemes their free-text description.
//!
//! Identity is name + set: the same hero name may appear in several sets.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::SetupError;

use super::attributes::TagMap;

/// Entity categories in a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hero,
    Mastermind,
    Villain,
    Henchman,
    Scheme,
}

impl Category {
    /// Singular noun for messages.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Mastermind => "mastermind",
            Self::Villain => "villain group",
            Self::Henchman => "henchman group",
            Self::Scheme => "scheme",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = SetupError;

    /// Accepts the catalog keys (`heroes`, `villains`, ...) and singular nouns.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hero" | "heroes" => Ok(Self::Hero),
            "mastermind" | "masterminds" => Ok(Self::Mastermind),
            "villain" | "villains" | "villain group" | "villain groups" => Ok(Self::Villain),
            "henchman" | "henchmen" | "henchman group" | "henchman groups" => Ok(Self::Henchman),
            "scheme" | "schemes" => Ok(Self::Scheme),
            _ => Err(SetupError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = match self {
            Self::Hero => "heroes",
            Self::Mastermind => "masterminds",
            Self::Villain => "villain groups",
            Self::Henchman => "henchman groups",
            Self::Scheme => "schemes",
        };
        f.write_str(plural)
    }
}

/// Common view over every catalog entity.
pub trait Entity {
    /// Card name as printed.
    fn name(&self) -> &str;

    /// Raw `/`-joined set string.
    fn set(&self) -> &str;

    /// Tag map (category -> tags).
    fn tags(&self) -> &TagMap;

    /// `Name (Set)` display string.
    fn display_name(&self) -> String {
        format!("{} ({})", self.name(), self.set())
    }

    /// Individual set names.
    fn sets(&self) -> Vec<&str> {
        self.set().split('/').map(str::trim).filter(|s| !s.is_empty()).collect()
    }

    /// Identity check (name + set).
    fn same_entity(&self, other: &dyn Entity) -> bool {
        self.name() == other.name() && self.set() == other.set()
    }
}

/// A single printed card inside a hero or group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Ability texts.
    #[serde(default)]
    pub abilities: Vec<String>,

    /// Recruit/fight cost, parsed from a number or the digits of `"3*"`/`"2+"`.
    #[serde(default, deserialize_with = "deserialize_cost")]
    pub cost: Option<u32>,

    /// Hero classes (colors).
    #[serde(default)]
    pub classes: Vec<String>,

    /// Team affiliation.
    #[serde(default)]
    pub team: Option<String>,

    /// Card-level tags.
    #[serde(default)]
    pub tags: TagMap,
}

impl Card {
    /// Whether any ability contains `needle` (case-insensitive).
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.abilities
            .iter()
            .any(|a| a.to_lowercase().contains(&needle))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCost {
    Number(f64),
    Text(String),
}

fn deserialize_cost<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawCost>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawCost::Number(n)) if n >= 0.0 => Some(n as u32),
        Some(RawCost::Number(_)) => None,
        Some(RawCost::Text(s)) => {
            let digits: String = s
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        }
    })
}

/// A hero: a named bundle of player cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(alias = "hero")]
    pub name: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub tags: TagMap,
}

impl Hero {
    /// Team name used when a hero has no team.
    pub const UNKNOWN_TEAM: &'static str = "Unknown";

    /// Create a hero with no cards.
    #[must_use]
    pub fn new(name: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            set: set.into(),
            cards: Vec::new(),
            tags: TagMap::new(),
        }
    }

    /// Add a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Team from the first card, `"Unknown"` when missing or blank.
    #[must_use]
    pub fn team(&self) -> &str {
        self.cards
            .first()
            .and_then(|c| c.team.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(Self::UNKNOWN_TEAM)
    }

    /// Whether the hero has a real team.
    #[must_use]
    pub fn has_team(&self) -> bool {
        self.team() != Self::UNKNOWN_TEAM
    }

    /// All ability text, lowercased and space-joined.
    #[must_use]
    pub fn ability_text(&self) -> String {
        let mut text = String::new();
        for card in &self.cards {
            for ability in &card.abilities {
                text.push_str(&ability.to_lowercase());
                text.push(' ');
            }
        }
        text
    }

    /// Whether any card ability contains `needle` (case-insensitive).
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.cards.iter().any(|c| c.mentions(needle))
    }

    /// Costs of every card that has a nonzero one.
    ///
    /// Zero-cost cards (starting or token cards) do not shape the curve.
    pub fn costs(&self) -> impl Iterator<Item = u32> + '_ {
        self.cards.iter().filter_map(|c| c.cost).filter(|&cost| cost > 0)
    }

    /// Average card cost, `None` without costed cards.
    #[must_use]
    pub fn average_cost(&self) -> Option<f64> {
        let (sum, n) = self
            .costs()
            .fold((0u64, 0u64), |(s, n), c| (s + u64::from(c), n + 1));
        (n > 0).then(|| sum as f64 / n as f64)
    }

    /// Distinct class tags across the cards.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = Vec::new();
        for class in self.cards.iter().flat_map(|c| c.classes.iter()) {
            if !classes.contains(&class.as_str()) {
                classes.push(class);
            }
        }
        classes
    }
}

impl Entity for Hero {
    fn name(&self) -> &str {
        &self.name
    }
    fn set(&self) -> &str {
        &self.set
    }
    fn tags(&self) -> &TagMap {
        &self.tags
    }
}

/// A villain or henchman group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardGroup {
    #[serde(alias = "group_name")]
    pub name: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub tags: TagMap,
}

impl CardGroup {
    /// Create a group with no cards.
    #[must_use]
    pub fn new(name: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            set: set.into(),
            cards: Vec::new(),
            tags: TagMap::new(),
        }
    }

    /// Add a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Whether any card ability contains `needle` (case-insensitive).
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.cards.iter().any(|c| c.mentions(needle))
    }
}

impl Entity for CardGroup {
    fn name(&self) -> &str {
        &self.name
    }
    fn set(&self) -> &str {
        &self.set
    }
    fn tags(&self) -> &TagMap {
        &self.tags
    }
}

/// The primary antagonist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mastermind {
    pub name: String,
    #[serde(default)]
    pub set: String,
    /// Group this mastermind always leads, as printed.
    #[serde(default)]
    pub always_leads: Option<String>,
    #[serde(default)]
    pub tags: TagMap,
}

impl Mastermind {
    /// Create a mastermind without an always-leads group.
    #[must_use]
    pub fn new(name: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            set: set.into(),
            always_leads: None,
            tags: TagMap::new(),
        }
    }

    /// Set the always-leads group (builder pattern).
    #[must_use]
    pub fn leading(mut self, group: impl Into<String>) -> Self {
        self.always_leads = Some(group.into());
        self
    }

    /// Always-leads group, ignoring blanks and `"Unknown"`.
    #[must_use]
    pub fn leads(&self) -> Option<&str> {
        self.always_leads
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty() && !g.eq_ignore_ascii_case("unknown"))
    }
}

impl Entity for Mastermind {
    fn name(&self) -> &str {
        &self.name
    }
    fn set(&self) -> &str {
        &self.set
    }
    fn tags(&self) -> &TagMap {
        &self.tags
    }
}

/// The scheme card: win condition plus free-text setup rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub tags: TagMap,
}

impl Scheme {
    /// Create a scheme from description lines.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, set: impl Into<String>, description: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            set: set.into(),
            description: description.into_iter().map(Into::into).collect(),
            tags: TagMap::new(),
        }
    }

    /// Description lines joined into one text blob.
    #[must_use]
    pub fn text(&self) -> String {
        self.description.join(" ")
    }
}

impl Entity for Scheme {
    fn name(&self) -> &str {
        &self.name
    }
    fn set(&self) -> &str {
        &self.set
    }
    fn tags(&self) -> &TagMap {
        &self.tags
    }
}
