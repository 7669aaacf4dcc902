//! The assembled, serializable setup.
//!
//! Everything here is display-ready text; catalog references do not
//! outlive the generation that produced them.

use serde::{Deserialize, Serialize};

use crate::cards::{CardGroup, Entity};
use crate::core::{Advisory, PlayerCount};
use crate::directives::{CustomDeck, TwistCount};

/// Villain-deck counts that are not group names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillainDeckSetup {
    pub scheme_twists: TwistCount,
    pub master_strikes: u32,
    pub bystanders: u32,
    /// Heroes moved from the hero deck into the villain deck.
    pub heroes_from_hero_deck: u32,
    /// Cards per villain-deck hero, when the scheme limits them.
    pub villain_deck_hero_cards: Option<u32>,
    pub sidekicks: u32,
    pub ambitions: u32,
    pub officers: u32,
    pub tactics: u32,
    pub ambush_scheme: bool,
}

/// One generated setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupResult {
    pub players: u8,
    /// Seed that replays this setup.
    pub seed: u64,
    pub mastermind: String,
    pub lurking_masterminds: Vec<String>,
    pub tyrant_masterminds: Vec<String>,
    pub drained_mastermind: Option<String>,
    pub scheme: String,
    pub scheme_description: Vec<String>,
    pub villains: Vec<String>,
    pub henchmen: Vec<String>,
    /// Hero deck, including placeholders and hero-deck extras.
    pub heroes: Vec<String>,
    pub villain_deck_heroes: Vec<String>,
    pub wedding_heroes: Vec<String>,
    pub custom_deck: Option<CustomDeck>,
    pub villain_deck: VillainDeckSetup,
}

/// A setup plus the advisories raised while building it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSetup {
    pub result: SetupResult,
    pub advisories: Vec<Advisory>,
}

// =============================================================================
// Display rules
// =============================================================================

/// Suffixes applied under the half-deck rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct HalfDeck {
    villains: &'static str,
    henchmen: &'static str,
}

impl HalfDeck {
    pub(crate) fn new(active: bool, players: PlayerCount) -> Self {
        if !active {
            return Self::default();
        }
        Self {
            villains: " (Use 4 random cards)",
            henchmen: if players.get() == 1 {
                " (Use 2 random cards)"
            } else {
                " (Use 5 random cards)"
            },
        }
    }
}

pub(crate) fn villain_lines(groups: &[&CardGroup], half: HalfDeck) -> Vec<String> {
    groups
        .iter()
        .map(|group| format!("{}{}", group.display_name(), half.villains))
        .collect()
}

/// The alias, if any, goes on the last group.
pub(crate) fn henchman_lines(groups: &[&CardGroup], alias: Option<&str>, half: HalfDeck) -> Vec<String> {
    let last = groups.len().saturating_sub(1);
    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let alias = match alias {
                Some(alias) if i == last => format!(" (as {alias})"),
                _ => String::new(),
            };
            format!("{}{alias}{}", group.display_name(), half.henchmen)
        })
        .collect()
}

/// `N Name (Henchmen - Set)` for henchmen shuffled into the hero deck.
pub(crate) fn hero_deck_henchmen_line(count: u32, group: &CardGroup) -> String {
    format!("{count} {} (Henchmen - {})", group.name, group.set)
}
