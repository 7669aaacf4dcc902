//! Scheme text extraction through the public API.

mod common;

use legendary_setup::core::{PlayerCount, SetupRules};
use legendary_setup::directives::{DEFAULT_MASTER_STRIKES, DEFAULT_TWISTS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    /// Text that matches nothing leaves the per-player-count baseline.
    #[test]
    fn prop_unmatched_text_is_baseline(players in 1u8..=5, text in "[a-z]{0,10}( [a-z]{0,10}){0,4}") {
        let mods = common::extract(&text, players);
        let base = SetupRules::default().base(PlayerCount::new(players).unwrap());

        prop_assert_eq!(mods.twists.count, DEFAULT_TWISTS);
        prop_assert_eq!(mods.master_strikes, DEFAULT_MASTER_STRIKES);
        prop_assert_eq!(mods.villain_quota(), base.villains as usize);
        prop_assert_eq!(mods.henchman_quota(), base.henchmen as usize);
        prop_assert_eq!(mods.hero_deck_size, base.heroes);
        prop_assert_eq!(mods.bystander_total(), base.bystanders);
        prop_assert!(mods.required_villains.is_empty());
        prop_assert!(mods.custom_deck.is_none());
    }
}

#[test]
fn test_twists_per_reality() {
    let mods = common::extract("Setup: Add two extra Villain Groups. Add 2 Twists to each Reality.", 3);
    assert_eq!(mods.villain_quota(), 5);
    assert_eq!(mods.twists.count, 10);
    assert_eq!(mods.twists.note.as_deref(), Some("2 per Reality x 5 Realities"));
}

#[test]
fn test_twists_minus_per_player() {
    let mods = common::extract("Setup: 11 Twists, minus 1 Twist per player.", 4);
    assert_eq!(mods.twists.count, 7);
}

#[test]
fn test_twists_never_negative() {
    let mods = common::extract("Setup: 3 Twists, minus 1 Twist per player.", 5);
    assert_eq!(mods.twists.count, 0);
}

#[test]
fn test_qualified_villain_group_total() {
    let text = "Setup: 8 Twists. 2-3 players: Use 3 Villain Groups.";
    assert_eq!(common::extract(text, 2).extra_villains, 1);
    assert_eq!(common::extract(text, 3).extra_villains, 0);
    assert_eq!(common::extract(text, 2).villain_quota(), 3);
}

#[test]
fn test_required_group_uses_catalog_name() {
    let mods = common::extract("Setup: 8 Twists. Skrull Villain Group required.", 2);
    assert_eq!(mods.required_villains.to_vec(), vec!["Skrulls".to_string()]);
}

#[test]
fn test_hero_deck_moves() {
    let mods = common::extract(
        "Setup: 8 Twists. 6 Heroes. Shuffle 12 random Heroes from the Hero Deck into the Villain Deck.",
        2,
    );
    assert_eq!(mods.hero_deck_size, 6);
    assert_eq!(mods.heroes_from_hero_deck, 12);
}

#[test]
fn test_double_groups_quota() {
    let mods = common::extract(
        "Setup: 8 Twists. Use double the normal number of Villain and Henchman Groups.",
        5,
    );
    assert_eq!(mods.villain_quota(), 8);
    assert_eq!(mods.henchman_quota(), 4);
    assert!(mods.half_deck);
}
