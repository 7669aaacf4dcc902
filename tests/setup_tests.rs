//! End-to-end setup generation.

mod common;

use legendary_setup::cards::{Category, EntityCatalog};
use legendary_setup::core::{GeneratorConfig, SetupError};
use legendary_setup::setup::{GeneratedSetup, SetupGenerator, SetupPlanner, UserSelections};
use pretty_assertions::assert_eq;

fn generate(seed: u64, players: u8, selections: &UserSelections) -> GeneratedSetup {
    let catalog = common::catalog();
    SetupGenerator::new(&catalog, GeneratorConfig::default().with_seed(seed))
        .generate(players, selections)
        .expect("fixture catalog has every category")
}

fn scheme(name: &str) -> UserSelections {
    UserSelections {
        scheme: Some(name.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_every_player_count_generates() {
    for players in 1..=5 {
        for seed in 0..10 {
            let setup = generate(seed, players, &UserSelections::default()).result;
            assert_eq!(setup.players, players);
            assert!(!setup.scheme.is_empty());
            assert!(!setup.villains.is_empty());
            assert!(!setup.henchmen.is_empty());
            assert!(!setup.heroes.is_empty());
        }
    }
}

#[test]
fn test_same_seed_same_setup() {
    let selections = UserSelections::default();
    assert_eq!(generate(11, 3, &selections), generate(11, 3, &selections));
}

#[test]
fn test_scheme_rules_reach_the_result() {
    let setup = generate(1, 4, &scheme("Dark Reign")).result;
    assert_eq!(setup.scheme, "Dark Reign (Dark City)");
    assert_eq!(setup.villain_deck.scheme_twists.count, 7);

    let setup = generate(1, 3, &scheme("Shattered Dimensions")).result;
    assert_eq!(setup.villains.len(), 4);
    assert_eq!(setup.villain_deck.scheme_twists.count, 8);

    let setup = generate(1, 2, &scheme("Midtown Bank Robbery")).result;
    assert_eq!(setup.villain_deck.bystanders, 12);
}

#[test]
fn test_required_group_and_moved_heroes() {
    let setup = generate(5, 2, &scheme("Secret Invasion of the Skrull Shapeshifters")).result;
    assert_eq!(setup.villains[0], "Skrulls (Core Set)");
    assert_eq!(setup.heroes.len(), 6);
    assert_eq!(setup.villain_deck.heroes_from_hero_deck, 12);
}

#[test]
fn test_team_requirement() {
    let catalog = common::catalog();
    let setup = generate(8, 2, &scheme("Avengers Assemble")).result;
    let avengers = setup
        .heroes
        .iter()
        .filter(|line| line.contains("(Avengers - "))
        .count();
    assert!(avengers >= 2, "{:?}", setup.heroes);
    assert_eq!(catalog.count(Category::Hero), 14);
}

#[test]
fn test_manual_overrides() {
    let selections = UserSelections {
        scheme: Some("Midtown Bank Robbery".into()),
        mastermind: Some("Kingpin".into()),
        villains: vec!["Masters of Evil".into()],
        henchmen: vec!["Maggia Goons".into()],
        heroes: vec!["Storm".into(), "Random".into(), "Nobody".into()],
    };
    let generated = generate(2, 2, &selections);
    let setup = &generated.result;
    assert_eq!(setup.mastermind, "Kingpin (Dark City)");
    assert_eq!(setup.villains[0], "Masters of Evil (Core Set)");
    assert_eq!(setup.henchmen, vec!["Maggia Goons (Dark City)"]);
    assert!(setup.heroes[0].starts_with("Storm (X-Men"));
    assert!(!generated.advisories.is_empty());
}

#[test]
fn test_result_serializes() {
    let generated = generate(4, 3, &UserSelections::default());
    let json = serde_json::to_string(&generated).unwrap();
    let back: GeneratedSetup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, generated);
}

#[test]
fn test_set_filtering_can_empty_a_category() {
    let catalog = EntityCatalog::from_json_str(common::CATALOG_JSON, Some(&["Guardians of the Galaxy"][..])).unwrap();
    let err = SetupGenerator::new(&catalog, GeneratorConfig::default())
        .generate(2, &UserSelections::default())
        .unwrap_err();
    assert!(matches!(err, SetupError::DataUnavailable { category: Category::Scheme }));
}

#[test]
fn test_plan_matches_generation() {
    let catalog = common::catalog();
    let config = GeneratorConfig::default();
    let plan = SetupPlanner::plan(&catalog, &config, 2, Some("Negative Zone Prison Breakout"), Some("Dr. Doom")).unwrap();
    assert_eq!(plan.henchman_slots, 2);
    assert_eq!(plan.locked_henchmen, vec!["Doombot Legion"]);

    let selections = UserSelections {
        scheme: Some("Negative Zone Prison Breakout".into()),
        mastermind: Some("Dr. Doom".into()),
        ..Default::default()
    };
    let setup = generate(9, 2, &selections).result;
    assert_eq!(setup.henchmen.len(), plan.henchman_slots);
    assert!(setup.henchmen.contains(&"Doombot Legion (Core Set)".to_string()));
}
