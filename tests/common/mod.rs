//! Shared fixture catalog for integration tests.

#![allow(dead_code)]

use legendary_setup::cards::EntityCatalog;
use legendary_setup::core::{Diagnostics, GeneratorConfig, PlayerCount, SetupRng};
use legendary_setup::directives::{DirectiveExtractor, SchemeModifiers};

pub const CATALOG_JSON: &str = r#"{
  "heroes": [
    {"hero": "Captain America", "set": "Core Set", "cards": [
      {"team": "Avengers", "cost": 3, "classes": ["Covert"], "abilities": ["[Avengers]: You get +1 Recruit."]},
      {"team": "Avengers", "cost": 6, "classes": ["Strength"], "abilities": ["Rescue a Bystander."]}]},
    {"hero": "Iron Man", "set": "Core Set", "cards": [
      {"team": "Avengers", "cost": 5, "classes": ["Tech"], "abilities": ["Draw a card."]}]},
    {"hero": "Hulk", "set": "Core Set", "cards": [
      {"team": "Avengers", "cost": 4, "classes": ["Strength"], "abilities": ["KO a Wound from your hand."]}]},
    {"hero": "She-Hulk", "set": "Fear Itself", "cards": [
      {"team": "Avengers", "cost": 4, "classes": ["Strength"], "abilities": ["KO one of your cards."]}]},
    {"hero": "Thor", "set": "Core Set", "cards": [
      {"team": "Avengers", "cost": 7, "classes": ["Ranged"], "abilities": ["You get +3 Attack."]}]},
    {"hero": "Storm", "set": "Core Set", "cards": [
      {"team": "X-Men", "cost": 4, "classes": ["Ranged"], "abilities": ["[X-Men]: Draw a card."]}]},
    {"hero": "Wolverine", "set": "Core Set", "cards": [
      {"team": "X-Men", "cost": 3, "classes": ["Instinct"], "abilities": ["Heal a Wound."]}]},
    {"hero": "Cyclops", "set": "Core Set", "cards": [
      {"team": "X-Men", "cost": 2, "classes": ["Ranged"], "abilities": ["Discard a card."]}]},
    {"hero": "Rogue", "set": "Core Set", "cards": [
      {"team": "X-Men", "cost": 5, "classes": ["Covert"], "abilities": ["Copy a Hero."]}]},
    {"hero": "Gambit", "set": "Core Set", "cards": [
      {"team": "X-Men", "cost": 4, "classes": ["Instinct"], "abilities": ["Reveal the top card."]}]},
    {"hero": "Spider-Man", "set": "Core Set", "cards": [
      {"team": "Spider Friends", "cost": 2, "classes": ["Strength"], "abilities": ["Rescue a Bystander."]}]},
    {"hero": "Black Cat", "set": "Dark City", "cards": [
      {"team": "Spider Friends", "cost": 3, "classes": ["Covert"], "abilities": ["Gain a Bystander."]}]},
    {"hero": "Deadpool", "set": "Core Set", "cards": [
      {"cost": "2*", "classes": ["Instinct"], "abilities": ["Draw a card."]}]},
    {"hero": "Wasp", "set": "Civil War", "cards": [
      {"team": "Avengers", "cost": 3, "classes": ["Tech"], "abilities": ["Size-Changing [Tech]"]}]}
  ],
  "masterminds": [
    {"name": "Magneto", "set": "Core Set", "always_leads": "Brotherhood"},
    {"name": "Red Skull", "set": "Core Set", "always_leads": "Hydra"},
    {"name": "Loki", "set": "Core Set", "always_leads": "Enemies of Asgard"},
    {"name": "Dr. Doom", "set": "Core Set", "always_leads": "Doombot Legion"},
    {"name": "Mephisto", "set": "Dark City", "always_leads": "Underworld", "tags": {"mechanics": ["Mechanic_Wound"]}},
    {"name": "Kingpin", "set": "Dark City", "always_leads": "Unknown"}
  ],
  "villains": [
    {"name": "Brotherhood", "set": "Core Set"},
    {"name": "Hydra", "set": "Core Set"},
    {"name": "Enemies of Asgard", "set": "Core Set"},
    {"name": "Masters of Evil", "set": "Core Set"},
    {"name": "Skrulls", "set": "Core Set"},
    {"name": "Underworld", "set": "Dark City"},
    {"name": "Intergalactic Party Animals", "set": "Guardians of the Galaxy"}
  ],
  "henchmen": [
    {"name": "Doombot Legion", "set": "Core Set"},
    {"name": "Hand Ninjas", "set": "Core Set"},
    {"name": "Sentinel", "set": "Core Set"},
    {"name": "Savage Land Mutates", "set": "Core Set"},
    {"name": "Maggia Goons", "set": "Dark City"}
  ],
  "schemes": [
    {"name": "Midtown Bank Robbery", "set": "Core Set",
     "description": ["Setup: 8 Twists. 12 total Bystanders in the Villain Deck."]},
    {"name": "Negative Zone Prison Breakout", "set": "Core Set",
     "description": ["Setup: 8 Twists. Add an extra Henchman Group to the Villain Deck."]},
    {"name": "Secret Invasion of the Skrull Shapeshifters", "set": "Core Set",
     "description": ["Setup: 8 Twists. 6 Heroes. Skrull Villain Group required. Shuffle 12 random Heroes from the Hero Deck into the Villain Deck."]},
    {"name": "Shattered Dimensions", "set": "Core Set",
     "description": ["Setup: Add an extra Villain Group. Add 2 Twists to each Reality."]},
    {"name": "Dark Reign", "set": "Dark City",
     "description": ["Setup: 11 Twists, minus 1 Twist per player."]},
    {"name": "Avengers Assemble", "set": "Dark City",
     "description": ["Setup: 8 Twists. Use at least 2 Avengers Heroes."]}
  ]
}"#;

pub fn catalog() -> EntityCatalog {
    EntityCatalog::from_json_str::<&str>(CATALOG_JSON, None).expect("fixture catalog parses")
}

pub fn extract(text: &str, players: u8) -> SchemeModifiers {
    let catalog = catalog();
    let config = GeneratorConfig::default();
    let mut rng = SetupRng::new(0);
    let mut diagnostics = Diagnostics::new();
    DirectiveExtractor::new(&catalog, &config).extract(
        text,
        PlayerCount::new(players).expect("valid player count"),
        &mut rng,
        &mut diagnostics,
    )
}
