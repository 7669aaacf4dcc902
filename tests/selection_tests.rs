//! Constrained selection invariants.

mod common;

use std::sync::Mutex;

use legendary_setup::cards::{Category, Hero};
use legendary_setup::core::{Advisory, Diagnostics, GeneratorConfig, NameList, PlayerCount, SetupRng, SetupRules};
use legendary_setup::directives::{Directive, ModifiersBuilder};
use legendary_setup::resolve::{word_subset_match, NameResolver};
use legendary_setup::selection::{
    select_groups, BalancedScorer, GroupRequest, HeroRequest, HeroScorer, HeroSelector, ScoreContext,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_fuzzy_resolution() {
    assert!(word_subset_match("Intergalactic Part", "Intergalactic Party Animals", 0.75));
    assert!(!word_subset_match("Xyz", "Intergalactic Party Animals", 0.75));

    let catalog = common::catalog();
    let resolver = NameResolver::new(&catalog, 0.75);
    assert_eq!(
        resolver.villain("Intergalactic Part").map(|g| g.name.as_str()),
        Some("Intergalactic Party Animals")
    );
    assert!(resolver.villain("Xyz").is_none());
}

fn villains(seed: u64, required: &NameList) -> (Vec<String>, Diagnostics) {
    let catalog = common::catalog();
    let request = GroupRequest {
        category: Category::Villain,
        required,
        always_leads: None,
        picks: &[],
        banned: &NameList::new(),
        quota: 3,
    };
    let mut rng = SetupRng::new(seed);
    let mut diagnostics = Diagnostics::new();
    let picked = select_groups(NameResolver::new(&catalog, 0.75), &request, &mut rng, &mut diagnostics);
    (picked.iter().map(|g| g.name.clone()).collect(), diagnostics)
}

#[test]
fn test_villain_selection_is_deterministic() {
    let required: NameList = ["Hydra"].into_iter().collect();
    for seed in [0, 7, 99] {
        assert_eq!(villains(seed, &required).0, villains(seed, &required).0);
    }
}

#[test]
fn test_more_requirements_than_supply() {
    let catalog = common::catalog();
    let required: NameList = ["Hydra", "Skrulls", "Brotherhood", "Masters of Evil", "Underworld"]
        .into_iter()
        .collect();
    let banned: NameList = ["Party", "Asgard"].into_iter().collect();
    let request = GroupRequest {
        category: Category::Villain,
        required: &required,
        always_leads: None,
        picks: &[],
        banned: &banned,
        quota: 5,
    };
    let filtered = legendary_setup::cards::EntityCatalog::new(legendary_setup::cards::CatalogRecords {
        villains: catalog
            .villains()
            .iter()
            .filter(|g| ["Hydra", "Skrulls", "Brotherhood"].contains(&g.name.as_str()))
            .cloned()
            .collect(),
        ..Default::default()
    });

    let mut rng = SetupRng::new(3);
    let mut diagnostics = Diagnostics::new();
    let picked = select_groups(NameResolver::new(&filtered, 0.75), &request, &mut rng, &mut diagnostics);

    let names: Vec<&str> = picked.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Hydra", "Skrulls", "Brotherhood"]);
    assert!(diagnostics
        .advisories()
        .iter()
        .any(|a| matches!(a, Advisory::UnderSupply { needed: 5, available: 3, .. })));
}

/// Records every (roster, candidate) pair the open stage scores.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(Vec<String>, String)>>,
    inner: BalancedScorer,
}

impl HeroScorer for Recorder {
    fn score(&self, context: &ScoreContext<'_>, roster: &[&Hero], candidate: &Hero) -> f64 {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((roster.iter().map(|h| h.name.clone()).collect(), candidate.name.clone()));
        }
        self.inner.score(context, roster, candidate)
    }
}

proptest! {
    #[test]
    fn prop_open_stage_never_repeats_or_uses_banned(seed in any::<u64>(), players in 1u8..=5) {
        let catalog = common::catalog();
        let config = GeneratorConfig::default();
        let base = SetupRules::default().base(PlayerCount::new(players).unwrap());

        let mut builder = ModifiersBuilder::new(base);
        builder.apply(Directive::BanHero("Hulk".into()));
        builder.apply(Directive::BanTeamFromOpenSelection("spider friends".into()));
        let mods = builder.build();

        let recorder = Recorder::default();
        let selector = HeroSelector::new(NameResolver::new(&catalog, 0.75), &recorder, &config);
        let picks = vec!["Storm".to_string()];
        let mut rng = SetupRng::new(seed);
        let mut diagnostics = Diagnostics::new();
        let selection = selector.select(
            &HeroRequest { modifiers: &mods, picks: &picks, synergy_tags: &[] },
            &mut rng,
            &mut diagnostics,
        );

        let seen = recorder.seen.into_inner().unwrap();
        prop_assert!(!seen.is_empty());
        for (roster, candidate) in &seen {
            prop_assert!(!roster.contains(candidate), "{candidate} already on roster");
            prop_assert!(candidate != "Hulk", "banned hero proposed");
            prop_assert!(candidate != "Spider-Man" && candidate != "Black Cat");
        }

        let names: Vec<String> = selection
            .roster
            .iter()
            .filter_map(|entry| entry.hero())
            .map(|hero| hero.name.clone())
            .collect();
        prop_assert_eq!(names.len(), base.heroes as usize);
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), names.len());
    }
}
