//! The setup assembler.
//!
//! One call runs the whole pipeline: scheme, directives, masterminds,
//! groups, heroes, formatting. All mutable state (RNG, diagnostics, late
//! requirements, used masterminds) lives on the stack of that call, so
//! generations never share draws or bans.

use serde::{Deserialize, Serialize};

use crate::cards::{flatten_tags, CardGroup, Category, Entity, EntityCatalog, Mastermind, RANDOM_OPTION};
use crate::core::{Advisory, Diagnostics, GeneratorConfig, PlayerCount, SetupError, SetupRng};
use crate::directives::{mastermind_twist_override, DirectiveExtractor, SchemeText};
use crate::resolve::{by_display_name, NameResolver};
use crate::selection::{select_groups, BalancedScorer, GroupRequest, HeroRequest, HeroScorer, HeroSelector};

use super::result::{
    hero_deck_henchmen_line, henchman_lines, villain_lines, GeneratedSetup, HalfDeck, SetupResult,
    VillainDeckSetup,
};

/// Categories a setup cannot do without.
const REQUIRED_CATEGORIES: [Category; 5] = [
    Category::Scheme,
    Category::Mastermind,
    Category::Villain,
    Category::Henchman,
    Category::Hero,
];

/// Manual overrides from the consuming interface.
///
/// Every entry is a display string (`Name` or `Name (Set)`); `"Random"` or
/// an empty list leaves the choice to the generator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSelections {
    pub scheme: Option<String>,
    pub mastermind: Option<String>,
    pub villains: Vec<String>,
    pub henchmen: Vec<String>,
    pub heroes: Vec<String>,
}

/// Bind a manual choice, falling back to a random entry.
pub(crate) fn manual_or_random<'a, T: Entity>(
    choice: Option<&str>,
    items: &'a [T],
    category: Category,
    rng: &mut SetupRng,
    diagnostics: &mut Diagnostics,
) -> Result<&'a T, SetupError> {
    if let Some(choice) = choice.map(str::trim).filter(|c| !c.is_empty() && *c != RANDOM_OPTION) {
        if let Some(found) = by_display_name(choice, items) {
            return Ok(found);
        }
        diagnostics.push(Advisory::AmbiguousSelection {
            category,
            name: choice.to_string(),
        });
    }
    rng.choose(items).ok_or(SetupError::DataUnavailable { category })
}

/// Draw `count` masterminds nobody has used yet.
fn draw_masterminds<'a>(
    pool: &'a [Mastermind],
    used: &mut Vec<&'a Mastermind>,
    count: usize,
    demand: &str,
    rng: &mut SetupRng,
    diagnostics: &mut Diagnostics,
) -> Vec<&'a Mastermind> {
    if count == 0 {
        return Vec::new();
    }
    let available: Vec<&'a Mastermind> = pool
        .iter()
        .filter(|m| !used.iter().any(|u| u.name == m.name))
        .collect();
    diagnostics.check_supply(demand, count, available.len());
    let drawn = rng.sample(&available, count);
    used.extend(drawn.iter().copied());
    drawn
}

/// A henchman group not already in the villain deck.
fn hero_deck_henchmen<'a>(
    catalog: &'a EntityCatalog,
    used: &[&CardGroup],
    rng: &mut SetupRng,
    diagnostics: &mut Diagnostics,
) -> Option<&'a CardGroup> {
    let candidates: Vec<&'a CardGroup> = catalog
        .henchmen()
        .iter()
        .filter(|group| !used.iter().any(|u| u.name == group.name))
        .collect();
    diagnostics.check_supply("henchman group for the hero deck", 1, candidates.len());
    rng.choose(&candidates).copied()
}

fn display_all<T: Entity>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| item.display_name()).collect()
}

/// Generates setups from one catalog.
///
/// ## Example
///
/// ```
/// use legendary_setup::cards::{CardGroup, CatalogRecords, EntityCatalog, Hero, Mastermind, Scheme};
/// use legendary_setup::core::GeneratorConfig;
/// use legendary_setup::setup::{SetupGenerator, UserSelections};
///
/// let catalog = EntityCatalog::new(CatalogRecords {
///     heroes: ["Storm", "Rogue", "Cyclops", "Hulk", "Thor", "Wasp"]
///         .into_iter()
///         .map(|name| Hero::new(name, "Core Set"))
///         .collect(),
///     masterminds: vec![Mastermind::new("Magneto", "Core Set")],
///     villains: vec![CardGroup::new("Skrulls", "Core Set"), CardGroup::new("Hydra", "Core Set")],
///     henchmen: vec![CardGroup::new("Sentinel", "Core Set")],
///     schemes: vec![Scheme::new("Midtown Bank Robbery", "Core Set", ["Setup: 8 Twists. 12 total Bystanders."])],
///     ..Default::default()
/// });
///
/// let generator = SetupGenerator::new(&catalog, GeneratorConfig::default().with_seed(3));
/// let setup = generator.generate(2, &UserSelections::default()).unwrap();
/// assert_eq!(setup.result.villains.len(), 2);
/// assert_eq!(setup.result.villain_deck.bystanders, 12);
/// ```
pub struct SetupGenerator<'a> {
    catalog: &'a EntityCatalog,
    config: GeneratorConfig,
    scorer: Box<dyn HeroScorer>,
}

impl<'a> SetupGenerator<'a> {
    /// Create a generator with the default [`BalancedScorer`].
    #[must_use]
    pub fn new(catalog: &'a EntityCatalog, config: GeneratorConfig) -> Self {
        Self {
            catalog,
            config,
            scorer: Box::new(BalancedScorer::default()),
        }
    }

    /// Replace the open-stage hero scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl HeroScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &'a EntityCatalog {
        self.catalog
    }

    /// Generate with the configured seed, or a fresh one.
    pub fn generate(&self, players: u8, selections: &UserSelections) -> Result<GeneratedSetup, SetupError> {
        let mut rng = match self.config.seed {
            Some(seed) => SetupRng::new(seed),
            None => SetupRng::from_entropy(),
        };
        self.generate_with_rng(players, selections, &mut rng)
    }

    /// Generate drawing from a caller-supplied RNG.
    pub fn generate_with_rng(
        &self,
        players: u8,
        selections: &UserSelections,
        rng: &mut SetupRng,
    ) -> Result<GeneratedSetup, SetupError> {
        let players = PlayerCount::new(players)?;
        for category in REQUIRED_CATEGORIES {
            self.catalog.require(category)?;
        }
        tracing::info!(players = players.get(), seed = rng.seed(), "generating setup");

        let catalog = self.catalog;
        let resolver = NameResolver::new(catalog, self.config.fuzzy_threshold);
        let mut diagnostics = Diagnostics::new();

        // Scheme and directives
        let scheme = manual_or_random(selections.scheme.as_deref(), catalog.schemes(), Category::Scheme, rng, &mut diagnostics)?;
        let text = SchemeText::new(&scheme.text(), players);
        let mods = DirectiveExtractor::new(catalog, &self.config).extract_segmented(&text, players, rng, &mut diagnostics);
        tracing::debug!(scheme = %scheme.name, "scheme directives extracted");

        // Masterminds
        let mastermind = manual_or_random(
            selections.mastermind.as_deref(),
            catalog.masterminds(),
            Category::Mastermind,
            rng,
            &mut diagnostics,
        )?;
        let mut used = vec![mastermind];
        let demands = mods.masterminds;
        let lurking = draw_masterminds(catalog.masterminds(), &mut used, demands.lurking as usize, "lurking masterminds", rng, &mut diagnostics);
        let tyrants = draw_masterminds(catalog.masterminds(), &mut used, demands.tyrants as usize, "tyrant masterminds", rng, &mut diagnostics);
        let drained = draw_masterminds(catalog.masterminds(), &mut used, usize::from(demands.drained), "drained mastermind", rng, &mut diagnostics)
            .into_iter()
            .next();

        let mut required_villains = mods.required_villains.clone();
        let mut required_henchmen = mods.required_henchmen.clone();
        if let Some(leads) = drained.and_then(Mastermind::leads) {
            if let Some(group) = resolver.villain(leads) {
                required_villains.insert(group.name.clone());
            } else if let Some(group) = resolver.henchman(leads) {
                required_henchmen.insert(group.name.clone());
            }
        }

        let twists = match mastermind_twist_override(&text, &mastermind.name) {
            Some(twists) => {
                tracing::debug!(mastermind = %mastermind.name, %twists, "mastermind twist override");
                twists
            }
            None => mods.twists.clone(),
        };

        // Groups
        let leads = mastermind.leads();
        let (villain_leads, henchman_leads) = match leads {
            Some(group) if resolver.villain(group).is_some() => (Some(group), None),
            Some(group) if resolver.henchman(group).is_some() => (None, Some(group)),
            _ => (None, None),
        };
        let villains = select_groups(
            resolver,
            &GroupRequest {
                category: Category::Villain,
                required: &required_villains,
                always_leads: villain_leads,
                picks: &selections.villains,
                banned: &mods.banned_villains,
                quota: mods.villain_quota(),
            },
            rng,
            &mut diagnostics,
        );
        let henchmen = select_groups(
            resolver,
            &GroupRequest {
                category: Category::Henchman,
                required: &required_henchmen,
                always_leads: henchman_leads,
                picks: &selections.henchmen,
                banned: &mods.banned_henchmen,
                quota: mods.henchman_quota(),
            },
            rng,
            &mut diagnostics,
        );

        // Heroes
        let synergy_tags: Vec<String> = flatten_tags(&scheme.tags)
            .chain(flatten_tags(&mastermind.tags))
            .chain(villains.iter().flat_map(|group| flatten_tags(&group.tags)))
            .map(str::to_string)
            .collect();
        let selector = HeroSelector::new(resolver, self.scorer.as_ref(), &self.config);
        let heroes = selector.select(
            &HeroRequest {
                modifiers: &mods,
                picks: &selections.heroes,
                synergy_tags: &synergy_tags,
            },
            rng,
            &mut diagnostics,
        );

        let mut hero_lines: Vec<String> = heroes.roster.iter().map(ToString::to_string).collect();
        if mods.bystanders_in_hero_deck > 0 {
            hero_lines.push(format!("{} Bystanders", mods.bystanders_in_hero_deck));
        }
        if mods.henchmen_in_hero_deck > 0 {
            if let Some(group) = hero_deck_henchmen(catalog, &henchmen, rng, &mut diagnostics) {
                hero_lines.push(hero_deck_henchmen_line(mods.henchmen_in_hero_deck, group));
            }
        }

        let half = HalfDeck::new(mods.half_deck, players);
        let result = SetupResult {
            players: players.get(),
            seed: rng.seed(),
            mastermind: mastermind.display_name(),
            lurking_masterminds: display_all(&lurking),
            tyrant_masterminds: display_all(&tyrants),
            drained_mastermind: drained.map(Entity::display_name),
            scheme: scheme.display_name(),
            scheme_description: scheme.description.clone(),
            villains: villain_lines(&villains, half),
            henchmen: henchman_lines(&henchmen, mods.henchman_alias.as_deref(), half),
            heroes: hero_lines,
            villain_deck_heroes: display_all(&heroes.villain_deck),
            wedding_heroes: mods.wedding_heroes.iter().map(Entity::display_name).collect(),
            custom_deck: mods.custom_deck.clone(),
            villain_deck: VillainDeckSetup {
                scheme_twists: twists,
                master_strikes: mods.master_strikes,
                bystanders: mods.bystander_total(),
                heroes_from_hero_deck: mods.heroes_from_hero_deck,
                villain_deck_hero_cards: mods.villain_deck_heroes.cards_each,
                sidekicks: mods.sidekicks,
                ambitions: mods.ambitions,
                officers: mods.officers,
                tactics: mods.tactics,
                ambush_scheme: mods.ambush_scheme,
            },
        };

        tracing::info!(
            scheme = %result.scheme,
            mastermind = %result.mastermind,
            advisories = diagnostics.advisories().len(),
            "setup generated"
        );
        Ok(GeneratedSetup {
            result,
            advisories: diagnostics.into_vec(),
        })
    }
}
