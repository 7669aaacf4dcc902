//! Slot planning for manual-override interfaces.
//!
//! Runs the extractor as a dry run for a chosen scheme and mastermind so an
//! interface can show how many slots to offer, which slots are locked, and
//! which hero slots carry a constraint.

use serde::{Deserialize, Serialize};

use crate::cards::{Category, EntityCatalog, Hero, RANDOM_OPTION};
use crate::core::{Diagnostics, GeneratorConfig, PlayerCount, SetupError, SetupRng};
use crate::directives::{DirectiveExtractor, NameRequirement, SchemeModifiers};
use crate::resolve::by_display_name;

/// A restriction on one hero slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroConstraint {
    /// Hero name must contain the fragment (alternatives joined by ` or `).
    Name(String),
    /// Hero team must contain this lowercased team name.
    Team(String),
}

impl HeroConstraint {
    /// Whether a hero may fill this slot.
    #[must_use]
    pub fn admits(&self, hero: &Hero) -> bool {
        match self {
            Self::Name(fragment) => NameRequirement::new(fragment.as_str(), 1).admits(&hero.name),
            Self::Team(team) => hero.team().to_lowercase().contains(team.as_str()),
        }
    }
}

/// Slot layout for one scheme, mastermind and player count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupPlan {
    pub villain_slots: usize,
    pub henchman_slots: usize,
    pub hero_slots: usize,
    /// Option strings fixed into the first villain slots.
    pub locked_villains: Vec<String>,
    /// Option strings fixed into the first henchman slots.
    pub locked_henchmen: Vec<String>,
    /// One entry per constrained hero slot, in slot order.
    pub hero_constraints: Vec<HeroConstraint>,
}

/// Match a name against offered options: exact, then case-insensitive,
/// then containment either way (never `"Random"`).
#[must_use]
pub fn find_option<'o>(target: &str, options: &'o [String]) -> Option<&'o str> {
    let target = target.trim();
    if target.is_empty() || target.eq_ignore_ascii_case("unknown") {
        return None;
    }
    if let Some(exact) = options.iter().find(|o| o.as_str() == target) {
        return Some(exact.as_str());
    }
    if let Some(folded) = options.iter().find(|o| o.eq_ignore_ascii_case(target)) {
        return Some(folded.as_str());
    }
    let lower = target.to_lowercase();
    options
        .iter()
        .filter(|o| o.as_str() != RANDOM_OPTION)
        .find(|o| {
            let option = o.to_lowercase();
            option.contains(&lower) || lower.contains(&option)
        })
        .map(String::as_str)
}

fn lock(target: &str, options: &[String], locked: &mut Vec<String>) {
    if let Some(found) = find_option(target, options) {
        if !locked.iter().any(|l| l == found) {
            locked.push(found.to_string());
        }
    }
}

fn is_chosen(choice: Option<&str>) -> Option<&str> {
    choice.map(str::trim).filter(|c| !c.is_empty() && *c != RANDOM_OPTION)
}

/// Computes [`SetupPlan`]s.
pub struct SetupPlanner;

impl SetupPlanner {
    /// Plan the slots for a scheme and mastermind chosen by display string.
    ///
    /// `None`, `"Random"` or an unknown name falls back to the base table.
    pub fn plan(
        catalog: &EntityCatalog,
        config: &GeneratorConfig,
        players: u8,
        scheme: Option<&str>,
        mastermind: Option<&str>,
    ) -> Result<SetupPlan, SetupError> {
        let players = PlayerCount::new(players)?;
        let base = config.rules.base(players);
        let villain_options = catalog.display_options(Category::Villain);
        let henchman_options = catalog.display_options(Category::Henchman);

        let mut plan = SetupPlan {
            villain_slots: base.villains as usize,
            henchman_slots: base.henchmen as usize,
            hero_slots: base.heroes as usize,
            ..SetupPlan::default()
        };

        if let Some(scheme) = is_chosen(scheme).and_then(|s| by_display_name(s, catalog.schemes())) {
            let mods = Self::dry_run(catalog, config, players, &scheme.text());
            plan.villain_slots = mods.villain_quota();
            plan.henchman_slots = mods.henchman_quota();
            plan.hero_slots = mods.hero_deck_size as usize;
            for requirement in mods.required_villains.iter() {
                lock(requirement, &villain_options, &mut plan.locked_villains);
            }
            for requirement in mods.required_henchmen.iter() {
                lock(requirement, &henchman_options, &mut plan.locked_henchmen);
            }
            for requirement in &mods.hero_name_requirements {
                plan.hero_constraints.extend(
                    std::iter::repeat(HeroConstraint::Name(requirement.fragment.clone())).take(requirement.count as usize),
                );
            }
            for requirement in &mods.team_requirements {
                plan.hero_constraints.extend(
                    std::iter::repeat(HeroConstraint::Team(requirement.team.clone())).take(requirement.count as usize),
                );
            }
            tracing::debug!(scheme = %scheme.name, ?plan, "planned scheme slots");
        }

        if let Some(leads) = is_chosen(mastermind)
            .and_then(|m| by_display_name(m, catalog.masterminds()))
            .and_then(|m| m.leads())
        {
            lock(leads, &villain_options, &mut plan.locked_villains);
            lock(leads, &henchman_options, &mut plan.locked_henchmen);
        }

        Ok(plan)
    }

    fn dry_run(catalog: &EntityCatalog, config: &GeneratorConfig, players: PlayerCount, text: &str) -> SchemeModifiers {
        let mut rng = SetupRng::new(config.seed.unwrap_or_default());
        let mut diagnostics = Diagnostics::new();
        DirectiveExtractor::new(catalog, config).extract(text, players, &mut rng, &mut diagnostics)
    }
}
