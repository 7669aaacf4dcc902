//! Staged hero selection.
//!
//! Each stage draws from a shared pool and removes what it takes:
//!
//! 1. player-choice placeholders
//! 2. manual picks
//! 3. name-fragment requirements (`A or B` fragments)
//! 4. team-count requirements
//! 5. the versus split
//! 6. the banned-team filter (open stage only)
//! 7. open scored selection up to the hero-deck size
//!
//! Villain-deck heroes are drawn from what is left afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::cards::{Category, Hero, RANDOM_OPTION};
use crate::core::{Advisory, Diagnostics, GeneratorConfig, SetupRng};
use crate::directives::SchemeModifiers;
use crate::resolve::{by_display_name, NameResolver};

use super::scoring::{HeroScorer, ScoreContext};

/// One hero-deck slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RosterEntry<'a> {
    /// Chosen at the table by player `n` (1-based).
    PlayerChoice(u32),
    Hero(&'a Hero),
}

impl<'a> RosterEntry<'a> {
    /// The hero, unless this is a placeholder.
    #[must_use]
    pub fn hero(&self) -> Option<&'a Hero> {
        match *self {
            Self::PlayerChoice(_) => None,
            Self::Hero(hero) => Some(hero),
        }
    }
}

/// `CHOSEN BY PLAYER n` or `Name (Team - Set)`.
impl fmt::Display for RosterEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerChoice(n) => write!(f, "CHOSEN BY PLAYER {n}"),
            Self::Hero(hero) => write!(f, "{} ({} - {})", hero.name, hero.team(), hero.set),
        }
    }
}

impl Serialize for RosterEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Inputs to one hero selection.
#[derive(Clone, Copy, Debug)]
pub struct HeroRequest<'r> {
    pub modifiers: &'r SchemeModifiers,
    /// Manual picks as display strings.
    pub picks: &'r [String],
    /// Tags the scorer reacts to.
    pub synergy_tags: &'r [String],
}

/// Result of one hero selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroSelection<'a> {
    /// The hero deck, in pick order.
    pub roster: Vec<RosterEntry<'a>>,
    /// Heroes shuffled into the villain deck.
    pub villain_deck: Vec<&'a Hero>,
}

/// Runs the hero stages with a pluggable scorer.
pub struct HeroSelector<'a, 's> {
    resolver: NameResolver<'a>,
    scorer: &'s dyn HeroScorer,
    sample_size: usize,
    jitter: f64,
}

/// Remove `hero` from the pool (identity comparison).
fn take(pool: &mut Vec<&Hero>, hero: &Hero) -> bool {
    match pool.iter().position(|h| std::ptr::eq(*h, hero)) {
        Some(index) => {
            pool.remove(index);
            true
        }
        None => false,
    }
}

fn roster_heroes<'a>(roster: &[RosterEntry<'a>]) -> Vec<&'a Hero> {
    roster.iter().filter_map(RosterEntry::hero).collect()
}

impl<'a, 's> HeroSelector<'a, 's> {
    #[must_use]
    pub fn new(resolver: NameResolver<'a>, scorer: &'s dyn HeroScorer, config: &GeneratorConfig) -> Self {
        Self {
            resolver,
            scorer,
            sample_size: config.hero_sample_size.max(1),
            jitter: config.score_jitter,
        }
    }

    /// Pick the hero deck, then the villain-deck heroes.
    pub fn select(
        &self,
        request: &HeroRequest<'_>,
        rng: &mut SetupRng,
        diagnostics: &mut Diagnostics,
    ) -> HeroSelection<'a> {
        let mods = request.modifiers;
        let mut pool: Vec<&'a Hero> = self
            .resolver
            .catalog()
            .heroes()
            .iter()
            .filter(|hero| !mods.banned_heroes.contains(&hero.name))
            .collect();
        let mut roster: Vec<RosterEntry<'a>> = (1..=mods.player_picked_heroes).map(RosterEntry::PlayerChoice).collect();

        self.manual_picks(request.picks, &mut pool, &mut roster, diagnostics);
        self.name_requirements(mods, &mut pool, &mut roster, rng, diagnostics);
        self.team_requirements(mods, &mut pool, &mut roster, rng, diagnostics);
        self.versus(mods, &mut pool, &mut roster, rng, diagnostics);

        if !mods.banned_teams.is_empty() {
            pool.retain(|hero| !mods.banned_teams.contains(hero.team()));
        }
        let context = ScoreContext {
            synergy_tags: request.synergy_tags,
            bystander_override: mods.bystanders.override_count,
        };
        self.open_selection(&context, mods.hero_deck_size as usize, &mut pool, &mut roster, rng);
        let villain_deck = self.villain_deck_heroes(mods, &mut pool, rng, diagnostics);

        tracing::debug!(roster = roster.len(), villain_deck = villain_deck.len(), "heroes selected");
        HeroSelection { roster, villain_deck }
    }

    fn manual_picks(
        &self,
        picks: &[String],
        pool: &mut Vec<&'a Hero>,
        roster: &mut Vec<RosterEntry<'a>>,
        diagnostics: &mut Diagnostics,
    ) {
        for pick in picks {
            let pick = pick.trim();
            if pick.is_empty() || pick == RANDOM_OPTION {
                continue;
            }
            let Some(hero) = by_display_name(pick, self.resolver.catalog().heroes()) else {
                diagnostics.push(Advisory::AmbiguousSelection {
                    category: Category::Hero,
                    name: pick.to_string(),
                });
                continue;
            };
            if take(pool, hero) {
                roster.push(RosterEntry::Hero(hero));
            } else {
                tracing::debug!(pick, "manual hero pick unavailable");
            }
        }
    }

    /// Every hero matching a fragment leaves the pool, so the open stage
    /// cannot exceed the exact count.
    fn name_requirements(
        &self,
        mods: &SchemeModifiers,
        pool: &mut Vec<&'a Hero>,
        roster: &mut Vec<RosterEntry<'a>>,
        rng: &mut SetupRng,
        diagnostics: &mut Diagnostics,
    ) {
        for requirement in &mods.hero_name_requirements {
            let have = roster_heroes(roster)
                .iter()
                .filter(|hero| requirement.admits(&hero.name))
                .count();
            let needed = (requirement.count as usize).saturating_sub(have);
            let candidates: Vec<&'a Hero> = pool
                .iter()
                .copied()
                .filter(|hero| requirement.admits(&hero.name))
                .collect();
            pool.retain(|hero| !requirement.admits(&hero.name));
            if needed == 0 {
                continue;
            }
            diagnostics.check_supply(
                format!("heroes named \"{}\"", requirement.fragment),
                needed,
                candidates.len(),
            );
            let chosen = rng.sample(&candidates, needed);
            tracing::debug!(fragment = %requirement.fragment, chosen = chosen.len(), "name requirement placed");
            roster.extend(chosen.into_iter().map(RosterEntry::Hero));
        }
    }

    fn team_requirements(
        &self,
        mods: &SchemeModifiers,
        pool: &mut Vec<&'a Hero>,
        roster: &mut Vec<RosterEntry<'a>>,
        rng: &mut SetupRng,
        diagnostics: &mut Diagnostics,
    ) {
        let on_team = |hero: &Hero, team: &str| hero.team().to_lowercase().contains(team);

        for requirement in &mods.team_requirements {
            let have = roster_heroes(roster)
                .iter()
                .filter(|hero| on_team(hero, &requirement.team))
                .count();
            let needed = (requirement.count as usize).saturating_sub(have);
            if needed == 0 {
                continue;
            }
            let candidates: Vec<&'a Hero> = pool
                .iter()
                .copied()
                .filter(|hero| on_team(hero, &requirement.team))
                .collect();
            diagnostics.check_supply(format!("{} heroes", requirement.team), needed, candidates.len());
            for hero in rng.sample(&candidates, needed) {
                take(pool, hero);
                roster.push(RosterEntry::Hero(hero));
            }
            tracing::debug!(team = %requirement.team, "team requirement placed");
        }
    }

    /// Two distinct teams with enough heroes each.
    fn versus(
        &self,
        mods: &SchemeModifiers,
        pool: &mut Vec<&'a Hero>,
        roster: &mut Vec<RosterEntry<'a>>,
        rng: &mut SetupRng,
        diagnostics: &mut Diagnostics,
    ) {
        let Some((first, second)) = mods.versus_teams else {
            return;
        };
        let (first, second) = (first as usize, second as usize);

        let mut teams: BTreeMap<&'a str, Vec<&'a Hero>> = BTreeMap::new();
        for hero in pool.iter().copied().filter(|hero| hero.has_team()) {
            teams.entry(hero.team()).or_default().push(hero);
        }
        let deep_enough = |needed: usize| -> Vec<&'a str> {
            teams
                .iter()
                .filter(|(_, heroes)| heroes.len() >= needed)
                .map(|(team, _)| *team)
                .collect()
        };

        let Some(&team_a) = rng.choose(&deep_enough(first)) else {
            diagnostics.check_supply("versus teams", 2, 0);
            return;
        };
        let rivals: Vec<&'a str> = deep_enough(second).into_iter().filter(|team| *team != team_a).collect();
        let Some(&team_b) = rng.choose(&rivals) else {
            diagnostics.check_supply("versus teams", 2, 1);
            return;
        };

        for (team, count) in [(team_a, first), (team_b, second)] {
            for hero in rng.sample(&teams[&team], count) {
                take(pool, hero);
                roster.push(RosterEntry::Hero(hero));
            }
        }
        tracing::debug!(team_a, team_b, "versus teams placed");
    }

    /// Sample, score, keep the best, repeat.
    fn open_selection(
        &self,
        context: &ScoreContext<'_>,
        target: usize,
        pool: &mut Vec<&'a Hero>,
        roster: &mut Vec<RosterEntry<'a>>,
        rng: &mut SetupRng,
    ) {
        while roster.len() < target && !pool.is_empty() {
            let current = roster_heroes(roster);
            let mut best: Option<(usize, f64)> = None;
            for index in rng.sample_indices(pool.len(), self.sample_size) {
                let score = self.scorer.score(context, &current, pool[index]) + rng.gen_unit_scaled(self.jitter);
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((index, score));
                }
            }
            let Some((index, _)) = best else {
                break;
            };
            roster.push(RosterEntry::Hero(pool.remove(index)));
        }
        if roster.len() < target {
            tracing::debug!(target, roster = roster.len(), "hero pool exhausted");
        }
    }

    /// Named villain-deck heroes first, then random ones.
    fn villain_deck_heroes(
        &self,
        mods: &SchemeModifiers,
        pool: &mut Vec<&'a Hero>,
        rng: &mut SetupRng,
        diagnostics: &mut Diagnostics,
    ) -> Vec<&'a Hero> {
        let wanted = mods.villain_deck_heroes.count as usize;
        let mut picked: Vec<&'a Hero> = Vec::new();

        for name in mods.villain_deck_heroes.named.iter() {
            match self.resolver.hero(name) {
                Some(hero) if take(pool, hero) => picked.push(hero),
                _ => {
                    tracing::debug!(name, "named villain-deck hero unavailable, drawing at random");
                    if let Some(&fallback) = rng.choose(pool.as_slice()) {
                        take(pool, fallback);
                        picked.push(fallback);
                    }
                }
            }
        }

        let remaining = wanted.saturating_sub(picked.len());
        if remaining > 0 {
            diagnostics.check_supply("villain deck heroes", remaining, pool.len());
            for hero in rng.sample(pool.as_slice(), remaining) {
                take(pool, hero);
                picked.push(hero);
            }
        }
        picked
    }
}
