//! The directive value: everything a scheme changes about setup.
//!
//! Matchers never touch `SchemeModifiers` directly. Each one emits
//! [`Directive`] values; a [`ModifiersBuilder`] folds them in order and is
//! then frozen into a `SchemeModifiers` that the rest of the pipeline only
//! ever sees by shared reference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Hero;
use crate::core::{BaseQuota, NameList};

/// Default twist count for a scheme that names none.
pub const DEFAULT_TWISTS: u32 = 8;

/// Default master strike count.
pub const DEFAULT_MASTER_STRIKES: u32 = 5;

/// Cards pulled from the mastermind's tactics by the tactics directive.
pub const MASTERMIND_TACTICS: u32 = 4;

/// Twist count plus how it was derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwistCount {
    pub count: u32,
    pub note: Option<String>,
}

impl TwistCount {
    #[must_use]
    pub fn flat(count: u32) -> Self {
        Self { count, note: None }
    }

    /// Clamp a signed result at zero and attach a note.
    #[must_use]
    pub fn derived(count: i64, note: impl Into<String>) -> Self {
        Self {
            count: u32::try_from(count.max(0)).unwrap_or(u32::MAX),
            note: Some(note.into()),
        }
    }
}

impl Default for TwistCount {
    fn default() -> Self {
        Self::flat(DEFAULT_TWISTS)
    }
}

impl fmt::Display for TwistCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.note {
            Some(note) => write!(f, "{} ({note})", self.count),
            None => write!(f, "{}", self.count),
        }
    }
}

/// "Include N heroes whose name contains X".
///
/// `fragment` may hold alternatives joined by ` or `
/// (`Wolverine or Logan`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRequirement {
    pub fragment: String,
    pub count: u32,
}

impl NameRequirement {
    #[must_use]
    pub fn new(fragment: impl Into<String>, count: u32) -> Self {
        Self {
            fragment: fragment.into().trim().to_string(),
            count,
        }
    }

    /// Lowercased alternatives.
    #[must_use]
    pub fn alternatives(&self) -> Vec<String> {
        self.fragment
            .to_lowercase()
            .split(" or ")
            .map(|s| s.trim().trim_matches(|c| c == '"' || c == '“' || c == '”' || c == '\'').to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether a hero name satisfies any alternative.
    #[must_use]
    pub fn admits(&self, hero_name: &str) -> bool {
        let name = hero_name.to_lowercase();
        self.alternatives().iter().any(|alt| name.contains(alt.as_str()))
    }
}

/// "Use at least N [team] heroes".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRequirement {
    /// Lowercased team name.
    pub team: String,
    pub count: u32,
}

impl TeamRequirement {
    #[must_use]
    pub fn new(team: &str, count: u32) -> Self {
        Self {
            team: team.trim().to_lowercase(),
            count,
        }
    }
}

/// A titled side deck built from drawn entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDeck {
    pub title: String,
    pub lines: Vec<String>,
}

/// Heroes whose cards go into the villain deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillainDeckHeroes {
    pub count: u32,
    /// Name fragments to honour first.
    pub named: NameList,
    /// Number of cards taken from each hero, when not all of them.
    pub cards_each: Option<u32>,
}

/// Extra masterminds demanded by the scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MastermindDemands {
    pub lurking: u32,
    pub tyrants: u32,
    pub drained: bool,
}

/// Bystander override and additive count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BystanderRule {
    pub override_count: Option<u32>,
    pub added: u32,
}

impl BystanderRule {
    /// Final villain-deck bystanders for a base count.
    #[must_use]
    pub fn total(&self, base: u32) -> u32 {
        self.override_count.unwrap_or(base.saturating_add(self.added))
    }
}

/// One extracted setup rule.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Twists(TwistCount),
    MasterStrikes(u32),
    NoBystanders,
    TotalBystanders(u32),
    AddBystanders(u32),
    /// Absolute villain group count; converted to extra slots over base.
    VillainGroupTotal(u32),
    ExtraVillains(u32),
    ExtraHenchmen(u32),
    HeroDeckSize(u32),
    AddHeroes(u32),
    RequireVillain { name: String, extra_slot: bool },
    RequireHenchman { name: String, extra_slot: bool },
    BanVillain(String),
    BanHenchman(String),
    BanHero(String),
    RequireHeroName(NameRequirement),
    RequireTeam(TeamRequirement),
    BanTeamFromOpenSelection(String),
    VersusTeams(u32, u32),
    PlayerPickedHeroes(u32),
    VillainDeckHero { name: Option<String>, cards_each: Option<u32> },
    HeroesFromHeroDeck(u32),
    BystandersInHeroDeck(u32),
    HenchmenInHeroDeck(u32),
    HenchmanAlias(String),
    Sidekicks(u32),
    Ambitions(u32),
    Officers(u32),
    Tactics(u32),
    AmbushScheme,
    LurkingMasterminds(u32),
    TyrantMasterminds(u32),
    DrainedMastermind,
    DoubleGroups,
    CustomDeck(CustomDeck),
    WeddingHeroes(Vec<Hero>),
}

/// Setup changes demanded by one scheme at one player count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemeModifiers {
    pub twists: TwistCount,
    pub master_strikes: u32,
    pub bystanders: BystanderRule,
    pub extra_villains: u32,
    pub extra_henchmen: u32,
    pub hero_deck_size: u32,
    pub required_villains: NameList,
    pub required_henchmen: NameList,
    pub banned_villains: NameList,
    pub banned_henchmen: NameList,
    pub banned_heroes: NameList,
    pub hero_name_requirements: Vec<NameRequirement>,
    pub team_requirements: Vec<TeamRequirement>,
    pub banned_teams: NameList,
    pub versus_teams: Option<(u32, u32)>,
    pub player_picked_heroes: u32,
    pub villain_deck_heroes: VillainDeckHeroes,
    pub heroes_from_hero_deck: u32,
    pub bystanders_in_hero_deck: u32,
    pub henchmen_in_hero_deck: u32,
    pub henchman_alias: Option<String>,
    pub sidekicks: u32,
    pub ambitions: u32,
    pub officers: u32,
    pub tactics: u32,
    pub ambush_scheme: bool,
    pub masterminds: MastermindDemands,
    pub double_groups: bool,
    pub half_deck: bool,
    pub custom_deck: Option<CustomDeck>,
    pub wedding_heroes: Vec<Hero>,
    base: BaseQuota,
}

impl SchemeModifiers {
    /// The value an unmatched text produces.
    #[must_use]
    pub fn baseline(base: BaseQuota) -> Self {
        Self {
            twists: TwistCount::default(),
            master_strikes: DEFAULT_MASTER_STRIKES,
            bystanders: BystanderRule::default(),
            extra_villains: 0,
            extra_henchmen: 0,
            hero_deck_size: base.heroes,
            required_villains: NameList::new(),
            required_henchmen: NameList::new(),
            banned_villains: NameList::new(),
            banned_henchmen: NameList::new(),
            banned_heroes: NameList::new(),
            hero_name_requirements: Vec::new(),
            team_requirements: Vec::new(),
            banned_teams: NameList::new(),
            versus_teams: None,
            player_picked_heroes: 0,
            villain_deck_heroes: VillainDeckHeroes::default(),
            heroes_from_hero_deck: 0,
            bystanders_in_hero_deck: 0,
            henchmen_in_hero_deck: 0,
            henchman_alias: None,
            sidekicks: 0,
            ambitions: 0,
            officers: 0,
            tactics: 0,
            ambush_scheme: false,
            masterminds: MastermindDemands::default(),
            double_groups: false,
            half_deck: false,
            custom_deck: None,
            wedding_heroes: Vec::new(),
            base,
        }
    }

    /// Base quotas these modifiers were computed against.
    #[must_use]
    pub fn base(&self) -> BaseQuota {
        self.base
    }

    /// Villain group quota: base plus extra slots, doubled under the
    /// double-group rule.
    #[must_use]
    pub fn villain_quota(&self) -> usize {
        self.doubled(self.base.villains.saturating_add(self.extra_villains))
    }

    /// Henchman group quota, same rules as villains.
    #[must_use]
    pub fn henchman_quota(&self) -> usize {
        self.doubled(self.base.henchmen.saturating_add(self.extra_henchmen))
    }

    fn doubled(&self, quota: u32) -> usize {
        let factor = if self.double_groups { 2 } else { 1 };
        quota.saturating_mul(factor) as usize
    }

    /// Villain-deck bystanders after override and additions.
    #[must_use]
    pub fn bystander_total(&self) -> u32 {
        self.bystanders.total(self.base.bystanders)
    }
}

/// Accumulates directives in matcher order.
#[derive(Debug)]
pub struct ModifiersBuilder {
    draft: SchemeModifiers,
}

impl ModifiersBuilder {
    #[must_use]
    pub fn new(base: BaseQuota) -> Self {
        Self {
            draft: SchemeModifiers::baseline(base),
        }
    }

    /// Continue folding on top of an existing draft.
    #[must_use]
    pub fn resume(draft: SchemeModifiers) -> Self {
        Self { draft }
    }

    /// Read-only view of what has been applied so far.
    #[must_use]
    pub fn draft(&self) -> &SchemeModifiers {
        &self.draft
    }

    /// Fold one directive.
    pub fn apply(&mut self, directive: Directive) {
        tracing::debug!(?directive, "directive applied");
        let m = &mut self.draft;
        match directive {
            Directive::Twists(twists) => m.twists = twists,
            Directive::MasterStrikes(n) => m.master_strikes = n,
            Directive::NoBystanders => m.bystanders.override_count = Some(0),
            Directive::TotalBystanders(n) => m.bystanders.override_count = Some(n),
            Directive::AddBystanders(n) => m.bystanders.added = m.bystanders.added.saturating_add(n),
            Directive::VillainGroupTotal(total) => {
                let extra = total.saturating_sub(m.base.villains);
                m.extra_villains = m.extra_villains.max(extra);
            }
            Directive::ExtraVillains(n) => m.extra_villains = m.extra_villains.saturating_add(n),
            Directive::ExtraHenchmen(n) => m.extra_henchmen = m.extra_henchmen.saturating_add(n),
            Directive::HeroDeckSize(n) => m.hero_deck_size = n,
            Directive::AddHeroes(n) => m.hero_deck_size = m.hero_deck_size.saturating_add(n),
            Directive::RequireVillain { name, extra_slot } => {
                m.required_villains.insert(name);
                if extra_slot {
                    m.extra_villains = m.extra_villains.max(m.required_villains.len() as u32);
                }
            }
            Directive::RequireHenchman { name, extra_slot } => {
                m.required_henchmen.insert(name);
                if extra_slot {
                    m.extra_henchmen = m.extra_henchmen.max(m.required_henchmen.len() as u32);
                }
            }
            Directive::BanVillain(name) => {
                m.banned_villains.insert(name);
            }
            Directive::BanHenchman(name) => {
                m.banned_henchmen.insert(name);
            }
            Directive::BanHero(name) => {
                m.banned_heroes.insert(name);
            }
            Directive::RequireHeroName(req) => {
                if !m
                    .hero_name_requirements
                    .iter()
                    .any(|r| r.fragment.eq_ignore_ascii_case(&req.fragment))
                {
                    m.hero_name_requirements.push(req);
                }
            }
            Directive::RequireTeam(req) => m.team_requirements.push(req),
            Directive::BanTeamFromOpenSelection(team) => {
                m.banned_teams.insert(team.to_lowercase());
            }
            Directive::VersusTeams(a, b) => {
                m.versus_teams = Some((a, b));
                m.hero_deck_size = a.saturating_add(b);
            }
            Directive::PlayerPickedHeroes(n) => m.player_picked_heroes = n,
            Directive::VillainDeckHero { name, cards_each } => {
                m.villain_deck_heroes.count = m.villain_deck_heroes.count.saturating_add(1);
                if let Some(name) = name {
                    m.villain_deck_heroes.named.insert(name);
                }
                if cards_each.is_some() {
                    m.villain_deck_heroes.cards_each = cards_each;
                }
            }
            Directive::HeroesFromHeroDeck(n) => m.heroes_from_hero_deck = n,
            Directive::BystandersInHeroDeck(n) => m.bystanders_in_hero_deck = n,
            Directive::HenchmenInHeroDeck(n) => m.henchmen_in_hero_deck = n,
            Directive::HenchmanAlias(alias) => m.henchman_alias = Some(alias),
            Directive::Sidekicks(n) => m.sidekicks = n,
            Directive::Ambitions(n) => m.ambitions = n,
            Directive::Officers(n) => m.officers = n,
            Directive::Tactics(n) => m.tactics = n,
            Directive::AmbushScheme => m.ambush_scheme = true,
            Directive::LurkingMasterminds(n) => m.masterminds.lurking = n,
            Directive::TyrantMasterminds(n) => m.masterminds.tyrants = n,
            Directive::DrainedMastermind => m.masterminds.drained = true,
            Directive::DoubleGroups => {
                m.double_groups = true;
                m.half_deck = true;
            }
            Directive::CustomDeck(deck) => m.custom_deck = Some(deck),
            Directive::WeddingHeroes(heroes) => m.wedding_heroes = heroes,
        }
    }

    /// Fold several directives in order.
    pub fn apply_all(&mut self, directives: impl IntoIterator<Item = Directive>) {
        for directive in directives {
            self.apply(directive);
        }
    }

    /// Freeze.
    #[must_use]
    pub fn build(self) -> SchemeModifiers {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseQuota {
        BaseQuota {
            villains: 2,
            henchmen: 1,
            bystanders: 2,
            heroes: 5,
        }
    }

    #[test]
    fn test_baseline() {
        let m = SchemeModifiers::baseline(base());
        assert_eq!(m.twists.count, 8);
        assert_eq!(m.master_strikes, 5);
        assert_eq!(m.hero_deck_size, 5);
        assert_eq!(m.villain_quota(), 2);
        assert_eq!(m.henchman_quota(), 1);
        assert_eq!(m.bystander_total(), 2);
    }

    #[test]
    fn test_twist_display() {
        assert_eq!(TwistCount::flat(8).to_string(), "8");
        assert_eq!(
            TwistCount::derived(10, "2 per Reality x 5 Realities").to_string(),
            "10 (2 per Reality x 5 Realities)"
        );
        assert_eq!(TwistCount::derived(-3, "x").count, 0);
    }

    #[test]
    fn test_required_group_extends_slots() {
        let mut builder = ModifiersBuilder::new(base());
        builder.apply(Directive::RequireHenchman {
            name: "Sentinels".into(),
            extra_slot: true,
        });
        builder.apply(Directive::RequireHenchman {
            name: "sentinels".into(),
            extra_slot: true,
        });
        builder.apply(Directive::RequireVillain {
            name: "Skrulls".into(),
            extra_slot: false,
        });
        let m = builder.build();
        assert_eq!(m.required_henchmen.len(), 1);
        assert_eq!(m.extra_henchmen, 1);
        assert_eq!(m.extra_villains, 0);
        assert_eq!(m.henchman_quota(), 2);
    }

    #[test]
    fn test_villain_total_and_double() {
        let mut builder = ModifiersBuilder::new(base());
        builder.apply(Directive::VillainGroupTotal(3));
        builder.apply(Directive::VillainGroupTotal(1));
        builder.apply(Directive::DoubleGroups);
        let m = builder.build();
        assert_eq!(m.extra_villains, 1);
        assert!(m.half_deck);
        assert_eq!(m.villain_quota(), 6);
        assert_eq!(m.henchman_quota(), 2);
    }

    #[test]
    fn test_counters_saturate() {
        let mut builder = ModifiersBuilder::new(base());
        builder.apply(Directive::ExtraVillains(u32::MAX));
        builder.apply(Directive::ExtraVillains(3));
        builder.apply(Directive::ExtraHenchmen(u32::MAX));
        builder.apply(Directive::AddHeroes(u32::MAX));
        builder.apply(Directive::AddBystanders(u32::MAX));
        builder.apply(Directive::AddBystanders(u32::MAX));
        assert_eq!(builder.draft().extra_villains, u32::MAX);
        assert_eq!(builder.draft().villain_quota(), u32::MAX as usize);
        assert_eq!(builder.draft().bystander_total(), u32::MAX);

        builder.apply(Directive::DoubleGroups);
        let m = builder.build();
        assert_eq!(m.hero_deck_size, u32::MAX);
        assert_eq!(m.villain_quota(), u32::MAX as usize);
        assert_eq!(m.henchman_quota(), u32::MAX as usize);
    }

    #[test]
    fn test_bystander_rules() {
        let mut builder = ModifiersBuilder::new(base());
        builder.apply(Directive::AddBystanders(2));
        builder.apply(Directive::AddBystanders(1));
        assert_eq!(builder.draft().bystander_total(), 5);
        builder.apply(Directive::TotalBystanders(8));
        assert_eq!(builder.build().bystander_total(), 8);
    }

    #[test]
    fn test_name_requirement_alternatives() {
        let req = NameRequirement::new("Wolverine or “Logan”", 1);
        assert_eq!(req.alternatives(), vec!["wolverine", "logan"]);
        assert!(req.admits("Old Man Logan"));
        assert!(!req.admits("Storm"));
    }
}
