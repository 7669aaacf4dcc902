//! The ordered matcher catalogue.
//!
//! Each matcher covers one concern and returns the directives it found.
//! Matchers run in catalogue order against the same segmented text; each one
//! sees the directives applied before it (group-count matchers run before
//! twists so per-Reality twists see the final villain slot count) but never
//! mutates them.

use crate::cards::EntityCatalog;
use crate::core::{Diagnostics, GeneratorConfig, PlayerCount, SetupRng};
use crate::resolve::NameResolver;
use crate::sidedecks;

use super::clauses::SchemeText;
use super::modifiers::{Directive, ModifiersBuilder, SchemeModifiers};
use super::{counts, heroes, masterminds, requirements, twists};

/// Everything a matcher may read or draw from.
pub struct ExtractContext<'a> {
    pub text: &'a SchemeText,
    pub players: PlayerCount,
    pub resolver: NameResolver<'a>,
    pub rng: &'a mut SetupRng,
    pub diagnostics: &'a mut Diagnostics,
}

/// One concern's matcher.
pub type Matcher = fn(&mut ExtractContext<'_>, &SchemeModifiers) -> Vec<Directive>;

const CATALOGUE: &[(&str, Matcher)] = &[
    ("villain group total", counts::villain_group_total),
    ("extra villain groups", counts::extra_villains),
    ("extra henchman groups", counts::extra_henchmen),
    ("named group requirements", requirements::named_groups),
    ("drained mastermind", masterminds::drained),
    ("double group count", counts::double_groups),
    ("twists", twists::twists),
    ("master strikes", counts::master_strikes),
    ("bystanders", counts::bystanders),
    ("hero deck size", heroes::hero_deck_size),
    ("versus teams", heroes::versus_teams),
    ("split team", heroes::split_team),
    ("villain deck heroes", heroes::villain_deck_heroes),
    ("moved heroes", heroes::moved_heroes),
    ("hero name requirements", heroes::name_requirements),
    ("team requirements", heroes::team_requirements),
    ("player-picked heroes", heroes::player_picked),
    ("hero deck extras", counts::hero_deck_extras),
    ("villain deck extras", counts::villain_deck_extras),
    ("henchman alias", counts::henchman_alias),
    ("implicit requirements", requirements::implicit),
    ("explicit villain requirement", requirements::explicit_villain),
    ("set-aside villain group", requirements::set_aside),
    ("keyword villain groups", requirements::keyword_groups),
    ("either/or villain group", requirements::either_or),
    ("stacked henchmen", requirements::stacked_henchmen),
    ("lurking masterminds", masterminds::lurking),
    ("tyrant masterminds", masterminds::tyrants),
    ("side decks", sidedecks::build_side_decks),
];

/// Turns scheme text into a frozen [`SchemeModifiers`].
///
/// ## Example
///
/// ```
/// use legendary_setup::cards::EntityCatalog;
/// use legendary_setup::core::{Diagnostics, GeneratorConfig, PlayerCount, SetupRng};
/// use legendary_setup::directives::DirectiveExtractor;
///
/// let catalog = EntityCatalog::default();
/// let config = GeneratorConfig::default();
/// let extractor = DirectiveExtractor::new(&catalog, &config);
///
/// let players = PlayerCount::new(4).unwrap();
/// let mut rng = SetupRng::new(7);
/// let mut diagnostics = Diagnostics::new();
/// let mods = extractor.extract("Setup: 11 Twists, minus 1 Twist per player.", players, &mut rng, &mut diagnostics);
/// assert_eq!(mods.twists.count, 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DirectiveExtractor<'a> {
    resolver: NameResolver<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> DirectiveExtractor<'a> {
    #[must_use]
    pub fn new(catalog: &'a EntityCatalog, config: &'a GeneratorConfig) -> Self {
        Self {
            resolver: NameResolver::new(catalog, config.fuzzy_threshold),
            config,
        }
    }

    /// Extract from raw scheme text.
    pub fn extract(
        &self,
        scheme_text: &str,
        players: PlayerCount,
        rng: &mut SetupRng,
        diagnostics: &mut Diagnostics,
    ) -> SchemeModifiers {
        let text = SchemeText::new(scheme_text, players);
        self.extract_segmented(&text, players, rng, diagnostics)
    }

    /// Extract from already segmented text.
    pub fn extract_segmented(
        &self,
        text: &SchemeText,
        players: PlayerCount,
        rng: &mut SetupRng,
        diagnostics: &mut Diagnostics,
    ) -> SchemeModifiers {
        let mut builder = ModifiersBuilder::new(self.config.rules.base(players));
        let mut ctx = ExtractContext {
            text,
            players,
            resolver: self.resolver,
            rng,
            diagnostics,
        };

        for (concern, matcher) in CATALOGUE {
            let found = matcher(&mut ctx, builder.draft());
            if found.is_empty() {
                tracing::trace!(concern, "no match");
            } else {
                tracing::debug!(concern, directives = found.len(), "matched");
            }
            builder.apply_all(found);
        }

        builder.build()
    }
}

/// Run one matcher over `text` after folding `prior` directives.
#[cfg(test)]
pub(crate) fn run_matcher(
    matcher: Matcher,
    catalog: &EntityCatalog,
    text: &str,
    players: u8,
    prior: Vec<Directive>,
) -> (Vec<Directive>, Diagnostics) {
    let players = PlayerCount::new(players).expect("valid test player count");
    let scheme = SchemeText::new(text, players);
    let mut builder = ModifiersBuilder::new(crate::core::SetupRules::default().base(players));
    builder.apply_all(prior);
    let mut rng = SetupRng::new(11);
    let mut diagnostics = Diagnostics::new();
    let mut ctx = ExtractContext {
        text: &scheme,
        players,
        resolver: NameResolver::new(catalog, 0.75),
        rng: &mut rng,
        diagnostics: &mut diagnostics,
    };
    let found = matcher(&mut ctx, builder.draft());
    (found, diagnostics)
}
