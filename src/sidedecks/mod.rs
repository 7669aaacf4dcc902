//! Scheme-specific custom side decks.
//!
//! A handful of schemes build a separate deck out of an extra hero or
//! group ("Infected Deck", "Monster Pit", "Past Hero Deck", ...). Each
//! builder recognises one phrasing, draws from the pool that is still
//! available, bans what it draws from regular selection and emits a
//! [`CustomDeck`](crate::directives::CustomDeck).
//!
//! Builders are tried in a fixed order. Later builders see the bans of
//! earlier ones; if more than one matches, the last deck is the one kept.

mod groups;
mod heroes;

use crate::cards::Hero;
use crate::directives::{CustomDeck, Directive, ExtractContext, ModifiersBuilder, SchemeModifiers};

pub use groups::{Infected, MonsterPit};
pub use heroes::{Loyalty, Mutation, PastHeroes, ShrinkTech, Wedding};

// =============================================================================
// Builder trait
// =============================================================================

/// One custom side-deck constructor.
pub trait SideDeckBuilder: Send + Sync {
    /// Short label for logs.
    fn kind(&self) -> &'static str;

    /// Build the deck if the scheme text asks for it.
    ///
    /// Returns no directives when the phrasing is absent. A recognised
    /// phrasing that cannot be served records an advisory instead.
    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive>;
}

/// Every builder, in the order they are tried.
pub static BUILDERS: &[&dyn SideDeckBuilder] = &[
    &Infected,
    &Mutation,
    &Loyalty,
    &ShrinkTech,
    &Wedding,
    &PastHeroes,
    &MonsterPit,
];

/// Run every builder, threading bans from one to the next.
pub(crate) fn build_side_decks(ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
    let mut local = ModifiersBuilder::resume(draft.clone());
    let mut found = Vec::new();

    for builder in BUILDERS {
        let directives = builder.build(ctx, local.draft());
        if directives.is_empty() {
            continue;
        }
        tracing::debug!(deck = builder.kind(), directives = directives.len(), "side deck built");
        local.apply_all(directives.iter().cloned());
        found.extend(directives);
    }
    found
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Heroes not banned so far.
fn available_heroes<'a>(ctx: &ExtractContext<'a>, draft: &SchemeModifiers) -> Vec<&'a Hero> {
    ctx.resolver
        .catalog()
        .heroes()
        .iter()
        .filter(|hero| !draft.banned_heroes.contains(&hero.name))
        .collect()
}

fn deck(title: String, lines: Vec<String>) -> Directive {
    Directive::CustomDeck(CustomDeck { title, lines })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::extractor::run_matcher;

    #[test]
    fn test_builders_order() {
        let kinds: Vec<&str> = BUILDERS.iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec!["infected", "mutation", "loyalty", "shrink tech", "wedding", "past heroes", "monster pit"]
        );
    }

    #[test]
    fn test_later_builder_sees_earlier_bans() {
        let text = "Find a Hero with “Hulk” in its Hero Name. Shuffle them into a “Hulk Deck.” \
                    Randomly pick 5 cards from an additional Hero to form a “Dark Loyalty” deck.";
        let (found, _) = run_matcher(build_side_decks, &fixtures::catalog(), text, 2, Vec::new());

        let banned: Vec<&str> = found
            .iter()
            .filter_map(|d| match d {
                Directive::BanHero(name) => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(banned.len(), 2);
        assert_ne!(banned[0], banned[1]);

        let decks: Vec<&CustomDeck> = found
            .iter()
            .filter_map(|d| match d {
                Directive::CustomDeck(deck) => Some(deck),
                _ => None,
            })
            .collect();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[1].title, "Dark Loyalty");
    }

    #[test]
    fn test_no_phrasing_no_deck() {
        let (found, diagnostics) = run_matcher(
            build_side_decks,
            &fixtures::catalog(),
            "Setup: 8 Twists. Add an extra Villain Group.",
            2,
            Vec::new(),
        );
        assert!(found.is_empty());
        assert!(diagnostics.is_empty());
    }
}
