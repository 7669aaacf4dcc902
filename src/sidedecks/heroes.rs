//! Side decks built from extra heroes.

use crate::cards::{Entity, Hero};
use crate::core::Advisory;
use crate::directives::{clean_title, number, Directive, ExtractContext, SchemeModifiers};

use super::{available_heroes, deck, SideDeckBuilder};

/// Ban every drawn hero, in draw order.
fn bans<'a>(heroes: &'a [&'a Hero]) -> impl Iterator<Item = Directive> + 'a {
    heroes.iter().map(|hero| Directive::BanHero(hero.name.clone()))
}

/// `Hero with "K" in its Hero Name ... Shuffle|Put them into "T"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mutation;

impl SideDeckBuilder for Mutation {
    fn kind(&self) -> &'static str {
        "mutation"
    }

    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        let Some(caps) = pattern!(
            r#"Hero with ["“'‘](.*?)["“”'’] in its Hero Name.*?(?:Shuffle|Put) them (?:into|in) (?:a )?(?:face-up )?["“'‘](.*?)["“”'’]"#
        )
        .captures(ctx.text.applicable_text()) else {
            return Vec::new();
        };
        let keyword = caps[1].trim().to_lowercase();
        let title = clean_title(&caps[2]);

        let candidates: Vec<&Hero> = available_heroes(ctx, draft)
            .into_iter()
            .filter(|hero| hero.name.to_lowercase().contains(&keyword))
            .collect();
        let Some(&chosen) = ctx.rng.choose(&candidates) else {
            ctx.diagnostics.push(Advisory::SideDeckUnavailable {
                deck: title,
                reason: format!("no available hero has '{keyword}' in its name"),
            });
            return Vec::new();
        };
        vec![
            Directive::BanHero(chosen.name.clone()),
            deck(title, vec![format!("14 cards of {}", chosen.display_name())]),
        ]
    }
}

/// `Randomly pick N cards ... from an additional Hero ... form a "T" deck`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Loyalty;

impl SideDeckBuilder for Loyalty {
    fn kind(&self) -> &'static str {
        "loyalty"
    }

    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        let text = ctx.text.applicable_text();
        let Some(caps) = pattern!(r#"Randomly pick (\d+) cards.*?from an additional Hero.*?form a ["“'‘](.*?)["“”'’] deck"#)
            .captures(text)
        else {
            return Vec::new();
        };
        let count = number(caps.get(1));
        let title = clean_title(&caps[2]);
        let note = pattern!(r"\bcost (\d+) or less")
            .captures(text)
            .map(|cost| format!(" (cost {} or less)", number(cost.get(1))))
            .unwrap_or_default();

        let candidates = available_heroes(ctx, draft);
        let Some(&chosen) = ctx.rng.choose(&candidates) else {
            ctx.diagnostics.push(Advisory::SideDeckUnavailable {
                deck: title,
                reason: "no heroes left".into(),
            });
            return Vec::new();
        };
        vec![
            Directive::BanHero(chosen.name.clone()),
            deck(title, vec![format!("{count} cards{note} of {}", chosen.display_name())]),
        ]
    }
}

/// `Set aside all 14 cards of a random extra Hero that has any
/// Size-Changing cards as "T"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShrinkTech;

impl SideDeckBuilder for ShrinkTech {
    fn kind(&self) -> &'static str {
        "shrink tech"
    }

    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        let Some(caps) = pattern!(
            r#"Set aside all 14 cards of a random extra Hero that has any Size-Changing cards as ["“'‘](.*?)["“”'’]"#
        )
        .captures(ctx.text.applicable_text()) else {
            return Vec::new();
        };
        let title = clean_title(&caps[1]);

        let candidates: Vec<&Hero> = available_heroes(ctx, draft)
            .into_iter()
            .filter(|hero| hero.mentions("Size-Changing"))
            .collect();
        let Some(&chosen) = ctx.rng.choose(&candidates) else {
            ctx.diagnostics.push(Advisory::SideDeckUnavailable {
                deck: title,
                reason: "no available hero has Size-Changing cards".into(),
            });
            return Vec::new();
        };
        vec![
            Directive::BanHero(chosen.name.clone()),
            deck(title, vec![format!("14 cards of {}", chosen.display_name())]),
        ]
    }
}

/// `Set aside two extra Heroes to get married`.
///
/// The couple goes to the wedding-hero list, not to a custom deck.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wedding;

impl Wedding {
    const COUPLE: usize = 2;
}

impl SideDeckBuilder for Wedding {
    fn kind(&self) -> &'static str {
        "wedding"
    }

    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        if !pattern!(r"Set aside (?:two|2) extra Heroes to get married").is_match(ctx.text.applicable_text()) {
            return Vec::new();
        }
        let candidates = available_heroes(ctx, draft);
        ctx.diagnostics
            .check_supply("wedding heroes", Self::COUPLE, candidates.len());
        let couple = ctx.rng.sample(&candidates, Self::COUPLE);
        if couple.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<Directive> = bans(&couple).collect();
        found.push(Directive::WeddingHeroes(couple.into_iter().cloned().collect()));
        found
    }
}

/// `plus N other Heroes to make a "T"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PastHeroes;

impl SideDeckBuilder for PastHeroes {
    fn kind(&self) -> &'static str {
        "past heroes"
    }

    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        let Some(caps) = pattern!(r#"plus (\d+) other Heroes to make a\s*["“”'‘](.*?)["“”'’]"#)
            .captures(ctx.text.applicable_text())
        else {
            return Vec::new();
        };
        let count = number(caps.get(1)) as usize;
        let title = clean_title(&caps[2]);

        let candidates = available_heroes(ctx, draft);
        ctx.diagnostics.check_supply(title.clone(), count, candidates.len());
        let chosen = ctx.rng.sample(&candidates, count);
        if chosen.is_empty() {
            return Vec::new();
        }

        let lines = chosen.iter().map(|hero| hero.display_name()).collect();
        let mut found: Vec<Directive> = bans(&chosen).collect();
        found.push(deck(title, lines));
        found
    }
}
