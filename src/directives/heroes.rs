//! Hero deck size, hero demands and villain-deck heroes.

use super::extractor::ExtractContext;
use super::modifiers::{Directive, NameRequirement, SchemeModifiers, TeamRequirement};
use super::{count_word, number};

/// Words that make a preceding `N Heroes` a card movement, not a deck size.
const MOVEMENT_VERBS: [&str; 4] = ["shuffle", "reveal", "look", "add"];

/// Hero deck size per applicable clause.
///
/// An `Add N [extra] Hero(es)` clause adds to the deck unless the heroes go
/// to the Villain Deck. Otherwise a bare `N Heroes` sets the base size,
/// unless it is a card movement (`Shuffle 12 Heroes from ...`), part of a
/// range, or a large count outside an explicit `Hero Deck` clause. Additions
/// apply on top of the base whatever their order in the text.
pub(crate) fn hero_deck_size(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let mut base = None;
    let mut added: u32 = 0;

    for clause in ctx.text.applicable() {
        if let Some(n) = hero_addition(&clause.text) {
            added = added.saturating_add(n);
        } else if let Some(n) = hero_base(&clause.text) {
            base = Some(n);
        }
    }

    let mut found = Vec::new();
    if let Some(n) = base {
        found.push(Directive::HeroDeckSize(n));
    }
    if added > 0 {
        found.push(Directive::AddHeroes(added));
    }
    found
}

fn hero_addition(text: &str) -> Option<u32> {
    pattern!(r"\bAdd\s+(an|another|one|two|three|\d+)\s+(?:extra\s+)?Hero(?:es)?\b")
        .captures_iter(text)
        .filter(|caps| {
            let end = caps.get(0).map_or(text.len(), |m| m.end());
            !pattern!(r"^\s+(?:to|into|in)\s+(?:the\s+)?Villain Deck").is_match(&text[end..])
        })
        .find_map(|caps| count_word(&caps[1]))
}

fn hero_base(text: &str) -> Option<u32> {
    let explicit_deck = pattern!(r"Hero Deck").is_match(text);
    for caps in pattern!(r"\b(\d+)\s+Heroes\b").captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let before = &text[..whole.start()];
        let after = &text[whole.end()..];

        let previous_word = before
            .split_whitespace()
            .last()
            .map(str::to_lowercase)
            .unwrap_or_default();
        if MOVEMENT_VERBS.contains(&previous_word.as_str()) {
            continue;
        }
        let mut tail = before.chars().rev();
        match (tail.next(), tail.next()) {
            (Some('-'), Some(d)) if d.is_ascii_digit() => continue,
            (Some(w), Some(d)) if w.is_whitespace() && d.is_ascii_digit() => continue,
            _ => {}
        }
        if pattern!(r"^\s+(?:from|to|into)\b").is_match(after) {
            continue;
        }

        let n = number(caps.get(1));
        if n >= 10 && !explicit_deck {
            continue;
        }
        return Some(n);
    }
    None
}

pub(crate) fn versus_teams(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r"\b(\d+) Heroes of one Team and (\d+) Heroes of another")
        .captures(ctx.text.applicable_text())
        .map(|caps| Directive::VersusTeams(number(caps.get(1)), number(caps.get(2))))
        .into_iter()
        .collect()
}

/// `Hero Deck is N [team] Heroes and M ...`: N heroes of the team, the rest
/// from any other team.
pub(crate) fn split_team(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let Some(caps) = pattern!(r"Hero Deck is (\d+) \[?([a-zA-Z0-9\-\s]+)\]? Heroes and (\d+)")
        .captures(ctx.text.applicable_text())
    else {
        return Vec::new();
    };
    let on_team = number(caps.get(1));
    let others = number(caps.get(3));
    let team = caps[2].trim().to_lowercase();
    vec![
        Directive::HeroDeckSize(on_team.saturating_add(others)),
        Directive::RequireTeam(TeamRequirement::new(&team, on_team)),
        Directive::BanTeamFromOpenSelection(team),
    ]
}

fn villain_deck_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    let lower = name.to_lowercase();
    if name.is_empty() || lower.contains("extra") || lower == "hero" || lower == "random" {
        None
    } else {
        Some(name.to_string())
    }
}

/// Heroes whose cards are shuffled into the Villain Deck.
pub(crate) fn villain_deck_heroes(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let text = ctx.text.applicable_text();

    let named = pattern!(r"\bincludes \d+ extra (.*?) cards")
        .captures(text)
        .or_else(|| pattern!(r"\bAdd \d+ (.*?) Hero cards to the Villain Deck").captures(text))
        .or_else(|| pattern!(r"\bcards for (?:any|an) (.*?) Hero\b").captures(text));
    if let Some(caps) = named {
        return vec![Directive::VillainDeckHero {
            name: villain_deck_name(&caps[1]),
            cards_each: None,
        }];
    }

    if let Some(caps) = pattern!(r"\bAdd (\d+) (?:random )?cards from an extra Hero").captures(text) {
        return vec![Directive::VillainDeckHero {
            name: None,
            cards_each: Some(number(caps.get(1))),
        }];
    }

    let generic = ctx.text.applicable().any(|clause| {
        pattern!(r"(?:to|into|in) the Villain Deck.*?extra Hero").is_match(&clause.text)
            || pattern!(r"extra Hero(?:es)? (?:to|into|in) the Villain Deck").is_match(&clause.text)
            || pattern!(r"Villain Deck includes.*?extra Hero").is_match(&clause.text)
    });
    if generic {
        vec![Directive::VillainDeckHero {
            name: None,
            cards_each: None,
        }]
    } else {
        Vec::new()
    }
}

pub(crate) fn moved_heroes(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r"Shuffle (\d+) random Heroes from the Hero Deck into the Villain Deck")
        .captures(ctx.text.applicable_text())
        .map(|caps| Directive::HeroesFromHeroDeck(number(caps.get(1))))
        .into_iter()
        .collect()
}

/// Heroes demanded by name. First phrasing found wins.
pub(crate) fn name_requirements(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    ctx.text
        .applicable()
        .find_map(|clause| name_requirement(&clause.text))
        .map(Directive::RequireHeroName)
        .into_iter()
        .collect()
}

fn name_requirement(text: &str) -> Option<NameRequirement> {
    if let Some(caps) =
        pattern!(r#"Use exactly (\w+) Heroes with ["“'‘](.*?)["“”'’] in their Hero Names"#).captures(text)
    {
        return count_word(&caps[1])
            .filter(|&n| n > 0)
            .map(|n| NameRequirement::new(&caps[2], n));
    }
    if let Some(caps) = pattern!(r"Exactly one Hero must be an? (.+?) Hero\b").captures(text) {
        return Some(NameRequirement::new(&caps[1], 1));
    }
    if let Some(caps) = pattern!(r"\bUse (.+?) as one of the Heroes").captures(text) {
        return Some(NameRequirement::new(&caps[1], 1));
    }
    if let Some(caps) = pattern!(r"Use the best Hero.*?: (.+?)(?:!|\.|$)").captures(text) {
        return Some(NameRequirement::new(&caps[1], 1));
    }
    if let Some(caps) = pattern!(
        r"(?:Include|Use) exactly (\d+|one|two|three|four|five) Hero(?:es)? with (.+?) in (?:its|their) (?:Hero )?Names?"
    )
    .captures(text)
    {
        return count_word(&caps[1]).map(|n| NameRequirement::new(&caps[2], n));
    }
    None
}

/// `Use at least N [team] Hero` / `including at least one [team] Hero`.
pub(crate) fn team_requirements(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let text = ctx.text.applicable_text();
    pattern!(r"Use at least (\d+) \[?([a-zA-Z0-9\-\s]+?)\]? Hero")
        .captures(text)
        .or_else(|| pattern!(r"including at least (one|\d+) \[?([a-zA-Z0-9\-\s]+?)\]? Hero").captures(text))
        .and_then(|caps| count_word(&caps[1]).map(|n| TeamRequirement::new(&caps[2], n)))
        .map(Directive::RequireTeam)
        .into_iter()
        .collect()
}

pub(crate) fn player_picked(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    if pattern!(r"Each player chooses a Hero to be part of the Hero Deck").is_match(ctx.text.applicable_text()) {
        vec![Directive::PlayerPickedHeroes(u32::from(ctx.players.get()))]
    } else {
        Vec::new()
    }
}
