//! Group slots, master strikes, bystanders and deck extras.

use super::extractor::ExtractContext;
use super::modifiers::{Directive, SchemeModifiers, MASTERMIND_TACTICS};
use super::{clean_title, count_word, number};

/// `Use N Villain Groups`, usually behind a player qualifier.
pub(crate) fn villain_group_total(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    ctx.text
        .applicable()
        .filter_map(|clause| pattern!(r"\bUse (\d+) Villain Groups?\b").captures(&clause.text))
        .map(|caps| Directive::VillainGroupTotal(number(caps.get(1))))
        .collect()
}

pub(crate) fn extra_villains(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let text = ctx.text.applicable_text();
    if pattern!(r"If playing solo.*?add.*?Villain Group").is_match(text) {
        return if ctx.players.get() == 1 {
            vec![Directive::ExtraVillains(1)]
        } else {
            Vec::new()
        };
    }
    pattern!(r"\bAdd (an|\d+|one|two|three|four) extra Villain Groups?\b")
        .captures(text)
        .and_then(|caps| count_word(&caps[1]))
        .map(Directive::ExtraVillains)
        .into_iter()
        .collect()
}

/// Extra henchman groups.
///
/// Henchmen headed for the Hero Deck are not groups. A bare digit count is
/// read as a group count only when followed by `Group`.
pub(crate) fn extra_henchmen(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    for clause in ctx.text.applicable() {
        if pattern!(r"to the Hero Deck").is_match(&clause.text) {
            continue;
        }
        if let Some(caps) =
            pattern!(r"\bAdd (an|another|one|two|three|four|\d+) (?:extra )?Henchm[ae]n( Groups?)?").captures(&clause.text)
        {
            let word = &caps[1];
            if word.chars().all(|c| c.is_ascii_digit()) && caps.get(2).is_none() {
                continue;
            }
            if let Some(n) = count_word(word) {
                return vec![Directive::ExtraHenchmen(n)];
            }
        }
    }
    Vec::new()
}

pub(crate) fn double_groups(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    if pattern!(r"Use double the normal number of Villain and Henchman Groups").is_match(ctx.text.applicable_text()) {
        vec![Directive::DoubleGroups]
    } else {
        Vec::new()
    }
}

pub(crate) fn master_strikes(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r"\b(\d+)\s+Master Strikes?\b")
        .captures(ctx.text.applicable_text())
        .map(|caps| Directive::MasterStrikes(number(caps.get(1))))
        .into_iter()
        .collect()
}

/// Villain-deck bystanders: `no Bystanders`, `N total Bystanders`, and
/// additive `Add N [extra] Bystanders` per applicable clause.
pub(crate) fn bystanders(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let text = ctx.text.applicable_text();
    if pattern!(r"\bno Bystanders\b").is_match(text) {
        return vec![Directive::NoBystanders];
    }

    let mut found = Vec::new();
    if let Some(caps) = pattern!(r"\b(\d+)\s+total\s+Bystanders").captures(text) {
        found.push(Directive::TotalBystanders(number(caps.get(1))));
    }
    for clause in ctx.text.applicable() {
        if let Some(caps) = pattern!(r"\bAdd\s+(\d+)\s+(?:extra\s+)?Bystanders\b").captures(&clause.text) {
            found.push(Directive::AddBystanders(number(caps.get(1))));
        }
    }
    found
}

/// Bystanders and henchmen shuffled into the Hero Deck.
///
/// A bystander count in a player-qualified clause wins over the general one.
pub(crate) fn hero_deck_extras(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let mut found = Vec::new();

    let bystander_pattern = pattern!(r"\b(\d+)\s+Bystanders in the Hero Deck");
    let qualified = ctx
        .text
        .qualified()
        .find_map(|clause| bystander_pattern.captures(&clause.text));
    let general = || bystander_pattern.captures(ctx.text.applicable_text());
    if let Some(caps) = qualified.or_else(general) {
        found.push(Directive::BystandersInHeroDeck(number(caps.get(1))));
    }

    if let Some(caps) = pattern!(r"\bAdd (\d+) (?:extra )?Henchmen.*?to the Hero Deck").captures(ctx.text.applicable_text()) {
        found.push(Directive::HenchmenInHeroDeck(number(caps.get(1))));
    }
    found
}

/// Sidekicks, ambitions, officers, tactics and the ambush scheme.
pub(crate) fn villain_deck_extras(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let text = ctx.text.applicable_text();
    let mut found = Vec::new();

    if let Some(caps) = pattern!(r"\bAdd (\d+) Sidekicks to the Villain Deck").captures(text) {
        found.push(Directive::Sidekicks(number(caps.get(1))));
    }
    if let Some(caps) = pattern!(r"\bAdd (\d+) (?:random )?Ambition cards").captures(text) {
        found.push(Directive::Ambitions(number(caps.get(1))));
    }
    if let Some(caps) = pattern!(r"\bAdd (\d+) S\.H\.I\.E\.L\.D\. Officers to the Villain Deck").captures(text) {
        found.push(Directive::Officers(number(caps.get(1))));
    }
    if pattern!(r"Shuffle (?:the )?Mastermind Tactics into the Villain Deck").is_match(text) {
        found.push(Directive::Tactics(MASTERMIND_TACTICS));
    }
    if pattern!(r"Shuffle its Ambush Scheme into the Villain Deck").is_match(text) {
        found.push(Directive::AmbushScheme);
    }
    found
}

/// `Add an extra Henchman Group ... as "X"`. The extra slot itself comes
/// from [`extra_henchmen`].
pub(crate) fn henchman_alias(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r#"Add an extra Henchman Group.*?as ["“'‘](.*?)["“”'’]"#)
        .captures(ctx.text.applicable_text())
        .map(|caps| clean_title(&caps[1]))
        .filter(|alias| !alias.is_empty())
        .map(Directive::HenchmanAlias)
        .into_iter()
        .collect()
}
