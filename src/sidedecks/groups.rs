//! Side decks built from a villain or henchman group.
//!
//! A group already banned by an earlier directive cannot be taken again;
//! the deck is reported unavailable instead.

use crate::cards::{Category, Entity};
use crate::core::Advisory;
use crate::directives::{clean_title, number, Directive, ExtractContext, SchemeModifiers};

use super::{deck, SideDeckBuilder};

fn unavailable(ctx: &mut ExtractContext<'_>, deck: String, group: &str) -> Vec<Directive> {
    ctx.diagnostics.push(Advisory::SideDeckUnavailable {
        deck,
        reason: format!("'{group}' is banned from this setup"),
    });
    Vec::new()
}

/// `Shuffle together N Bystanders and M X Henchmen as an "T"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Infected;

impl SideDeckBuilder for Infected {
    fn kind(&self) -> &'static str {
        "infected"
    }

    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        let Some(caps) = pattern!(r#"Shuffle together (\d+) Bystanders and (\d+) (.*?) Henchmen as an? ["“'‘](.*?)["“”'’]"#)
            .captures(ctx.text.applicable_text())
        else {
            return Vec::new();
        };
        let bystanders = number(caps.get(1));
        let henchmen = number(caps.get(2));
        let fragment = caps[3].trim();
        let title = clean_title(&caps[4]);

        let mut found = Vec::new();
        let group_line = match ctx.resolver.henchman(fragment) {
            Some(group) if draft.banned_henchmen.any_within(&group.name) => {
                return unavailable(ctx, title, &group.name);
            }
            Some(group) => {
                found.push(Directive::BanHenchman(group.name.clone()));
                format!("{henchmen} {}", group.display_name())
            }
            None => {
                ctx.diagnostics.push(Advisory::UnresolvedRequirement {
                    category: Category::Henchman,
                    name: fragment.to_string(),
                });
                format!("{henchmen} {fragment} (Unknown)")
            }
        };
        found.push(deck(title, vec![format!("{bystanders} Bystanders"), group_line]));
        found
    }
}

/// `Shuffle N X Villains into a ... "T" deck`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonsterPit;

impl SideDeckBuilder for MonsterPit {
    fn kind(&self) -> &'static str {
        "monster pit"
    }

    fn build(&self, ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        let Some(caps) = pattern!(r#"Shuffle (\d+) (.*?) Villains into a .*?["“'‘](.*?)["“”'’] deck"#)
            .captures(ctx.text.applicable_text())
        else {
            return Vec::new();
        };
        let count = number(caps.get(1));
        let fragment = caps[2].trim();
        let title = clean_title(&caps[3]);

        match ctx.resolver.villain(fragment) {
            Some(group) if draft.banned_villains.any_within(&group.name) => unavailable(ctx, title, &group.name),
            Some(group) => vec![
                Directive::BanVillain(group.name.clone()),
                deck(title, vec![format!("{count} cards from {}", group.display_name())]),
            ],
            None => {
                ctx.diagnostics.push(Advisory::SideDeckUnavailable {
                    deck: title,
                    reason: format!("no villain group matches '{fragment}'"),
                });
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::extractor::run_matcher;
    use crate::directives::CustomDeck;
    use crate::sidedecks::fixtures::catalog;

    fn infected(ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        Infected.build(ctx, draft)
    }

    fn pit(ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
        MonsterPit.build(ctx, draft)
    }

    #[test]
    fn test_infected_bans_henchmen() {
        let (found, diagnostics) = run_matcher(
            infected,
            &catalog(),
            "Shuffle together 10 Bystanders and 10 Sentinel Henchmen as an “Infected Deck.”",
            2,
            Vec::new(),
        );
        assert_eq!(
            found,
            vec![
                Directive::BanHenchman("Sentinel".into()),
                Directive::CustomDeck(CustomDeck {
                    title: "Infected Deck".into(),
                    lines: vec!["10 Bystanders".into(), "10 Sentinel (Core Set)".into()],
                }),
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_infected_unknown_henchmen() {
        let (found, diagnostics) = run_matcher(
            infected,
            &catalog(),
            "Shuffle together 5 Bystanders and 5 Xyz Henchmen as an “Infected Deck”.",
            2,
            Vec::new(),
        );
        assert!(matches!(
            &found[..],
            [Directive::CustomDeck(CustomDeck { lines, .. })] if lines[1] == "5 Xyz (Unknown)"
        ));
        assert_eq!(diagnostics.advisories().len(), 1);
    }

    #[test]
    fn test_infected_banned_henchmen() {
        let (found, diagnostics) = run_matcher(
            infected,
            &catalog(),
            "Shuffle together 10 Bystanders and 10 Sentinel Henchmen as an “Infected Deck.”",
            2,
            vec![Directive::BanHenchman("Sentinel".into())],
        );
        assert!(found.is_empty());
        assert!(matches!(
            diagnostics.advisories(),
            [Advisory::SideDeckUnavailable { deck, .. }] if deck == "Infected Deck"
        ));
    }

    #[test]
    fn test_monster_pit() {
        let (found, _) = run_matcher(
            pit,
            &catalog(),
            "Shuffle 8 Monsters Unleashed Villains into a face-down 'Monster Pit' deck.",
            2,
            Vec::new(),
        );
        assert_eq!(
            found,
            vec![
                Directive::BanVillain("Monsters Unleashed".into()),
                Directive::CustomDeck(CustomDeck {
                    title: "Monster Pit".into(),
                    lines: vec!["8 cards from Monsters Unleashed (Monsters Unleashed)".into()],
                }),
            ]
        );
    }

    #[test]
    fn test_monster_pit_banned_group() {
        let (found, diagnostics) = run_matcher(
            pit,
            &catalog(),
            "Shuffle 8 Monsters Unleashed Villains into a face-down 'Monster Pit' deck.",
            2,
            vec![Directive::BanVillain("Monsters Unleashed".into())],
        );
        assert!(found.is_empty());
        assert!(matches!(
            diagnostics.advisories(),
            [Advisory::SideDeckUnavailable { deck, reason }]
                if deck == "Monster Pit" && reason.contains("banned")
        ));
    }

    #[test]
    fn test_monster_pit_unknown_group() {
        let (found, diagnostics) = run_matcher(
            pit,
            &catalog(),
            "Shuffle 8 Brood Villains into a face-down 'Monster Pit' deck.",
            2,
            Vec::new(),
        );
        assert!(found.is_empty());
        assert!(matches!(
            diagnostics.advisories(),
            [Advisory::SideDeckUnavailable { deck, .. }] if deck == "Monster Pit"
        ));
    }
}
