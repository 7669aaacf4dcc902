//! Villain and henchman group requirements and bans.
//!
//! Names are resolved against the catalog when possible so the selector
//! sees canonical group names; an unresolved fragment is kept verbatim and
//! reported by the selector if nothing satisfies it.

use crate::cards::Category;

use super::extractor::ExtractContext;
use super::modifiers::{Directive, NameRequirement, SchemeModifiers};
use super::{clean_title, count_word};

fn canonical(ctx: &ExtractContext<'_>, fragment: &str, category: Category) -> String {
    ctx.resolver
        .group(fragment, category)
        .map_or_else(|| fragment.to_string(), |group| group.name.clone())
}

fn strip_article(name: &str) -> &str {
    let trimmed = name.trim();
    trimmed
        .get(..4)
        .filter(|head| head.eq_ignore_ascii_case("the "))
        .map_or(trimmed, |_| trimmed[4..].trim())
}

/// `Include|Add [N] X as [an] [extra] [one of the] Henchmen|Villain|Backup Adversary`.
///
/// `Add`, or an explicit `extra`, also opens a slot for the group.
pub(crate) fn named_groups(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let named = pattern!(
        r"\b(Include|Add) (?:\d+ )?(.*?) as (?:an? )?(extra )?(?:one of the )?(Henchm[ae]n|Villain|Backup Adversar(?:y|ies))"
    );
    let mut found = Vec::new();

    for clause in ctx.text.applicable() {
        for caps in named.captures_iter(&clause.text) {
            let name = clean_title(strip_article(&caps[2]));
            let lower = name.to_lowercase();
            if name.is_empty() || lower.starts_with("its ") || lower.contains("always leads") {
                continue;
            }
            let extra_slot = caps.get(3).is_some() || caps[1].eq_ignore_ascii_case("add");
            let kind = caps[4].to_lowercase();
            found.push(if kind.starts_with("hench") || kind.starts_with("backup") {
                Directive::RequireHenchman {
                    name: canonical(ctx, &name, Category::Henchman),
                    extra_slot,
                }
            } else {
                Directive::RequireVillain {
                    name: canonical(ctx, &name, Category::Villain),
                    extra_slot,
                }
            });
        }
    }
    found
}

/// `Always include X, Y and Z`: each part is looked up as henchmen, then
/// villains, then heroes.
pub(crate) fn implicit(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let mut found = Vec::new();

    for clause in ctx.text.applicable() {
        let Some(caps) = pattern!(r"Always include (?:the )?(.*?)(?:\.|$)").captures(&clause.text) else {
            continue;
        };
        for part in pattern!(r",\s*and\s+|\s+and\s+|,\s*").split(&caps[1]) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let stripped = pattern!(r"\b(?:Villain Groups?|Henchm[ae]n Groups?|Villains?|Henchm[ae]n|Heroes?)\b")
                .replace_all(part, "");
            let fragment = match strip_article(&stripped) {
                "" => part,
                cleaned => cleaned,
            };

            if let Some(group) = ctx.resolver.henchman(fragment) {
                found.push(Directive::RequireHenchman {
                    name: group.name.clone(),
                    extra_slot: false,
                });
            } else if let Some(group) = ctx.resolver.villain(fragment) {
                found.push(Directive::RequireVillain {
                    name: group.name.clone(),
                    extra_slot: false,
                });
            } else if let Some(hero) = ctx.resolver.hero(fragment) {
                found.push(Directive::RequireHeroName(NameRequirement::new(hero.name.clone(), 1)));
            } else {
                tracing::debug!(fragment, "implicit requirement not in catalog");
            }
        }
    }
    found
}

/// `X Villain Group required`.
pub(crate) fn explicit_villain(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    ctx.text
        .applicable()
        .find_map(|clause| pattern!(r"([a-zA-Z\s]+) Villain Group required").captures(&clause.text))
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .map(|name| Directive::RequireVillain {
            name: canonical(ctx, &name, Category::Villain),
            extra_slot: false,
        })
        .into_iter()
        .collect()
}

/// `Include exactly N Villain Group(s) with "K"`: draws N groups whose cards
/// mention the keyword. Banned groups never enter the pool.
pub(crate) fn keyword_groups(ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
    let Some(caps) = pattern!(r#"Include exactly (one|two|three|\d+) Villain Groups? with ["“'‘]\s*(.*?)\s*["“”'’]"#)
        .captures(ctx.text.applicable_text())
    else {
        return Vec::new();
    };
    let count = count_word(&caps[1]).unwrap_or(1) as usize;
    let keyword = caps[2].replace('.', "").trim().to_string();

    let candidates: Vec<&str> = ctx
        .resolver
        .catalog()
        .villains()
        .iter()
        .filter(|group| group.mentions(&keyword))
        .map(|group| group.name.as_str())
        .filter(|name| !draft.banned_villains.any_within(name))
        .collect();
    let fresh: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|name| !draft.required_villains.contains(name))
        .collect();
    let pool = if fresh.is_empty() { candidates } else { fresh };

    ctx.diagnostics
        .check_supply(format!("villain groups with \"{keyword}\""), count, pool.len());
    ctx.rng
        .sample(&pool, count)
        .into_iter()
        .map(|name| Directive::RequireVillain {
            name: name.to_string(),
            extra_slot: false,
        })
        .collect()
}

/// `Include either "A" or "B" Villain Group`: one of the two, drawn.
pub(crate) fn either_or(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let Some(caps) = pattern!(r#"Include either (?:the )?["“'‘](.+?)["“”'’] or ["“'‘](.+?)["“”'’] Villain Group"#)
        .captures(ctx.text.applicable_text())
    else {
        return Vec::new();
    };
    let options = [clean_title(&caps[1]), clean_title(&caps[2])];
    let Some(choice) = ctx.rng.choose(&options).cloned() else {
        return Vec::new();
    };
    vec![Directive::RequireVillain {
        name: canonical(ctx, &choice, Category::Villain),
        extra_slot: false,
    }]
}

/// `Set aside the "X" Villain Group`.
pub(crate) fn set_aside(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r#"Set aside (?:the )?["“'‘](.+?)["“”'’] Villain Group"#)
        .captures(ctx.text.applicable_text())
        .map(|caps| Directive::BanVillain(clean_title(&caps[1])))
        .into_iter()
        .collect()
}

/// `Stack N X per player`: bans X when it names a henchman group.
pub(crate) fn stacked_henchmen(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r"\bStack \d+ (.*?) per player")
        .captures(ctx.text.applicable_text())
        .and_then(|caps| ctx.resolver.henchman(caps[1].trim()))
        .map(|group| Directive::BanHenchman(group.name.clone()))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardGroup, CatalogRecords, EntityCatalog, Hero};
    use crate::core::Advisory;
    use crate::directives::extractor::run_matcher;

    fn catalog() -> EntityCatalog {
        let living_dead = Card {
            abilities: vec!["Rise of the Living Dead".into()],
            ..Card::default()
        };
        EntityCatalog::new(CatalogRecords {
            heroes: vec![Hero::new("Party Thor", "Champions")],
            villains: vec![
                CardGroup::new("Intergalactic Party Animals", "Champions"),
                CardGroup::new("Skrulls", "Core Set"),
                CardGroup::new("Army of the Dead", "Dark City").with_card(living_dead.clone()),
                CardGroup::new("Zombie Horde", "Promo").with_card(living_dead),
            ],
            henchmen: vec![
                CardGroup::new("Sentinel", "Core Set"),
                CardGroup::new("Cops", "Villains"),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn test_named_groups() {
        let (found, _) = run_matcher(
            named_groups,
            &catalog(),
            "Include 10 Sentinels as extra Henchmen. Add Skrulls as one of the Villain Groups.",
            2,
            Vec::new(),
        );
        assert_eq!(
            found,
            vec![
                Directive::RequireHenchman {
                    name: "Sentinel".into(),
                    extra_slot: true
                },
                Directive::RequireVillain {
                    name: "Skrulls".into(),
                    extra_slot: true
                },
            ]
        );
    }

    #[test]
    fn test_named_groups_skip_always_leads() {
        let (found, _) = run_matcher(
            named_groups,
            &catalog(),
            "Add its “Always Leads” Villains as an extra Villain Group.",
            2,
            Vec::new(),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_implicit_with_fuzzy_part() {
        let (found, _) = run_matcher(
            implicit,
            &catalog(),
            "Always include Party Thor Hero and Intergalactic Part Villain Group.",
            2,
            Vec::new(),
        );
        assert_eq!(
            found,
            vec![
                Directive::RequireHeroName(NameRequirement::new("Party Thor", 1)),
                Directive::RequireVillain {
                    name: "Intergalactic Party Animals".into(),
                    extra_slot: false
                },
            ]
        );
    }

    #[test]
    fn test_explicit_villain() {
        let (found, _) = run_matcher(explicit_villain, &catalog(), "Skrull Villain Group required.", 2, Vec::new());
        assert_eq!(
            found,
            vec![Directive::RequireVillain {
                name: "Skrulls".into(),
                extra_slot: false
            }]
        );
    }

    #[test]
    fn test_keyword_groups_under_supply() {
        let (found, diagnostics) = run_matcher(
            keyword_groups,
            &catalog(),
            "Include exactly three Villain Groups with “Rise of the Living Dead.”",
            2,
            Vec::new(),
        );
        assert_eq!(found.len(), 2);
        assert!(matches!(
            diagnostics.advisories(),
            [Advisory::UnderSupply { needed: 3, available: 2, .. }]
        ));
    }

    #[test]
    fn test_keyword_groups_prefers_fresh() {
        let (found, diagnostics) = run_matcher(
            keyword_groups,
            &catalog(),
            "Include exactly one Villain Group with “Rise of the Living Dead”.",
            2,
            vec![Directive::RequireVillain {
                name: "Army of the Dead".into(),
                extra_slot: false,
            }],
        );
        assert_eq!(
            found,
            vec![Directive::RequireVillain {
                name: "Zombie Horde".into(),
                extra_slot: false
            }]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_keyword_groups_skip_banned() {
        let (found, diagnostics) = run_matcher(
            keyword_groups,
            &catalog(),
            "Include exactly one Villain Group with “Rise of the Living Dead”.",
            2,
            vec![Directive::BanVillain("Zombie Horde".into())],
        );
        assert_eq!(
            found,
            vec![Directive::RequireVillain {
                name: "Army of the Dead".into(),
                extra_slot: false
            }]
        );
        assert!(diagnostics.is_empty());

        let (found, diagnostics) = run_matcher(
            keyword_groups,
            &catalog(),
            "Include exactly two Villain Groups with “Rise of the Living Dead”.",
            2,
            vec![Directive::BanVillain("Zombie Horde".into())],
        );
        assert_eq!(found.len(), 1);
        assert!(matches!(
            diagnostics.advisories(),
            [Advisory::UnderSupply { needed: 2, available: 1, .. }]
        ));
    }

    #[test]
    fn test_either_or_draws_one() {
        let (found, _) = run_matcher(
            either_or,
            &catalog(),
            "Include either the “Skrulls” or “Zombie Horde” Villain Group.",
            2,
            Vec::new(),
        );
        assert_eq!(found.len(), 1);
        assert!(matches!(
            &found[0],
            Directive::RequireVillain { name, .. } if name == "Skrulls" || name == "Zombie Horde"
        ));
    }

    #[test]
    fn test_set_aside_and_stacked() {
        let (found, _) = run_matcher(set_aside, &catalog(), "Set aside the “Skrulls” Villain Group.", 2, Vec::new());
        assert_eq!(found, vec![Directive::BanVillain("Skrulls".into())]);

        let (found, _) = run_matcher(stacked_henchmen, &catalog(), "Stack 2 Cops per player.", 2, Vec::new());
        assert_eq!(found, vec![Directive::BanHenchman("Cops".into())]);

        let (found, _) = run_matcher(stacked_henchmen, &catalog(), "Stack 2 Twists per player.", 2, Vec::new());
        assert!(found.is_empty());
    }
}
