//! Extra mastermind demands and mastermind-conditional twists.

use crate::resolve::mutually_contains;

use super::clauses::SchemeText;
use super::extractor::ExtractContext;
use super::modifiers::{Directive, SchemeModifiers, TwistCount};
use super::{count_word, number};

/// `Put N additional Masterminds` (digits or one-four).
pub(crate) fn lurking(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r"\bPut (\w+) additional Masterminds")
        .captures(ctx.text.applicable_text())
        .and_then(|caps| count_word(&caps[1]))
        .filter(|&n| n > 0)
        .map(Directive::LurkingMasterminds)
        .into_iter()
        .collect()
}

/// `Choose N other Masterminds`.
pub(crate) fn tyrants(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    pattern!(r"\bChoose (\d+) other Masterminds")
        .captures(ctx.text.applicable_text())
        .map(|caps| number(caps.get(1)))
        .filter(|&n| n > 0)
        .map(Directive::TyrantMasterminds)
        .into_iter()
        .collect()
}

/// `Set aside a second "Drained" Mastermind`, plus one villain slot when
/// its always-leads group joins the villain deck.
pub(crate) fn drained(ctx: &mut ExtractContext<'_>, _: &SchemeModifiers) -> Vec<Directive> {
    let text = ctx.text.applicable_text();
    if !pattern!(r#"Set aside a second ["“'‘]Drained["“”'’] Mastermind"#).is_match(text) {
        return Vec::new();
    }
    let mut found = vec![Directive::DrainedMastermind];
    if pattern!(r#"Add its ["“'‘]Always Leads["“”'’] Villains as an extra Villain Group"#).is_match(text) {
        found.push(Directive::ExtraVillains(1));
    }
    found
}

/// `If using <Mastermind>: Use N Twists total`, checked once the
/// mastermind is known. Names match by containment either way, so
/// `Lilith` covers `Lilith, Mother of Demons`.
#[must_use]
pub fn mastermind_twist_override(text: &SchemeText, mastermind: &str) -> Option<TwistCount> {
    text.mastermind_clauses().find_map(|clause| {
        let caps = pattern!(r"If using (.*?): Use (\d+) Twists? total").captures(&clause.text)?;
        let named = caps[1].trim();
        mutually_contains(named, mastermind)
            .then(|| TwistCount::derived(i64::from(number(caps.get(2))), format!("If using {named}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::EntityCatalog;
    use crate::core::PlayerCount;
    use crate::directives::extractor::run_matcher;

    #[test]
    fn test_lurking_and_tyrants() {
        let catalog = EntityCatalog::default();
        let (found, _) = run_matcher(lurking, &catalog, "Put three additional Masterminds out of play.", 2, Vec::new());
        assert_eq!(found, vec![Directive::LurkingMasterminds(3)]);

        let (found, _) = run_matcher(tyrants, &catalog, "Choose 3 other Masterminds.", 2, Vec::new());
        assert_eq!(found, vec![Directive::TyrantMasterminds(3)]);
    }

    #[test]
    fn test_drained_adds_slot() {
        let catalog = EntityCatalog::default();
        let (found, _) = run_matcher(
            drained,
            &catalog,
            "Set aside a second “Drained” Mastermind. Add its “Always Leads” Villains as an extra Villain Group.",
            2,
            Vec::new(),
        );
        assert_eq!(found, vec![Directive::DrainedMastermind, Directive::ExtraVillains(1)]);
    }

    #[test]
    fn test_mastermind_twist_override() {
        let text = SchemeText::new(
            "Setup: 8 Twists. If using Lilith: Use 1 Twist total.",
            PlayerCount::new(2).unwrap(),
        );
        let twists = mastermind_twist_override(&text, "Lilith, Mother of Demons").unwrap();
        assert_eq!(twists.count, 1);
        assert_eq!(twists.note.as_deref(), Some("If using Lilith"));
        assert!(mastermind_twist_override(&text, "Magneto").is_none());
    }
}
