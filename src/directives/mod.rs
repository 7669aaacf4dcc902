//! Scheme text -> setup directives.
//!
//! - `clauses`: clause segmentation and player-count qualifiers
//! - `modifiers`: the `Directive` tagged union and the frozen `SchemeModifiers`
//! - `twists`, `counts`, `heroes`, `requirements`, `masterminds`: one matcher
//!   per concern
//! - `extractor`: the ordered matcher catalogue
//!
//! Every pattern is compiled once, case-insensitively, on first use
//! (see the crate-level `pattern!` macro).

pub mod clauses;
pub mod modifiers;
pub mod extractor;
mod counts;
mod heroes;
mod masterminds;
mod requirements;
mod twists;

pub use clauses::{Clause, SchemeText};
pub use extractor::{DirectiveExtractor, ExtractContext, Matcher};
pub use masterminds::mastermind_twist_override;
pub use modifiers::{
    BystanderRule, CustomDeck, Directive, MastermindDemands, ModifiersBuilder, NameRequirement,
    SchemeModifiers, TeamRequirement, TwistCount, VillainDeckHeroes, DEFAULT_MASTER_STRIKES,
    DEFAULT_TWISTS, MASTERMIND_TACTICS,
};

/// Parse a count written as digits or a small number word.
///
/// `a`, `an` and `another` count as one.
pub(crate) fn count_word(word: &str) -> Option<u32> {
    match word.trim().to_lowercase().as_str() {
        "a" | "an" | "another" | "one" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        other => digits(other),
    }
}

/// Trim whitespace, surrounding quotes and a trailing period from a captured title.
pub(crate) fn clean_title(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| matches!(c, '"' | '“' | '”' | '\'' | '‘' | '’'))
        .trim()
        .trim_end_matches('.')
        .trim()
        .to_string()
}

/// Parse a captured decimal group; captures are digit-only by construction.
///
/// A missing or empty capture is zero; a value past `u32::MAX` saturates.
pub(crate) fn number(capture: Option<regex::Match<'_>>) -> u32 {
    capture.map_or(0, |m| digits(m.as_str()).unwrap_or(0))
}

fn digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse().unwrap_or(u32::MAX))
}
