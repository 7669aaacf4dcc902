//! Clause segmentation of scheme text.
//!
//! Scheme descriptions mix unconditional rules with player-count-specific
//! ones: `Setup: 8 Twists. 1-2 players: Use 3 Villain Groups.` Before any
//! concern is matched the text is cut into clauses and each clause's leading
//! qualifier is evaluated, so a qualifier never leaks into a neighbour and a
//! failing clause is dropped wholesale.
//!
//! Splits happen at sentence periods (not inside quotes, not after
//! abbreviations like `S.H.I.E.L.D.` or `Dr.`), semicolons, parentheses and
//! newlines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{PlayerCondition, PlayerCount};

static QUALIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:for\s+|if\s+)?(?:only\s+)?(\d+(?:\s*[-–]\s*\d+)?(?:\s*(?:,|or)\s*\d+)*)\s*players?\b\s*(?:only\b)?\s*:?\s*",
    )
    .expect("qualifier pattern compiles")
});

static MASTERMIND_QUALIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^if using (.+?):").expect("mastermind qualifier pattern compiles"));

static SETUP_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^setup\s*:\s*").expect("setup label pattern compiles"));

const QUOTES: [char; 4] = ['"', '“', '”', '„'];
const HONORIFICS: [&str; 6] = ["dr", "mr", "mrs", "ms", "st", "vs"];

/// One clause of scheme text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    /// Clause text, trimmed, `Setup:` label removed.
    pub text: String,
    /// Leading player-count qualifier, if any.
    pub condition: Option<PlayerCondition>,
    /// Mastermind named by a leading `If using <Mastermind>:`.
    pub mastermind: Option<String>,
    /// Whether the clause applies to this table.
    pub applies: bool,
}

/// Scheme text cut into clauses and evaluated for one player count.
#[derive(Clone, Debug)]
pub struct SchemeText {
    raw: String,
    clauses: Vec<Clause>,
    applicable: String,
}

fn is_abbreviation(before: &str) -> bool {
    let mut rev = before.chars().rev();
    match (rev.next(), rev.next()) {
        // "S.H.I.E.L.D." style: single letter between periods
        (Some(c), Some('.')) if c.is_alphabetic() => return true,
        (Some(c), None) if c.is_uppercase() => return true,
        _ => {}
    }
    let word: String = before
        .chars()
        .rev()
        .take_while(|c| c.is_alphabetic())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    HONORIFICS.contains(&word.to_lowercase().as_str())
}

/// Cut text into raw segments.
fn split_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if QUOTES.contains(&c) {
            in_quote = !in_quote;
            current.push(c);
            continue;
        }
        match c {
            '\n' | '(' | ')' => {
                segments.push(std::mem::take(&mut current));
                in_quote = false;
            }
            ';' if !in_quote => {
                current.push(c);
                segments.push(std::mem::take(&mut current));
            }
            '.' if !in_quote => {
                let at_boundary = chars.peek().map_or(true, |n| n.is_whitespace());
                let abbreviation = is_abbreviation(&current);
                current.push(c);
                if at_boundary && !abbreviation {
                    segments.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_clause(segment: String, players: PlayerCount) -> Clause {
    let text = SETUP_LABEL.replace(&segment, "").into_owned();

    if let Some(caps) = MASTERMIND_QUALIFIER.captures(&text) {
        return Clause {
            mastermind: Some(caps[1].trim().to_string()),
            text,
            condition: None,
            applies: false,
        };
    }

    let condition = QUALIFIER
        .captures(&text)
        .and_then(|caps| PlayerCondition::parse(&caps[1]));
    let applies = condition.as_ref().map_or(true, |c| c.admits(players));
    Clause {
        text,
        condition,
        mastermind: None,
        applies,
    }
}

impl SchemeText {
    /// Segment `raw` and evaluate qualifiers against `players`.
    #[must_use]
    pub fn new(raw: &str, players: PlayerCount) -> Self {
        let clauses: Vec<Clause> = split_segments(raw)
            .into_iter()
            .map(|s| parse_clause(s, players))
            .collect();

        let mut applicable = String::new();
        for clause in clauses.iter().filter(|c| c.applies) {
            if !applicable.is_empty() {
                applicable.push(' ');
            }
            applicable.push_str(&clause.text);
            if !clause.text.ends_with(['.', ';', '!', ':']) {
                applicable.push('.');
            }
        }

        Self {
            raw: raw.to_string(),
            clauses,
            applicable,
        }
    }

    /// Original text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Every clause, applicable or not.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Clauses that apply to this table.
    pub fn applicable(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().filter(|c| c.applies)
    }

    /// Applicable clauses carrying a player-count qualifier.
    pub fn qualified(&self) -> impl Iterator<Item = &Clause> {
        self.applicable().filter(|c| c.condition.is_some())
    }

    /// Applicable clauses rejoined into one text.
    #[must_use]
    pub fn applicable_text(&self) -> &str {
        &self.applicable
    }

    /// Clauses withheld until the mastermind is known.
    pub fn mastermind_clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().filter(|c| c.mastermind.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: u8) -> PlayerCount {
        PlayerCount::new(n).unwrap()
    }

    #[test]
    fn test_split_keeps_abbreviations_and_quotes() {
        let segments = split_segments(
            "Add 12 S.H.I.E.L.D. Officers to the Villain Deck. Set aside “Shrink Tech.” now. Dr. Doom leads.",
        );
        assert_eq!(
            segments,
            vec![
                "Add 12 S.H.I.E.L.D. Officers to the Villain Deck.",
                "Set aside “Shrink Tech.” now.",
                "Dr. Doom leads.",
            ]
        );
    }

    #[test]
    fn test_parentheses_and_newlines_split() {
        let segments = split_segments("8 Twists (1 player: 12 Bystanders in the Hero Deck)\nNext line");
        assert_eq!(
            segments,
            vec!["8 Twists", "1 player: 12 Bystanders in the Hero Deck", "Next line"]
        );
    }

    #[test]
    fn test_qualified_clause_dropped_when_not_admitted() {
        let text = SchemeText::new("Setup: 8 Twists. 2-3 players: Use 3 Villain Groups.", players(4));
        assert_eq!(text.clauses().len(), 2);
        assert_eq!(text.applicable().count(), 1);
        assert_eq!(text.applicable_text(), "8 Twists.");

        let text = SchemeText::new("Setup: 8 Twists. 2-3 players: Use 3 Villain Groups.", players(2));
        assert_eq!(text.qualified().count(), 1);
        assert!(text.applicable_text().contains("Use 3 Villain Groups"));
    }

    #[test]
    fn test_qualifier_variants() {
        for (clause, admitted, rejected) in [
            ("1 or 4 players: 10 Twists.", 4, 2),
            ("For 2 players, add 2 Bystanders.", 2, 3),
            ("If only 1 player: Add another Hero.", 1, 2),
            ("3 player: 7 Twists", 3, 5),
        ] {
            assert_eq!(SchemeText::new(clause, players(admitted)).applicable().count(), 1, "{clause}");
            assert_eq!(SchemeText::new(clause, players(rejected)).applicable().count(), 0, "{clause}");
        }
    }

    #[test]
    fn test_mastermind_clause_withheld() {
        let text = SchemeText::new("Setup: 8 Twists. If using Lilith: Use 1 Twist total.", players(2));
        assert_eq!(text.applicable_text(), "8 Twists.");
        let held: Vec<_> = text.mastermind_clauses().collect();
        assert_eq!(held.len(), 1);
        assert_eq!(held[0].mastermind.as_deref(), Some("Lilith"));
    }
}
