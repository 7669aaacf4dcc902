//! Hero scoring for the open selection stage.
//!
//! Scorers are trait-based so the balancing heuristic can be swapped:
//! - `HeroScorer`: how attractive a candidate is next to the current roster
//! - `BalancedScorer`: mechanic synergy, cost curve, team and class overlap

use serde::{Deserialize, Serialize};

use crate::cards::{synergy, Hero};

// =============================================================================
// Scorer trait
// =============================================================================

/// What the scorer may know about the setup besides the roster.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreContext<'r> {
    /// Flattened tags of the scheme, the mastermind and the villain groups.
    pub synergy_tags: &'r [String],
    /// Villain-deck bystander override, if the scheme sets one.
    pub bystander_override: Option<u32>,
}

impl ScoreContext<'_> {
    fn has(&self, tag: &str) -> bool {
        self.synergy_tags.iter().any(|t| t == tag)
    }
}

/// Scores one candidate hero against the roster picked so far.
///
/// Higher is better. The selector adds its own jitter on top.
pub trait HeroScorer: Send + Sync {
    fn score(&self, context: &ScoreContext<'_>, roster: &[&Hero], candidate: &Hero) -> f64;
}

// =============================================================================
// Balanced scorer
// =============================================================================

/// Constants of [`BalancedScorer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Per active mechanic the candidate's text supports.
    pub mechanic: f64,
    /// A bystander override above this activates the rescue synergy.
    pub rescue_override_threshold: u32,
    /// First pick with an average cost in 3.5-4.5.
    pub flexible_first_pick: f64,
    /// Expensive roster (avg > 4.2), cheap candidate (< 3.5).
    pub cheap_relief: f64,
    /// Expensive roster, expensive candidate (> 4.5). Subtracted.
    pub expensive_penalty: f64,
    /// Cheap roster (avg < 3.0), heavy candidate (> 4.0).
    pub heavy_relief: f64,
    /// Balanced roster, candidate in 3.0-4.0.
    pub sweet_spot: f64,
    /// Candidate references its own `[team]` and the team is on the roster.
    pub team_trigger: f64,
    /// Candidate's team is on the roster without a reference.
    pub team_flavor: f64,
    /// Candidate shares a class with the roster.
    pub shared_class: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            mechanic: 5.0,
            rescue_override_threshold: 5,
            flexible_first_pick: 2.0,
            cheap_relief: 4.0,
            expensive_penalty: 2.0,
            heavy_relief: 3.0,
            sweet_spot: 1.0,
            team_trigger: 4.0,
            team_flavor: 0.5,
            shared_class: 1.5,
        }
    }
}

/// Default scorer: rewards heroes that feed the villains' mechanics and keep
/// the hero deck's cost curve and team/class mix coherent.
#[derive(Clone, Debug, Default)]
pub struct BalancedScorer {
    pub weights: ScoreWeights,
}

impl BalancedScorer {
    #[must_use]
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    fn mechanics(&self, context: &ScoreContext<'_>, text: &str) -> f64 {
        let mentions_any = |needles: &[&str]| needles.iter().any(|n| text.contains(n));
        let rescue_active = context.has(synergy::RESCUE)
            || context
                .bystander_override
                .is_some_and(|n| n > self.weights.rescue_override_threshold);

        let active = [
            context.has(synergy::WOUND) && mentions_any(&["wound", "heal"]),
            rescue_active && mentions_any(&["bystander", "rescue"]),
            context.has(synergy::ARTIFACT) && mentions_any(&["artifact"]),
            context.has(synergy::KO) && mentions_any(&["ko "]),
            context.has(synergy::RISE_OF_THE_DEAD) && mentions_any(&["ko pile", "discard pile"]),
        ];
        active.iter().filter(|&&hit| hit).count() as f64 * self.weights.mechanic
    }

    fn cost_curve(&self, roster: &[&Hero], candidate: &Hero) -> f64 {
        let w = &self.weights;
        let candidate_avg = candidate.average_cost().unwrap_or(0.0);
        let (sum, n) = roster
            .iter()
            .flat_map(|hero| hero.costs())
            .fold((0u64, 0u64), |(s, n), c| (s + u64::from(c), n + 1));

        if n == 0 {
            return if (3.5..=4.5).contains(&candidate_avg) {
                w.flexible_first_pick
            } else {
                0.0
            };
        }

        let roster_avg = sum as f64 / n as f64;
        if roster_avg > 4.2 {
            if candidate_avg < 3.5 {
                w.cheap_relief
            } else if candidate_avg > 4.5 {
                -w.expensive_penalty
            } else {
                0.0
            }
        } else if roster_avg < 3.0 {
            if candidate_avg > 4.0 {
                w.heavy_relief
            } else {
                0.0
            }
        } else if (3.0..=4.0).contains(&candidate_avg) {
            w.sweet_spot
        } else {
            0.0
        }
    }

    fn team(&self, roster: &[&Hero], candidate: &Hero, text: &str) -> f64 {
        if !candidate.has_team() {
            return 0.0;
        }
        let team = candidate.team();
        if !roster.iter().any(|hero| hero.team().eq_ignore_ascii_case(team)) {
            return 0.0;
        }
        if text.contains(&format!("[{}]", team.to_lowercase())) {
            self.weights.team_trigger
        } else {
            self.weights.team_flavor
        }
    }

    fn classes(&self, roster: &[&Hero], candidate: &Hero) -> f64 {
        let roster_classes: Vec<&str> = roster.iter().flat_map(|hero| hero.classes()).collect();
        if candidate.classes().iter().any(|class| roster_classes.contains(class)) {
            self.weights.shared_class
        } else {
            0.0
        }
    }
}

impl HeroScorer for BalancedScorer {
    fn score(&self, context: &ScoreContext<'_>, roster: &[&Hero], candidate: &Hero) -> f64 {
        let text = candidate.ability_text();
        self.mechanics(context, &text)
            + self.cost_curve(roster, candidate)
            + self.team(roster, candidate, &text)
            + self.classes(roster, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hero(name: &str, team: &str, cost: u32, class: &str, ability: &str) -> Hero {
        Hero::new(name, "Core Set").with_card(Card {
            abilities: vec![ability.to_string()],
            cost: Some(cost),
            classes: vec![class.to_string()],
            team: Some(team.to_string()),
            ..Card::default()
        })
    }

    #[test]
    fn test_mechanic_synergy() {
        let scorer = BalancedScorer::default();
        let tags = vec![synergy::WOUND.to_string(), synergy::ARTIFACT.to_string()];
        let context = ScoreContext {
            synergy_tags: &tags,
            bystander_override: None,
        };
        let healer = hero("Healer", "Avengers", 2, "Covert", "Heal a Wound. Gain an Artifact.");
        let plain = hero("Plain", "Avengers", 2, "Covert", "Draw a card.");

        assert_eq!(scorer.score(&context, &[], &healer), 10.0);
        assert_eq!(scorer.score(&context, &[], &plain), 0.0);
    }

    #[test]
    fn test_rescue_active_from_bystander_override() {
        let scorer = BalancedScorer::default();
        let rescuer = hero("Rescuer", "X-Men", 2, "Tech", "Rescue a Bystander.");

        let quiet = ScoreContext {
            synergy_tags: &[],
            bystander_override: Some(5),
        };
        let crowded = ScoreContext {
            synergy_tags: &[],
            bystander_override: Some(6),
        };
        assert_eq!(scorer.score(&quiet, &[], &rescuer), 0.0);
        assert_eq!(scorer.score(&crowded, &[], &rescuer), 5.0);
    }

    #[test]
    fn test_cost_curve() {
        let scorer = BalancedScorer::default();
        let context = ScoreContext::default();
        let flexible = hero("Flex", "Unknown", 4, "Tech", "");
        assert_eq!(scorer.score(&context, &[], &flexible), 2.0);

        let pricey = hero("Pricey", "Unknown", 6, "Ranged", "");
        let cheap = hero("Cheap", "Unknown", 2, "Covert", "");
        assert_eq!(scorer.score(&context, &[&pricey], &cheap), 4.0);
        assert_eq!(scorer.score(&context, &[&pricey], &pricey), -2.0 + 1.5);
        assert_eq!(scorer.score(&context, &[&cheap], &pricey), 3.0);
    }

    #[test]
    fn test_team_trigger_beats_flavor() {
        let scorer = BalancedScorer::default();
        let context = ScoreContext::default();
        let anchor = hero("Captain", "Avengers", 5, "Strength", "");
        let trigger = hero("Hawk", "Avengers", 5, "Ranged", "[Avengers]: You get +1 Attack.");
        let flavor = hero("Widow", "Avengers", 5, "Covert", "Draw a card.");

        let with_trigger = scorer.score(&context, &[&anchor], &trigger);
        let with_flavor = scorer.score(&context, &[&anchor], &flavor);
        assert_eq!(with_trigger - with_flavor, 3.5);
    }
}
