//! Setup configuration types.
//!
//! - `BaseQuota` / `SetupRules`: the per-player-count base table every scheme
//!   modifies
//! - `GeneratorConfig`: knobs for one generator (seed, sampling, fuzziness)

use serde::{Deserialize, Serialize};

use super::PlayerCount;

/// Base group/bystander/hero counts for one player count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseQuota {
    /// Villain groups in the villain deck.
    pub villains: u32,
    /// Henchman groups in the villain deck.
    pub henchmen: u32,
    /// Bystanders in the villain deck.
    pub bystanders: u32,
    /// Heroes in the hero deck.
    pub heroes: u32,
}

/// The base setup table, indexed by player count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRules {
    quotas: [BaseQuota; 5],
}

impl Default for SetupRules {
    fn default() -> Self {
        const fn q(villains: u32, henchmen: u32, bystanders: u32, heroes: u32) -> BaseQuota {
            BaseQuota {
                villains,
                henchmen,
                bystanders,
                heroes,
            }
        }
        Self {
            quotas: [
                q(1, 1, 1, 5),
                q(2, 1, 2, 5),
                q(3, 1, 8, 5),
                q(3, 2, 8, 5),
                q(4, 2, 12, 6),
            ],
        }
    }
}

impl SetupRules {
    /// Base quota for a player count.
    ///
    /// ```
    /// use legendary_setup::core::{PlayerCount, SetupRules};
    ///
    /// let rules = SetupRules::default();
    /// let five = rules.base(PlayerCount::new(5).unwrap());
    /// assert_eq!((five.villains, five.henchmen, five.heroes), (4, 2, 6));
    /// ```
    #[must_use]
    pub fn base(&self, players: PlayerCount) -> BaseQuota {
        self.quotas[usize::from(players.get() - 1)]
    }
}

/// Configuration for a setup generator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Random seed. `None` draws a fresh seed per generation.
    /// Same seed produces identical setups.
    pub seed: Option<u64>,

    /// Candidates sampled per pick in the open hero stage (default: 10).
    pub hero_sample_size: usize,

    /// Upper bound of the uniform jitter added to every hero score (default: 1.5).
    /// Keeps otherwise identical runs varied.
    pub score_jitter: f64,

    /// Share of significant search words that must appear in a candidate
    /// name for a fuzzy match (default: 0.75).
    pub fuzzy_threshold: f64,

    /// Base per-player-count table.
    pub rules: SetupRules,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hero_sample_size: 10,
            score_jitter: 1.5,
            fuzzy_threshold: 0.75,
            rules: SetupRules::default(),
        }
    }
}

impl GeneratorConfig {
    /// Fix the seed so every generation replays identically.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the open-stage sample size.
    #[must_use]
    pub fn with_hero_sample_size(mut self, size: usize) -> Self {
        self.hero_sample_size = size.max(1);
        self
    }

    /// Set the score jitter bound (0 disables jitter).
    #[must_use]
    pub fn with_score_jitter(mut self, jitter: f64) -> Self {
        self.score_jitter = jitter.max(0.0);
        self
    }

    /// Set the fuzzy-match threshold.
    #[must_use]
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}
