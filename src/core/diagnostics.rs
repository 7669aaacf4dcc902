//! Non-fatal advisories collected during one generation.
//!
//! Advisories never interrupt the pipeline. They are returned next to the
//! result for the consuming interface to render, and each one is also
//! emitted as a `tracing` warning when recorded.

use serde::{Deserialize, Serialize};

use crate::cards::Category;

/// A recoverable condition hit while building a setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    /// A demand needed more entities than remained; everything available was taken.
    UnderSupply {
        demand: String,
        needed: usize,
        available: usize,
    },
    /// A manual override did not match any catalog entry; fell back to random.
    AmbiguousSelection { category: Category, name: String },
    /// A scheme requirement named something absent from the catalog.
    UnresolvedRequirement { category: Category, name: String },
    /// A custom side-deck could not be built.
    SideDeckUnavailable { deck: String, reason: String },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnderSupply {
                demand,
                needed,
                available,
            } => write!(
                f,
                "not enough candidates for {demand}: needed {needed}, found {available}"
            ),
            Self::AmbiguousSelection { category, name } => {
                write!(f, "no {} matches '{name}', using Random", category.singular())
            }
            Self::UnresolvedRequirement { category, name } => {
                write!(f, "required {} '{name}' not found", category.singular())
            }
            Self::SideDeckUnavailable { deck, reason } => {
                write!(f, "could not build {deck}: {reason}")
            }
        }
    }
}

/// Ordered advisory list for one generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    advisories: Vec<Advisory>,
}

impl Diagnostics {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory.
    pub fn push(&mut self, advisory: Advisory) {
        tracing::warn!("{advisory}");
        self.advisories.push(advisory);
    }

    /// Record an under-supply advisory when `available < needed`.
    pub fn check_supply(&mut self, demand: impl Into<String>, needed: usize, available: usize) {
        if available < needed {
            self.push(Advisory::UnderSupply {
                demand: demand.into(),
                needed,
                available,
            });
        }
    }

    /// Recorded advisories, oldest first.
    #[must_use]
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Take the recorded advisories.
    #[must_use]
    pub fn into_vec(self) -> Vec<Advisory> {
        self.advisories
    }
}
