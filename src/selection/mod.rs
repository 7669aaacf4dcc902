//! Constrained entity selection.
//!
//! - `groups`: villain and henchman groups by four-stage priority
//! - `heroes`: the staged hero roster and the villain-deck heroes
//! - `scoring`: the pluggable `HeroScorer` used by the open hero stage

pub mod groups;
pub mod heroes;
pub mod scoring;

pub use groups::{select_groups, GroupRequest};
pub use heroes::{HeroRequest, HeroSelection, HeroSelector, RosterEntry};
pub use scoring::{BalancedScorer, HeroScorer, ScoreContext, ScoreWeights};
