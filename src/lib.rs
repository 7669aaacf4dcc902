//! # legendary-setup
//!
//! Setup generator for the Legendary deck-building card game.
//!
//! ## Design Principles
//!
//! 1. **Text In, Values Out**: Scheme text is read once into an immutable
//!    `SchemeModifiers` value. Nothing downstream re-reads the text except the
//!    mastermind-conditional twist check.
//!
//! 2. **N-Player First**: Every API takes a `PlayerCount` as context. Base
//!    quotas come from `SetupRules`, never from literals.
//!
//! 3. **Report, Don't Fail**: Short pools and unknown names become
//!    `Advisory` values returned beside the result. Only a missing
//!    category or a bad player count is fatal.
//!
//! ## Architecture
//!
//! - **Request-Scoped State**: The RNG, ban lists and used lists live in a
//!   generation context built per call. A seeded `SetupRng` replays exactly.
//!
//! - **Persistent Name Lists**: Requirement and ban lists are idempotent
//!   ordered sets backed by `im-rs`, so drafts clone in O(1).
//!
//! ## Modules
//!
//! - `core`: player counts, RNG, configuration, errors, diagnostics, name lists
//! - `cards`: catalog records and the loaded `EntityCatalog`
//! - `resolve`: tiered name resolution (exact, containment, fuzzy)
//! - `directives`: scheme text -> `SchemeModifiers`
//! - `sidedecks`: the scheme-specific custom side decks
//! - `selection`: constrained group and hero selection
//! - `setup`: the assembler and the serializable `SetupResult`

/// A lazily compiled, case-insensitive, process-wide regex.
macro_rules! pattern {
    ($re:literal) => {{
        static PATTERN: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
            regex::Regex::new(concat!("(?i)", $re)).expect("static pattern compiles")
        });
        &*PATTERN
    }};
}

pub mod core;
pub mod cards;
pub mod resolve;
pub mod directives;
pub mod sidedecks;
pub mod selection;
pub mod setup;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Advisory, Diagnostics, GeneratorConfig, NameList, PlayerCondition, PlayerCount, SetupError,
    SetupRng, SetupRules,
};

pub use crate::cards::{
    is_in_selected_sets, Card, CardGroup, CatalogRecords, Category, Entity, EntityCatalog, Hero,
    Mastermind, Scheme,
};

pub use crate::resolve::NameResolver;

pub use crate::directives::{Directive, DirectiveExtractor, SchemeModifiers, SchemeText, TwistCount};

pub use crate::sidedecks::SideDeckBuilder;

pub use crate::selection::{BalancedScorer, HeroScorer, ScoreWeights};

pub use crate::setup::{
    GeneratedSetup, HeroConstraint, SetupGenerator, SetupPlan, SetupPlanner, SetupResult, UserSelections,
    VillainDeckSetup,
};
