//! Core setup types: player count, RNG, configuration, errors, diagnostics.
//!
//! This module holds the building blocks every pipeline stage shares.
//! Nothing in here knows about scheme text or selection rules.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod diagnostics;
pub mod names;

pub use player::{PlayerCondition, PlayerCount};
pub use rng::SetupRng;
pub use config::{BaseQuota, GeneratorConfig, SetupRules};
pub use error::SetupError;
pub use diagnostics::{Advisory, Diagnostics};
pub use names::NameList;
