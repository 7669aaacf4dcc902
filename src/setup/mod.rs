//! Setup assembly.
//!
//! [`SetupGenerator`] runs the full pipeline for one player count:
//!
//! 1. pick the scheme and extract its directives
//! 2. pick the mastermind plus any lurking, tyrant or drained masterminds
//! 3. select villain and henchman groups
//! 4. select heroes (constraints first, then scored open picks)
//! 5. format everything into a serializable [`SetupResult`]
//!
//! [`SetupPlanner`] is the dry-run counterpart used by manual-override
//! interfaces to size and lock their slots before generating.

pub mod generator;
pub mod plan;
pub mod result;

pub use generator::{SetupGenerator, UserSelections};
pub use plan::{find_option, HeroConstraint, SetupPlan, SetupPlanner};
pub use result::{GeneratedSetup, SetupResult, VillainDeckSetup};
