//! Catalog entities and the catalog itself.
//!
//! - `Hero`, `CardGroup` (villain/henchman), `Mastermind`, `Scheme`: static
//!   records deserialized from the loading collaborator's JSON
//! - `EntityCatalog`: immutable snapshot for the active set selection

pub mod attributes;
pub mod definition;
pub mod registry;

pub use attributes::{flatten_tags, synergy, TagMap};
pub use definition::{Card, CardGroup, Category, Entity, Hero, Mastermind, Scheme};
pub use registry::{is_in_selected_sets, CatalogRecords, EntityCatalog, RANDOM_OPTION};
