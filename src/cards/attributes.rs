//! Tag maps attached to entities and cards.
//!
//! Catalog records carry `tags` as `category -> [tag]`, for example
//! `{"mechanics": ["Mechanic_Wound"], "general": ["Gen_KO"]}`. The engine
//! only ever needs the flattened tag set.

use std::collections::BTreeMap;

/// Tag category -> tags.
pub type TagMap = BTreeMap<String, Vec<String>>;

/// Iterate every tag in a map, category order then list order.
pub fn flatten_tags(tags: &TagMap) -> impl Iterator<Item = &str> {
    tags.values().flat_map(|list| list.iter().map(String::as_str))
}

/// Well-known synergy tags the hero scorer reacts to.
pub mod synergy {
    pub const WOUND: &str = "Mechanic_Wound";
    pub const RESCUE: &str = "Mechanic_Rescue";
    pub const ARTIFACT: &str = "Mechanic_Artifact";
    pub const KO: &str = "Gen_KO";
    pub const RISE_OF_THE_DEAD: &str = "Mechanic_Rise_Dead";
}
