//! Name resolution across catalogs.
//!
//! Scheme text and manual overrides refer to entities by name. This module
//! turns those names back into catalog entries.

pub mod matching;
pub mod resolver;

pub use matching::{
    exact_match, mutually_contains, normalize, pick_satisfies, singular_substring_match,
    split_display_name, strip_set_suffix, word_subset_match,
};
pub use resolver::{by_display_name, EntityRef, NameResolver};
