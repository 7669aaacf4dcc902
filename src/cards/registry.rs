//! Entity catalog for the active rule set.
//!
//! The `EntityCatalog` is an immutable snapshot of heroes, masterminds,
//! villain groups, henchman groups and schemes, already filtered to the
//! caller's selected expansion sets. One catalog may serve any number of
//! generations.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardGroup, Category, Entity, Hero, Mastermind, Scheme};
use crate::core::SetupError;

/// Sentinel option meaning "let the generator choose".
pub const RANDOM_OPTION: &str = "Random";

/// Does an item's `/`-joined set string belong to one of the selected sets?
///
/// Comparison is case-insensitive and ignores surrounding whitespace.
///
/// ```
/// use legendary_setup::cards::is_in_selected_sets;
///
/// assert!(is_in_selected_sets("Core Set / Promo", &["core set"]));
/// assert!(!is_in_selected_sets("Dark City", &["Core Set"]));
/// assert!(!is_in_selected_sets("", &["Core Set"]));
/// ```
#[must_use]
pub fn is_in_selected_sets<S: AsRef<str>>(item_sets: &str, selected: &[S]) -> bool {
    item_sets
        .split('/')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .any(|s| selected.iter().any(|sel| sel.as_ref().trim().to_lowercase() == s))
}

/// Raw catalog records as handed over by the loading collaborator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogRecords {
    #[serde(default)]
    pub heroes: Vec<Hero>,
    #[serde(default)]
    pub masterminds: Vec<Mastermind>,
    #[serde(default)]
    pub villains: Vec<CardGroup>,
    #[serde(default)]
    pub henchmen: Vec<CardGroup>,
    #[serde(default)]
    pub schemes: Vec<Scheme>,
}

impl CatalogRecords {
    /// Keep only records belonging to one of the selected sets.
    #[must_use]
    pub fn filter_to_sets<S: AsRef<str>>(self, selected: &[S]) -> Self {
        fn keep<T: Entity, S: AsRef<str>>(items: Vec<T>, selected: &[S]) -> Vec<T> {
            items
                .into_iter()
                .filter(|item| is_in_selected_sets(item.set(), selected))
                .collect()
        }
        Self {
            heroes: keep(self.heroes, selected),
            masterminds: keep(self.masterminds, selected),
            villains: keep(self.villains, selected),
            henchmen: keep(self.henchmen, selected),
            schemes: keep(self.schemes, selected),
        }
    }

    /// Every distinct set name mentioned by any record, sorted.
    #[must_use]
    pub fn all_sets(&self) -> Vec<String> {
        let mut sets: Vec<String> = Vec::new();
        let mut push = |set: &str| {
            for s in set.split('/').map(str::trim).filter(|s| !s.is_empty()) {
                if !sets.iter().any(|x| x == s) {
                    sets.push(s.to_string());
                }
            }
        };
        self.heroes.iter().for_each(|e| push(&e.set));
        self.masterminds.iter().for_each(|e| push(&e.set));
        self.villains.iter().for_each(|e| push(&e.set));
        self.henchmen.iter().for_each(|e| push(&e.set));
        self.schemes.iter().for_each(|e| push(&e.set));
        sets.sort();
        sets
    }
}

/// Immutable, pre-filtered entity collections.
///
/// ## Example
///
/// ```
/// use legendary_setup::cards::{CardGroup, CatalogRecords, EntityCatalog};
///
/// let records = CatalogRecords {
///     villains: vec![CardGroup::new("Skrulls", "Core Set")],
///     ..Default::default()
/// };
/// let catalog = EntityCatalog::new(records);
/// assert_eq!(catalog.villains().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EntityCatalog {
    records: CatalogRecords,
}

impl EntityCatalog {
    /// Wrap already-filtered records.
    #[must_use]
    pub fn new(records: CatalogRecords) -> Self {
        Self { records }
    }

    /// Parse a JSON catalog object and keep only the selected sets.
    ///
    /// `None` keeps every record.
    pub fn from_json_str<S: AsRef<str>>(json: &str, selected: Option<&[S]>) -> Result<Self, SetupError> {
        let records: CatalogRecords =
            serde_json::from_str(json).map_err(|source| SetupError::CatalogParse { source })?;
        let records = match selected {
            Some(sets) => records.filter_to_sets(sets),
            None => records,
        };
        tracing::debug!(
            heroes = records.heroes.len(),
            masterminds = records.masterminds.len(),
            villains = records.villains.len(),
            henchmen = records.henchmen.len(),
            schemes = records.schemes.len(),
            "catalog loaded"
        );
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn heroes(&self) -> &[Hero] {
        &self.records.heroes
    }

    #[must_use]
    pub fn masterminds(&self) -> &[Mastermind] {
        &self.records.masterminds
    }

    #[must_use]
    pub fn villains(&self) -> &[CardGroup] {
        &self.records.villains
    }

    #[must_use]
    pub fn henchmen(&self) -> &[CardGroup] {
        &self.records.henchmen
    }

    #[must_use]
    pub fn schemes(&self) -> &[Scheme] {
        &self.records.schemes
    }

    /// Villain or henchman groups.
    #[must_use]
    pub fn groups(&self, category: Category) -> &[CardGroup] {
        match category {
            Category::Henchman => self.henchmen(),
            _ => self.villains(),
        }
    }

    /// Number of entities in a category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Hero => self.heroes().len(),
            Category::Mastermind => self.masterminds().len(),
            Category::Villain => self.villains().len(),
            Category::Henchman => self.henchmen().len(),
            Category::Scheme => self.schemes().len(),
        }
    }

    /// Fail with `DataUnavailable` if a category is empty.
    pub fn require(&self, category: Category) -> Result<(), SetupError> {
        if self.count(category) == 0 {
            Err(SetupError::DataUnavailable { category })
        } else {
            Ok(())
        }
    }

    /// Names of a category as offered to a manual-override widget.
    ///
    /// `"Random"` first, then sorted unique names; a name carried by more
    /// than one set is offered once per set as `Name (Set)`.
    #[must_use]
    pub fn display_options(&self, category: Category) -> Vec<String> {
        fn options<T: Entity>(items: &[T]) -> Vec<String> {
            let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
            for item in items {
                *counts.entry(item.name()).or_insert(0) += 1;
            }
            let mut names: Vec<String> = items
                .iter()
                .map(|item| {
                    if counts[item.name()] > 1 {
                        item.display_name()
                    } else {
                        item.name().to_string()
                    }
                })
                .collect();
            names.sort();
            names.dedup();
            names.insert(0, RANDOM_OPTION.to_string());
            names
        }
        match category {
            Category::Hero => options(self.heroes()),
            Category::Mastermind => options(self.masterminds()),
            Category::Villain => options(self.villains()),
            Category::Henchman => options(self.henchmen()),
            Category::Scheme => options(self.schemes()),
        }
    }
}
