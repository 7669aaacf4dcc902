//! Catalog-aware name resolution.
//!
//! `NameResolver` looks a loose fragment up in one category using three
//! tiers, first hit wins:
//!
//! 1. exact case-insensitive name
//! 2. singular-stripped substring
//! 3. word-subset fuzzy match (threshold from `GeneratorConfig`)
//!
//! It also binds manual-override display strings back to catalog entries.

use crate::cards::{CardGroup, Category, Entity, EntityCatalog, Hero, Mastermind, Scheme, RANDOM_OPTION};

use super::matching::{exact_match, singular_substring_match, split_display_name, word_subset_match};

/// A resolved catalog entity of any category.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Hero(&'a Hero),
    Mastermind(&'a Mastermind),
    Villain(&'a CardGroup),
    Henchman(&'a CardGroup),
    Scheme(&'a Scheme),
}

impl<'a> EntityRef<'a> {
    /// Category of the resolved entity.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Hero(_) => Category::Hero,
            Self::Mastermind(_) => Category::Mastermind,
            Self::Villain(_) => Category::Villain,
            Self::Henchman(_) => Category::Henchman,
            Self::Scheme(_) => Category::Scheme,
        }
    }

    /// Entity name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::Hero(e) => &e.name,
            Self::Mastermind(e) => &e.name,
            Self::Villain(e) | Self::Henchman(e) => &e.name,
            Self::Scheme(e) => &e.name,
        }
    }
}

/// Three-tier name lookup over one catalog.
#[derive(Clone, Copy, Debug)]
pub struct NameResolver<'a> {
    catalog: &'a EntityCatalog,
    fuzzy_threshold: f64,
}

impl<'a> NameResolver<'a> {
    /// Create a resolver with the given fuzzy threshold (0.0-1.0).
    #[must_use]
    pub fn new(catalog: &'a EntityCatalog, fuzzy_threshold: f64) -> Self {
        Self {
            catalog,
            fuzzy_threshold,
        }
    }

    /// The catalog being searched.
    #[must_use]
    pub fn catalog(&self) -> &'a EntityCatalog {
        self.catalog
    }

    /// Three-tier lookup in an arbitrary slice.
    #[must_use]
    pub fn find_in<'b, T: Entity>(&self, fragment: &str, items: &'b [T]) -> Option<&'b T> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return None;
        }
        items
            .iter()
            .find(|item| exact_match(fragment, item.name()))
            .or_else(|| items.iter().find(|item| singular_substring_match(fragment, item.name())))
            .or_else(|| {
                items
                    .iter()
                    .find(|item| word_subset_match(fragment, item.name(), self.fuzzy_threshold))
            })
    }

    #[must_use]
    pub fn hero(&self, fragment: &str) -> Option<&'a Hero> {
        self.find_in(fragment, self.catalog.heroes())
    }

    #[must_use]
    pub fn villain(&self, fragment: &str) -> Option<&'a CardGroup> {
        self.find_in(fragment, self.catalog.villains())
    }

    #[must_use]
    pub fn henchman(&self, fragment: &str) -> Option<&'a CardGroup> {
        self.find_in(fragment, self.catalog.henchmen())
    }

    /// Villain or henchman group lookup.
    #[must_use]
    pub fn group(&self, fragment: &str, category: Category) -> Option<&'a CardGroup> {
        self.find_in(fragment, self.catalog.groups(category))
    }

    /// Resolve a fragment within one category.
    #[must_use]
    pub fn resolve(&self, fragment: &str, category: Category) -> Option<EntityRef<'a>> {
        match category {
            Category::Hero => self.hero(fragment).map(EntityRef::Hero),
            Category::Mastermind => self
                .find_in(fragment, self.catalog.masterminds())
                .map(EntityRef::Mastermind),
            Category::Villain => self.villain(fragment).map(EntityRef::Villain),
            Category::Henchman => self.henchman(fragment).map(EntityRef::Henchman),
            Category::Scheme => self
                .find_in(fragment, self.catalog.schemes())
                .map(EntityRef::Scheme),
        }
    }

    /// Bind a manual-override string (`Name` or `Name (Set)`) to an entity.
    ///
    /// Exact names only; the set suffix picks between same-named entries.
    /// `"Random"` and unknown names bind to nothing.
    #[must_use]
    pub fn by_display_name<'b, T: Entity>(&self, display: &str, items: &'b [T]) -> Option<&'b T> {
        by_display_name(display, items)
    }
}

/// Catalog-independent form of [`NameResolver::by_display_name`].
#[must_use]
pub fn by_display_name<'b, T: Entity>(display: &str, items: &'b [T]) -> Option<&'b T> {
    let display = display.trim();
    if display.is_empty() || display == RANDOM_OPTION {
        return None;
    }
    if let (name, Some(set)) = split_display_name(display) {
        if let Some(found) = items.iter().find(|i| i.name() == name && i.set() == set) {
            return Some(found);
        }
    }
    items.iter().find(|i| i.name() == display)
}
