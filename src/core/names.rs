//! Ordered, idempotent name lists.
//!
//! Requirement and ban lists can be fed by several scheme phrasings that
//! name the same entity. `NameList` makes insertion idempotent (compared
//! case-insensitively, ignoring surrounding whitespace) while keeping first
//! insertion order, so selection priority stays stable.
//!
//! Backed by `im::Vector`: the directive value owns one copy and each
//! generation clones it in O(1) before extending it with late bans.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordered set of names with case-insensitive identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameList {
    names: Vector<String>,
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl NameList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name unless an equivalent one is present.
    ///
    /// Returns `true` if the name was added.
    ///
    /// ```
    /// use legendary_setup::core::NameList;
    ///
    /// let mut list = NameList::new();
    /// assert!(list.insert("Skrulls"));
    /// assert!(!list.insert("  skrulls "));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.names.push_back(trimmed.to_string());
        true
    }

    /// Insert every name from an iterator.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.insert(name);
        }
    }

    /// Exact (case-insensitive) membership.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| same_name(n, name))
    }

    /// Whether any listed name occurs inside `candidate` (case-insensitive).
    ///
    /// Ban lists hold fragments such as `"Sentinel"`; a ban applies to every
    /// group whose name contains the fragment.
    #[must_use]
    pub fn any_within(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        self.names
            .iter()
            .any(|n| candidate.contains(&n.trim().to_lowercase()))
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Copy into a plain vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
