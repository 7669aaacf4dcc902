//! Villain and henchman group selection.
//!
//! Priority, highest first:
//!
//! 1. scheme requirements not already covered by a manual pick
//! 2. the mastermind's always-leads group, while under quota
//! 3. manual picks that are not banned, while under quota
//! 4. random fill from the unbanned remainder
//!
//! Scheme requirements are never dropped to respect the quota.

use crate::cards::{CardGroup, Category, Entity, RANDOM_OPTION};
use crate::core::{Advisory, Diagnostics, NameList, SetupRng};
use crate::resolve::{pick_satisfies, NameResolver};

/// Everything the selector needs for one group category.
#[derive(Clone, Copy, Debug)]
pub struct GroupRequest<'r> {
    /// `Villain` or `Henchman`.
    pub category: Category,
    /// Scheme-required names, in priority order.
    pub required: &'r NameList,
    /// The mastermind's always-leads group, when it belongs to this category.
    pub always_leads: Option<&'r str>,
    /// Manual picks as display strings (`Name` or `Name (Set)`).
    pub picks: &'r [String],
    /// Ban fragments; a group is banned when its name contains one.
    pub banned: &'r NameList,
    /// Groups wanted in total.
    pub quota: usize,
}

impl GroupRequest<'_> {
    fn covered_by_pick(&self, requirement: &str) -> bool {
        self.picks.iter().any(|pick| pick_satisfies(requirement, pick))
    }
}

fn already(selected: &[&CardGroup], group: &CardGroup) -> bool {
    selected.iter().any(|s| s.same_entity(group))
}

/// Select the groups for one category.
///
/// ## Example
///
/// ```
/// use legendary_setup::cards::{CardGroup, CatalogRecords, Category, EntityCatalog};
/// use legendary_setup::core::{Diagnostics, NameList, SetupRng};
/// use legendary_setup::resolve::NameResolver;
/// use legendary_setup::selection::{select_groups, GroupRequest};
///
/// let catalog = EntityCatalog::new(CatalogRecords {
///     villains: vec![CardGroup::new("Skrulls", "Core Set"), CardGroup::new("Brotherhood", "Core Set")],
///     ..Default::default()
/// });
/// let required: NameList = ["Skrulls"].into_iter().collect();
/// let request = GroupRequest {
///     category: Category::Villain,
///     required: &required,
///     always_leads: None,
///     picks: &[],
///     banned: &NameList::new(),
///     quota: 2,
/// };
/// let mut rng = SetupRng::new(1);
/// let mut diagnostics = Diagnostics::new();
/// let picked = select_groups(NameResolver::new(&catalog, 0.75), &request, &mut rng, &mut diagnostics);
/// assert_eq!(picked[0].name, "Skrulls");
/// assert_eq!(picked.len(), 2);
/// ```
pub fn select_groups<'a>(
    resolver: NameResolver<'a>,
    request: &GroupRequest<'_>,
    rng: &mut SetupRng,
    diagnostics: &mut Diagnostics,
) -> Vec<&'a CardGroup> {
    let category = request.category;
    let catalog_groups = resolver.catalog().groups(category);
    let mut selected: Vec<&'a CardGroup> = Vec::new();

    // 1. Scheme requirements
    for requirement in request.required.iter() {
        if request.covered_by_pick(requirement) {
            tracing::debug!(%category, requirement, "requirement covered by manual pick");
            continue;
        }
        match resolver.group(requirement, category) {
            Some(group) if !already(&selected, group) => selected.push(group),
            Some(_) => {}
            None => diagnostics.push(Advisory::UnresolvedRequirement {
                category,
                name: requirement.to_string(),
            }),
        }
    }
    tracing::debug!(%category, selected = selected.len(), "scheme requirements placed");

    // 2. Always-leads group
    if let Some(leads) = request.always_leads {
        if !request.covered_by_pick(leads) && selected.len() < request.quota {
            if let Some(group) = resolver.group(leads, category) {
                if !already(&selected, group) {
                    tracing::debug!(%category, group = %group.name, "always-leads group placed");
                    selected.push(group);
                }
            }
        }
    }

    // 3. Manual picks
    for pick in request.picks {
        if selected.len() >= request.quota {
            break;
        }
        let pick = pick.trim();
        if pick.is_empty() || pick == RANDOM_OPTION {
            continue;
        }
        match resolver.by_display_name(pick, catalog_groups) {
            Some(group) if request.banned.any_within(&group.name) => {
                tracing::debug!(%category, pick, "manual pick is banned by the scheme");
            }
            Some(group) if !already(&selected, group) => selected.push(group),
            Some(_) => {}
            None => diagnostics.push(Advisory::AmbiguousSelection {
                category,
                name: pick.to_string(),
            }),
        }
    }

    // 4. Random fill
    let remaining = request.quota.saturating_sub(selected.len());
    if remaining > 0 {
        let pool: Vec<&'a CardGroup> = catalog_groups
            .iter()
            .filter(|group| !already(&selected, group) && !request.banned.any_within(&group.name))
            .collect();
        diagnostics.check_supply(category.to_string(), request.quota, selected.len() + pool.len());
        selected.extend(rng.sample(&pool, remaining));
    }

    tracing::debug!(%category, quota = request.quota, selected = selected.len(), "groups selected");
    selected
}
