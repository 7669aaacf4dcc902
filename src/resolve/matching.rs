//! String-level matching primitives.
//!
//! Scheme text names entities loosely ("Sentinels", "Intergalactic Part",
//! "Deadpool" for "Deadpool (Mercs)"). These helpers implement the three
//! tolerance tiers plus the display-name conventions of the override UI.

/// Lowercase and trim.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Split `Name (Set)` into its parts. Plain names return `(name, None)`.
///
/// ```
/// use legendary_setup::resolve::split_display_name;
///
/// assert_eq!(split_display_name("Wolverine (Dark City)"), ("Wolverine", Some("Dark City")));
/// assert_eq!(split_display_name("Storm"), ("Storm", None));
/// ```
#[must_use]
pub fn split_display_name(display: &str) -> (&str, Option<&str>) {
    let display = display.trim();
    if let Some(body) = display.strip_suffix(')') {
        if let Some(open) = body.find(" (") {
            return (&body[..open], Some(&body[open + 2..]));
        }
    }
    (display, None)
}

/// Name with any ` (Set)` suffix removed.
#[must_use]
pub fn strip_set_suffix(display: &str) -> &str {
    split_display_name(display).0
}

/// Tier 1: case-insensitive equality.
#[must_use]
pub fn exact_match(fragment: &str, name: &str) -> bool {
    fragment.trim().eq_ignore_ascii_case(name.trim())
}

/// Tier 2: the fragment, trailing `s` stripped, occurs inside the name.
#[must_use]
pub fn singular_substring_match(fragment: &str, name: &str) -> bool {
    let singular = normalize(fragment);
    let singular = singular.trim_end_matches('s');
    !singular.is_empty() && normalize(name).contains(singular)
}

/// Significant search words: alphanumeric runs longer than two characters.
fn significant_words(fragment: &str) -> Vec<String> {
    normalize(fragment)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// Tier 3: at least `threshold` of the fragment's significant words occur
/// in the name (as substrings, so `part` is found in `party`).
///
/// ```
/// use legendary_setup::resolve::word_subset_match;
///
/// assert!(word_subset_match("Intergalactic Part", "Intergalactic Party Animals", 0.75));
/// assert!(!word_subset_match("Xyz", "Intergalactic Party Animals", 0.75));
/// ```
#[must_use]
pub fn word_subset_match(fragment: &str, name: &str, threshold: f64) -> bool {
    let words = significant_words(fragment);
    if words.is_empty() {
        return false;
    }
    let name = normalize(name);
    let hits = words.iter().filter(|w| name.contains(w.as_str())).count();
    hits as f64 >= words.len() as f64 * threshold
}

/// Either string contains the other, after normalizing.
#[must_use]
pub fn mutually_contains(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}

/// Does a manual pick (possibly `Name (Set)`) already cover a requirement?
///
/// Satisfaction is bidirectional containment between the normalized
/// requirement and the pick's bare name.
#[must_use]
pub fn pick_satisfies(requirement: &str, pick: &str) -> bool {
    mutually_contains(requirement, strip_set_suffix(pick))
}
