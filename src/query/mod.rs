//! Derived views over the stored profile collection.
//!
//! Both views are pure and keep the collection's order. They are cheap
//! enough to recompute on every render.

use crate::profile::{MatchFilter, Profile, SearchFilter};

/// Profiles whose username or interest contains the query, ignoring case.
/// An empty query returns everything.
pub fn search<'a>(profiles: &'a [Profile], filter: &SearchFilter) -> Vec<&'a Profile> {
    let needle = filter.text.to_lowercase();
    profiles
        .iter()
        .filter(|p| {
            p.username.to_lowercase().contains(&needle)
                || p.interest.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Profiles with `min_age <= age <= max_age`, excluding the caller's own
/// username.
///
/// A filter missing either bound yields no matches rather than an error.
pub fn matches<'a>(profiles: &'a [Profile], filter: &MatchFilter) -> Vec<&'a Profile> {
    let Some((min, max)) = age_range(filter) else {
        return Vec::new();
    };
    profiles
        .iter()
        .filter(|p| p.username != filter.exclude_username)
        .filter(|p| (min..=max).contains(&i64::from(p.age)))
        .collect()
}

fn age_range(filter: &MatchFilter) -> Option<(i64, i64)> {
    let min = filter.min_age.trim();
    let max = filter.max_age.trim();
    if min.is_empty() || max.is_empty() {
        return None;
    }
    Some((min.parse().ok()?, max.parse().ok()?))
}
