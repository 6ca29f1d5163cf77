use serde::Serialize;
use tracing::debug;

use wellness_model::{Cluster, Destination, region_name, theme_name};

use crate::rank::{ScoredDestination, sort_descending, top_k};

/// Requested restrictions on the destination set. Empty lists restrict
/// nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub themes: Vec<String>,
    pub regions: Vec<u32>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty() && self.regions.is_empty()
    }

    pub fn matches(&self, destination: &Destination) -> bool {
        (self.themes.is_empty() || self.themes.iter().any(|theme| *theme == destination.theme))
            && (self.regions.is_empty() || self.regions.contains(&destination.region))
    }
}

/// Why a filtered ranking came back empty. Not an error: the presentation
/// layer turns this into a user-facing message, and keeping it a value lets
/// the degrade-to-empty policy change without touching ranking logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyReason {
    /// The filters eliminated every destination.
    NoMatch,
    /// No destination in the filtered set carries a precomputed score for
    /// the active cluster.
    ClusterScoreUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Ranked(Vec<ScoredDestination>),
    Empty(EmptyReason),
}

impl FilterOutcome {
    /// Degrade an empty outcome to an empty list.
    pub fn into_items(self) -> Vec<ScoredDestination> {
        match self {
            FilterOutcome::Ranked(items) => items,
            FilterOutcome::Empty(_) => Vec::new(),
        }
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            FilterOutcome::Ranked(_) => None,
            FilterOutcome::Empty(reason) => Some(*reason),
        }
    }
}

/// Restrict the destination set, then re-rank by the active cluster's
/// precomputed score. Destinations without that score are excluded from the
/// ranking (they cannot be placed); if that excludes everything the outcome
/// names the condition instead of failing.
pub fn apply_filters(
    cluster: Cluster,
    destinations: &[Destination],
    criteria: &FilterCriteria,
    k: usize,
) -> FilterOutcome {
    let filtered: Vec<&Destination> = destinations
        .iter()
        .filter(|destination| criteria.matches(destination))
        .collect();
    if filtered.is_empty() {
        debug!(cluster = %cluster, "filters matched no destinations");
        return FilterOutcome::Empty(EmptyReason::NoMatch);
    }

    let mut scored: Vec<ScoredDestination> = filtered
        .into_iter()
        .filter_map(|destination| {
            destination.cluster_score(cluster).map(|score| ScoredDestination {
                destination: destination.clone(),
                weighted_score: score,
            })
        })
        .collect();
    if scored.is_empty() {
        debug!(cluster = %cluster, "no precomputed score for the active cluster");
        return FilterOutcome::Empty(EmptyReason::ClusterScoreUnavailable);
    }

    sort_descending(&mut scored);
    scored.truncate(k);
    FilterOutcome::Ranked(scored)
}

/// Single entry point for the presentation layer: weighted ranking when no
/// filters are requested, filtered re-ranking otherwise (degrading to an
/// empty list on either empty condition).
pub fn score_and_rank(
    cluster: Cluster,
    destinations: &[Destination],
    k: usize,
    criteria: &FilterCriteria,
) -> Vec<ScoredDestination> {
    if criteria.is_empty() {
        top_k(cluster, destinations, k)
    } else {
        apply_filters(cluster, destinations, criteria, k).into_items()
    }
}

/// A selectable filter value with its display name and how many
/// destinations carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOption {
    pub code: String,
    pub name: Option<&'static str>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionOption {
    pub code: u32,
    pub name: Option<&'static str>,
    pub count: usize,
}

/// Theme codes present in the dataset, most common first (code order on
/// equal counts).
pub fn theme_filter_options(destinations: &[Destination]) -> Vec<ThemeOption> {
    let mut counts = std::collections::BTreeMap::<&str, usize>::new();
    for destination in destinations {
        *counts.entry(destination.theme.as_str()).or_default() += 1;
    }
    let mut options: Vec<ThemeOption> = counts
        .into_iter()
        .map(|(code, count)| ThemeOption {
            code: code.to_string(),
            name: theme_name(code),
            count,
        })
        .collect();
    options.sort_by(|a, b| b.count.cmp(&a.count));
    options
}

/// Region codes present in the dataset, most common first.
pub fn region_filter_options(destinations: &[Destination]) -> Vec<RegionOption> {
    let mut counts = std::collections::BTreeMap::<u32, usize>::new();
    for destination in destinations {
        *counts.entry(destination.region).or_default() += 1;
    }
    let mut options: Vec<RegionOption> = counts
        .into_iter()
        .map(|(code, count)| RegionOption {
            code,
            name: region_name(code),
            count,
        })
        .collect();
    options.sort_by(|a, b| b.count.cmp(&a.count));
    options
}
