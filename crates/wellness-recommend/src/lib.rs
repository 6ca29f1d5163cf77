//! Cluster-weighted destination recommendation.
//!
//! Pure computation over the canonical destination records: weighted
//! scoring under the active archetype's affinity coefficients, stable
//! top-K ranking, and theme/region filtering with the precomputed-score
//! re-rank. No I/O, and source records are never mutated.

pub mod filters;
pub mod nearby;
pub mod rank;
pub mod weights;

pub use filters::{
    EmptyReason, FilterCriteria, FilterOutcome, RegionOption, ThemeOption, apply_filters,
    region_filter_options, score_and_rank, theme_filter_options,
};
pub use nearby::{DEFAULT_NEARBY_LIMIT, nearby_attractions};
pub use rank::{DEFAULT_TOP_K, ScoredDestination, score_destinations, top_k};
pub use weights::AffinityWeights;
