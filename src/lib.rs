//! Landmatch - matching service pairing farmers with land listings
//!
//! The core scores a farmer against a land listing on location, price, crops,
//! experience and availability, and ranks candidate sets for either side of
//! the marketplace. Storage and HTTP live in `services` and `routes`.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance::haversine_distance, Matcher};
pub use models::{FarmerProfile, LandPlot, MatchResult, RequesterProfile, ScoredMatch, ScoringWeights};

/// Score a farmer/land pair with the default weights
pub fn score_match(farmer: &FarmerProfile, land: &LandPlot) -> MatchResult {
    Matcher::with_default_weights().score(farmer, land)
}

/// Rank candidates of the opposite role for a requester with the default weights
pub fn rank_matches<R: crate::core::Counterpart>(
    requester: &R,
    candidates: Vec<R::Candidate>,
    limit: usize,
) -> Vec<ScoredMatch<R::Candidate>> {
    Matcher::with_default_weights()
        .rank_matches(requester, candidates, limit)
        .matches
}
