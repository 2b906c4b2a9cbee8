use crate::core::scoring::calculate_match_score;
use crate::models::{FarmerProfile, LandPlot, MatchResult, RequesterProfile, ScoredMatch, ScoringWeights};

/// Default number of matches returned by the ranker
pub const DEFAULT_LIMIT: usize = 3;

/// A requester role and the role it is matched against.
///
/// Farmers are matched against lands and lands against farmers; `pair`
/// orders the two sides the way the scorer expects them.
pub trait Counterpart {
    type Candidate;

    fn pair<'a>(&'a self, candidate: &'a Self::Candidate) -> (&'a FarmerProfile, &'a LandPlot);
}

impl Counterpart for FarmerProfile {
    type Candidate = LandPlot;

    fn pair<'a>(&'a self, candidate: &'a LandPlot) -> (&'a FarmerProfile, &'a LandPlot) {
        (self, candidate)
    }
}

impl Counterpart for LandPlot {
    type Candidate = FarmerProfile;

    fn pair<'a>(&'a self, candidate: &'a FarmerProfile) -> (&'a FarmerProfile, &'a LandPlot) {
        (candidate, self)
    }
}

/// Result of ranking a candidate set
#[derive(Debug)]
pub struct RankedMatches<T> {
    pub matches: Vec<ScoredMatch<T>>,
    pub total_candidates: usize,
}

/// Ranked matches for a requester of either role
#[derive(Debug)]
pub enum MatchList {
    Lands(RankedMatches<LandPlot>),
    Farmers(RankedMatches<FarmerProfile>),
}

impl MatchList {
    pub fn len(&self) -> usize {
        match self {
            MatchList::Lands(ranked) => ranked.matches.len(),
            MatchList::Farmers(ranked) => ranked.matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_candidates(&self) -> usize {
        match self {
            MatchList::Lands(ranked) => ranked.total_candidates,
            MatchList::Farmers(ranked) => ranked.total_candidates,
        }
    }
}

/// Scores farmer/land pairs and ranks candidate sets
///
/// Every pair is scored independently, so the matcher holds nothing but its
/// weights and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single farmer/land pair
    pub fn score(&self, farmer: &FarmerProfile, land: &LandPlot) -> MatchResult {
        calculate_match_score(farmer, land, &self.weights)
    }

    /// Rank candidates for a requester
    ///
    /// # Arguments
    /// * `requester` - The farmer or land matches are found for
    /// * `candidates` - Records of the opposite role
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// Matches sorted by descending score. Equal scores keep their input order.
    pub fn rank_matches<R: Counterpart>(
        &self,
        requester: &R,
        candidates: Vec<R::Candidate>,
        limit: usize,
    ) -> RankedMatches<R::Candidate> {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredMatch<R::Candidate>> = candidates
            .into_iter()
            .map(|candidate| {
                let (farmer, land) = requester.pair(&candidate);
                let result = self.score(farmer, land);
                ScoredMatch { candidate, result }
            })
            .collect();

        // Stable sort: ties stay in input order
        matches.sort_by(|a, b| b.score().cmp(&a.score()));
        matches.truncate(limit);

        RankedMatches {
            matches,
            total_candidates,
        }
    }

    /// Rank against whichever candidate pool matches the requester's role
    pub fn rank_for(
        &self,
        requester: &RequesterProfile,
        farmers: Vec<FarmerProfile>,
        lands: Vec<LandPlot>,
        limit: usize,
    ) -> MatchList {
        match requester {
            RequesterProfile::Farmer(farmer) => {
                MatchList::Lands(self.rank_matches(farmer, lands, limit))
            }
            RequesterProfile::Landowner(land) => {
                MatchList::Farmers(self.rank_matches(land, farmers, limit))
            }
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ExperienceLevel};

    fn create_farmer(id: &str, crops: &[&str], lat: f64, lon: f64) -> FarmerProfile {
        FarmerProfile {
            id: id.to_string(),
            name: format!("Farmer {}", id),
            email: None,
            location: "Ludhiana, Punjab".to_string(),
            latitude: Some(lat),
            longitude: Some(lon),
            years_of_experience: 10,
            specialty_crops: crops.iter().map(|c| c.to_string()).collect(),
            experience_level: ExperienceLevel::Experienced,
            availability: Availability::FullTime,
            expected_rate: None,
        }
    }

    fn create_land(id: &str, crops: &[&str], lat: f64, lon: f64) -> LandPlot {
        LandPlot {
            id: id.to_string(),
            owner_name: format!("Owner {}", id),
            owner_id: None,
            email: None,
            location: "Ludhiana, Punjab".to_string(),
            latitude: Some(lat),
            longitude: Some(lon),
            size_acres: 8.0,
            soil_type: "Loamy".to_string(),
            preferred_crops: crops.iter().map(|c| c.to_string()).collect(),
            availability_period: "Year-round".to_string(),
            price_expectation: None,
            created_at: None,
        }
    }

    #[test]
    fn test_rank_lands_for_farmer() {
        let matcher = Matcher::with_default_weights();
        let farmer = create_farmer("f1", &["Wheat"], 30.90, 75.85);

        let lands = vec![
            create_land("far", &["Wheat"], 33.00, 75.85),   // ~233km
            create_land("near", &["Wheat"], 30.91, 75.85),  // ~1km
            create_land("mid", &["Cotton"], 30.91, 75.85),  // no crops
        ];

        let result = matcher.rank_matches(&farmer, lands, 10);

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.candidate.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "mid", "far"]);
        assert_eq!(result.matches[0].score(), 100);
    }

    #[test]
    fn test_rank_farmers_for_land() {
        let matcher = Matcher::with_default_weights();
        let land = create_land("l1", &["Rice"], 30.90, 75.85);

        let farmers = vec![
            create_farmer("a", &["Maize"], 30.90, 75.85),
            create_farmer("b", &["rice"], 30.90, 75.85),
        ];

        let result = matcher.rank_matches(&land, farmers, 1);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].candidate.id, "b");
        assert_eq!(result.matches[0].result.match_reasons[2], "Matches crops: rice");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let farmer = create_farmer("f1", &["Wheat"], 30.90, 75.85);
        let lands: Vec<LandPlot> = ["x", "y", "z"]
            .iter()
            .map(|id| create_land(id, &["Wheat"], 30.90, 75.85))
            .collect();

        let result = matcher.rank_matches(&farmer, lands, 3);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.candidate.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_candidates() {
        let matcher = Matcher::default();
        let farmer = create_farmer("f1", &["Wheat"], 30.90, 75.85);

        let result = matcher.rank_matches(&farmer, Vec::new(), DEFAULT_LIMIT);

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_rank_for_dispatches_on_role() {
        let matcher = Matcher::default();
        let requester = RequesterProfile::Landowner(create_land("l1", &["Rice"], 30.90, 75.85));
        let farmers = vec![create_farmer("a", &["Rice"], 30.90, 75.85)];
        let lands = vec![create_land("l2", &["Rice"], 30.90, 75.85)];

        match matcher.rank_for(&requester, farmers, lands, DEFAULT_LIMIT) {
            MatchList::Farmers(ranked) => assert_eq!(ranked.matches[0].candidate.id, "a"),
            MatchList::Lands(_) => panic!("landowner should be matched against farmers"),
        }
    }
}
