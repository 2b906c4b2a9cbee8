use crate::core::distance::{distance_between, DistanceTier};
use crate::core::price::{is_unspecified, ParsedPrice};
use crate::models::{FarmerProfile, LandPlot, MatchResult, ScoringWeights};

/// Parcels above this size call for an experienced farmer
const LARGE_PARCEL_ACRES: f64 = 5.0;

/// Outcome of one criterion: the share of its weight it awards (0-1) and an
/// optional human-readable reason
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    pub credit: f64,
    pub reason: Option<String>,
}

impl CriterionScore {
    fn none() -> Self {
        Self { credit: 0.0, reason: None }
    }

    fn full(reason: impl Into<String>) -> Self {
        Self { credit: 1.0, reason: Some(reason.into()) }
    }

    fn partial(credit: f64, reason: Option<String>) -> Self {
        Self { credit, reason }
    }
}

/// Calculate the compatibility score for a farmer and a land listing
///
/// Scoring formula:
/// score = round((
///     location * 0.45 +        # Distance tier, or text match without coordinates
///     price * 0.25 +           # Ratio of comparable price expressions
///     crops * 0.20 +           # Any shared crop
///     experience * 0.05 +      # Large parcels need experienced farmers
///     availability * 0.05      # Year-round land wants full-time farmers
/// ) * 100)
///
/// The sum is not clamped. Reasons follow the criterion order above.
pub fn calculate_match_score(
    farmer: &FarmerProfile,
    land: &LandPlot,
    weights: &ScoringWeights,
) -> MatchResult {
    let criteria = [
        (location_score(farmer, land), weights.location),
        (price_score(farmer, land), weights.price),
        (crop_score(farmer, land), weights.crops),
        (experience_score(farmer, land), weights.experience),
        (availability_score(farmer, land), weights.availability),
    ];

    let mut total = 0.0;
    let mut match_reasons = Vec::new();
    for (criterion, weight) in criteria {
        total += criterion.credit * weight * 100.0;
        if let Some(reason) = criterion.reason {
            match_reasons.push(reason);
        }
    }

    tracing::trace!(
        farmer = %farmer.id,
        land = %land.id,
        total,
        "scored pair"
    );

    MatchResult {
        score: total.max(0.0).round() as u32,
        match_reasons,
    }
}

/// Location criterion: haversine tiers when both sides have coordinates,
/// otherwise case-insensitive containment of the location texts
pub fn location_score(farmer: &FarmerProfile, land: &LandPlot) -> CriterionScore {
    if let (Some(from), Some(to)) = (farmer.coordinates(), land.coordinates()) {
        let distance_km = distance_between(from, to);
        let rounded = distance_km.round();
        let tier = DistanceTier::classify(distance_km);
        let reason = match tier {
            DistanceTier::VeryClose => format!("Top Location: Only ~{}km away", rounded),
            DistanceTier::Close => format!("Close proximity: ~{}km away", rounded),
            DistanceTier::Reasonable => format!("Reasonable distance: ~{}km away", rounded),
            DistanceTier::TooFar => return CriterionScore::none(),
        };
        return CriterionScore::partial(tier.credit(), Some(reason));
    }

    let farmer_location = farmer.location.to_lowercase();
    let land_location = land.location.to_lowercase();
    if farmer_location.contains(&land_location) || land_location.contains(&farmer_location) {
        CriterionScore::partial(0.6, Some(format!("Location match: {}", farmer.location)))
    } else {
        CriterionScore::none()
    }
}

/// Price criterion: comparable prices by ratio, or both left open
pub fn price_score(farmer: &FarmerProfile, land: &LandPlot) -> CriterionScore {
    let farmer_rate = farmer.expected_rate.as_deref();
    let land_price = land.price_expectation.as_deref();

    let parsed = (
        farmer_rate.and_then(ParsedPrice::parse),
        land_price.and_then(ParsedPrice::parse),
    );
    match parsed {
        (Some(farmer_price), Some(land_price)) => match farmer_price.ratio_to(&land_price) {
            Some(ratio) if ratio >= 0.8 => CriterionScore::full("Price match: Budget aligns perfectly"),
            Some(ratio) if ratio >= 0.6 => {
                CriterionScore::partial(0.6, Some("Price within negotiable range".to_string()))
            }
            _ => CriterionScore::none(),
        },
        _ if is_unspecified(farmer_rate) && is_unspecified(land_price) => {
            CriterionScore::full("Price: Open for negotiation")
        }
        _ => CriterionScore::none(),
    }
}

/// Crop criterion: farmer crops that the land also lists
pub fn crop_score(farmer: &FarmerProfile, land: &LandPlot) -> CriterionScore {
    let common = shared_crops(&farmer.specialty_crops, &land.preferred_crops);
    if common.is_empty() {
        CriterionScore::none()
    } else {
        CriterionScore::full(format!("Matches crops: {}", common.join(", ")))
    }
}

/// Crops from `ours` that appear in `theirs`, compared trimmed and
/// case-insensitively, keeping the spelling from `ours`
pub fn shared_crops<'a>(ours: &'a [String], theirs: &[String]) -> Vec<&'a str> {
    let wanted: Vec<String> = theirs.iter().map(|c| c.trim().to_lowercase()).collect();
    ours.iter()
        .filter(|crop| wanted.contains(&crop.trim().to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Experience criterion
pub fn experience_score(farmer: &FarmerProfile, land: &LandPlot) -> CriterionScore {
    if land.size_acres > LARGE_PARCEL_ACRES {
        if farmer.experience_level.handles_large_parcels() {
            CriterionScore::full("Experience level suitable for land size")
        } else {
            CriterionScore::none()
        }
    } else {
        // Small plots suit any level
        CriterionScore::partial(1.0, None)
    }
}

/// Availability criterion
pub fn availability_score(farmer: &FarmerProfile, land: &LandPlot) -> CriterionScore {
    use crate::models::Availability;

    match (land.is_year_round(), farmer.availability) {
        (true, Availability::FullTime) => {
            CriterionScore::full("Availability aligns (Full-time needed)")
        }
        (false, Availability::Seasonal) => CriterionScore::full("Availability aligns (Seasonal)"),
        _ => CriterionScore::partial(0.5, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ExperienceLevel};

    fn create_test_farmer() -> FarmerProfile {
        FarmerProfile {
            id: "f1".to_string(),
            name: "Rajesh Kumar".to_string(),
            email: None,
            location: "Amritsar, Punjab".to_string(),
            latitude: None,
            longitude: None,
            years_of_experience: 15,
            specialty_crops: vec!["Wheat".to_string(), "Rice".to_string()],
            experience_level: ExperienceLevel::Expert,
            availability: Availability::FullTime,
            expected_rate: None,
        }
    }

    fn create_test_land() -> LandPlot {
        LandPlot {
            id: "l1".to_string(),
            owner_name: "Vikram Singh".to_string(),
            owner_id: None,
            email: None,
            location: "Amritsar".to_string(),
            latitude: None,
            longitude: None,
            size_acres: 10.0,
            soil_type: "Loamy".to_string(),
            preferred_crops: vec![" wheat ".to_string()],
            availability_period: "Year-round".to_string(),
            price_expectation: None,
            created_at: None,
        }
    }

    #[test]
    fn test_text_location_fallback() {
        let farmer = create_test_farmer();
        let land = create_test_land();

        let score = location_score(&farmer, &land);
        assert_eq!(score.credit, 0.6);
        assert_eq!(score.reason.as_deref(), Some("Location match: Amritsar, Punjab"));
    }

    #[test]
    fn test_text_location_fallback_either_direction() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();
        farmer.location = "Amritsar".to_string();
        land.location = "Amritsar, Punjab".to_string();

        let score = location_score(&farmer, &land);
        assert_eq!(score.credit, 0.6);
        assert_eq!(score.reason.as_deref(), Some("Location match: Amritsar"));
    }

    #[test]
    fn test_zero_coordinates_are_real_coordinates() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();
        farmer.location = "Gulf of Guinea".to_string();
        land.location = "Null Island".to_string();
        farmer.latitude = Some(0.0);
        farmer.longitude = Some(0.0);
        land.latitude = Some(0.0);
        land.longitude = Some(0.0);

        let score = location_score(&farmer, &land);
        assert_eq!(score.credit, 1.0);
        assert_eq!(score.reason.as_deref(), Some("Top Location: Only ~0km away"));
    }

    #[test]
    fn test_text_fallback_when_one_side_lacks_coordinates() {
        let mut farmer = create_test_farmer();
        farmer.latitude = Some(31.634);
        farmer.longitude = Some(74.872);
        let mut land = create_test_land();
        land.location = "Ludhiana".to_string();

        assert_eq!(location_score(&farmer, &land), CriterionScore::none());
    }

    #[test]
    fn test_location_tiers() {
        let mut farmer = create_test_farmer();
        farmer.latitude = Some(28.6139);
        farmer.longitude = Some(77.2090);
        let mut land = create_test_land();
        land.location = "Somewhere else".to_string();

        // ~0.3 degrees of latitude is ~33 km
        land.latitude = Some(28.9139);
        land.longitude = Some(77.2090);
        let close = location_score(&farmer, &land);
        assert_eq!(close.credit, 0.8);
        assert_eq!(close.reason.as_deref(), Some("Close proximity: ~33km away"));

        // ~1 degree is ~111 km
        land.latitude = Some(29.6139);
        let reasonable = location_score(&farmer, &land);
        assert_eq!(reasonable.credit, 0.4);
        assert!(reasonable.reason.unwrap().starts_with("Reasonable distance: ~111km"));

        land.latitude = Some(31.6139);
        assert_eq!(location_score(&farmer, &land), CriterionScore::none());
    }

    #[test]
    fn test_price_open_for_negotiation() {
        let score = price_score(&create_test_farmer(), &create_test_land());
        assert_eq!(score.credit, 1.0);
        assert_eq!(score.reason.as_deref(), Some("Price: Open for negotiation"));
    }

    #[test]
    fn test_price_one_side_missing() {
        let mut farmer = create_test_farmer();
        farmer.expected_rate = Some("15000/month".to_string());
        assert_eq!(price_score(&farmer, &create_test_land()), CriterionScore::none());

        let mut land = create_test_land();
        land.price_expectation = Some("20000/acre".to_string());
        farmer.expected_rate = Some(String::new());
        assert_eq!(price_score(&farmer, &land), CriterionScore::none());
    }

    #[test]
    fn test_price_ratio_bands() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();

        farmer.expected_rate = Some("7000/month".to_string());
        land.price_expectation = Some("10000/month".to_string());
        let negotiable = price_score(&farmer, &land);
        assert_eq!(negotiable.credit, 0.6);
        assert_eq!(negotiable.reason.as_deref(), Some("Price within negotiable range"));

        farmer.expected_rate = Some("5000/month".to_string());
        assert_eq!(price_score(&farmer, &land), CriterionScore::none());

        farmer.expected_rate = Some("9000".to_string());
        assert_eq!(price_score(&farmer, &land).credit, 1.0);
    }

    #[test]
    fn test_price_ratio_cutoffs_are_inclusive() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();
        land.price_expectation = Some("10000".to_string());

        farmer.expected_rate = Some("8000".to_string());
        let full = price_score(&farmer, &land);
        assert_eq!(full.credit, 1.0);
        assert_eq!(full.reason.as_deref(), Some("Price match: Budget aligns perfectly"));

        farmer.expected_rate = Some("6000".to_string());
        let negotiable = price_score(&farmer, &land);
        assert_eq!(negotiable.credit, 0.6);
        assert_eq!(negotiable.reason.as_deref(), Some("Price within negotiable range"));
    }

    #[test]
    fn test_price_kind_mismatch() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();
        farmer.expected_rate = Some("40".to_string());
        land.price_expectation = Some("Share 40%".to_string());

        assert_eq!(price_score(&farmer, &land), CriterionScore::none());
    }

    #[test]
    fn test_unparseable_prices_get_nothing() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();
        farmer.expected_rate = Some("Negotiable".to_string());
        land.price_expectation = Some("Negotiable".to_string());

        assert_eq!(price_score(&farmer, &land), CriterionScore::none());
    }

    #[test]
    fn test_crop_overlap() {
        let score = crop_score(&create_test_farmer(), &create_test_land());
        assert_eq!(score.credit, 1.0);
        assert_eq!(score.reason.as_deref(), Some("Matches crops: Wheat"));

        let mut land = create_test_land();
        land.preferred_crops = vec!["Grapes".to_string()];
        assert_eq!(crop_score(&create_test_farmer(), &land), CriterionScore::none());
    }

    #[test]
    fn test_experience_heuristic() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();

        let expert = experience_score(&farmer, &land);
        assert_eq!(expert.reason.as_deref(), Some("Experience level suitable for land size"));

        farmer.experience_level = ExperienceLevel::Beginner;
        assert_eq!(experience_score(&farmer, &land), CriterionScore::none());

        land.size_acres = 5.0;
        assert_eq!(experience_score(&farmer, &land), CriterionScore::partial(1.0, None));
    }

    #[test]
    fn test_availability_heuristic() {
        let mut farmer = create_test_farmer();
        let mut land = create_test_land();

        assert_eq!(availability_score(&farmer, &land).credit, 1.0);

        farmer.availability = Availability::Seasonal;
        assert_eq!(availability_score(&farmer, &land), CriterionScore::partial(0.5, None));

        land.availability_period = "Rabi Season".to_string();
        let seasonal = availability_score(&farmer, &land);
        assert_eq!(seasonal.reason.as_deref(), Some("Availability aligns (Seasonal)"));

        farmer.availability = Availability::PartTime;
        assert_eq!(availability_score(&farmer, &land).credit, 0.5);
    }

    #[test]
    fn test_total_and_reason_order() {
        let farmer = create_test_farmer();
        let land = create_test_land();
        let result = calculate_match_score(&farmer, &land, &ScoringWeights::default());

        // 27 location + 25 price + 20 crops + 5 experience + 5 availability
        assert_eq!(result.score, 82);
        assert_eq!(
            result.match_reasons,
            vec![
                "Location match: Amritsar, Punjab",
                "Price: Open for negotiation",
                "Matches crops: Wheat",
                "Experience level suitable for land size",
                "Availability aligns (Full-time needed)",
            ]
        );
    }
}
