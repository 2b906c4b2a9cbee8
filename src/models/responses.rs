use serde::{Deserialize, Serialize};

use crate::models::domain::{FarmerProfile, LandPlot, ScoredMatch};

/// Response for the match endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse<T> {
    pub matches: Vec<ScoredMatch<T>>,
    pub total_candidates: usize,
}

/// Response for the current-user match endpoint, tagged by what was matched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CurrentUserMatches {
    Lands(FindMatchesResponse<LandPlot>),
    Farmers(FindMatchesResponse<FarmerProfile>),
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
