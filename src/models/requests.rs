use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{FarmerProfile, LandPlot};

/// Which side of the marketplace the current user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Landowner,
}

/// Request to find matches for the current user
///
/// Farmers are identified by their profile id. Landowners are identified by
/// their owner id, or by email for listings created without one; their most
/// recent listing is matched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query string for the per-record match endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LimitQuery {
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score one explicit farmer/land pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    pub farmer: FarmerProfile,
    pub land: LandPlot,
}
