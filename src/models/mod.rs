// Model exports
pub mod domain;
pub mod forms;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, ExperienceLevel, FarmerProfile, LandPlot, MatchResult, RequesterProfile,
    ScoredMatch, ScoringWeights, YEAR_ROUND,
};
pub use forms::{FarmerForm, FormError, LandForm};
pub use requests::{FindMatchesRequest, LimitQuery, Role, ScorePairRequest};
pub use responses::{CurrentUserMatches, ErrorResponse, FindMatchesResponse, HealthResponse};
