use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much farming experience a farmer reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Experienced,
    Expert,
}

impl ExperienceLevel {
    /// Experienced and Expert farmers are trusted with larger parcels
    pub fn handles_large_parcels(self) -> bool {
        matches!(self, ExperienceLevel::Experienced | ExperienceLevel::Expert)
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        ExperienceLevel::Intermediate
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "experienced" => Ok(ExperienceLevel::Experienced),
            "expert" => Ok(ExperienceLevel::Expert),
            other => Err(format!("unknown experience level '{}'", other)),
        }
    }
}

/// Working pattern a farmer offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Seasonal,
}

impl Default for Availability {
    fn default() -> Self {
        Availability::FullTime
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "full-time" | "fulltime" => Ok(Availability::FullTime),
            "part-time" | "parttime" => Ok(Availability::PartTime),
            "seasonal" => Ok(Availability::Seasonal),
            other => Err(format!("unknown availability '{}'", other)),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Availability::FullTime => "Full-time",
            Availability::PartTime => "Part-time",
            Availability::Seasonal => "Seasonal",
        };
        f.write_str(label)
    }
}

/// Availability period that marks a land as needing someone all year
pub const YEAR_ROUND: &str = "Year-round";

/// Farmer looking for land to work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Free text, usually "City, State"
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub specialty_crops: Vec<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub availability: Availability,
    /// Free-text price expression, e.g. "15000/month" or "40% share"
    #[serde(default)]
    pub expected_rate: Option<String>,
}

impl FarmerProfile {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Land listing offered by a landowner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandPlot {
    pub id: String,
    pub owner_name: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub size_acres: f64,
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub preferred_crops: Vec<String>,
    /// "Year-round" or a named season such as "Rabi Season"
    pub availability_period: String,
    #[serde(default)]
    pub price_expectation: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl LandPlot {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn is_year_round(&self) -> bool {
        self.availability_period == YEAR_ROUND
    }
}

/// The party matches are found for, tagged by role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RequesterProfile {
    Farmer(FarmerProfile),
    Landowner(LandPlot),
}

/// Score and reasons for a single farmer/land pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u32,
    pub match_reasons: Vec<String>,
}

/// A candidate record merged with its match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch<T> {
    #[serde(flatten)]
    pub candidate: T,
    #[serde(flatten)]
    pub result: MatchResult,
}

impl<T> ScoredMatch<T> {
    pub fn score(&self) -> u32 {
        self.result.score
    }
}

/// Scoring weights, each the fraction of 100 points a criterion can award
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub location: f64,
    pub price: f64,
    pub crops: f64,
    pub experience: f64,
    pub availability: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.location + self.price + self.crops + self.experience + self.availability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 0.45,
            price: 0.25,
            crops: 0.20,
            experience: 0.05,
            availability: 0.05,
        }
    }
}
