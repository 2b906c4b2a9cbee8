//! Loose form records and their normalization into strict profiles.
//!
//! Forms arrive the way browsers submit them: numbers as strings, crop lists
//! as comma-separated text, optional fields missing or empty. Normalizing
//! validates them and fills the documented defaults.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::domain::{Availability, ExperienceLevel, FarmerProfile, LandPlot, YEAR_ROUND};

/// Errors raised while normalizing a form
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },
}

impl FormError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        FormError::InvalidField {
            field,
            message: message.into(),
        }
    }
}

/// A scalar that may have been submitted as text or as a number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Number(f64),
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Loose> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Loose::Text(text) => text,
        Loose::Number(n) => n.to_string(),
    }))
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Loose> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Loose::Number(n) => Some(n),
        Loose::Text(text) => text.trim().parse().ok(),
    }))
}

/// Farmer profile as submitted by the profile form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FarmerForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub years_of_experience: Option<String>,
    /// Comma-separated crop names
    #[serde(default)]
    pub crops: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default, alias = "priceExpectation")]
    pub expected_rate: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub longitude: Option<f64>,
}

impl FarmerForm {
    /// Validate the form and build a strict farmer profile
    pub fn normalize(self) -> Result<FarmerProfile, FormError> {
        self.validate()?;

        let experience_level = match non_empty(self.experience_level) {
            Some(text) => text
                .parse::<ExperienceLevel>()
                .map_err(|e| FormError::invalid("experienceLevel", e))?,
            None => ExperienceLevel::default(),
        };
        let availability = match non_empty(self.availability) {
            Some(text) => text
                .parse::<Availability>()
                .map_err(|e| FormError::invalid("availability", e))?,
            None => Availability::default(),
        };

        Ok(FarmerProfile {
            id: non_empty(self.id).unwrap_or_else(new_id),
            name: self.name.trim().to_string(),
            email: non_empty(self.email),
            location: self.location.trim().to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            years_of_experience: self
                .years_of_experience
                .as_deref()
                .and_then(leading_integer)
                .unwrap_or(0),
            specialty_crops: split_crops(self.crops.as_deref()),
            experience_level,
            availability,
            expected_rate: non_empty(self.expected_rate),
        })
    }
}

/// Land listing as submitted by the listing form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LandForm {
    #[serde(default)]
    pub id: Option<String>,
    /// Owner name
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "location")]
    pub land_location: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub land_size: Option<String>,
    #[serde(default)]
    pub soil_type: Option<String>,
    /// Comma-separated crop names
    #[serde(default)]
    pub preferred_crops: Option<String>,
    #[serde(default)]
    pub availability_period: Option<String>,
    #[serde(default, alias = "expectedPrice")]
    pub price_expectation: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl LandForm {
    /// Validate the form and build a strict land listing
    pub fn normalize(self) -> Result<LandPlot, FormError> {
        self.validate()?;

        let size_acres = self
            .land_size
            .as_deref()
            .and_then(leading_decimal)
            .filter(|size| *size > 0.0)
            .ok_or_else(|| FormError::invalid("landSize", "must be a positive number of acres"))?;

        Ok(LandPlot {
            id: non_empty(self.id).unwrap_or_else(new_id),
            owner_name: self.name.trim().to_string(),
            owner_id: non_empty(self.owner_id),
            email: non_empty(self.email),
            location: self.land_location.trim().to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            size_acres,
            soil_type: non_empty(self.soil_type).unwrap_or_default(),
            preferred_crops: split_crops(self.preferred_crops.as_deref()),
            availability_period: non_empty(self.availability_period)
                .unwrap_or_else(|| YEAR_ROUND.to_string()),
            price_expectation: non_empty(self.price_expectation),
            created_at: Some(self.created_at.unwrap_or_else(chrono::Utc::now)),
        })
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split "Wheat, Rice , " into ["Wheat", "Rice"]
pub fn split_crops(text: Option<&str>) -> Vec<String> {
    text.map(|t| {
        t.split(',')
            .map(str::trim)
            .filter(|crop| !crop.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Integer at the start of the text, e.g. "15 years" -> 15
fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Decimal number at the start of the text, e.g. "2.5 acres" -> 2.5
fn leading_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map_or(text.len(), |(i, _)| i);
    text[..end].parse().ok()
}
