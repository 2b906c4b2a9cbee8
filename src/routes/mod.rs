// Route exports
pub mod error;
pub mod listings;
pub mod matches;

use actix_web::web;
use std::sync::Arc;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{FarmerProfile, LandPlot};
use crate::services::{InMemoryRepository, Repository};

pub use error::{handle_json_payload_error, handle_query_payload_error, ApiError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub farmers: Arc<dyn Repository<FarmerProfile>>,
    pub lands: Arc<dyn Repository<LandPlot>>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    /// State backed by in-memory repositories holding the given records
    pub fn in_memory(
        farmers: Vec<FarmerProfile>,
        lands: Vec<LandPlot>,
        matcher: Matcher,
        matching: MatchingSettings,
    ) -> Self {
        Self {
            farmers: Arc::new(InMemoryRepository::with_records(farmers)),
            lands: Arc::new(InMemoryRepository::with_records(lands)),
            matcher,
            matching,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(listings::configure),
    );
}
