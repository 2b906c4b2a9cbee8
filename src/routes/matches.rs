use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{select_active_listing, MatchList, RankedMatches};
use crate::models::{
    CurrentUserMatches, FindMatchesRequest, FindMatchesResponse, HealthResponse, LimitQuery,
    RequesterProfile, Role, ScorePairRequest,
};
use crate::routes::{ApiError, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/score", web::post().to(score_pair))
        .route("/farmers/{id}/matches", web::get().to(lands_for_farmer))
        .route("/lands/{id}/matches", web::get().to(farmers_for_land));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

impl<T> From<RankedMatches<T>> for FindMatchesResponse<T> {
    fn from(ranked: RankedMatches<T>) -> Self {
        Self {
            matches: ranked.matches,
            total_candidates: ranked.total_candidates,
        }
    }
}

impl From<MatchList> for CurrentUserMatches {
    fn from(list: MatchList) -> Self {
        match list {
            MatchList::Lands(ranked) => CurrentUserMatches::Lands(ranked.into()),
            MatchList::Farmers(ranked) => CurrentUserMatches::Farmers(ranked.into()),
        }
    }
}

/// Find matches for the current user
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "role": "farmer|landowner",
///   "email": "string",
///   "limit": 3
/// }
/// ```
///
/// A farmer is matched against all lands. A landowner is matched through
/// their most recent listing against all farmers.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let limit = state.matching.effective_limit(req.limit);
    tracing::info!("Finding matches for {:?} {}, limit: {}", req.role, req.user_id, limit);

    let farmers = state.farmers.list().await?;
    let lands = state.lands.list().await?;

    let requester = match req.role {
        Role::Farmer => {
            let farmer = farmers
                .iter()
                .find(|farmer| farmer.id == req.user_id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("No farmer profile for {}", req.user_id)))?;
            RequesterProfile::Farmer(farmer)
        }
        Role::Landowner => {
            let listing = select_active_listing(&lands, Some(req.user_id.as_str()), req.email.as_deref())
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("No land listing for {}", req.user_id)))?;
            tracing::debug!("Using listing {} for landowner {}", listing.id, req.user_id);
            RequesterProfile::Landowner(listing)
        }
    };

    let result = state.matcher.rank_for(&requester, farmers, lands, limit);

    tracing::info!(
        "Returning {} matches for {} (from {} candidates)",
        result.len(),
        req.user_id,
        result.total_candidates()
    );

    Ok(HttpResponse::Ok().json(CurrentUserMatches::from(result)))
}

/// Top lands for a farmer
///
/// GET /api/v1/farmers/{id}/matches?limit=3
async fn lands_for_farmer(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let farmer = state.farmers.get(&path).await?;
    let lands = state.lands.list().await?;
    let limit = state.matching.effective_limit(query.limit);

    tracing::debug!("Ranking {} lands for farmer {}", lands.len(), farmer.id);
    let ranked = state.matcher.rank_matches(&farmer, lands, limit);

    Ok(HttpResponse::Ok().json(FindMatchesResponse::from(ranked)))
}

/// Top farmers for a land listing
///
/// GET /api/v1/lands/{id}/matches?limit=3
async fn farmers_for_land(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let land = state.lands.get(&path).await?;
    let farmers = state.farmers.list().await?;
    let limit = state.matching.effective_limit(query.limit);

    tracing::debug!("Ranking {} farmers for land {}", farmers.len(), land.id);
    let ranked = state.matcher.rank_matches(&land, farmers, limit);

    Ok(HttpResponse::Ok().json(FindMatchesResponse::from(ranked)))
}

/// Score an explicit farmer/land pair without touching storage
///
/// POST /api/v1/matches/score
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    let result = state.matcher.score(&req.farmer, &req.land);
    HttpResponse::Ok().json(result)
}
