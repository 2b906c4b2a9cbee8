use actix_web::{web, HttpResponse};
use std::cmp::Reverse;

use crate::core::find_similar_lands;
use crate::models::{FarmerForm, LandForm};
use crate::routes::{ApiError, AppState};

/// Configure profile and listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/farmers", web::get().to(list_farmers))
        .route("/farmers", web::post().to(create_farmer))
        .route("/farmers/{id}", web::get().to(get_farmer))
        .route("/farmers/{id}", web::put().to(update_farmer))
        .route("/farmers/{id}", web::delete().to(delete_farmer))
        .route("/lands", web::get().to(list_lands))
        .route("/lands", web::post().to(create_land))
        .route("/lands/{id}", web::get().to(get_land))
        .route("/lands/{id}", web::put().to(update_land))
        .route("/lands/{id}", web::delete().to(delete_land))
        .route("/lands/{id}/similar", web::get().to(similar_lands));
}

async fn list_farmers(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let farmers = state.farmers.list().await?;
    Ok(HttpResponse::Ok().json(farmers))
}

async fn get_farmer(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let farmer = state.farmers.get(&path).await?;
    Ok(HttpResponse::Ok().json(farmer))
}

/// Create a farmer profile
///
/// POST /api/v1/farmers
///
/// Request body is the profile form, e.g.
/// ```json
/// {
///   "name": "Rajesh Kumar",
///   "location": "Amritsar, Punjab",
///   "yearsOfExperience": "15",
///   "crops": "Wheat, Rice",
///   "experienceLevel": "Expert",
///   "availability": "Full-time",
///   "expectedRate": "15000/month"
/// }
/// ```
async fn create_farmer(
    state: web::Data<AppState>,
    form: web::Json<FarmerForm>,
) -> Result<HttpResponse, ApiError> {
    let farmer = form.into_inner().normalize()?;
    state.farmers.put(farmer.clone()).await?;

    tracing::info!("Created farmer profile {}", farmer.id);
    Ok(HttpResponse::Created().json(farmer))
}

/// Replace a farmer profile from the edit form, keeping its id
async fn update_farmer(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<FarmerForm>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    state.farmers.get(&id).await?;

    let mut form = form.into_inner();
    form.id = Some(id);
    let farmer = form.normalize()?;
    state.farmers.put(farmer.clone()).await?;

    tracing::debug!("Updated farmer profile {}", farmer.id);
    Ok(HttpResponse::Ok().json(farmer))
}

async fn delete_farmer(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.farmers.delete(&path).await?;

    tracing::info!("Deleted farmer profile {}", path.as_str());
    Ok(HttpResponse::NoContent().finish())
}

/// List lands, newest first
async fn list_lands(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mut lands = state.lands.list().await?;
    lands.sort_by_key(|land| Reverse(land.created_at));
    Ok(HttpResponse::Ok().json(lands))
}

async fn get_land(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let land = state.lands.get(&path).await?;
    Ok(HttpResponse::Ok().json(land))
}

async fn create_land(
    state: web::Data<AppState>,
    form: web::Json<LandForm>,
) -> Result<HttpResponse, ApiError> {
    let land = form.into_inner().normalize()?;
    state.lands.put(land.clone()).await?;

    tracing::info!("Created land listing {} ({} acres)", land.id, land.size_acres);
    Ok(HttpResponse::Created().json(land))
}

/// Replace a land listing, keeping its id and creation time
async fn update_land(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<LandForm>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let existing = state.lands.get(&id).await?;

    let mut form = form.into_inner();
    form.id = Some(id);
    form.created_at = form.created_at.or(existing.created_at);
    let land = form.normalize()?;
    state.lands.put(land.clone()).await?;

    tracing::debug!("Updated land listing {}", land.id);
    Ok(HttpResponse::Ok().json(land))
}

async fn delete_land(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.lands.delete(&path).await?;

    tracing::info!("Deleted land listing {}", path.as_str());
    Ok(HttpResponse::NoContent().finish())
}

/// Lands resembling the given one by location, soil or size
///
/// GET /api/v1/lands/{id}/similar
async fn similar_lands(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let target = state.lands.get(&path).await?;
    let lands = state.lands.list().await?;

    let similar = find_similar_lands(&target, &lands, state.matching.similar_limit);

    tracing::debug!("Found {} lands similar to {}", similar.len(), target.id);
    Ok(HttpResponse::Ok().json(similar))
}
