use axum::{
    Json,
    extract::{Query, State},
};

use crate::db::{Pharmacy, PharmacyFilter};
use crate::middleware::RequireCredentials;
use crate::{ApiError, router::AppState};

/// GET /pharmacies -> every pharmacy matching the AND of the supplied filters.
pub async fn list_pharmacies(
    State(state): State<AppState>,
    _auth: RequireCredentials,
    Query(filter): Query<PharmacyFilter>,
) -> Result<Json<Vec<Pharmacy>>, ApiError> {
    let pharmacies = state.storage.list_pharmacies(&filter).await?;
    Ok(Json(pharmacies))
}
