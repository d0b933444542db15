use axum::{
    Json,
    extract::{Query, State},
};

use crate::db::{Patient, PatientFilter};
use crate::middleware::RequireCredentials;
use crate::{ApiError, router::AppState};

/// GET /patients -> every patient matching the AND of the supplied filters.
pub async fn list_patients(
    State(state): State<AppState>,
    _auth: RequireCredentials,
    Query(filter): Query<PatientFilter>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = state.storage.list_patients(&filter).await?;
    Ok(Json(patients))
}
