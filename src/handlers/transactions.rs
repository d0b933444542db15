use axum::{
    Json,
    extract::{Query, State},
};

use crate::db::{TransactionFilter, TransactionRecord};
use crate::middleware::RequireCredentials;
use crate::{ApiError, router::AppState};

/// GET /transactions -> flattened transaction+patient+pharmacy records.
/// The inner join drops transactions whose patient or pharmacy is missing.
pub async fn list_transactions(
    State(state): State<AppState>,
    _auth: RequireCredentials,
    Query(filter): Query<TransactionFilter>,
) -> Result<Json<Vec<TransactionRecord>>, ApiError> {
    let records = state.storage.list_transactions(&filter).await?;
    Ok(Json(records))
}
