use axum::{Router, routing::get};
use std::sync::Arc;

use crate::db::Storage;
use crate::handlers;

/// Shared per-request state: the storage gateway plus the two static
/// credentials, passed in explicitly at construction.
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub api_key: Arc<str>,
    pub auth_token: Arc<str>,
}

impl AppState {
    pub fn new(storage: Storage, api_key: Arc<str>, auth_token: Arc<str>) -> Self {
        Self {
            storage,
            api_key,
            auth_token,
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/patients", get(handlers::patients::list_patients))
        .route("/pharmacies", get(handlers::pharmacies::list_pharmacies))
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions),
        )
        .with_state(state)
}
