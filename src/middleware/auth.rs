use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use subtle::ConstantTimeEq;

use crate::error::ApiError;
use crate::router::AppState;

/// Ensure the inbound request carries both static credentials:
/// - Header: `Api-Key: <key>`
/// - Header: `Authorization: Bearer <token>`
///
/// The checks are independent and both mandatory; each failure advertises the
/// scheme it expected. Comparisons are constant-time.
pub fn ensure_authorized(
    headers: &HeaderMap,
    api_key: &str,
    auth_token: &str,
) -> Result<(), ApiError> {
    let presented_key = headers.get("api-key").and_then(|v| v.to_str().ok());
    match presented_key {
        Some(key) if bool::from(key.as_bytes().ct_eq(api_key.as_bytes())) => {}
        _ => return Err(ApiError::InvalidApiKey),
    }

    let presented_token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .and_then(|auth| {
            auth.strip_prefix("Bearer ")
                .or_else(|| auth.strip_prefix("bearer "))
        });
    match presented_token {
        Some(token) if bool::from(token.as_bytes().ct_eq(auth_token.as_bytes())) => {}
        _ => return Err(ApiError::InvalidAuthToken),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct RequireCredentials;

impl FromRequestParts<AppState> for RequireCredentials {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        ensure_authorized(&parts.headers, &state.api_key, &state.auth_token)?;
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(key: Option<&str>, auth: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(key) = key {
            map.insert("api-key", HeaderValue::from_str(key).unwrap());
        }
        if let Some(auth) = auth {
            map.insert("authorization", HeaderValue::from_str(auth).unwrap());
        }
        map
    }

    #[test]
    fn accepts_both_valid_credentials() {
        let map = headers(Some("k"), Some("Bearer t"));
        assert!(ensure_authorized(&map, "k", "t").is_ok());
    }

    #[test]
    fn rejects_missing_or_wrong_api_key_even_with_valid_token() {
        let map = headers(None, Some("Bearer t"));
        assert!(matches!(
            ensure_authorized(&map, "k", "t"),
            Err(ApiError::InvalidApiKey)
        ));

        let map = headers(Some("wrong"), Some("Bearer t"));
        assert!(matches!(
            ensure_authorized(&map, "k", "t"),
            Err(ApiError::InvalidApiKey)
        ));
    }

    #[test]
    fn rejects_missing_or_wrong_token_even_with_valid_key() {
        let map = headers(Some("k"), None);
        assert!(matches!(
            ensure_authorized(&map, "k", "t"),
            Err(ApiError::InvalidAuthToken)
        ));

        let map = headers(Some("k"), Some("Bearer wrong"));
        assert!(matches!(
            ensure_authorized(&map, "k", "t"),
            Err(ApiError::InvalidAuthToken)
        ));
    }

    #[test]
    fn token_without_bearer_prefix_is_rejected() {
        let map = headers(Some("k"), Some("t"));
        assert!(matches!(
            ensure_authorized(&map, "k", "t"),
            Err(ApiError::InvalidAuthToken)
        ));
    }
}
