//! REST-Handler fuer Konten-Endpunkte

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::handlers::fehler_antwort;
use crate::{token_aus_headers, ApiState};

/// GET /api/users – alle Konten als oeffentliche Projektionen
///
/// Erfordert eine gueltige Session. Die Antwort enthaelt niemals
/// Passwort-Hashes.
pub async fn list_users(State(state): State<ApiState>, headers: HeaderMap) -> Response {
    let token = match token_aus_headers(&headers) {
        Ok(t) => t,
        Err(antwort) => return antwort,
    };

    if let Err(e) = state.auth.session_validieren(token).await {
        return fehler_antwort(e);
    }

    match state.auth.konten_auflisten().await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => fehler_antwort(e),
    }
}
