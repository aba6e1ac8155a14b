//! REST-Handler fuer die Thrive-API

pub mod auth;
pub mod konten;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use thrive_auth::AuthError;

/// GET /health – Health-Check-Endpunkt
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Bildet einen AuthError auf die HTTP-Antwort ab
///
/// Die Bodies entsprechen dem beobachteten Wire-Kontrakt des Clients:
/// Duplikat und falsches Passwort sind 400, unbekannte E-Mail ist 404,
/// fehlende/abgelaufene Session 401, alles andere ein generischer 500
/// ohne interne Details.
pub(crate) fn fehler_antwort(e: AuthError) -> Response {
    let (status, body) = match &e {
        AuthError::Validierung(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
        AuthError::EmailVergeben(_) => (
            StatusCode::BAD_REQUEST,
            json!({ "message": "User already exists" }),
        ),
        AuthError::KontoNichtGefunden => {
            (StatusCode::NOT_FOUND, json!({ "error": "User not found" }))
        }
        AuthError::UngueltigeAnmeldedaten => (
            StatusCode::BAD_REQUEST,
            json!({ "error": "Invalid password" }),
        ),
        AuthError::SessionUngueltig | AuthError::SessionAbgelaufen => (
            StatusCode::UNAUTHORIZED,
            json!({ "error": "Invalid or expired session" }),
        ),
        AuthError::Datenbank(_) | AuthError::PasswortHashing(_) | AuthError::Intern(_) => {
            tracing::error!(fehler = %e, "Interner Fehler im Auth-Service");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal server error" }),
            )
        }
    };

    (status, Json(body)).into_response()
}
