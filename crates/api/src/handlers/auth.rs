//! REST-Handler fuer Registrierung, Login und Logout

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use thrive_auth::Registrierung;

use crate::handlers::fehler_antwort;
use crate::{token_aus_headers, ApiState};

/// Body von POST /api/register (kanonische Form mit getrennten Namen)
///
/// Alle Felder sind optional deserialisiert, damit fehlende Felder als
/// Validierungsfehler (400) gemeldet werden statt als Deserialisierungs-
/// fehler des Extractors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

pub async fn register(State(state): State<ApiState>, Json(body): Json<RegisterBody>) -> Response {
    let ergebnis = state
        .auth
        .registrieren(Registrierung {
            email: &body.email,
            passwort: &body.password,
            first_name: &body.first_name,
            last_name: &body.last_name,
            rolle: &body.role,
        })
        .await;

    match ergebnis {
        Ok(konto) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "User registered successfully",
                "user": konto.profil(),
            })),
        )
            .into_response(),
        Err(e) => fehler_antwort(e),
    }
}

/// Body von POST /api/login
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(State(state): State<ApiState>, Json(body): Json<LoginBody>) -> Response {
    match state.auth.anmelden(&body.email, &body.password).await {
        Ok((konto, session)) => (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "token": session.token,
                "user": konto.profil(),
            })),
        )
            .into_response(),
        Err(e) => fehler_antwort(e),
    }
}

pub async fn logout(State(state): State<ApiState>, headers: HeaderMap) -> Response {
    let token = match token_aus_headers(&headers) {
        Ok(t) => t,
        Err(antwort) => return antwort,
    };

    match state.auth.abmelden(token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => fehler_antwort(e),
    }
}
