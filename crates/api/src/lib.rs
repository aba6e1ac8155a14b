//! thrive-api – REST-Interface fuer den Auth-Service
//!
//! Stellt die vereinheitlichte HTTP-Oberflaeche bereit:
//! `/api/register`, `/api/login`, `/api/logout`, `/api/users`, `/health`.
//! Jeder geschuetzte Aufruf wird unabhaengig ueber den Session-Token
//! authentifiziert – der clientseitige Rollen-Marker zaehlt nicht.

pub mod handlers;
pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use thrive_auth::AuthService;
use thrive_db::SqliteDb;

/// Axum-State fuer die REST-API
#[derive(Clone)]
pub struct ApiState {
    pub auth: Arc<AuthService<SqliteDb>>,
}

impl ApiState {
    pub fn neu(auth: Arc<AuthService<SqliteDb>>) -> Self {
        Self { auth }
    }
}

/// Extrahiert den Bearer-Token aus den Request-Headern
pub fn token_aus_headers(headers: &axum::http::HeaderMap) -> Result<&str, Response> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Authorization header missing" })),
            )
                .into_response()
        })
}

pub use routes::api_router;
pub use server::{ApiServer, ApiServerKonfig};
