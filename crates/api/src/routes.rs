//! Route-Definitionen fuer die REST-API (/api/...)

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, ApiState};

/// Erstellt den vollstaendigen /api-Router
pub fn api_router() -> Router<ApiState> {
    Router::new()
        // Auth
        .route("/api/register", post(handlers::auth::register))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        // Konten
        .route("/api/users", get(handlers::konten::list_users))
        // Health
        .route("/health", get(handlers::health))
}
