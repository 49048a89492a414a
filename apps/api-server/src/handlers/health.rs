//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of stored entries, absent when the store is unreadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<usize>,
    pub timestamp: String,
}

/// Health check endpoint - listing the store doubles as a probe of the
/// backing file.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let entries = state.entries.list().await.map(|e| e.len()).ok();

    let response = HealthResponse {
        status: if entries.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        entries,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
