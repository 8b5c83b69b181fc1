//! Health endpoints: `/health` and `/live` report the process is up,
//! `/ready` also checks the gesture dictionary and the scene file

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check with dependency verification
/// Checks if the service can handle requests
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let mut checks = Vec::new();
    let mut overall_status = HealthStatus::Healthy;

    let dictionary_check = check_dictionary(&state);
    if dictionary_check.status != HealthStatus::Healthy {
        overall_status = HealthStatus::Unhealthy;
    }
    checks.push(dictionary_check);

    if let Some(scene_check) = check_scene(&state).await {
        if scene_check.status != HealthStatus::Healthy {
            overall_status = HealthStatus::Unhealthy;
        }
        checks.push(scene_check);
    }

    let latency = start.elapsed().as_millis() as u64;
    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(latency),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn check_dictionary(state: &AppState) -> HealthCheck {
    let dictionary = state.translator.dictionary();

    if dictionary.is_empty() {
        HealthCheck {
            name: "dictionary".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some("Gesture dictionary is empty".to_string()),
            latency_ms: None,
        }
    } else {
        HealthCheck {
            name: "dictionary".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} keywords", dictionary.len())),
            latency_ms: None,
        }
    }
}

/// Scene file reachability; `None` when animation is disabled
async fn check_scene(state: &AppState) -> Option<HealthCheck> {
    let animator = state.animator.as_ref()?;
    let start = Instant::now();

    let check = match tokio::fs::metadata(animator.scene_path()).await {
        Ok(_) => HealthCheck {
            name: "scene".to_string(),
            status: HealthStatus::Healthy,
            message: None,
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
        Err(e) => HealthCheck {
            name: "scene".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(format!("{}: {}", animator.scene_path(), e)),
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
    };

    Some(check)
}
