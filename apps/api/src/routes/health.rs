use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service landing info: name, version, and the endpoints that matter.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Analyzer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze": "POST /api/v1/analyze - Upload and analyze a PDF resume"
        }
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-analyzer-api"
    }))
}
