//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::analysis::fallback::fallback_analysis;
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// POST body for /api/analyze.
///
/// `tags` is whatever JSON the quiz frontend sends — deliberately unvalidated
/// and forwarded into the prompt as-is. Missing tags serialize as null.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "dinoId")]
    pub dino_id: String,
    #[serde(default)]
    pub tags: Value,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Builds the roast prompt and asks Gemini for a personality blurb.
/// Generation failures of any kind degrade to a canned fallback with a 200;
/// the caller never sees an error from that path. The only error responses
/// are the missing-credential 500 (checked before any external call) and the
/// router-level 405.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Some(api_key) = state.config.gemini_api_key.as_deref() else {
        return Err(AppError::MissingApiKey);
    };

    let prompt = build_analysis_prompt(&request.dino_id, &request.tags);

    let analysis = match state.generator.generate(api_key, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("AI error (using fallback): {e}");
            fallback_analysis(state.fallback.as_ref())
        }
    };

    Ok(Json(AnalyzeResponse { analysis }))
}

/// OPTIONS /api/analyze
///
/// CORS preflight: 200 with an empty body. The actual CORS headers are
/// stamped on by the router layers.
pub async fn handle_preflight() {}

/// Fallback for every other method on /api/analyze.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
