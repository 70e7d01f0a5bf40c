use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct ResetRequest {
    // Kept loose so a missing or non-string code is a 403, not a 422.
    #[serde(default)]
    code: Value,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/reset", post(reset))
}

async fn reset(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let accepted = request
        .code
        .as_str()
        .is_some_and(|code| code_matches(code, &state.config.reset_code));
    if !accepted {
        return Err(AppError::Forbidden);
    }

    state.store.clear().await;
    tracing::info!("schedule data reset");
    Ok(Json(json!({ "success": true })))
}

fn code_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
