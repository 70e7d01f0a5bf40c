use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;

use crate::error::AppError;
use crate::models::{NewMember, TeamMember};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route("/members/{id}", delete(delete_member))
}

async fn list_members(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.store.list().await)
}

// 201 for both a new name and a replaced one.
async fn create_member(
    State(state): State<AppState>,
    Json(new): Json<NewMember>,
) -> impl IntoResponse {
    let saved = state.store.upsert(TeamMember::from(new)).await;
    (StatusCode::CREATED, Json(saved.into_member()))
}

async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.remove(&id).await {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "success": true })))
}
