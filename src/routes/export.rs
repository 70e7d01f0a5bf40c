use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::models::member::timestamp_now;
use crate::models::TeamMember;
use crate::AppState;

/// Document written by `GET /export`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub exported_at: String,
    pub members: Vec<TeamMember>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/export", get(export_data))
}

async fn export_data(State(state): State<AppState>) -> impl IntoResponse {
    let export = ExportData {
        exported_at: timestamp_now(),
        members: state.store.list().await,
    };

    let filename = format!(
        "team-schedule-export-{}.json",
        chrono::Local::now().format("%Y-%m-%d")
    );
    let content_disposition = format!("attachment; filename=\"{}\"", filename);

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(value) = HeaderValue::from_str(&content_disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    (headers, Json(export))
}
