use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::weekday::{time_options, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START};
use crate::models::Weekday;
use crate::overview::{member_cards, weekly_overview, DayTally, MemberCard};
use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    view_active: bool,
    member_count: usize,
    days: Vec<Weekday>,
    time_options: Vec<TimeOption>,
    overview: Vec<DayTally>,
    cards: Vec<MemberCard>,
    static_hash: &'static str,
}

struct TimeOption {
    value: String,
    default_start: bool,
    default_end: bool,
}

#[derive(Deserialize)]
pub struct PageQuery {
    tab: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.store.list().await;

    let time_options = time_options()
        .into_iter()
        .map(|value| TimeOption {
            default_start: value == DEFAULT_WINDOW_START,
            default_end: value == DEFAULT_WINDOW_END,
            value,
        })
        .collect();

    let template = IndexTemplate {
        view_active: query.tab.as_deref() == Some("view"),
        member_count: members.len(),
        days: Weekday::ALL.to_vec(),
        time_options,
        overview: weekly_overview(&members),
        cards: member_cards(&members),
        static_hash: crate::STATIC_HASH,
    };
    Ok(Html(template.render()?))
}
