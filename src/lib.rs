pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod overview;
pub mod routes;
pub mod store;

pub const STATIC_HASH: &str = env!("STATIC_HASH");

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Config;
use crate::store::MemberStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MemberStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: MemberStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full Axum application router around an existing store.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::pages::router())
        .merge(routes::members::router())
        .merge(routes::reset::router())
        .merge(routes::export::router())
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=86400"),
                ))
                .service(ServeDir::new("static")),
        )
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
