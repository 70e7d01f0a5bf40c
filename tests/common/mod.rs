#![allow(dead_code)]

use axum::body::Body;
use http_body_util::BodyExt;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use team_schedule::config::Config;
use team_schedule::models::TeamMember;
use team_schedule::store::MemberStore;
use team_schedule::{build_app, AppState};

pub struct TestApp {
    pub router: Router,
    pub store: MemberStore,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemberStore::new();
        let router = build_app(AppState::new(store.clone(), Config::default()));
        Self { router, store }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// POST a JSON body.
    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("DELETE")
            .body(Body::empty())
            .unwrap();
        self.request(req).await
    }

    /// Submit availability through the API and return the stored record.
    pub async fn submit(&self, name: &str, days: &[&str]) -> TeamMember {
        let availability: Vec<Value> = days
            .iter()
            .map(|day| serde_json::json!({ "day": day, "windows": [{ "start": "09:00", "end": "17:00" }] }))
            .collect();
        let resp = self
            .post_json("/members", serde_json::json!({ "name": name, "availability": availability }))
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        serde_json::from_value(body_json(resp).await).unwrap()
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}
