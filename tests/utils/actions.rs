use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a request to the router and decode the response body.
    ///
    /// Empty bodies decode to `Null`, non-JSON bodies to a JSON string.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn start_game(&self, players: &[&str]) -> (StatusCode, Value) {
        self.post("/play", serde_json::json!({ "players": players })).await
    }

    pub async fn reverse(&self) -> (StatusCode, Value) {
        self.request("POST", "/play/reverse", None).await
    }

    pub async fn declare_uno(&self, player: &str) -> (StatusCode, Value) {
        self.post("/play/uno", serde_json::json!({ "player": player })).await
    }

    pub async fn finish_game(&self, winner: &str) -> (StatusCode, Value) {
        self.post("/play/finish", serde_json::json!({ "winner": winner })).await
    }
}
