//! API route configuration.

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Lookups
        .route("/geocoding", get(handlers::forward_geocoding))
        .route("/reverse-geocoding", get(handlers::reverse_geocoding))

        // Cache management
        .route("/cache", delete(handlers::evict_cache))

        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use geocache_core::error::Result;
    use geocache_core::traits::GeocodingProvider;
    use geocache_core::types::{
        Coordinate, ForwardMatch, ForwardResponse, ReverseMatch, ReverseResponse,
    };

    use crate::state::ApiConfig;

    /// Answers "Panaji" for every forward lookup with data and nothing for "Atlantis".
    #[derive(Default)]
    struct StubProvider {
        forward_calls: AtomicUsize,
    }

    #[async_trait]
    impl GeocodingProvider for StubProvider {
        async fn forward_lookup(&self, address: &str) -> Result<Option<ForwardResponse>> {
            self.forward_calls.fetch_add(1, Ordering::SeqCst);
            if address == "Atlantis" {
                return Ok(Some(ForwardResponse::default()));
            }
            Ok(Some(ForwardResponse {
                data: Some(vec![ForwardMatch {
                    latitude: 15.49,
                    longitude: 73.82,
                    label: Some("Panaji, GA, India".into()),
                }]),
            }))
        }

        async fn reverse_lookup(&self, latitude: f64, _longitude: f64) -> Result<Option<ReverseResponse>> {
            if latitude == 0.0 {
                return Ok(Some(ReverseResponse { data: Some(vec![]) }));
            }
            Ok(Some(ReverseResponse {
                data: Some(vec![ReverseMatch {
                    label: Some("Panaji, GA, India".into()),
                }]),
            }))
        }
    }

    fn test_app() -> (Router, Arc<AppState>, Arc<StubProvider>) {
        let provider = Arc::new(StubProvider::default());
        let state = Arc::new(AppState::with_provider(ApiConfig::default(), provider.clone()));
        (create_router(state.clone()), state, provider)
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _, _) = test_app();

        let (status, body) = send(app, "GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["forward_cache"]["namespace"], "geocoding");
        assert_eq!(json["reverse_cache"]["namespace"], "reverse-geocoding");
    }

    #[tokio::test]
    async fn test_forward_geocoding() {
        let (app, state, provider) = test_app();

        let (status, body) = send(app.clone(), "GET", "/geocoding?address=Panaji").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": 15.49, "longitude": 73.82}));

        let (status, _) = send(app, "GET", "/geocoding?address=Panaji").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(provider.forward_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            state.resolver.forward_cache().get("Panaji"),
            Some(Coordinate::new(15.49, 73.82))
        );
    }

    #[tokio::test]
    async fn test_forward_geocoding_no_data() {
        let (app, state, _) = test_app();

        let (status, body) = send(app, "GET", "/geocoding?address=Atlantis").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "NO_DATA");
        assert!(state.resolver.forward_cache().is_empty());
    }

    #[tokio::test]
    async fn test_forward_geocoding_requires_address() {
        let (app, _, _) = test_app();
        let (status, _) = send(app, "GET", "/geocoding").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reverse_geocoding() {
        let (app, _, _) = test_app();

        let (status, body) =
            send(app, "GET", "/reverse-geocoding?latitude=15.49&longitude=73.82").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Panaji, GA, India");
    }

    #[tokio::test]
    async fn test_reverse_geocoding_invalid_input() {
        let (app, _, _) = test_app();

        let (status, body) = send(app, "GET", "/reverse-geocoding?latitude=0&longitude=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_reverse_geocoding_rejects_non_numeric() {
        let (app, _, _) = test_app();
        let (status, _) = send(app, "GET", "/reverse-geocoding?latitude=north&longitude=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_evict_single_key() {
        let (app, state, _) = test_app();
        state.resolver.forward_cache().put("Panaji", Coordinate::new(15.49, 73.82));
        state.resolver.forward_cache().put("Margao", Coordinate::new(15.27, 73.96));

        let (status, body) = send(app, "DELETE", "/cache?key=Panaji").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Cache evicted");
        assert!(state.resolver.forward_cache().get("Panaji").is_none());
        assert_eq!(state.resolver.forward_cache().len(), 1);
    }

    #[tokio::test]
    async fn test_evict_all() {
        let (app, state, _) = test_app();
        state.resolver.forward_cache().put("Panaji", Coordinate::new(15.49, 73.82));
        state.resolver.reverse_cache().put("15.49,73.82", "Panaji".to_string());

        let (status, body) = send(app, "DELETE", "/cache").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Cache evicted");
        assert!(state.resolver.forward_cache().is_empty());
        assert!(state.resolver.reverse_cache().is_empty());
    }
}
