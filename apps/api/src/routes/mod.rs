pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::engine::handlers;
use crate::state::AppState;

/// GET /
/// Service front page: name, version, endpoint listing.
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Future-Self Recommendation API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/v1/recommend": "Rank catalog content against a future-self goal",
            "GET /api/v1/content": "List all catalog items",
            "GET /api/v1/skills": "List the skill dimensions",
            "GET /api/v1/stats": "Catalog statistics",
            "GET /health": "Health check"
        }
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/recommend", post(handlers::handle_recommend))
        .route("/api/v1/content", get(handlers::handle_list_content))
        .route("/api/v1/skills", get(handlers::handle_skills))
        .route("/api/v1/stats", get(handlers::handle_stats))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::dataset;
    use crate::engine::skill_space::SkillSpace;
    use crate::engine::RecommendEngine;

    fn test_router() -> Router {
        let engine = RecommendEngine::new(
            SkillSpace::new(dataset::skill_dimensions()).unwrap(),
            dataset::KEYWORD_MAPPINGS,
            dataset::content_items(),
        )
        .unwrap();
        build_router(AppState {
            engine: Arc::new(engine),
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_catalog_size() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["content_items"], 18);
    }

    #[tokio::test]
    async fn test_recommend_endpoint_returns_ranked_payload() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"goal": "I want to become a CTO", "top_k": 5}"#,
            ))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["skill_dimensions"].as_array().unwrap().len(), 7);
        assert_eq!(body["goal_vector"].as_array().unwrap().len(), 7);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
        assert_eq!(
            body["recommendations"][0]["title"],
            "The Manager's Path"
        );
    }

    #[tokio::test]
    async fn test_recommend_endpoint_rejects_blank_goal() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"goal": "   "}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_stats_endpoint_ok() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_content_items"], 18);
    }
}
