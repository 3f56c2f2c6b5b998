// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    create_widget, get_dashboard, health_check, remove_widget, reset_dashboard, search_widgets,
};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/reset", post(reset_dashboard))
        .route("/categories/:category_id/widgets", post(create_widget))
        .route("/categories/:category_id/widgets/:widget_id", delete(remove_widget))
        .route("/widgets", get(search_widgets))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::testing::{FixedClock, SequentialIds};
    use crate::application::clock::Clock;
    use crate::application::dashboard_store::DashboardStore;
    use crate::application::widget_service::WidgetService;
    use crate::infrastructure::config::{InputLimits, ManagementSettings};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::at("2025-02-14T09:00:00Z"));
        let store = Arc::new(DashboardStore::new(clock.clone()));
        let widget_service = WidgetService::new(store.clone(), clock, Arc::new(SequentialIds::default()));
        Arc::new(AppState {
            store,
            widget_service,
            limits: InputLimits::default(),
            management: ManagementSettings::default(),
        })
    }

    async fn send(state: &Arc<AppState>, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_snapshot() {
        let state = test_state();
        let (status, body) = send(&state, Method::GET, "/dashboard", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalWidgets"], 6);
        assert_eq!(body["totalCategories"], 3);
        assert_eq!(body["lastUpdated"], "2025-02-14T09:00:00Z");
        assert_eq!(body["categories"][0]["id"], "cspm-executive");
        assert_eq!(body["categories"][0]["widgetCount"], 2);
        assert_eq!(body["categories"][1]["widgets"][1]["id"], "workload-alerts");
    }

    #[tokio::test]
    async fn test_create_widget_then_filter_by_category() {
        let state = test_state();
        let (status, created) = send(
            &state,
            Method::POST,
            "/categories/registry-scan/widgets",
            Some(json!({
                "name": "Base Image Drift",
                "text": "Four images behind upstream",
                "type": "chart",
                "chartType": "line"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "widget_test_0");
        assert_eq!(created["chartType"], "line");
        assert_eq!(created["createdAt"], "2025-02-14T09:00:00Z");

        let (status, listing) = send(&state, Method::GET, "/widgets?category=registry-scan", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listing["shown"], 3);
        assert_eq!(listing["total"], 7);
        assert_eq!(listing["filtersActive"], true);
        assert_eq!(listing["groups"][0]["widgets"][2]["id"], "widget_test_0");
    }

    #[tokio::test]
    async fn test_create_widget_reports_field_errors() {
        let state = test_state();
        let (status, body) = send(
            &state,
            Method::POST,
            "/categories/cspm-executive/widgets",
            Some(json!({ "name": "ab", "text": "short" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["fields"]["name"], "Widget name must be at least 3 characters");
        assert_eq!(body["fields"]["text"], "Widget text must be at least 10 characters");
        assert_eq!(state.store.snapshot().await.total_widgets(), 6);
    }

    #[tokio::test]
    async fn test_create_widget_in_unknown_category() {
        let state = test_state();
        let (status, _) = send(
            &state,
            Method::POST,
            "/categories/unknown/widgets",
            Some(json!({ "name": "Valid Name", "text": "This is a sufficiently long description." })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_remove_requires_confirmation() {
        let state = test_state();
        let uri = "/categories/cwpp-dashboard/widgets/namespace-alerts";

        let (status, _) = send(&state, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
        assert_eq!(state.store.snapshot().await.total_widgets(), 6);

        let (status, body) = send(&state, Method::DELETE, &format!("{uri}?confirm=true"), None).await;
        assert_eq!(status, StatusCode::OK);
        let cwpp = &body["categories"][1];
        assert_eq!(cwpp["widgetCount"], 1);
        assert_eq!(cwpp["widgets"][0]["id"], "workload-alerts");
    }

    #[tokio::test]
    async fn test_reset_requires_confirmation() {
        let state = test_state();
        send(
            &state,
            Method::DELETE,
            "/categories/registry-scan/widgets/image-risk?confirm=true",
            None,
        )
        .await;

        let (status, _) = send(&state, Method::POST, "/dashboard/reset", None).await;
        assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
        assert_eq!(state.store.snapshot().await.total_widgets(), 5);

        let (status, body) = send(&state, Method::POST, "/dashboard/reset?confirm=true", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalWidgets"], 6);
    }

    #[tokio::test]
    async fn test_search_without_matches_is_empty() {
        let state = test_state();
        let (status, body) = send(&state, Method::GET, "/widgets?search=nothing-like-this", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["shown"], 0);
        assert_eq!(body["total"], 6);
        assert_eq!(body["groups"], json!([]));
    }
}
