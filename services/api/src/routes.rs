use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use pool_draw::pools::{pool_router, PoolService, RosterSource};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_pool_routes<S>(service: Arc<PoolService<S>>) -> axum::Router
where
    S: RosterSource + 'static,
{
    pool_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use pool_draw::pools::{
        DrawSettings, FinalistIndex, Player, PoolCount, SportMatch, StaticRosterSource,
    };
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let roster = vec![
            Player::new("Suresh Kumar", "M", Some(34), "Badminton, Chess"),
            Player::new("Meena Pillai", "F", Some(46), "Table Tennis"),
            Player::new("Ravi Teja", "M", Some(22), "Tennis"),
        ];
        let service = PoolService::new(
            Arc::new(StaticRosterSource::new(roster)),
            Arc::new(FinalistIndex::parse("Badminton Gold Suresh\nChess Silver Ravi")),
            DrawSettings {
                pool_count: PoolCount::new(2).expect("positive"),
                sport_match: SportMatch::Substring,
            },
        );
        let readiness = Arc::new(AtomicBool::new(false));
        readiness.store(ready, Ordering::Release);
        let state = AppState {
            readiness,
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_pool_routes(Arc::new(service)).layer(Extension(state))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get(app(true), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_tracks_startup_flag() {
        let (status, body) = get(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, body) = get(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn pools_are_served_alongside_operational_routes() {
        let (status, body) = get(app(true), "/api/pools").await;
        assert_eq!(status, StatusCode::OK);
        let pools = body["pools"].as_array().expect("pools array");
        assert_eq!(pools.len(), 2);
        assert_eq!(pools[0]["players"][0]["Name"], "Meena Pillai");
        assert_eq!(pools[1]["players"][0]["Name"], "Suresh Kumar");
        assert_eq!(pools[1]["players"][0]["Finalist"], true);
        assert_eq!(pools[0]["players"][1]["Name"], "Ravi Teja");
        assert_eq!(pools[0]["players"][1]["Finalist"], false);
    }

    #[tokio::test]
    async fn games_route_echoes_lowercased_sport() {
        let (status, body) = get(app(true), "/api/games/TENNIS").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["game"], "tennis");
        let players: usize = body["pools"]
            .as_array()
            .expect("pools array")
            .iter()
            .filter_map(|pool| pool["players"].as_array().map(Vec::len))
            .sum();
        assert_eq!(players, 2);
    }
}
