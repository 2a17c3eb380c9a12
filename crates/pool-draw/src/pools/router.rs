use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{ClassifiedPlayer, Pool};
use super::roster::RosterSource;
use super::service::{PoolService, PoolServiceError};

/// Router builder exposing the pool views.
pub fn pool_router<S>(service: Arc<PoolService<S>>) -> Router
where
    S: RosterSource + 'static,
{
    Router::new()
        .route("/api/pools", get(pools_handler::<S>))
        .route("/api/games/:game", get(game_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct PoolView<'a> {
    pub pool: usize,
    pub players: Vec<PoolMemberView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PoolMemberView<'a> {
    #[serde(flatten)]
    pub member: &'a ClassifiedPlayer,
    #[serde(rename = "Pool")]
    pub pool: usize,
}

pub fn pool_views(pools: &[Pool]) -> Vec<PoolView<'_>> {
    pools
        .iter()
        .map(|pool| PoolView {
            pool: pool.number,
            players: pool
                .members
                .iter()
                .map(|member| PoolMemberView {
                    member,
                    pool: pool.number,
                })
                .collect(),
        })
        .collect()
}

pub(crate) async fn pools_handler<S>(State(service): State<Arc<PoolService<S>>>) -> Response
where
    S: RosterSource + 'static,
{
    match service.pools().await {
        Ok(pools) => {
            let payload = json!({ "pools": pool_views(&pools) });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn game_handler<S>(
    State(service): State<Arc<PoolService<S>>>,
    Path(game): Path<String>,
) -> Response
where
    S: RosterSource + 'static,
{
    match service.pools_for_sport(&game).await {
        Ok(view) => {
            let payload = json!({
                "game": view.sport,
                "pools": pool_views(&view.pools),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: PoolServiceError) -> Response {
    let status = match error {
        PoolServiceError::Roster(_) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
