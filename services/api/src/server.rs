use crate::cli::ServeArgs;
use crate::infra::{roster_source, AppState};
use crate::routes::with_pool_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pool_draw::config::AppConfig;
use pool_draw::error::AppError;
use pool_draw::pools::{load_index, PoolService};
use pool_draw::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // The index must be complete before any request can classify players.
    let index = Arc::new(load_index(&config.draw.history_path)?);
    let source = Arc::new(roster_source(&config.draw)?);
    let pool_service = Arc::new(PoolService::new(source, index, config.draw.settings));

    let app = with_pool_routes(pool_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        pool_count = config.draw.settings.pool_count.get(),
        sport_match = config.draw.settings.sport_match.label(),
        "pool draw service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
