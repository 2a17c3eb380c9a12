use metrics_exporter_prometheus::PrometheusHandle;
use pool_draw::config::{DrawConfig, RosterLocation};
use pool_draw::error::AppError;
use pool_draw::pools::{
    ConfiguredRosterSource, FileRosterSource, HttpRosterSource, PoolCount, SportMatch,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn roster_source(config: &DrawConfig) -> Result<ConfiguredRosterSource, AppError> {
    let source = match config.roster_location()? {
        RosterLocation::Url(url) => ConfiguredRosterSource::Http(HttpRosterSource::new(
            url.clone(),
            config.roster_timeout,
        )?),
        RosterLocation::File(path) => {
            ConfiguredRosterSource::File(FileRosterSource::new(path.clone()))
        }
    };
    Ok(source)
}

pub(crate) fn parse_pool_count(raw: &str) -> Result<PoolCount, String> {
    raw.parse::<PoolCount>().map_err(|err| err.to_string())
}

pub(crate) fn parse_sport_match(raw: &str) -> Result<SportMatch, String> {
    raw.parse::<SportMatch>().map_err(|err| err.to_string())
}
