use std::sync::Arc;

use tracing::debug;

use super::assigner::assign;
use super::domain::{Pool, PoolCount, SportMatch};
use super::filter::filter_by_sport;
use super::history::FinalistIndex;
use super::roster::{RosterError, RosterSource};

/// Knobs that shape every draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawSettings {
    pub pool_count: PoolCount,
    pub sport_match: SportMatch,
}

/// Pools for a single requested sport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportPools {
    pub sport: String,
    pub pools: Vec<Pool>,
}

/// Composes the roster source with the startup-built finalist index. Each call
/// fetches a fresh roster and recomputes the pools.
pub struct PoolService<S> {
    source: Arc<S>,
    index: Arc<FinalistIndex>,
    settings: DrawSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum PoolServiceError {
    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl<S> PoolService<S>
where
    S: RosterSource + 'static,
{
    pub fn new(source: Arc<S>, index: Arc<FinalistIndex>, settings: DrawSettings) -> Self {
        Self {
            source,
            index,
            settings,
        }
    }

    pub async fn pools(&self) -> Result<Vec<Pool>, PoolServiceError> {
        let players = self.source.fetch().await?;
        debug!(
            players = players.len(),
            pool_count = self.settings.pool_count.get(),
            "drawing pools"
        );
        Ok(assign(&players, &self.index, self.settings.pool_count))
    }

    pub async fn pools_for_sport(&self, sport: &str) -> Result<SportPools, PoolServiceError> {
        let pools = self.pools().await?;
        let sport = sport.to_lowercase();
        let pools = filter_by_sport(&pools, &sport, self.settings.sport_match);
        debug!(%sport, mode = self.settings.sport_match.label(), "pools filtered by sport");
        Ok(SportPools { sport, pools })
    }
}
