pub mod assigner;
pub mod classifier;
pub mod domain;
pub mod filter;
pub mod history;
mod normalizer;
pub mod roster;
pub mod router;
pub mod service;

pub use assigner::assign;
pub use classifier::classify;
pub use domain::{ClassifiedPlayer, Player, Pool, PoolCount, PoolError, SportMatch};
pub use filter::filter_by_sport;
pub use history::{load_index, parse_records, FinalistIndex, HistoryError, MedalRecord, MedalTier};
pub use normalizer::{name_key, registered_sports};
pub use roster::{
    read_roster, ConfiguredRosterSource, FileRosterSource, HttpRosterSource, RosterError,
    RosterSource, StaticRosterSource,
};
pub use router::{pool_router, pool_views, PoolMemberView, PoolView};
pub use service::{DrawSettings, PoolService, PoolServiceError, SportPools};
