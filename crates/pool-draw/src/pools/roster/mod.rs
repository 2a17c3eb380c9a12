//! Roster retrieval. The core only needs a materialized `Vec<Player>`; where it
//! comes from (a published sheet, a local export, a fixture) sits behind
//! [`RosterSource`].

mod parser;
mod source;

use std::future::Future;
use std::io::Read;
use std::path::PathBuf;

use crate::pools::domain::Player;

pub use source::{ConfiguredRosterSource, FileRosterSource, HttpRosterSource, StaticRosterSource};

/// Supplies the current roster. Called once per request, never cached.
pub trait RosterSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Player>, RosterError>> + Send;
}

/// Parses roster CSV from any reader.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    parser::parse_players(reader).map_err(RosterError::from)
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("roster request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("roster endpoint answered with status {status}")]
    Status { status: u16 },
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}
