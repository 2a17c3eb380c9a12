use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use super::{read_roster, RosterError, RosterSource};
use crate::pools::domain::Player;

/// Published spreadsheet (or any URL) serving the roster as CSV.
#[derive(Debug, Clone)]
pub struct HttpRosterSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRosterSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RosterError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl RosterSource for HttpRosterSource {
    async fn fetch(&self) -> Result<Vec<Player>, RosterError> {
        let response = self.client.get(&self.url).send().await.map_err(|err| {
            warn!(url = %self.url, error = %err, "roster request failed");
            RosterError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "roster endpoint rejected request");
            return Err(RosterError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let players = read_roster(&body[..])?;
        debug!(url = %self.url, players = players.len(), "roster fetched");
        Ok(players)
    }
}

/// Roster CSV on local disk, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct FileRosterSource {
    path: PathBuf,
}

impl FileRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterSource for FileRosterSource {
    async fn fetch(&self) -> Result<Vec<Player>, RosterError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| RosterError::Io {
                path: self.path.clone(),
                source,
            })?;
        let players = read_roster(bytes.as_slice())?;
        debug!(path = %self.path.display(), players = players.len(), "roster loaded");
        Ok(players)
    }
}

/// Fixed in-memory roster for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRosterSource {
    players: Vec<Player>,
}

impl StaticRosterSource {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }
}

impl RosterSource for StaticRosterSource {
    async fn fetch(&self) -> Result<Vec<Player>, RosterError> {
        Ok(self.players.clone())
    }
}

/// Whichever source the deployment configured.
#[derive(Debug, Clone)]
pub enum ConfiguredRosterSource {
    Http(HttpRosterSource),
    File(FileRosterSource),
}

impl RosterSource for ConfiguredRosterSource {
    async fn fetch(&self) -> Result<Vec<Player>, RosterError> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }
}
