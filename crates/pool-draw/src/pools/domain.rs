use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// One registrant as read from the roster. Field names follow the roster
/// sheet headers so the JSON views echo the columns organisers already know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    #[serde(rename = "Sex", alias = "sex", default)]
    pub sex: String,
    #[serde(
        rename = "Age",
        alias = "age",
        default,
        deserialize_with = "deserialize_age"
    )]
    pub age: Option<u32>,
    #[serde(
        rename = "Sports Interested",
        alias = "sports_interested",
        alias = "sports interested",
        default
    )]
    pub sports_interested: String,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        sex: impl Into<String>,
        age: Option<u32>,
        sports_interested: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sex: sex.into(),
            age,
            sports_interested: sports_interested.into(),
        }
    }
}

/// A player together with the finalist flag derived for this draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedPlayer {
    #[serde(flatten)]
    pub player: Player,
    #[serde(rename = "Finalist")]
    pub finalist: bool,
}

/// Ordered members of one pool. Numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub number: usize,
    pub members: Vec<ClassifiedPlayer>,
}

impl Pool {
    pub fn empty(number: usize) -> Self {
        Self {
            number,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn finalists(&self) -> usize {
        self.members.iter().filter(|member| member.finalist).count()
    }
}

/// Number of pools to deal players into. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolCount(NonZeroUsize);

impl PoolCount {
    pub const DEFAULT: usize = 4;

    pub fn new(count: usize) -> Result<Self, PoolError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(PoolError::InvalidPoolCount(count as i64))
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PoolCount {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(Self::DEFAULT - 1))
    }
}

impl FromStr for PoolCount {
    type Err = PoolError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| PoolError::UnparsablePoolCount(raw.trim().to_string()))?;
        if value <= 0 {
            return Err(PoolError::InvalidPoolCount(value));
        }
        let count =
            usize::try_from(value).map_err(|_| PoolError::InvalidPoolCount(value))?;
        Self::new(count)
    }
}

impl fmt::Display for PoolCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// How a requested sport is compared against a player's sports list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SportMatch {
    /// Case-insensitive containment: "tennis" also matches "Table Tennis".
    #[default]
    Substring,
    /// The requested sport must equal one of the comma-separated entries.
    Token,
}

impl SportMatch {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Token => "token",
        }
    }
}

impl FromStr for SportMatch {
    type Err = PoolError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "substring" | "contains" => Ok(Self::Substring),
            "token" | "exact" => Ok(Self::Token),
            other => Err(PoolError::UnknownSportMatch(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("pool count must be a positive integer, got {0}")]
    InvalidPoolCount(i64),
    #[error("pool count '{0}' is not an integer")]
    UnparsablePoolCount(String),
    #[error("unknown sport match mode '{0}' (expected 'substring' or 'token')")]
    UnknownSportMatch(String),
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(age) = trimmed.parse::<u32>() {
        return Ok(Some(age));
    }
    // Sheets exports sometimes render whole numbers as "34.0".
    match trimmed.parse::<f64>() {
        Ok(age)
            if age.is_finite() && age >= 0.0 && age.fract() == 0.0 && age <= u32::MAX as f64 =>
        {
            Ok(Some(age as u32))
        }
        _ => Err(serde::de::Error::custom(format!(
            "age '{trimmed}' is not a whole number"
        ))),
    }
}
