//! Past results parsing.
//!
//! Results summaries are free text written by whoever ran the last event, e.g.
//!
//! ```text
//! Badminton Gold Suresh (Red House) 21-15 21-18
//! Carrom below 50 years - Silver - Meena Blue House
//! ```
//!
//! Each line is tokenized and scanned for `<event> <medal> <names>` runs. The
//! resulting [`MedalRecord`]s fold into a [`FinalistIndex`] keyed by every
//! word of the winners' names.

mod index;
mod tokenizer;

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use tokenizer::{tokenize, Token};

pub use index::FinalistIndex;

/// Event suffixes that may carry digits and therefore would not be picked up
/// by a plain run of words. Longest phrases first.
const EVENT_QUALIFIERS: &[&[&str]] = &[
    &["below", "50", "years"],
    &["above", "50", "years"],
    &["mixed", "doubles"],
    &["100", "meters"],
    &["50", "meters"],
    &["25", "meters"],
    &["doubles"],
    &["singles"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedalTier {
    Gold,
    Silver,
    Bronze,
}

impl MedalTier {
    fn from_token(token: &Token<'_>) -> Option<Self> {
        if !token.is_word() {
            return None;
        }
        if token.eq_word("gold") {
            Some(Self::Gold)
        } else if token.eq_word("silver") {
            Some(Self::Silver)
        } else if token.eq_word("bronze") {
            Some(Self::Bronze)
        } else {
            None
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for MedalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One podium finish pulled out of the results text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedalRecord {
    pub event_category: String,
    pub medal_tier: MedalTier,
    /// Name phrase exactly as written; doubles entries hold both partners.
    pub person_names: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to read results history from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scans every line of `text` for medal entries. Lines without a usable
/// `<event> <medal> <names>` shape contribute nothing.
pub fn parse_records(text: &str) -> Vec<MedalRecord> {
    text.lines().flat_map(parse_line).collect()
}

/// Reads the results file and builds the index in one go.
pub fn load_index(path: impl AsRef<Path>) -> Result<FinalistIndex, HistoryError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| HistoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index = FinalistIndex::parse(&text);
    info!(
        path = %path.display(),
        people = index.len(),
        "finalist index built"
    );
    Ok(index)
}

struct EventSpan {
    start: usize,
    end: usize,
}

fn parse_line(line: &str) -> Vec<MedalRecord> {
    let tokens = tokenize(line);
    let medals: Vec<(usize, MedalTier)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(position, token)| MedalTier::from_token(token).map(|tier| (position, tier)))
        .collect();

    if medals.is_empty() {
        return Vec::new();
    }

    let names_start: Vec<usize> = medals
        .iter()
        .map(|&(position, _)| {
            let next = position + 1;
            match tokens.get(next) {
                Some(token) if token.is_connector() => next + 1,
                _ => next,
            }
        })
        .collect();

    let events: Vec<Option<EventSpan>> = medals
        .iter()
        .enumerate()
        .map(|(slot, &(position, _))| {
            let floor = if slot == 0 { 0 } else { names_start[slot - 1] };
            event_span(&tokens, position, floor, slot > 0)
        })
        .collect();

    let mut records = Vec::new();
    for (slot, &(_, medal_tier)) in medals.iter().enumerate() {
        let Some(event) = &events[slot] else {
            continue;
        };

        let ceiling = match (medals.get(slot + 1), events.get(slot + 1)) {
            (Some(_), Some(Some(next_event))) => next_event.start,
            (Some(&(next_position, _)), _) => next_position,
            (None, _) => tokens.len(),
        };

        let first = names_start[slot];
        let mut last = first;
        while last < ceiling && tokens.get(last).is_some_and(Token::is_word) {
            last += 1;
        }
        if last == first {
            continue;
        }

        let event_category = tokens[event.start..event.end]
            .iter()
            .map(|token| token.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let person_names = line[tokens[first].start..tokens[last - 1].end].to_string();

        debug!(%event_category, %medal_tier, %person_names, "medal entry parsed");
        records.push(MedalRecord {
            event_category,
            medal_tier,
            person_names,
        });
    }

    records
}

/// Walks backwards from the medal word to find the event phrase. `floor` is
/// the first token the phrase may claim. When an earlier medal on the same
/// line owns the words right up to this phrase, the boundary is placed after
/// the last "house" token, or after one name word when there is none.
fn event_span(
    tokens: &[Token<'_>],
    medal_position: usize,
    floor: usize,
    shares_line: bool,
) -> Option<EventSpan> {
    let mut end = medal_position;
    if end > floor && tokens[end - 1].is_connector() {
        end -= 1;
    }

    let qualifier_start = EVENT_QUALIFIERS
        .iter()
        .find(|qualifier| {
            end >= floor + qualifier.len()
                && tokens[end - qualifier.len()..end]
                    .iter()
                    .zip(qualifier.iter())
                    .all(|(token, expected)| token.text.eq_ignore_ascii_case(expected))
        })
        .map_or(end, |qualifier| end - qualifier.len());

    let mut start = qualifier_start;
    while start > floor && tokens[start - 1].is_word() {
        start -= 1;
    }

    if shares_line && start == floor && floor < qualifier_start {
        start = tokens[floor..qualifier_start]
            .iter()
            .rposition(|token| token.eq_word("house"))
            .map_or(floor + 1, |offset| floor + offset + 1);
    }

    (start < end).then_some(EventSpan { start, end })
}
