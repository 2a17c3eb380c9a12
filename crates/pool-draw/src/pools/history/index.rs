use std::collections::{BTreeMap, BTreeSet};

use super::tokenizer::person_tokens;
use super::{parse_records, MedalRecord};

/// Person-key to medaled event categories. Built once, read-only afterwards;
/// share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalistIndex {
    events_by_person: BTreeMap<String, BTreeSet<String>>,
}

impl FinalistIndex {
    pub fn parse(text: &str) -> Self {
        Self::from_records(&parse_records(text))
    }

    /// Every name word of a record becomes a key. Doubles entries and house
    /// names therefore over-match, which is accepted for this lookup.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MedalRecord>,
    {
        let mut events_by_person: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in records {
            for person in person_tokens(&record.person_names) {
                events_by_person
                    .entry(person.to_lowercase())
                    .or_default()
                    .insert(record.event_category.clone());
            }
        }
        Self { events_by_person }
    }

    pub fn events_for(&self, name_key: &str) -> Option<&BTreeSet<String>> {
        self.events_by_person.get(name_key)
    }

    pub fn len(&self) -> usize {
        self.events_by_person.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events_by_person.is_empty()
    }
}
