mod record_set;

pub use record_set::RecordSet;

use rustc_hash::FxHashMap;

/// Short name → record set, as published to the resolver.
///
/// A `Directory` is never modified after it is assembled; a refresh builds
/// a new one and swaps it in wholesale. Keys are lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: FxHashMap<String, RecordSet>,
    generation: u64,
}

impl Directory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: FxHashMap<String, RecordSet>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(name, set)| (name.to_ascii_lowercase(), set))
            .collect();
        Self {
            entries,
            generation: 0,
        }
    }

    /// Stamped by the store when the directory is published.
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, short_name: &str) -> Option<&RecordSet> {
        match self.entries.get(short_name) {
            Some(set) => Some(set),
            None if short_name.bytes().any(|b| b.is_ascii_uppercase()) => {
                self.entries.get(&short_name.to_ascii_lowercase())
            }
            None => None,
        }
    }

    pub fn contains(&self, short_name: &str) -> bool {
        self.get(short_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordSet)> {
        self.entries.iter().map(|(name, set)| (name.as_str(), set))
    }
}

impl<S: Into<String>> FromIterator<(S, RecordSet)> for Directory {
    fn from_iter<T: IntoIterator<Item = (S, RecordSet)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(name, set)| (name.into(), set))
            .collect::<FxHashMap<_, _>>();
        Self::from_entries(entries)
    }
}
