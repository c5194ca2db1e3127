use std::collections::HashMap;

use tracing::warn;

/// Case-insensitive mapping from source words and phrases to their translations
///
/// Entries are indexed by the lowercased key so two keys differing only in
/// case collapse into one entry; the later insertion wins. The key as written
/// and the value are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermMap(HashMap<String, (String, String)>);

impl TermMap {
    pub fn new() -> Self {
        TermMap(HashMap::new())
    }

    /// Builder-style insert
    pub fn with_term(&mut self, source: &str, target: &str) -> &mut Self {
        self.insert(source, target);
        self
    }

    /// Insert a term, replacing any entry whose key matches case-insensitively
    ///
    /// Blank keys can never match a token and are dropped.
    pub fn insert(&mut self, source: &str, target: &str) -> Option<String> {
        if source.trim().is_empty() {
            warn!("Ignoring blank dictionary key mapped to '{}'", target);
            return None;
        }
        self.0
            .insert(
                source.to_lowercase(),
                (source.to_owned(), target.to_owned()),
            )
            .map(|(_, previous)| previous)
    }

    /// Merge another map into this one, entries from `other` win
    pub fn merge(&mut self, other: TermMap) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.0
            .get(&source.to_lowercase())
            .map(|(_, target)| target.as_str())
    }

    pub fn contains(&self, source: &str) -> bool {
        self.0.contains_key(&source.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (key as written, value) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.values().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose key spans more than one word
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(key, _)| is_phrase(key))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for TermMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TermMap::new();
        for (source, target) in iter {
            map.insert(source.as_ref(), target.as_ref());
        }
        map
    }
}

/// A phrase is a key with at least one space between words
pub fn is_phrase(key: &str) -> bool {
    key.trim().contains(' ')
}
