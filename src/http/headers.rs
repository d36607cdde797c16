//! Header collection for [`HttpRequest`](crate::http::request::HttpRequest) and
//! [`HttpResponse`](crate::http::response::HttpResponse)
//!
//! Headers are kept as an ordered list of name/value pairs. A name may occur
//! several times; lookups compare names case-insensitively but names are
//! stored and returned exactly as they were written.
//!
//! Every mutation is first submitted to the collection's [`Guard`]. Depending
//! on the guard a mutation either goes through, is dropped silently, or fails
//! with [`Error::GuardViolation`](crate::error::Error::GuardViolation).
//! Construction from an initial set of headers is not guarded.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::Result;
use crate::http::guard::{Guard, Mutation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    name: String,
    value: String,
}

impl Header {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Initial content of a header collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeadersInit {
    #[default]
    Empty,
    /// Entries in order; repeated names become separate entries. Maps
    /// convert to one pair per key.
    Pairs(Vec<(String, String)>),
}

impl HeadersInit {
    fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            HeadersInit::Empty => Vec::new(),
            HeadersInit::Pairs(pairs) => pairs,
        }
    }
}

impl From<&HttpHeaders> for HeadersInit {
    fn from(headers: &HttpHeaders) -> Self {
        HeadersInit::Pairs(
            headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for HeadersInit {
    fn from(pairs: Vec<(K, V)>) -> Self {
        HeadersInit::Pairs(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for HeadersInit {
    fn from(pairs: [(K, V); N]) -> Self {
        HeadersInit::from(Vec::from(pairs))
    }
}

impl<K: Into<String>, V: Into<String>> From<IndexMap<K, V>> for HeadersInit {
    fn from(map: IndexMap<K, V>) -> Self {
        HeadersInit::Pairs(
            map.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> From<HashMap<K, V>> for HeadersInit {
    fn from(map: HashMap<K, V>) -> Self {
        HeadersInit::Pairs(
            map.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<T: Into<HeadersInit>> From<Option<T>> for HeadersInit {
    fn from(init: Option<T>) -> Self {
        init.map(Into::into).unwrap_or_default()
    }
}

/// Ordered, case-insensitive, multi-valued header collection.
///
/// The guard is chosen once at construction. Copies are made with
/// [`HttpHeaders::with_init`] so that the new owner always picks the guard.
#[derive(Debug, Default)]
pub struct HttpHeaders {
    entries: Vec<Header>,
    guard: Guard,
}

impl HttpHeaders {
    pub fn new(guard: Guard) -> Self {
        Self {
            entries: Vec::new(),
            guard,
        }
    }

    /// Builds a collection from `init`. The guard is not consulted here, so
    /// an immutable collection can still be created with content.
    pub fn with_init(init: impl Into<HeadersInit>, guard: Guard) -> Self {
        let entries = init
            .into()
            .into_pairs()
            .into_iter()
            .map(|(name, value)| Header { name, value })
            .collect();

        Self { entries, guard }
    }

    pub fn guard(&self) -> Guard {
        self.guard
    }

    /// Adds an entry at the end, keeping any existing entry with the same name.
    pub fn append(&mut self, name: &str, value: &str) -> Result<()> {
        if !self.guard.check(Mutation::Append, name, Some(value))? {
            return Ok(());
        }
        self.entries.push(Header::new(name, value));
        Ok(())
    }

    /// Replaces every entry named `name` with a single one, placed where the
    /// first of them was. Appends when there was none.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        if !self.guard.check(Mutation::Set, name, Some(value))? {
            return Ok(());
        }

        match self.entries.iter().position(|h| h.matches(name)) {
            Some(first) => {
                self.entries[first] = Header::new(name, value);
                let mut index = 0;
                self.entries.retain(|h| {
                    let keep = index <= first || !h.matches(name);
                    index += 1;
                    keep
                });
            }
            None => self.entries.push(Header::new(name, value)),
        }
        Ok(())
    }

    /// Removes every entry named `name`.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if !self.guard.check(Mutation::Delete, name, None)? {
            return Ok(());
        }
        self.entries.retain(|h| !h.matches(name));
        Ok(())
    }

    /// Value of the first entry named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|h| h.matches(name))
            .map(|h| h.value.as_str())
    }

    /// Values of every entry named `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|h| h.matches(name))
            .map(|h| h.value.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|h| h.matches(name))
    }

    /// Snapshot with one value per name, for plain key/value consumers.
    ///
    /// The last value seen for a name wins; the key keeps the casing of the
    /// first occurrence and the position of that first occurrence.
    pub fn get_headers(&self) -> IndexMap<String, String> {
        let mut collapsed: IndexMap<String, (&str, &str)> = IndexMap::new();
        for h in &self.entries {
            collapsed
                .entry(h.name.to_ascii_lowercase())
                .and_modify(|(_, value)| *value = h.value.as_str())
                .or_insert((h.name.as_str(), h.value.as_str()));
        }

        collapsed
            .into_values()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|h| (h.name.as_str(), h.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
