use crate::constants::header;
use crate::util::normalize_lower;
use crate::vary::merge_vary;
use indexmap::IndexMap;

/// Ordered header map with case-insensitive names.
///
/// Names keep the casing they were first inserted with and entries keep
/// insertion order, so the emitted headers read exactly as configured.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, HeaderEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    value: String,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&normalize_lower(name))
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_lower(name))
    }

    /// Inserts or replaces a header. A replaced entry keeps its position.
    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        let key = normalize_lower(&name);
        match self.entries.get_mut(&key) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(key, HeaderEntry { name, value });
            }
        }
    }

    /// Adds another value to a header, joining with `", "` when one exists.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        let key = normalize_lower(&name);
        match self.entries.get_mut(&key) {
            Some(entry) if entry.value.is_empty() => entry.value = value,
            Some(entry) => {
                entry.value.push_str(", ");
                entry.value.push_str(&value);
            }
            None => {
                self.entries.insert(key, HeaderEntry { name, value });
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries
            .shift_remove(&normalize_lower(name))
            .map(|entry| entry.value)
    }

    /// Merges every member of `value` into the `Vary` header.
    pub fn merge_vary(&mut self, value: &str) {
        for token in value.split(',').map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let merged = merge_vary(self.get(header::VARY), token);
            self.set(header::VARY, merged);
        }
    }

    /// Writes every entry of `other` into `self`. `Vary` is merged rather
    /// than replaced.
    pub fn extend(&mut self, other: Headers) {
        for (name, value) in other {
            if name.eq_ignore_ascii_case(header::VARY) {
                self.merge_vary(&value);
            } else {
                self.set(name, value);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_values()
            .map(|entry| (entry.name, entry.value))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
