use crate::header::Header;
use crate::log::debug;
use crate::name::{HeaderName, IntoHeaderName};
use crate::value::IntoSlot;

/// Collection of [`Header`] containers, one per canonical name.
///
/// Lookup is ASCII case-insensitive; containers keep their insertion order.
/// This is the per-message surface a client works against: parse a response
/// header block with [`from_lines`][Headers::from_lines], then query
/// containers by name.
#[derive(Clone, Default)]
pub struct Headers {
    headers: Vec<Header>,
}

impl Headers {
    /// Create an empty collection.
    #[inline]
    pub const fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    /// Returns the number of distinct header names.
    #[inline]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if the collection has no container.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns the container for `name`, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Header> {
        self.headers
            .iter()
            .find(|header| header.name().eq_ignore_ascii_case(name))
    }

    /// Mutable variant of [`get`][Headers::get].
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Header> {
        self.headers
            .iter_mut()
            .find(|header| header.name().eq_ignore_ascii_case(name))
    }

    /// Returns `true` if a container exists for `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate containers in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.headers.iter()
    }

    /// Insert a container, replacing any existing one with the same
    /// canonical name. Returns the replaced container.
    pub fn insert(&mut self, header: Header) -> Option<Header> {
        match self.get_mut(header.name().as_str()) {
            Some(slot) => Some(std::mem::replace(slot, header)),
            None => {
                self.headers.push(header);
                None
            }
        }
    }

    /// Add a value to the container for `name`, creating it if absent.
    ///
    /// The supplied casing is recorded as a case-variant key on the existing
    /// container.
    pub fn append<N: IntoHeaderName, V: IntoSlot>(&mut self, name: N, value: V) {
        let name = name.into_header_name();
        match self.get_mut(name.as_str()) {
            Some(header) => header.add_raw(name, value),
            None => self.headers.push(Header::of(name, value)),
        }
    }

    /// Remove and return the container for `name`.
    pub fn remove(&mut self, name: &str) -> Option<Header> {
        let index = self
            .headers
            .iter()
            .position(|header| header.name().eq_ignore_ascii_case(name))?;
        Some(self.headers.remove(index))
    }

    /// Build a collection from a raw header block, one `Name: value` line at
    /// a time.
    ///
    /// Malformed lines are skipped rather than failing the whole block.
    pub fn from_lines(block: &str) -> Self {
        let mut headers = Self::new();
        for line in block.lines() {
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            let parsed = line
                .split_once(':')
                .and_then(|(name, value)| {
                    Some((HeaderName::parse(name.trim_ascii()).ok()?, value))
                });
            match parsed {
                Some((name, value)) => headers.append(name, value.trim_ascii()),
                None => debug!("skipping malformed header line {line:?}"),
            }
        }
        headers
    }
}

// ===== Traits =====

impl std::fmt::Debug for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;

    type IntoIter = std::slice::Iter<'a, Header>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: IntoHeaderName, V: IntoSlot> Extend<(N, V)> for Headers {
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<N: IntoHeaderName, V: IntoSlot> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        headers.extend(iter);
        headers
    }
}
