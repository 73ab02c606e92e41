use std::borrow::Cow;
use std::str::FromStr;

use crate::error::HeaderError;
use crate::iter::{Raw, Values};
use crate::log::debug;
use crate::name::{HeaderName, IntoHeaderName};
use crate::params::{Params, parse_params};
use crate::value::{HeaderValue, IntoSlot, Slot};

/// Raw values stored for a single header name.
///
/// Every observed case variant of the name keeps its own group of raw slots
/// until [`normalize`][Header::normalize] collapses them into one group keyed
/// by the canonical name. Rendering joins all non-null values with the glue
/// separator followed by a single space.
///
/// ```rust
/// use hfield::Header;
///
/// let mut header = Header::of("Accept", "text/html");
/// header.add("application/json");
/// assert_eq!(header.to_string(), "text/html, application/json");
/// ```
#[derive(Clone)]
pub struct Header {
    name: HeaderName,
    glue: Cow<'static, str>,
    groups: Vec<Group>,
}

/// One case-variant key with its ordered raw slots.
#[derive(Clone)]
pub(crate) struct Group {
    pub(crate) key: HeaderName,
    pub(crate) slots: Vec<Slot>,
}

const DEFAULT_GLUE: &str = ",";

// ===== Construction =====

impl Header {
    /// Create an empty container for `name`.
    pub fn new<N: IntoHeaderName>(name: N) -> Self {
        Self {
            name: name.into_header_name(),
            glue: Cow::Borrowed(DEFAULT_GLUE),
            groups: Vec::new(),
        }
    }

    /// Create a container holding a single value.
    ///
    /// Falsy values (`0`, `""`) are stored and counted like any other.
    pub fn of<N: IntoHeaderName, V: IntoSlot>(name: N, value: V) -> Self {
        let mut header = Self::new(name);
        header.add(value);
        header
    }

    /// Create a container from a sequence of values.
    ///
    /// [`None`] entries become [`Slot::Null`]: they occupy a raw slot but are
    /// invisible to rendering and counting.
    pub fn from_values<N, I>(name: N, values: I) -> Self
    where
        N: IntoHeaderName,
        I: IntoIterator,
        I::Item: IntoSlot,
    {
        let mut header = Self::new(name);
        for value in values {
            header.add(value);
        }
        header
    }

    /// Replace the glue separator, builder style.
    pub fn with_glue<G: Into<Cow<'static, str>>>(mut self, glue: G) -> Self {
        self.glue = glue.into();
        self
    }
}

// ===== Lookup =====

impl Header {
    /// Returns the header name as originally supplied, case preserved.
    #[inline]
    pub const fn name(&self) -> &HeaderName {
        &self.name
    }

    /// Returns the glue separator.
    #[inline]
    pub fn glue(&self) -> &str {
        &self.glue
    }

    /// Returns an iterator over the raw `(key, slots)` groups in insertion
    /// order, one group per observed case variant of the name.
    #[inline]
    pub fn raw(&self) -> Raw<'_> {
        Raw::new(&self.groups)
    }

    /// Returns an iterator over all non-null values in insertion order.
    ///
    /// Each call starts over from the first value.
    #[inline]
    pub fn iter(&self) -> Values<'_> {
        Values::new(&self.groups)
    }

    /// Returns the number of non-null values across all groups.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the container holds no non-null value.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns `true` if any stored value equals `search` exactly.
    pub fn has_value(&self, search: &str) -> bool {
        self.iter().any(|value| value.as_str() == search)
    }

    /// ASCII case-insensitive variant of [`has_value`][Header::has_value].
    pub fn has_value_ignore_ascii_case(&self, search: &str) -> bool {
        self.iter().any(|value| value.eq_ignore_ascii_case(search))
    }

    /// Returns `true` if a raw group key equals `name` exactly, case
    /// included.
    pub fn has_exact_header(&self, name: &str) -> bool {
        self.groups.iter().any(|group| group.key.as_str() == name)
    }

    /// Returns all non-null values as an owned ordered list.
    pub fn to_vec(&self) -> Vec<HeaderValue> {
        self.iter().cloned().collect()
    }

    /// Parse parameter groups out of every stored value, in insertion order.
    ///
    /// See [`parse_params`] for the grammar.
    pub fn parse_params(&self) -> Vec<Params> {
        let mut params = Vec::new();
        for value in self.iter() {
            params.extend(parse_params(value.as_str()));
        }
        params
    }
}

// ===== Mutation =====

impl Header {
    /// Replace the glue separator used by rendering.
    pub fn set_glue<G: Into<Cow<'static, str>>>(&mut self, glue: G) {
        self.glue = glue.into();
    }

    /// Append a value under the canonical name key, creating its group if
    /// absent.
    pub fn add<V: IntoSlot>(&mut self, value: V) {
        let key = self.name.clone();
        self.add_raw(key, value);
    }

    /// Append a value under an explicit case-variant key.
    ///
    /// This is how a response parser records the literal casing observed on
    /// the wire.
    pub fn add_raw<K: IntoHeaderName, V: IntoSlot>(&mut self, key: K, value: V) {
        let key = key.into_header_name();
        let slot = value.into_slot();
        match self.groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.slots.push(slot),
            None => self.groups.push(Group {
                key,
                slots: vec![slot],
            }),
        }
    }

    /// Collapse all case-variant groups into one group keyed by the
    /// canonical name, preserving value order.
    ///
    /// With `strip_duplicates`, values containing the glue separator are
    /// additionally split into separate trimmed values and exact duplicates
    /// are removed, case-sensitive. Null slots are dropped either way.
    pub fn normalize(&mut self, strip_duplicates: bool) -> &mut Self {
        let mut values: Vec<HeaderValue> = Vec::new();
        for group in self.groups.drain(..) {
            for slot in group.slots {
                if let Slot::Value(value) = slot {
                    values.push(value);
                }
            }
        }

        if strip_duplicates {
            let sep = self.glue.chars().next().unwrap_or(',');
            let mut stripped: Vec<HeaderValue> = Vec::with_capacity(values.len());
            for value in values {
                for piece in value.as_str().split(sep) {
                    let piece = piece.trim_ascii();
                    if !stripped.iter().any(|seen| seen.as_str() == piece) {
                        stripped.push(HeaderValue::from_string(piece));
                    }
                }
            }
            values = stripped;
        }

        debug!("normalized `{}` into {} value(s)", self.name, values.len());

        self.groups.push(Group {
            key: self.name.clone(),
            slots: values.into_iter().map(Slot::Value).collect(),
        });
        self
    }

    /// Remove the first exact-match occurrence of `value` from every
    /// case-variant group.
    ///
    /// Matching is by full string equality: substring-equal or
    /// case-variant values are left intact. Groups emptied by the removal
    /// are dropped.
    pub fn remove_value(&mut self, value: &str) {
        for group in &mut self.groups {
            let found = group
                .slots
                .iter()
                .position(|slot| matches!(slot.value(), Some(v) if v.as_str() == value));
            if let Some(index) = found {
                group.slots.remove(index);
            }
        }
        self.groups.retain(|group| !group.slots.is_empty());
    }
}

// ===== Parsing =====

impl Header {
    /// Parse a raw `Name: value` header line.
    ///
    /// The value is trimmed of surrounding whitespace and stored under the
    /// casing the name was observed with.
    ///
    /// # Errors
    ///
    /// Returns error if the line has no `:` or the name is not a valid
    /// token.
    pub fn from_line(line: &str) -> Result<Self, HeaderError> {
        let Some((name, value)) = line.split_once(':') else {
            return Err(HeaderError::MissingColon);
        };
        let name = HeaderName::parse(name.trim_ascii())?;
        let mut header = Self::new(name);
        header.add(value.trim_ascii());
        Ok(header)
    }
}

impl FromStr for Header {
    type Err = HeaderError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

// ===== Traits =====

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut values = self.iter();
        let Some(first) = values.next() else {
            return Ok(());
        };
        f.write_str(first.as_str())?;
        for value in values {
            f.write_str(&self.glue)?;
            f.write_str(" ")?;
            f.write_str(value.as_str())?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Header")
            .field("name", &self.name)
            .field("glue", &self.glue)
            .field("values", &self.iter())
            .finish()
    }
}
