use bytes::Bytes;

use crate::error::HeaderError;
use crate::matches;

/// HTTP Header value.
///
/// Backed by [`Bytes`], so cloning is cheap. Values constructed from string
/// types are accepted as-is; only [`from_slice`][HeaderValue::from_slice]
/// validates, since arbitrary bytes may not be UTF-8.
#[derive(Clone)]
pub struct HeaderValue {
    /// is valid UTF-8
    bytes: Bytes,
}

impl HeaderValue {
    /// Create header value from a static string.
    #[inline]
    pub const fn from_static(value: &'static str) -> Self {
        Self {
            bytes: Bytes::from_static(value.as_bytes()),
        }
    }

    /// Create header value from a string.
    #[inline]
    pub fn from_string<S: Into<String>>(value: S) -> Self {
        Self {
            bytes: Bytes::from(value.into().into_bytes()),
        }
    }

    /// Parse header value by copying from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not valid UTF-8 or contains a byte that
    /// cannot appear in a field value, such as a line break.
    pub fn from_slice<A: AsRef<[u8]>>(value: A) -> Result<Self, HeaderError> {
        let bytes = value.as_ref();
        if str::from_utf8(bytes).is_err() {
            return Err(HeaderError::Invalid);
        }
        let mut rest = bytes;
        while let [byte, tail @ ..] = rest {
            if !matches::is_header_value(*byte) {
                return Err(HeaderError::Invalid);
            }
            rest = tail;
        }
        Ok(Self {
            bytes: Bytes::copy_from_slice(bytes),
        })
    }

    /// Returns header value as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // `bytes` is valid UTF-8
        unsafe { str::from_utf8_unchecked(&self.bytes) }
    }

    /// Returns header value as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the value length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the value is the empty string.
    ///
    /// An empty value is still a value: it is counted and rendered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks that two values are an ASCII case-insensitive match.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

// ===== Traits =====

impl std::fmt::Display for HeaderValue {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderValue").field(&self.as_str()).finish()
    }
}

impl std::str::FromStr for HeaderValue {
    type Err = std::convert::Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl PartialEq for HeaderValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for HeaderValue {}

impl PartialEq<str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for HeaderValue {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<[u8]> for HeaderValue {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl From<HeaderValue> for Bytes {
    #[inline]
    fn from(value: HeaderValue) -> Self {
        value.bytes
    }
}

// ===== Slot =====

/// A raw header slot.
///
/// Distinguishes "no value" from the empty string: a [`Null`][Slot::Null]
/// slot occupies a position in the raw sequence but is invisible to
/// rendering, counting, iteration and search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Null,
    Value(HeaderValue),
}

impl Slot {
    /// Returns the contained value, or [`None`] for a null slot.
    #[inline]
    pub const fn value(&self) -> Option<&HeaderValue> {
        match self {
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns `true` for a null slot.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<HeaderValue> for Slot {
    #[inline]
    fn from(value: HeaderValue) -> Self {
        Self::Value(value)
    }
}

impl From<Option<HeaderValue>> for Slot {
    #[inline]
    fn from(value: Option<HeaderValue>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

// ===== Conversion Traits =====

/// A type that can be stored as a raw header slot.
///
/// Implemented for string types, integers, [`HeaderValue`], [`Slot`] and
/// `Option` of any of these, where [`None`] stands for the explicit
/// "no value" marker.
#[allow(private_bounds)]
pub trait IntoSlot: Sealed {}
pub(crate) trait Sealed: Sized {
    fn into_slot(self) -> Slot;
}

impl IntoSlot for Slot {}
impl Sealed for Slot {
    #[inline]
    fn into_slot(self) -> Slot {
        self
    }
}

impl IntoSlot for HeaderValue {}
impl Sealed for HeaderValue {
    #[inline]
    fn into_slot(self) -> Slot {
        Slot::Value(self)
    }
}

impl IntoSlot for &str {}
impl Sealed for &str {
    #[inline]
    fn into_slot(self) -> Slot {
        Slot::Value(HeaderValue::from_string(self))
    }
}

impl IntoSlot for String {}
impl Sealed for String {
    #[inline]
    fn into_slot(self) -> Slot {
        Slot::Value(HeaderValue::from_string(self))
    }
}

impl<V: IntoSlot> IntoSlot for Option<V> {}
impl<V: Sealed> Sealed for Option<V> {
    #[inline]
    fn into_slot(self) -> Slot {
        match self {
            Some(value) => value.into_slot(),
            None => Slot::Null,
        }
    }
}

macro_rules! int_slot {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoSlot for $t {}
            impl Sealed for $t {
                #[inline]
                fn into_slot(self) -> Slot {
                    let mut buf = itoa::Buffer::new();
                    Slot::Value(HeaderValue::from_string(buf.format(self)))
                }
            }
        )*
    };
}

int_slot!(u16, u32, u64, usize, i32, i64);
