use bytes::Bytes;

use crate::error::HeaderError;
use crate::matches;

/// HTTP Header name.
///
/// The name is stored exactly as supplied. Names compare case-insensitively
/// on the wire, but the observed casing is part of the raw data model and is
/// preserved until [`Header::normalize`] collapses the case variants.
///
/// [`PartialEq`] between names is exact, case included; use
/// [`eq_ignore_ascii_case`][HeaderName::eq_ignore_ascii_case] for the wire
/// comparison.
///
/// [`Header::normalize`]: crate::Header::normalize
#[derive(Clone)]
pub struct HeaderName {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    /// is valid ASCII token
    Owned(Bytes),
}

impl HeaderName {
    /// Parse header name from a static string.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name token.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        match validate_header_name(name.as_bytes()) {
            Ok(()) => Self {
                repr: Repr::Static(name),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header name by copying from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name token.
    #[inline]
    pub fn parse<A: AsRef<[u8]>>(name: A) -> Result<Self, HeaderError> {
        let bytes = name.as_ref();
        match validate_header_name(bytes) {
            Ok(()) => Ok(Self {
                repr: Repr::Owned(Bytes::copy_from_slice(bytes)),
            }),
            Err(err) => Err(err),
        }
    }

    /// Extracts a string slice of the header name, case preserved.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Static(s) => s,
            // token bytes are valid ASCII
            Repr::Owned(bytes) => unsafe { str::from_utf8_unchecked(bytes) },
        }
    }

    /// Checks that two header names are an ASCII case-insensitive match.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

// ===== Parser =====

const MAX_HEADER_NAME_LEN: usize = 1024;

/// token       = 1*tchar
/// field-name  = token
const fn validate_header_name(mut bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;

    if !matches!(bytes.len(), 1..=MAX_HEADER_NAME_LEN) {
        return Err(E::invalid_len(bytes.len()));
    }

    while let [byte, rest @ ..] = bytes {
        if matches::is_token(*byte) {
            bytes = rest;
        } else {
            return Err(E::Invalid);
        }
    }

    Ok(())
}

// ===== Traits =====

impl std::fmt::Display for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

impl std::fmt::Debug for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderName").field(&self.as_str()).finish()
    }
}

impl std::hash::Hash for HeaderName {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write(self.as_str().as_bytes());
    }
}

impl PartialEq for HeaderName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for HeaderName {}

impl PartialEq<str> for HeaderName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HeaderName {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for HeaderName {
    type Err = HeaderError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ===== Conversion Traits =====

/// A type that can be used as a header name.
#[allow(private_bounds)]
pub trait IntoHeaderName: Sealed {}
pub(crate) trait Sealed: Sized {
    fn into_header_name(self) -> HeaderName;
}

impl IntoHeaderName for HeaderName {}
impl Sealed for HeaderName {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        self
    }
}

/// Static names are validated eagerly and panic on invalid input; parse
/// arbitrary input with [`HeaderName::parse`] instead.
impl IntoHeaderName for &'static str {}
impl Sealed for &'static str {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        HeaderName::from_static(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_supplied_case() {
        let name = HeaderName::from_static("Content-Type");
        assert_eq!(name.as_str(), "Content-Type");
        assert_eq!(name, "Content-Type");
        assert_ne!(name, "content-type");
        assert!(name.eq_ignore_ascii_case("content-type"));
    }

    #[test]
    fn rejects_invalid_tokens() {
        assert_eq!(HeaderName::parse(""), Err(HeaderError::Empty));
        assert_eq!(HeaderName::parse("Content Type"), Err(HeaderError::Invalid));
        assert_eq!(HeaderName::parse("Foo:"), Err(HeaderError::Invalid));
        assert_eq!(
            HeaderName::parse("x".repeat(2048)),
            Err(HeaderError::TooLong)
        );
        assert!(HeaderName::parse("X-Request-Id").is_ok());
    }
}
