/// token   = 1*tchar
/// tchar   = "!" / "#" / "$" / "%" / "&" / "'" / "*"
///         / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
///         / DIGIT / ALPHA
#[inline(always)]
pub(crate) const fn is_token(byte: u8) -> bool {
    matches!(
        byte,
        | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
        | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
    )
    || byte.is_ascii_alphanumeric()
}

/// field-value = *( HTAB / SP / VCHAR / obs-text )
#[inline(always)]
pub(crate) const fn is_header_value(byte: u8) -> bool {
    matches!(byte, b'\t' | b' '..=b'~' | 0x80..)
}
