//! Parameter-style header value parsing, as used by `Link`-like headers.
use indexmap::IndexMap;

use crate::log::trace;

/// One comma-delimited parameter group: insertion-ordered `key=value` pairs.
///
/// Duplicate keys within a group overwrite, last wins.
pub type Params = IndexMap<String, String>;

/// Parse `key=value` parameter groups from a raw header string.
///
/// Groups are comma-separated and segments within a group are
/// semicolon-separated. Both separators are ignored inside double quotes,
/// and a backslash keeps a semicolon literal. Values may be double-quoted,
/// quotes are stripped. A bare token or a leading `<...>` token becomes a
/// key with an empty string value; `=` inside the angle brackets does not
/// split.
///
/// Malformed input degrades into best-effort groups, this never fails.
///
/// ```rust
/// use hfield::parse_params;
///
/// let groups = parse_params(r#"foo="baz"; bar=123, boo"#);
/// assert_eq!(groups[0]["foo"], "baz");
/// assert_eq!(groups[0]["bar"], "123");
/// assert_eq!(groups[1]["boo"], "");
/// ```
pub fn parse_params(header: &str) -> Vec<Params> {
    let mut params = Vec::new();

    for group in split_unquoted(header, b',') {
        let mut part = Params::new();
        for segment in split_unquoted(group, b';') {
            if let Some((key, value)) = parse_segment(segment) {
                part.insert(key.to_owned(), value.to_owned());
            }
        }
        if !part.is_empty() {
            params.push(part);
        }
    }

    trace!("parsed {} parameter group(s)", params.len());

    params
}

/// Parse one `key[=value]` segment. Empty segments and empty keys yield
/// [`None`].
fn parse_segment(segment: &str) -> Option<(&str, &str)> {
    let segment = segment.trim_ascii();
    if segment.is_empty() {
        return None;
    }

    // `<...>` tokens are opaque, the whole bracketed token is the key
    if segment.starts_with('<') {
        return match segment.find('>') {
            Some(end) => {
                let key = &segment[..=end];
                let value = match segment[end + 1..].trim_ascii().strip_prefix('=') {
                    Some(value) => trim_param(value),
                    None => "",
                };
                Some((key, value))
            }
            // unterminated bracket, keep the token as a bare key
            None => Some((segment, "")),
        };
    }

    let (key, value) = match segment.split_once('=') {
        Some((key, value)) => (trim_param(key), trim_param(value)),
        None => (trim_param(segment), ""),
    };

    if key.is_empty() { None } else { Some((key, value)) }
}

/// Trim surrounding whitespace and double quotes.
fn trim_param(s: &str) -> &str {
    s.trim_ascii().trim_matches('"')
}

// ===== Splitting =====

/// Split on `delim` bytes that are outside double quotes and not preceded by
/// a backslash.
fn split_unquoted(s: &str, delim: u8) -> SplitUnquoted<'_> {
    SplitUnquoted {
        rest: Some(s),
        delim,
    }
}

struct SplitUnquoted<'a> {
    rest: Option<&'a str>,
    delim: u8,
}

impl<'a> Iterator for SplitUnquoted<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let bytes = rest.as_bytes();
        let mut quoted = false;

        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                b'"' => quoted = !quoted,
                byte if byte == self.delim && !quoted => {
                    if i > 0 && bytes[i - 1] == b'\\' {
                        continue;
                    }
                    // delimiter is ASCII, splitting at `i` stays on a char
                    // boundary
                    let (head, tail) = rest.split_at(i);
                    self.rest = Some(&tail[1..]);
                    return Some(head);
                }
                _ => {}
            }
        }

        self.rest = None;
        Some(rest)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pairs(params: &[Params]) -> Vec<Vec<(&str, &str)>> {
        params
            .iter()
            .map(|p| p.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect())
            .collect()
    }

    #[test]
    fn splits_groups_and_segments() {
        let params = parse_params(r#"foo="baz"; bar=123, boo, test="123""#);
        assert_eq!(
            pairs(&params),
            [
                vec![("foo", "baz"), ("bar", "123")],
                vec![("boo", "")],
                vec![("test", "123")],
            ]
        );
    }

    #[test]
    fn comma_inside_quotes_does_not_split() {
        let params = parse_params(r#"a="x,y"; b=1, c=2"#);
        assert_eq!(
            pairs(&params),
            [vec![("a", "x,y"), ("b", "1")], vec![("c", "2")]]
        );
    }

    #[test]
    fn escaped_semicolon_stays_in_segment() {
        let params = parse_params(r"a\;b=1; c=2");
        assert_eq!(pairs(&params), [vec![(r"a\;b", "1"), ("c", "2")]]);
    }

    #[test]
    fn duplicate_keys_last_wins_in_place() {
        let params = parse_params("a=1; b=2; a=3");
        assert_eq!(pairs(&params), [vec![("a", "3"), ("b", "2")]]);
    }

    #[test]
    fn angle_bracket_token_is_opaque() {
        let params = parse_params("<http://example.com/?page=2>; rel=next");
        assert_eq!(
            pairs(&params),
            [vec![("<http://example.com/?page=2>", ""), ("rel", "next")]]
        );
    }

    #[test]
    fn degrades_gracefully() {
        assert!(parse_params("").is_empty());
        assert!(parse_params(" , ;, ").is_empty());
        assert_eq!(pairs(&parse_params("=orphan, ok")), [vec![("ok", "")]]);
        assert_eq!(pairs(&parse_params("<unterminated")), [vec![("<unterminated", "")]]);
    }
}
