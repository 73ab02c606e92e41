//! Scenario tests for the header container and parameter parser.
use crate::{Header, HeaderValue, Headers, Params, Slot};

/// `{zoo: [foo, Foo], Zoo: bar}` under the canonical name `Zoo`.
fn zoo_header() -> Header {
    let mut header = Header::new("Zoo");
    header.add_raw("zoo", "foo");
    header.add_raw("zoo", "Foo");
    header.add_raw("Zoo", "bar");
    header
}

fn raw_view(header: &Header) -> Vec<(&str, Vec<Option<&str>>)> {
    header
        .raw()
        .map(|(key, slots)| {
            let values = slots
                .iter()
                .map(|slot| slot.value().map(HeaderValue::as_str))
                .collect();
            (key.as_str(), values)
        })
        .collect()
}

fn strs(header: &Header) -> Vec<&str> {
    header.iter().map(HeaderValue::as_str).collect()
}

#[test]
fn raw_returns_case_variant_groups() {
    let header = zoo_header();
    assert_eq!(
        raw_view(&header),
        [
            ("zoo", vec![Some("foo"), Some("Foo")]),
            ("Zoo", vec![Some("bar")]),
        ]
    );
}

#[test]
fn stores_header_name() {
    assert_eq!(zoo_header().name().as_str(), "Zoo");
}

#[test]
fn converts_to_string() {
    let mut header = zoo_header();
    assert_eq!(header.to_string(), "foo, Foo, bar");
    header.set_glue(";");
    assert_eq!(header.to_string(), "foo; Foo; bar");
}

#[test]
fn normalize_merges_case_variants() {
    let mut header = zoo_header();
    header.normalize(false);
    assert_eq!(
        raw_view(&header),
        [("Zoo", vec![Some("foo"), Some("Foo"), Some("bar")])]
    );
    assert_eq!(header.to_string(), "foo, Foo, bar");
}

#[test]
fn normalize_splits_glued_values() {
    let mut header = Header::from_values("Zoo", ["foo, Faz", "bar"]);
    let values = strs(header.normalize(true));
    assert_eq!(values, ["foo", "Faz", "bar"]);
}

#[test]
fn normalize_strips_duplicates() {
    let mut header = Header::from_values("Vary", ["accept, accept", "origin", "accept"]);
    let values = strs(header.normalize(true));
    assert_eq!(values, ["accept", "origin"]);
}

#[test]
fn searches_values() {
    let header = zoo_header();
    assert!(header.has_value("foo"));
    assert!(header.has_value("Foo"));
    assert!(header.has_value("bar"));
    assert!(!header.has_value("moo"));

    assert!(!header.has_value("FoO"));
    assert!(header.has_value_ignore_ascii_case("FoO"));
}

#[test]
fn counts_values() {
    assert_eq!(zoo_header().len(), 3);
}

#[test]
fn iterates_in_insertion_order() {
    let header = zoo_header();
    assert_eq!(strs(&header), ["foo", "Foo", "bar"]);
    // restartable
    assert_eq!(strs(&header), ["foo", "Foo", "bar"]);

    let mut collected = Vec::new();
    for value in &header {
        collected.push(value.as_str());
    }
    assert_eq!(collected, ["foo", "Foo", "bar"]);
}

#[test]
fn keeps_falsy_values() {
    // allows 0
    let header = Header::of("Foo", 0).with_glue(";");
    assert_eq!(header.to_string(), "0");
    assert_eq!(header.len(), 1);
    assert_eq!(header.glue(), ";");

    // no value at all
    let header = Header::new("Foo");
    assert_eq!(header.to_string(), "");
    assert_eq!(header.len(), 0);
    assert!(header.is_empty());

    // a single null slot counts as nothing
    let header = Header::from_values("Foo", [Slot::Null]);
    assert_eq!(header.to_string(), "");
    assert_eq!(header.len(), 0);

    // but the slot is still visible through raw access
    assert_eq!(raw_view(&header), [("Foo", vec![None])]);

    // allows empty string
    let header = Header::of("Foo", "");
    assert_eq!(header.to_string(), "");
    assert_eq!(header.len(), 1);
}

#[test]
fn none_entries_become_null_slots() {
    let header = Header::from_values("Foo", [Some("a"), None, Some("b")]);
    assert_eq!(header.len(), 2);
    assert_eq!(header.to_string(), "a, b");
    assert_eq!(raw_view(&header), [("Foo", vec![Some("a"), None, Some("b")])]);
}

#[test]
fn add_uses_canonical_name_key() {
    let mut header = Header::of("Foo", "bar").with_glue(";");
    header.add("baz");
    let keys: Vec<&str> = header.raw().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["Foo"]);
    assert_eq!(header.to_string(), "bar; baz");
}

#[test]
fn checks_exact_header_keys() {
    let header = Header::of("Foo", "bar").with_glue(";");
    assert!(header.has_exact_header("Foo"));
    assert!(!header.has_exact_header("foo"));
}

#[test]
fn removes_exact_values_only() {
    let mut header = Header::from_values("Foo", ["Foo", "baz", "bar"]);
    header.remove_value("bar");
    assert!(header.has_value("Foo"));
    assert!(!header.has_value("bar"));
    assert!(header.has_value("baz"));

    // substring-equal values survive
    let mut header = Header::from_values("Foo", ["barbar", "bar"]);
    header.remove_value("bar");
    assert_eq!(strs(&header), ["barbar"]);
}

#[test]
fn removes_one_occurrence_per_group() {
    let mut header = Header::new("Foo");
    header.add_raw("Foo", "dup");
    header.add_raw("Foo", "dup");
    header.add_raw("foo", "dup");
    header.remove_value("dup");
    // one removed from each case-variant group
    assert_eq!(raw_view(&header), [("Foo", vec![Some("dup")])]);
}

#[test]
fn builds_from_value_sequence() {
    let header = Header::from_values("Foo", ["Testing", "123", "Foo=baz"]);
    assert_eq!(
        header.to_vec(),
        [
            HeaderValue::from_static("Testing"),
            HeaderValue::from_static("123"),
            HeaderValue::from_static("Foo=baz"),
        ]
    );
}

#[test]
fn parses_header_lines() {
    let header: Header = "X-RateLimit-Remaining:  41 ".parse().unwrap();
    assert_eq!(header.name().as_str(), "X-RateLimit-Remaining");
    assert_eq!(header.to_string(), "41");

    assert!(Header::from_line("no separator").is_err());
    assert!(Header::from_line(": empty name").is_err());
}

// ===== Parameter parsing =====

fn pairs(params: &[Params]) -> Vec<Vec<(&str, &str)>> {
    params
        .iter()
        .map(|p| p.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect())
        .collect()
}

#[test]
fn parses_link_params_through_collection() {
    let expected = [
        vec![
            ("<http:/.../front.jpeg>", ""),
            ("rel", "front"),
            ("type", "image/jpeg"),
        ],
        vec![
            ("<http://.../back.jpeg>", ""),
            ("rel", "back"),
            ("type", "image/jpeg"),
        ],
    ];

    // with and without a space after the group comma
    let raw_values = [
        "<http:/.../front.jpeg>; rel=\"front\"; type=\"image/jpeg\", \
         <http://.../back.jpeg>; rel=back; type=\"image/jpeg\"",
        "<http:/.../front.jpeg>; rel=\"front\"; type=\"image/jpeg\",\
         <http://.../back.jpeg>; rel=back; type=\"image/jpeg\"",
    ];

    for raw in raw_values {
        let mut headers = Headers::new();
        headers.append("Link", raw);
        let params = headers.get("link").unwrap().parse_params();
        assert_eq!(pairs(&params), expected);
    }
}

#[test]
fn parses_params_per_stored_value() {
    let params = Header::of("Link", "foo=\"baz\"; bar=123, boo, test=\"123\"").parse_params();
    assert_eq!(
        pairs(&params),
        [
            vec![("foo", "baz"), ("bar", "123")],
            vec![("boo", "")],
            vec![("test", "123")],
        ]
    );

    // multiple stored values concatenate their group lists in order
    let mut header = Header::of("Link", "a=1");
    header.add("b=2, c=3");
    assert_eq!(
        pairs(&header.parse_params()),
        [vec![("a", "1")], vec![("b", "2")], vec![("c", "3")]]
    );
}
