//! Property tests for the `.properties` reader.

use proptest::prelude::*;

use connector_admin::properties::parse;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9.-]{0,24}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9/._:,-]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,512}") {
        let _ = parse(&s);
    }

    /// PROPERTY: Simple `key=value` lines are read back verbatim.
    #[test]
    fn property_simple_pairs_read_back(
        pairs in proptest::collection::btree_map(key(), value(), 0..8)
    ) {
        let text: String = pairs
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();

        prop_assert_eq!(parse(&text), pairs);
    }

    /// PROPERTY: Comment lines never produce entries.
    #[test]
    fn property_comments_ignored(body in "[^\r\n]{0,64}") {
        let text = format!("# {}\n! {}\n", body, body);
        prop_assert!(parse(&text).is_empty());
    }
}
