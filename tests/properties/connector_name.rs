//! Property tests for connector name validation.

use proptest::prelude::*;

use connector_admin::ConnectorName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let _ = ConnectorName::parse(s);
    }

    /// PROPERTY: Accepted names map to a single file inside the catalog dir.
    #[test]
    fn property_accepted_names_stay_in_directory(s in "(?s).{0,64}") {
        if let Ok(name) = ConnectorName::parse(s.clone()) {
            prop_assert_eq!(name.as_str(), s.as_str());
            prop_assert!(!name.file_name().contains('/'));
            prop_assert!(name.file_name().ends_with(".properties"));
            prop_assert!(s != "." && s != "..");
        }
    }

    /// PROPERTY: Plain identifiers are always accepted.
    #[test]
    fn property_identifiers_accepted(s in "[A-Za-z0-9_-][A-Za-z0-9._-]{0,31}") {
        prop_assert!(ConnectorName::parse(s).is_ok());
    }
}
