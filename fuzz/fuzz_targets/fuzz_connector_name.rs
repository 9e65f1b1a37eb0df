#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Accepted names must never escape the catalog directory
        if let Ok(name) = connector_admin::ConnectorName::parse(raw) {
            assert!(!name.file_name().contains('/'));
            assert!(name.as_str() != "." && name.as_str() != "..");
        }
    }
});
