#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let props = connector_admin::properties::parse(content);
        for key in props.keys() {
            assert!(!key.is_empty());
        }
    }
});
