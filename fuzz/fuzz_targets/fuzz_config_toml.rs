#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing - this should never panic
        if let Ok(config) = toml::from_str::<connector_admin::Config>(content) {
            let topology = config.topology();
            assert!(!topology.is_empty());
            assert_eq!(topology[0].address(), config.cluster.coordinator);
        }
    }
});
