#![no_main]

use jls::Convention;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for convention in Convention::ALL {
            // Normalization either fails cleanly or yields a legal identifier
            if let Ok(id) = jls::normalize_identifier(s, convention) {
                assert!(jls::is_legal_identifier(id.as_str()));
            }
        }
    }
});
