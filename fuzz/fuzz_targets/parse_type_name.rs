#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must re-parse from its display form to the same tree
        if let Ok(ty) = jls::parse_type_name(s) {
            let rendered = ty.to_string();
            let reparsed = jls::parse_type_name(&rendered).expect("display form must parse");
            assert_eq!(ty, reparsed);
            let _ = ty.binary_name();
        }
    }
});
