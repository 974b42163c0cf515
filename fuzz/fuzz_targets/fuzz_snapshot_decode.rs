#![no_main]

use libfuzzer_sys::fuzz_target;

use tipledger_core::snapshot::{decode, encode};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    // Whatever decodes must survive a re-encode unchanged
    if let Ok(entries) = decode(raw) {
        let encoded = encode(&entries).unwrap();
        assert_eq!(decode(&encoded).unwrap(), entries);
    }
});
