#![no_main]

use libfuzzer_sys::fuzz_target;

use tipledger_core::{parse_amount, MAX_CENTS};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    // Accepted amounts are always positive and in range
    if let Ok(amount) = parse_amount(raw) {
        assert!(amount.cents() > 0);
        assert!(amount.cents() <= MAX_CENTS);
    }
});
