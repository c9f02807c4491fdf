//! Fuzz target for provider detection.
//!
//! Tests that detection never panics and ignores spaces.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_fields::{cvv, detect};

fuzz_target!(|data: &str| {
    let provider = detect::detect_provider(data);

    let bare: String = data.chars().filter(|c| *c != ' ').collect();
    assert_eq!(provider, detect::detect_provider(&bare), "spaces changed the provider");

    if provider.is_some() {
        assert!(bare.bytes().all(|b| b.is_ascii_digit()), "non-digit number detected");
    }

    let _ = cvv::check_cvv(data, provider);
});
