#![no_main]
use libfuzzer_sys::fuzz_target;
use stuffed_records::{decode, encode, find_delimiter, max_encoded_len};

fuzz_target!(|data: &[u8]| {
    let mut encoded = Vec::new();
    encode(data, &mut encoded);

    // The encoded form is delimiter-free and within the documented bound.
    assert_eq!(find_delimiter(&encoded), None);
    assert!(encoded.len() <= max_encoded_len(data.len()));

    // Decoding recovers the input exactly.
    let mut decoded = Vec::new();
    decode(&encoded, &mut decoded).unwrap();
    assert_eq!(decoded, data);
});
