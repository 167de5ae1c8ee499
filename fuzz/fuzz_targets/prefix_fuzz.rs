#![no_main]
use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;
use stuffed_records::{compare_encoded_prefix, encode};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the prefix/record split.
    let split = (data[0] as usize).min(data.len() - 1);
    let (prefix, record) = data[1..].split_at(split);

    let mut encoded = Vec::new();
    encode(record, &mut encoded);

    // The encoded-space comparison must agree with comparing the decoded
    // content directly.
    let expected = if record.starts_with(prefix) {
        Ordering::Equal
    } else {
        let len = record.len().min(prefix.len());
        match record[..len].cmp(&prefix[..len]) {
            Ordering::Equal => Ordering::Less,
            other => other,
        }
    };
    assert_eq!(compare_encoded_prefix(&encoded, prefix).unwrap(), expected);
});
