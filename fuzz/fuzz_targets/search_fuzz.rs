#![no_main]
use libfuzzer_sys::fuzz_target;
use stuffed_records::{Scanner, encoded_starts_with, find_records_with_prefix};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the prefix/stream split. The stream is arbitrary
    // bytes: the finder must never panic, only return errors.
    let split = (data[0] as usize).min(data.len() - 1);
    let (prefix, stream) = data[1..].split_at(split);
    let _ = find_records_with_prefix(stream, prefix);

    // Neither must the encoded-space prefix test over a scan.
    let mut scanner = Scanner::new(stream);
    while scanner.next() {
        let _ = encoded_starts_with(scanner.encoded(), prefix);
    }
});
