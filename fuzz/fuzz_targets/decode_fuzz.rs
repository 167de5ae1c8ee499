#![no_main]
use libfuzzer_sys::fuzz_target;
use stuffed_records::{Scanner, decode};

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic on arbitrary bytes — only return errors.
    let mut out = Vec::new();
    let _ = decode(data, &mut out);

    // Same for a scan over arbitrary bytes treated as a stream.
    let mut scanner = Scanner::new(data);
    while scanner.next() {
        let mut record = Vec::new();
        let _ = scanner.decode(&mut record);
    }
});
