//! Stuffed records: delimited framing for binary records.
//!
//! A modified form of Consistent Overhead Byte Stuffing (COBS) that reserves
//! the two-byte sequence `0xFE 0xFD` as the record delimiter instead of the
//! traditional single zero byte. The pair is rare in typical payloads (UTF-8
//! text never contains either byte), so encoding usually adds only a few
//! bytes of overhead per record regardless of size, while still guaranteeing
//! that the delimiter never appears inside an encoded record.
//!
//! The crate provides:
//! - Single-record encoding and decoding (`codec`)
//! - Sequence scanning over a stream of delimited records (`records`)
//! - A record builder that accumulates payloads and emits a concatenated,
//!   optionally sorted, encoded stream (`records`)
//! - Prefix comparison and binary prefix search that read only encoded
//!   bytes, never materializing decoded content (`codec::prefix`,
//!   `records::search`)
//!
//! # Quick Start
//!
//! ```
//! use stuffed_records::{RecordBuilder, Scanner, find_records_with_prefix};
//!
//! let mut builder = RecordBuilder::new();
//! for payload in [&b"host-2 down"[..], b"host-0 up", b"host-1 up"] {
//!     builder.append(payload);
//!     builder.finish_record();
//! }
//! builder.sort();
//!
//! let mut stream = Vec::new();
//! builder.encode(&mut stream);
//!
//! let matching = find_records_with_prefix(&stream, b"host-1")?;
//! let mut scanner = Scanner::new(matching);
//! assert!(scanner.next());
//! let mut decoded = Vec::new();
//! scanner.decode(&mut decoded)?;
//! assert_eq!(decoded, b"host-1 up");
//! assert!(!scanner.next());
//! # Ok::<(), stuffed_records::DecodeError>(())
//! ```

pub mod codec;
pub mod records;

pub use codec::decoder::{DecodeError, decode};
pub use codec::delimiter::{
    DELIMITER, encode_delimiter, find_delimiter, find_last_delimiter, is_start_of_record,
};
pub use codec::encoder::{encode, max_encoded_len};
pub use codec::prefix::{compare_encoded_prefix, encoded_starts_with};
pub use records::builder::RecordBuilder;
pub use records::scanner::Scanner;
pub use records::search::find_records_with_prefix;
