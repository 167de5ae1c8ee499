// Sequence scanner: record boundary recovery without decoding.
//
// Because encoded records never contain the delimiter, splitting a stream
// into records is a plain substring scan. Decoding stays lazy; callers that
// only need boundaries (or encoded-space comparison) never pay for it.

use crate::codec::decoder::{self, DecodeError};
use crate::codec::delimiter::{self, DELIMITER, DELIMITER_LEN};

/// Iterates through a buffer containing zero or more delimited encoded
/// records.
///
/// The scanner borrows the stream: slices returned by
/// [`encoded`](Scanner::encoded) stay valid for the stream's lifetime, not
/// just until the next advance. Leading, trailing, and repeated delimiters
/// in the stream are skipped; they denote zero intervening records.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Encoded bytes of the record most recently advanced to.
    current: &'a [u8],
    /// Not-yet-consumed remainder of the stream.
    tail: &'a [u8],
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over a stream of delimited encoded records.
    pub fn new(stream: &'a [u8]) -> Self {
        Scanner {
            current: &[],
            tail: stream,
        }
    }

    /// Repoints the scanner at a new stream, discarding the current record.
    pub fn reset(&mut self, stream: &'a [u8]) {
        self.current = &[];
        self.tail = stream;
    }

    /// Advances to the next record, returning false at the end of the
    /// stream. After a true return, [`encoded`](Scanner::encoded) and
    /// [`decode`](Scanner::decode) expose that record.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        // Skip over any leading delimiters.
        while self.tail.starts_with(&DELIMITER) {
            self.tail = &self.tail[DELIMITER_LEN..];
        }
        if self.tail.is_empty() {
            return false;
        }

        // Whatever sits at the start of the buffer, up through the next
        // delimiter, is the next encoded record. The tail keeps that
        // delimiter so the next call strips it.
        match delimiter::find_delimiter(self.tail) {
            Some(index) => {
                self.current = &self.tail[..index];
                self.tail = &self.tail[index..];
            }
            None => {
                self.current = self.tail;
                self.tail = &[];
            }
        }
        true
    }

    /// The encoded bytes of the current record.
    pub fn encoded(&self) -> &'a [u8] {
        self.current
    }

    /// Decodes the current record, appending its payload to `out`.
    pub fn decode(&self, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        decoder::decode(self.current, out)
    }
}

impl Default for Scanner<'_> {
    fn default() -> Self {
        Scanner::new(&[])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
