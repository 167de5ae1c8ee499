// Record builder: accumulate payloads, emit an encoded stream.
//
// Payloads for all records share one append-only buffer; each finished
// record is an `(original_index, start, end)` triple into it. Entries store
// offsets rather than slices so buffer growth never invalidates them, and
// the original index survives sorting so callers can still ask where each
// record landed in the encoded output.

use std::io::{self, Write};

use crate::codec::delimiter::encode_delimiter;
use crate::codec::encoder::encode;

/// One finished record: where its payload lives in the raw buffer, and the
/// order in which it was finished.
#[derive(Debug, Clone, Copy)]
struct RecordIndex {
    original: usize,
    start: usize,
    end: usize,
}

/// Accumulates raw record payloads and emits them as a delimiter-separated
/// encoded stream, optionally sorted by payload.
///
/// The builder is the append sink for the in-progress record: push bytes
/// with [`append`](RecordBuilder::append) (or through [`std::io::Write`]),
/// then call [`finish_record`](RecordBuilder::finish_record). Nothing is
/// encoded until [`encode`](RecordBuilder::encode) or
/// [`encode_with_offsets`](RecordBuilder::encode_with_offsets).
#[derive(Debug, Default)]
pub struct RecordBuilder {
    /// Concatenated raw payloads of every record, finished or not.
    buf: Vec<u8>,
    /// Start of the in-progress record within `buf`.
    start: usize,
    indices: Vec<RecordIndex>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends bytes to the in-progress record.
    pub fn append(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Finishes the in-progress record; the next append starts a new one.
    /// An empty in-progress record finishes as an empty record.
    pub fn finish_record(&mut self) {
        let end = self.buf.len();
        let original = self.indices.len();
        self.indices.push(RecordIndex {
            original,
            start: self.start,
            end,
        });
        self.start = end;
    }

    /// Number of finished records.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Reorders the records so their payloads compare in ascending
    /// lexicographic order, which makes the encoded stream usable with
    /// [`find_records_with_prefix`](crate::records::search::find_records_with_prefix).
    ///
    /// The original indices reported by
    /// [`encode_with_offsets`](RecordBuilder::encode_with_offsets) are
    /// unaffected, so sort stability is unobservable.
    pub fn sort(&mut self) {
        let buf = &self.buf;
        self.indices
            .sort_unstable_by(|a, b| buf[a.start..a.end].cmp(&buf[b.start..b.end]));
    }

    /// Encodes every finished record into `out` in stored order, each
    /// followed by a delimiter (no leading delimiter; a trailing delimiter
    /// after the last record).
    pub fn encode(&self, out: &mut Vec<u8>) {
        for index in &self.indices {
            encode(&self.buf[index.start..index.end], out);
            encode_delimiter(out);
        }
    }

    /// Like [`encode`](RecordBuilder::encode), but also reports the byte
    /// offset in `out` at which each record's encoded form begins, counting
    /// any content already present in `out`.
    ///
    /// Offsets are indexed by the order records were finished, not by their
    /// position after [`sort`](RecordBuilder::sort), so they need not be
    /// monotonically increasing.
    pub fn encode_with_offsets(&self, out: &mut Vec<u8>) -> Vec<usize> {
        let mut offsets = vec![0; self.indices.len()];
        for index in &self.indices {
            offsets[index.original] = out.len();
            encode(&self.buf[index.start..index.end], out);
            encode_delimiter(out);
        }
        offsets
    }
}

impl Write for RecordBuilder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
