// Binary prefix search over a sorted encoded stream.
//
// Works directly on encoded bytes: bisection jumps into the middle of the
// byte range and snaps outward to the enclosing record's delimiters, and
// every comparison goes through the encoded-prefix comparator. No record is
// decoded at any point.

use std::cmp::Ordering;

use crate::codec::decoder::DecodeError;
use crate::codec::delimiter::{self, DELIMITER, DELIMITER_LEN};
use crate::codec::prefix::{compare_encoded_prefix, encoded_starts_with};

/// Searches a stream of encoded records, sorted ascending by decoded
/// content, for the contiguous range of records whose decoded content
/// starts with `prefix`.
///
/// Returns the sub-slice of `stream` covering exactly the matching records,
/// with no leading or trailing delimiter (so it can be fed straight back
/// into a [`Scanner`](crate::records::scanner::Scanner)); empty if nothing
/// matches. Sorting the records is the producer's responsibility, see
/// [`RecordBuilder::sort`](crate::records::builder::RecordBuilder::sort).
///
/// Runs in `O(log R)` prefix comparisons for the bisection plus one per
/// matching record, where `R` is the record count.
pub fn find_records_with_prefix<'a>(
    stream: &'a [u8],
    prefix: &[u8],
) -> Result<&'a [u8], DecodeError> {
    // `min` always points at the beginning of an encoded record, `max` at
    // the end of one.
    let mut min = 0;
    let mut max = stream.len();
    while stream[min..max].starts_with(&DELIMITER) {
        min += DELIMITER_LEN;
    }
    while stream[min..max].ends_with(&DELIMITER) {
        max -= DELIMITER_LEN;
    }

    let end = max;
    let mut earliest_match_start = max;
    let mut earliest_match_end = min;

    // Phase 1: bisect to the earliest record whose decoded content starts
    // with the prefix.
    while max > min {
        // Jump to the middle of the remaining range, then snap to the
        // boundaries of the record enclosing that point.
        let mid = (max + min) / 2;
        let record_start = match delimiter::find_last_delimiter(&stream[min..mid]) {
            Some(index) => min + index + DELIMITER_LEN,
            None => min,
        };
        let record_end = match delimiter::find_delimiter(&stream[record_start..max]) {
            Some(index) => record_start + index,
            None => max,
        };

        match compare_encoded_prefix(&stream[record_start..record_end], prefix)? {
            Ordering::Less => {
                min = record_end;
                while stream[min..max].starts_with(&DELIMITER) {
                    min += DELIMITER_LEN;
                }
            }
            Ordering::Greater => {
                max = record_start;
                while stream[min..max].ends_with(&DELIMITER) {
                    max -= DELIMITER_LEN;
                }
            }
            Ordering::Equal => {
                // Remember the match, but keep looking left for an even
                // earlier one.
                earliest_match_start = record_start;
                earliest_match_end = record_end;
                max = record_start;
                while stream[min..max].ends_with(&DELIMITER) {
                    max -= DELIMITER_LEN;
                }
            }
        }
    }

    if earliest_match_start >= earliest_match_end {
        return Ok(&[]);
    }

    // Phase 2: walk forward from the earliest match until the first record
    // that does not match. The earliest match itself needs no re-check.
    let mut previous_record_end = earliest_match_end;
    let mut next_record_start = previous_record_end;
    while stream[next_record_start..].starts_with(&DELIMITER) {
        next_record_start += DELIMITER_LEN;
    }

    while next_record_start < end {
        let next_record_end = match delimiter::find_delimiter(&stream[next_record_start..]) {
            Some(index) => next_record_start + index,
            None => end,
        };

        if !encoded_starts_with(&stream[next_record_start..next_record_end], prefix)? {
            break;
        }

        previous_record_end = next_record_end;
        next_record_start = next_record_end;
        while stream[next_record_start..].starts_with(&DELIMITER) {
            next_record_start += DELIMITER_LEN;
        }
    }

    Ok(&stream[earliest_match_start..previous_record_end])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
