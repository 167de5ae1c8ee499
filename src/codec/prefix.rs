// Logical-prefix comparison over encoded bytes.
//
// Walks the same chunk structure as the decoder, but instead of copying
// payload bytes out it compares them against the remaining prefix, stopping
// as soon as the ordering is decided. Interior terminal chunks stand for a
// delimiter in the decoded content, so the delimiter pair itself is
// compared at those boundaries. Decoded content is never materialized.

use std::cmp::Ordering;

use super::decoder::DecodeError;
use super::delimiter::{DELIMITER, MAX_INITIAL_RUN, MAX_REMAINING_RUN, RADIX};

/// Compares a chunk of decoded content against the head of the remaining
/// prefix, over the shorter of the two lengths. Returns the ordering and
/// the number of prefix bytes covered.
fn compare_chunk(chunk: &[u8], prefix: &[u8]) -> (Ordering, usize) {
    let len = chunk.len().min(prefix.len());
    (chunk[..len].cmp(&prefix[..len]), len)
}

/// Compares the decoded content of `encoded` against `prefix`, reading only
/// as much of the encoded form as needed to decide.
///
/// Returns `Equal` if the decoded content starts with `prefix` (every
/// record starts with the empty prefix), `Less` if the decoded content is
/// strictly shorter than `prefix` or its first differing byte is smaller,
/// and `Greater` if its first differing byte is larger. Structural errors
/// in the portion of `encoded` that had to be read are reported as
/// [`DecodeError`].
pub fn compare_encoded_prefix(encoded: &[u8], prefix: &[u8]) -> Result<Ordering, DecodeError> {
    if prefix.is_empty() {
        return Ok(Ordering::Equal);
    }

    // Initial chunk: one header byte.
    let (&head, mut encoded) = encoded.split_first().ok_or(DecodeError::Eof)?;
    let run = head as usize;
    if run > MAX_INITIAL_RUN {
        return Err(DecodeError::InvalidRunLength);
    }
    if encoded.len() < run {
        return Err(DecodeError::Eof);
    }
    let (cmp, consumed) = compare_chunk(&encoded[..run], prefix);
    if cmp != Ordering::Equal {
        return Ok(cmp);
    }
    let mut prefix = &prefix[consumed..];
    encoded = &encoded[run..];

    if run < MAX_INITIAL_RUN {
        if prefix.is_empty() {
            return Ok(Ordering::Equal);
        }
        if encoded.is_empty() {
            // Record content exhausted with prefix bytes left over.
            return Ok(Ordering::Less);
        }
        let (cmp, consumed) = compare_chunk(&DELIMITER, prefix);
        if cmp != Ordering::Equal {
            return Ok(cmp);
        }
        prefix = &prefix[consumed..];
    }

    // Subsequent chunks: two header bytes, little-endian base 253.
    loop {
        if prefix.is_empty() {
            return Ok(Ordering::Equal);
        }
        if encoded.len() < 2 {
            return Err(DecodeError::Eof);
        }
        let run = encoded[0] as usize + RADIX * encoded[1] as usize;
        encoded = &encoded[2..];
        if run > MAX_REMAINING_RUN {
            return Err(DecodeError::InvalidRunLength);
        }
        if encoded.len() < run {
            return Err(DecodeError::Eof);
        }
        let (cmp, consumed) = compare_chunk(&encoded[..run], prefix);
        if cmp != Ordering::Equal {
            return Ok(cmp);
        }
        prefix = &prefix[consumed..];
        encoded = &encoded[run..];

        if run < MAX_REMAINING_RUN {
            if prefix.is_empty() {
                return Ok(Ordering::Equal);
            }
            if encoded.is_empty() {
                return Ok(Ordering::Less);
            }
            let (cmp, consumed) = compare_chunk(&DELIMITER, prefix);
            if cmp != Ordering::Equal {
                return Ok(cmp);
            }
            prefix = &prefix[consumed..];
        }
    }
}

/// Reports whether the decoded content of `encoded` starts with `prefix`,
/// without decoding it.
pub fn encoded_starts_with(encoded: &[u8], prefix: &[u8]) -> Result<bool, DecodeError> {
    Ok(compare_encoded_prefix(encoded, prefix)? == Ordering::Equal)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encoder::encode;

    fn compare(record: &[u8], prefix: &[u8]) -> Result<Ordering, DecodeError> {
        let mut encoded = Vec::new();
        encode(record, &mut encoded);
        compare_encoded_prefix(&encoded, prefix)
    }

    #[test]
    fn empty_prefix_always_matches() {
        assert_eq!(compare(b"", b""), Ok(Ordering::Equal));
        assert_eq!(compare(b"abc", b""), Ok(Ordering::Equal));
        // The empty prefix is decided before any structural validation.
        assert_eq!(compare_encoded_prefix(b"", b""), Ok(Ordering::Equal));
        assert_eq!(compare_encoded_prefix(b"\xff", b""), Ok(Ordering::Equal));
    }

    #[test]
    fn orders_against_plain_content() {
        assert_eq!(compare(b"abc", b"abc"), Ok(Ordering::Equal));
        assert_eq!(compare(b"abcdef", b"abc"), Ok(Ordering::Equal));
        assert_eq!(compare(b"abc", b"abd"), Ok(Ordering::Less));
        assert_eq!(compare(b"abd", b"abc"), Ok(Ordering::Greater));
        // Record runs out before the prefix does.
        assert_eq!(compare(b"ab", b"abc"), Ok(Ordering::Less));
    }

    #[test]
    fn virtual_delimiter_is_compared() {
        // The delimiter bytes live only in the headers, yet they order like
        // decoded content.
        assert_eq!(compare(b"abc\xfe\xfd", b"abc\xfe"), Ok(Ordering::Equal));
        assert_eq!(compare(b"abc\xfe\xfd", b"abc\xfe\xfd"), Ok(Ordering::Equal));
        assert_eq!(compare(b"abc\xfe\xfdxyz", b"abc\xfe\xfdx"), Ok(Ordering::Equal));
        assert_eq!(compare(b"abc\xfe\xfd", b"abc\xff"), Ok(Ordering::Less));
        assert_eq!(compare(b"abc\xfe\xfd", b"abc\x00"), Ok(Ordering::Greater));
        // Prefix continues past the record's trailing delimiter.
        assert_eq!(compare(b"abc\xfe\xfd", b"abc\xfe\xfdx"), Ok(Ordering::Less));
    }

    #[test]
    fn crosses_saturated_chunks() {
        let record = vec![b'a'; 300];
        assert_eq!(compare(&record, &record), Ok(Ordering::Equal));
        assert_eq!(compare(&record, &record[..260]), Ok(Ordering::Equal));
        let mut longer = record.clone();
        longer.push(b'a');
        assert_eq!(compare(&record, &longer), Ok(Ordering::Less));
        let mut bigger = record.clone();
        bigger[260] = b'b';
        assert_eq!(compare(&record, &bigger), Ok(Ordering::Less));
    }

    #[test]
    fn structural_errors_propagate() {
        assert_eq!(compare_encoded_prefix(b"", b"a"), Err(DecodeError::Eof));
        assert_eq!(compare_encoded_prefix(b"\x03ab", b"abc"), Err(DecodeError::Eof));
        assert_eq!(
            compare_encoded_prefix(b"\xfd", b"a"),
            Err(DecodeError::InvalidRunLength)
        );
    }

    #[test]
    fn starts_with_mirrors_decoded_content() {
        let cases: &[(&[u8], &[u8], bool)] = &[
            (b"abc", b"ab", true),
            (b"abc", b"abc", true),
            (b"abc", b"abcd", false),
            (b"abc\xfe\xfdabc", b"abc\xfe", true),
            (b"abc\xfe\xfdabc", b"abc\xfe\xfdab", true),
            (b"abc\xfe\xfdabc", b"abd", false),
        ];
        for &(record, prefix, expected) in cases {
            let mut encoded = Vec::new();
            encode(record, &mut encoded);
            assert_eq!(
                encoded_starts_with(&encoded, prefix),
                Ok(expected),
                "record {record:02x?} prefix {prefix:02x?}"
            );
        }
    }
}
