//! Inclusive numeral ranges with leading-zero handling.
//!
//! These are the leaves used by pattern expansion: a `{low,high}` marker is
//! turned into the list of numerals between its endpoints.

use tracing::trace;

use crate::error::{CodecError, Result};

/// Left-pad `value` with zeros until it is `zero_count + 1` characters wide.
///
/// Values that are already at least that wide are returned unchanged.
///
/// # Examples
///
/// ```
/// use colseq_core::pad_with_zeros;
///
/// assert_eq!(pad_with_zeros("7", 2), "007");
/// assert_eq!(pad_with_zeros("12", 1), "12");
/// assert_eq!(pad_with_zeros("1234", 1), "1234");
/// ```
pub fn pad_with_zeros(value: &str, zero_count: usize) -> String {
    let width = zero_count + 1;
    if value.len() >= width {
        return value.to_string();
    }
    let mut padded = "0".repeat(width - value.len());
    padded.push_str(value);
    padded
}

/// Expand two numerals into the inclusive range between them.
///
/// The range runs upward or downward depending on which endpoint is larger.
/// When `start` has leading zeros, every element is padded to one character
/// more than the length of that zero run; `stop` never influences the width.
///
/// # Errors
///
/// Returns [`CodecError::InvalidNumeral`] if either endpoint is empty,
/// contains anything but ASCII digits, or does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use colseq_core::expand_range;
///
/// assert_eq!(expand_range("1", "3").unwrap(), ["1", "2", "3"]);
/// assert_eq!(expand_range("3", "1").unwrap(), ["3", "2", "1"]);
/// assert_eq!(expand_range("009", "11").unwrap(), ["009", "010", "011"]);
/// ```
pub fn expand_range(start: &str, stop: &str) -> Result<Vec<String>> {
    let low = parse_numeral(start)?;
    let high = parse_numeral(stop)?;

    let values: Vec<u64> = if low <= high {
        (low..=high).collect()
    } else {
        (high..=low).rev().collect()
    };

    let zero_run = start.bytes().take_while(|b| *b == b'0').count();
    trace!(start, stop, count = values.len(), zero_run, "expand range");

    let sequence = values
        .into_iter()
        .map(|value| {
            let text = value.to_string();
            if zero_run > 0 {
                pad_with_zeros(&text, zero_run)
            } else {
                text
            }
        })
        .collect();
    Ok(sequence)
}

/// Returns true if `value` is a non-empty run of ASCII digits.
pub(crate) fn is_numeral(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_numeral(value: &str) -> Result<u64> {
    if !is_numeral(value) {
        return Err(CodecError::InvalidNumeral {
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| CodecError::InvalidNumeral {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_with_zeros() {
        assert_eq!(pad_with_zeros("7", 0), "7");
        assert_eq!(pad_with_zeros("7", 1), "07");
        assert_eq!(pad_with_zeros("7", 2), "007");
        assert_eq!(pad_with_zeros("70", 2), "070");
        assert_eq!(pad_with_zeros("700", 2), "700");
        assert_eq!(pad_with_zeros("7000", 2), "7000");
    }

    #[test]
    fn test_expand_range_plain() {
        assert_eq!(expand_range("1", "1").unwrap(), ["1"]);
        assert_eq!(expand_range("8", "11").unwrap(), ["8", "9", "10", "11"]);
    }

    #[test]
    fn test_expand_range_descending() {
        assert_eq!(expand_range("12", "9").unwrap(), ["12", "11", "10", "9"]);
    }

    #[test]
    fn test_expand_range_width_comes_from_start() {
        assert_eq!(
            expand_range("001", "004").unwrap(),
            expand_range("001", "4").unwrap()
        );
        assert_eq!(expand_range("1", "004").unwrap(), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_expand_range_single_zero_start() {
        // A lone "0" is a one-character zero run, so the width becomes two.
        assert_eq!(expand_range("0", "2").unwrap(), ["00", "01", "02"]);
    }

    #[test]
    fn test_expand_range_width_shorter_than_start() {
        assert_eq!(expand_range("0010", "0011").unwrap(), ["010", "011"]);
    }

    #[test]
    fn test_expand_range_rejects_non_digits() {
        assert!(matches!(
            expand_range("a", "3"),
            Err(CodecError::InvalidNumeral { value }) if value == "a"
        ));
        assert!(matches!(
            expand_range("1", ""),
            Err(CodecError::InvalidNumeral { .. })
        ));
        assert!(matches!(
            expand_range("-1", "3"),
            Err(CodecError::InvalidNumeral { .. })
        ));
        assert!(matches!(
            expand_range("1", "99999999999999999999999"),
            Err(CodecError::InvalidNumeral { .. })
        ));
    }
}
