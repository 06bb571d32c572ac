//! Compact range patterns for families of numbered identifiers.
//!
//! Two identifiers that differ only in their digit runs are compressed into a
//! single pattern such as `a_{1,5}`, and a pattern is expanded back into every
//! identifier it denotes. The syntax resembles shell brace expansion but a
//! marker means "every numeral between", not "either of":
//!
//! ```
//! use colseq_core::{compress_range, expand_pattern};
//!
//! let pattern = compress_range("a_1", "a_5").unwrap();
//! assert_eq!(pattern, "a_{1,5}");
//! assert_eq!(
//!     expand_pattern(&pattern).unwrap(),
//!     ["a_1", "a_2", "a_3", "a_4", "a_5"]
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{CodecError, Result};
use crate::sequence::{expand_range, is_numeral};

/// A `{low,high}` range marker inside a pattern.
static RANGE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+),([0-9]+)\}").expect("Invalid range marker regex"));

/// One piece of a tokenized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// Text copied verbatim into every expansion.
    Literal(String),
    /// A closed numeral range, endpoints kept exactly as written.
    Range { low: String, high: String },
}

impl PatternToken {
    /// All strings this token stands for, in order.
    fn expansions(&self) -> Result<Vec<String>> {
        match self {
            Self::Literal(text) => Ok(vec![text.clone()]),
            Self::Range { low, high } => expand_range(low, high),
        }
    }
}

/// Compress two identifiers into one pattern.
///
/// Both inputs are split into alternating digit and non-digit segments. Equal
/// digit segments are emitted as-is; differing ones become a `{from,to}`
/// marker using the numerals exactly as written. Non-digit segments must be
/// identical, compared case-sensitively.
///
/// # Errors
///
/// Returns [`CodecError::StructureMismatch`] if the inputs have a different
/// number of segments or any literal segment differs.
pub fn compress_range(from: &str, to: &str) -> Result<String> {
    let from_segments = split_segments(from);
    let to_segments = split_segments(to);

    if from_segments.len() != to_segments.len() {
        return Err(mismatch(from, to, "length error"));
    }

    let mut pattern = String::with_capacity(from.len() + to.len() + 3);
    for (left, right) in from_segments.iter().zip(&to_segments) {
        match (is_numeral(left), is_numeral(right)) {
            (true, true) if left == right => pattern.push_str(left),
            (true, true) => {
                pattern.push('{');
                pattern.push_str(left);
                pattern.push(',');
                pattern.push_str(right);
                pattern.push('}');
            }
            (false, false) if left == right => pattern.push_str(left),
            _ => return Err(mismatch(from, to, "part error")),
        }
    }

    debug!(from, to, pattern = %pattern, "compressed range");
    Ok(pattern)
}

/// Expand a pattern into every identifier it denotes.
///
/// The empty pattern yields nothing, and a pattern without `{` yields itself.
/// With several markers the rightmost one varies fastest:
///
/// ```
/// use colseq_core::expand_pattern;
///
/// assert_eq!(
///     expand_pattern("a{1,3}_{1,2}").unwrap(),
///     ["a1_1", "a1_2", "a2_1", "a2_2", "a3_1", "a3_2"]
/// );
/// ```
///
/// # Errors
///
/// Returns [`CodecError::MalformedPattern`] if the pattern contains `{` but
/// no `}`.
pub fn expand_pattern(pattern: &str) -> Result<Vec<String>> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }
    if !pattern.contains('{') {
        return Ok(vec![pattern.to_string()]);
    }
    if !pattern.contains('}') {
        return Err(CodecError::MalformedPattern {
            pattern: pattern.to_string(),
        });
    }

    let tokens = tokenize(pattern);
    let expanded = expand_tokens(&tokens)?;
    debug!(pattern, tokens = tokens.len(), count = expanded.len(), "expanded pattern");
    Ok(expanded)
}

/// Split a pattern into literal and range tokens, dropping empty literals.
pub fn tokenize(pattern: &str) -> Vec<PatternToken> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for caps in RANGE_MARKER_REGEX.captures_iter(pattern) {
        let Some(marker) = caps.get(0) else {
            continue;
        };
        if marker.start() > last {
            tokens.push(PatternToken::Literal(pattern[last..marker.start()].to_string()));
        }
        tokens.push(PatternToken::Range {
            low: caps[1].to_string(),
            high: caps[2].to_string(),
        });
        last = marker.end();
    }
    if last < pattern.len() {
        tokens.push(PatternToken::Literal(pattern[last..].to_string()));
    }
    tokens
}

/// Combine tokens left to right. Each pass extends every partial result with
/// every expansion of the next token, so the rightmost range varies fastest.
fn expand_tokens(tokens: &[PatternToken]) -> Result<Vec<String>> {
    let mut combined = vec![String::new()];
    for token in tokens {
        let expansions = token.expansions()?;
        trace!(?token, expansions = expansions.len(), partial = combined.len(), "combine token");
        if let [only] = expansions.as_slice() {
            for item in &mut combined {
                item.push_str(only);
            }
            continue;
        }

        let mut next = Vec::with_capacity(combined.len() * expansions.len());
        for prefix in &combined {
            for suffix in &expansions {
                let mut item = String::with_capacity(prefix.len() + suffix.len());
                item.push_str(prefix);
                item.push_str(suffix);
                next.push(item);
            }
        }
        combined = next;
    }
    Ok(combined)
}

/// Split into maximal runs of ASCII digits and of everything else.
fn split_segments(value: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_digits = None;
    for (idx, ch) in value.char_indices() {
        let digit = ch.is_ascii_digit();
        if in_digits.is_some_and(|current| current != digit) {
            segments.push(&value[start..idx]);
            start = idx;
        }
        in_digits = Some(digit);
    }
    if start < value.len() {
        segments.push(&value[start..]);
    }
    segments
}

fn mismatch(from: &str, to: &str, reason: &'static str) -> CodecError {
    CodecError::StructureMismatch {
        from: from.to_string(),
        to: to.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("a_01b"), ["a_", "01", "b"]);
        assert_eq!(split_segments("12"), ["12"]);
        assert_eq!(split_segments("1b2"), ["1", "b", "2"]);
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_order() {
        assert_eq!(
            tokenize("a{1,3}_{01,2}"),
            vec![
                PatternToken::Literal("a".to_string()),
                PatternToken::Range {
                    low: "1".to_string(),
                    high: "3".to_string()
                },
                PatternToken::Literal("_".to_string()),
                PatternToken::Range {
                    low: "01".to_string(),
                    high: "2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_drops_empty_literals() {
        assert_eq!(
            tokenize("{1,2}{3,4}"),
            vec![
                PatternToken::Range {
                    low: "1".to_string(),
                    high: "2".to_string()
                },
                PatternToken::Range {
                    low: "3".to_string(),
                    high: "4".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_digit_literal_is_not_a_range() {
        assert_eq!(expand_pattern("7{1,2}").unwrap(), ["71", "72"]);
    }

    #[test]
    fn test_expand_tokens_without_tokens() {
        assert_eq!(expand_tokens(&[]).unwrap(), [""]);
    }

    #[test]
    fn test_kind_mismatch_fails() {
        assert!(matches!(
            compress_range("a1", "1a"),
            Err(CodecError::StructureMismatch { .. })
        ));
    }
}
