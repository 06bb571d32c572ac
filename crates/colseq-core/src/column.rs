//! Spreadsheet-style column names.
//!
//! Positions are zero-based and names use bijective base-26 numeration:
//! `A` is 0, `Z` is 25, `AA` is 26 and `BA` is 52. No letter stands for zero,
//! so every non-negative position has exactly one name.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CodecError, Result};

const LETTERS: i128 = 26;

/// Convert a column name to its zero-based position.
///
/// Letters are accepted in either case.
///
/// # Errors
///
/// Returns [`CodecError::InvalidColumnName`] if the name is empty, contains
/// anything other than ASCII letters, or is too long for an `i64` position.
///
/// # Examples
///
/// ```
/// use colseq_core::column_index;
///
/// assert_eq!(column_index("A").unwrap(), 0);
/// assert_eq!(column_index("az").unwrap(), 51);
/// ```
pub fn column_index(name: &str) -> Result<i64> {
    let invalid = || CodecError::InvalidColumnName {
        name: name.to_string(),
    };
    if name.is_empty() {
        return Err(invalid());
    }

    let mut ordinal: i128 = 0;
    for byte in name.bytes() {
        if !byte.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let digit = i128::from(byte.to_ascii_uppercase() - b'A') + 1;
        ordinal = ordinal
            .checked_mul(LETTERS)
            .and_then(|value| value.checked_add(digit))
            .ok_or_else(invalid)?;
    }
    i64::try_from(ordinal - 1).map_err(|_| invalid())
}

/// Convert a zero-based position to its uppercase column name.
///
/// # Errors
///
/// Returns [`CodecError::InvalidColumnIndex`] if `index` is negative.
///
/// # Examples
///
/// ```
/// use colseq_core::column_name;
///
/// assert_eq!(column_name(0).unwrap(), "A");
/// assert_eq!(column_name(26).unwrap(), "AA");
/// assert_eq!(column_name(52).unwrap(), "BA");
/// ```
pub fn column_name(index: i64) -> Result<String> {
    if index < 0 {
        return Err(CodecError::InvalidColumnIndex { index });
    }

    let mut letters = Vec::new();
    // Work on the one-based ordinal; i128 keeps i64::MAX + 1 representable.
    let mut ordinal = i128::from(index) + 1;
    while ordinal > 0 {
        let remainder = (ordinal - 1) % LETTERS;
        letters.push(b'A' + remainder as u8);
        ordinal = (ordinal - 1) / LETTERS;
    }
    letters.reverse();
    Ok(letters.into_iter().map(char::from).collect())
}

/// Prepend new columns to a name→column mapping.
///
/// Each name in `add` takes the next position starting at `A`, in the order
/// given. Every existing entry is shifted right by `add.len()`, so gaps
/// between the original positions survive unchanged.
///
/// # Errors
///
/// Returns [`CodecError::DuplicateColumn`] if a name in `add` is already a
/// key of `base` or appears twice in `add`, and
/// [`CodecError::InvalidColumnName`] if a value in `base` is not a column
/// name.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use colseq_core::remap_columns;
///
/// let base = BTreeMap::from([
///     ("x1".to_string(), "A".to_string()),
///     ("x2".to_string(), "C".to_string()),
/// ]);
/// let remapped = remap_columns(&base, &["x3"]).unwrap();
/// assert_eq!(remapped["x3"], "A");
/// assert_eq!(remapped["x1"], "B");
/// assert_eq!(remapped["x2"], "D");
/// ```
pub fn remap_columns<S: AsRef<str>>(
    base: &BTreeMap<String, String>,
    add: &[S],
) -> Result<BTreeMap<String, String>> {
    let mut remapped = BTreeMap::new();
    for (position, name) in add.iter().enumerate() {
        let name = name.as_ref();
        if base.contains_key(name) || remapped.contains_key(name) {
            return Err(CodecError::DuplicateColumn {
                name: name.to_string(),
            });
        }
        remapped.insert(name.to_string(), column_name(to_position(position))?);
    }

    let offset = to_position(add.len());
    for (name, column) in base {
        let shifted = column_index(column)?
            .checked_add(offset)
            .ok_or_else(|| CodecError::InvalidColumnName {
                name: column.clone(),
            })?;
        remapped.insert(name.clone(), column_name(shifted)?);
    }

    debug!(existing = base.len(), prepended = add.len(), "remapped columns");
    Ok(remapped)
}

fn to_position(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
