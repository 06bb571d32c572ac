//! Deterministic codecs for numbered identifiers and column references.
//!
//! This crate provides three independent groups of pure functions:
//!
//! - **pattern**: compress two identifiers such as `a_1` and `a_5` into
//!   `a_{1,5}`, and expand such a pattern back into every identifier
//! - **column**: convert between zero-based positions and spreadsheet column
//!   names (`0` ↔ `A`, `26` ↔ `AA`), and shift a column mapping when new
//!   columns are prepended
//! - **wave**: move a period/year identifier such as `09-2023` by a number of
//!   periods with year rollover
//!
//! # Example
//!
//! ```
//! use colseq_core::{WaveOrder, column_name, compress_range, expand_pattern, shift_wave};
//!
//! assert_eq!(compress_range("img001", "img003")?, "img{001,003}");
//! assert_eq!(expand_pattern("img{001,003}")?, ["img001", "img002", "img003"]);
//! assert_eq!(column_name(27)?, "AB");
//! assert_eq!(shift_wave("11-2023", 2, "{2}-{4}", WaveOrder::WaveFirst, 12)?, "01-2024");
//! # Ok::<(), colseq_core::CodecError>(())
//! ```

pub mod column;
pub mod error;
pub mod pattern;
pub mod sequence;
pub mod wave;

// === Error Types ===
pub use error::{CodecError, Result};

// === Identifier Patterns ===
pub use pattern::{PatternToken, compress_range, expand_pattern, tokenize};
pub use sequence::{expand_range, pad_with_zeros};

// === Column References ===
pub use column::{column_index, column_name, remap_columns};

// === Waves ===
pub use wave::{DEFAULT_WAVES_PER_YEAR, WaveFormat, WaveOrder, shift_wave};
