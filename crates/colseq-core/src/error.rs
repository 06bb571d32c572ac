//! Error types for the identifier and column codecs.

use thiserror::Error;

/// Errors raised by the codecs in this crate.
///
/// Every variant is a validation failure of the caller's input; nothing here
/// is transient and no operation produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    // === Pattern Errors ===
    /// The two identifiers passed to compression differ in literal structure.
    #[error("'{from}' and '{to}' do not match ({reason})")]
    StructureMismatch {
        from: String,
        to: String,
        reason: &'static str,
    },

    /// A pattern opens a range marker that is never closed.
    #[error("malformed pattern '{pattern}': did not find matching '}}'")]
    MalformedPattern { pattern: String },

    /// A range endpoint is not a plain decimal numeral.
    #[error("invalid numeral '{value}': expected decimal digits only")]
    InvalidNumeral { value: String },

    // === Column Errors ===
    /// A column name is empty, contains non-letters, or is too long to index.
    #[error("invalid column name '{name}'")]
    InvalidColumnName { name: String },

    /// A column index is negative.
    #[error("invalid column index {index}: must be zero or greater")]
    InvalidColumnIndex { index: i64 },

    /// A prepended column name already exists.
    #[error("column '{name}' already exists")]
    DuplicateColumn { name: String },

    // === Wave Errors ===
    /// The shift step is larger than one year of waves.
    #[error("unsupported step {step}: magnitude must not exceed {waves_per_year}")]
    UnsupportedStep { step: i64, waves_per_year: u32 },

    /// The wave pattern does not contain two usable width markers.
    #[error("invalid wave pattern '{pattern}': {reason}")]
    InvalidWavePattern { pattern: String, reason: String },

    /// The wave identifier does not conform to its pattern.
    #[error("wave '{wave}' does not match pattern '{pattern}'")]
    FormatMismatch { wave: String, pattern: String },

    /// A year needs at least one wave.
    #[error("waves per year must be at least 1, got {waves_per_year}")]
    InvalidWavesPerYear { waves_per_year: u32 },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
