//! Wave identifiers: a periodic counter paired with a year.
//!
//! A wave such as `09-2023` is the ninth period of 2023. Shifting it moves the
//! counter forward or backward and rolls the year when the counter leaves
//! `1..=waves_per_year`.
//!
//! The layout is described by a pattern of two width markers around a
//! separator, e.g. `{2}-{4}`. The separator is a regular-expression fragment;
//! the text it matches in the input is kept as-is in the output.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodecError, Result};

/// Periods per year used when none is given (monthly waves).
pub const DEFAULT_WAVES_PER_YEAR: u32 = 12;

static WIDTH_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+)\}").expect("Invalid width marker regex"));

/// Which field of a wave identifier holds the period counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveOrder {
    /// `<wave><separator><year>`
    #[default]
    WaveFirst,
    /// `<year><separator><wave>`
    WaveLast,
}

/// A compiled wave layout.
///
/// Build once with [`WaveFormat::new`] and reuse for many identifiers.
#[derive(Debug, Clone)]
pub struct WaveFormat {
    pattern: String,
    matcher: Regex,
    order: WaveOrder,
    wave_width: usize,
    waves_per_year: u32,
}

impl WaveFormat {
    /// Compile `pattern` for the given field order with monthly waves.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidWavePattern`] unless the pattern is
    /// exactly two `{width}` markers around a valid separator fragment.
    pub fn new(pattern: &str, order: WaveOrder) -> Result<Self> {
        let invalid = |reason: String| CodecError::InvalidWavePattern {
            pattern: pattern.to_string(),
            reason,
        };

        let markers: Vec<_> = WIDTH_MARKER_REGEX.captures_iter(pattern).collect();
        let [first, second] = markers.as_slice() else {
            return Err(invalid(format!(
                "expected two width markers, found {}",
                markers.len()
            )));
        };
        let (Some(first_marker), Some(second_marker)) = (first.get(0), second.get(0)) else {
            return Err(invalid("width markers could not be located".to_string()));
        };
        if first_marker.start() != 0 || second_marker.end() != pattern.len() {
            return Err(invalid("unexpected text outside width markers".to_string()));
        }

        let first_width = parse_width(&first[1]).ok_or_else(|| invalid(bad_width(&first[1])))?;
        let second_width =
            parse_width(&second[1]).ok_or_else(|| invalid(bad_width(&second[1])))?;
        let separator = &pattern[first_marker.end()..second_marker.start()];

        let matcher = Regex::new(&format!(
            r"^(?P<first>[0-9]{{{first_width}}})(?P<separator>{separator})(?P<second>[0-9]{{{second_width}}})$"
        ))
        .map_err(|err| invalid(format!("invalid separator: {err}")))?;

        let wave_width = match order {
            WaveOrder::WaveFirst => first_width,
            WaveOrder::WaveLast => second_width,
        };

        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
            order,
            wave_width,
            waves_per_year: DEFAULT_WAVES_PER_YEAR,
        })
    }

    /// Use a different number of periods per year.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidWavesPerYear`] if `waves_per_year` is zero.
    pub fn with_waves_per_year(mut self, waves_per_year: u32) -> Result<Self> {
        if waves_per_year == 0 {
            return Err(CodecError::InvalidWavesPerYear { waves_per_year });
        }
        self.waves_per_year = waves_per_year;
        Ok(self)
    }

    /// The pattern this format was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The configured field order.
    pub fn order(&self) -> WaveOrder {
        self.order
    }

    /// Periods per year.
    pub fn waves_per_year(&self) -> u32 {
        self.waves_per_year
    }

    /// Shift `wave` by `step` periods.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnsupportedStep`] if `|step|` exceeds the waves per year
    /// - [`CodecError::FormatMismatch`] if `wave` does not fit the pattern,
    ///   its counter is outside `1..=waves_per_year`, or the year rolls past
    ///   the `i64` range
    pub fn shift(&self, wave: &str, step: i64) -> Result<String> {
        let waves_per_year = i64::from(self.waves_per_year);
        if step.unsigned_abs() > u64::from(self.waves_per_year) {
            return Err(CodecError::UnsupportedStep {
                step,
                waves_per_year: self.waves_per_year,
            });
        }

        let mismatch = || CodecError::FormatMismatch {
            wave: wave.to_string(),
            pattern: self.pattern.clone(),
        };
        let caps = self.matcher.captures(wave).ok_or_else(mismatch)?;
        let (wave_field, year_field) = match self.order {
            WaveOrder::WaveFirst => (&caps["first"], &caps["second"]),
            WaveOrder::WaveLast => (&caps["second"], &caps["first"]),
        };
        let separator = &caps["separator"];
        let current: i64 = wave_field.parse().map_err(|_| mismatch())?;
        let mut year: i64 = year_field.parse().map_err(|_| mismatch())?;
        if !(1..=waves_per_year).contains(&current) {
            return Err(mismatch());
        }

        let mut moved = current + step;
        if moved < 1 {
            year = year.checked_sub(1).ok_or_else(mismatch)?;
            moved += waves_per_year;
        } else if moved > waves_per_year {
            year = year.checked_add(1).ok_or_else(mismatch)?;
            moved -= waves_per_year;
        }

        let wave_text = format!("{moved:0width$}", width = self.wave_width);
        let shifted = match self.order {
            WaveOrder::WaveFirst => format!("{wave_text}{separator}{year}"),
            WaveOrder::WaveLast => format!("{year}{separator}{wave_text}"),
        };
        debug!(wave, step, shifted = %shifted, "shifted wave");
        Ok(shifted)
    }
}

/// Shift a wave identifier by `step` periods in one call.
///
/// # Errors
///
/// See [`WaveFormat::new`], [`WaveFormat::with_waves_per_year`] and
/// [`WaveFormat::shift`]. The step is checked before the pattern.
///
/// # Examples
///
/// ```
/// use colseq_core::{WaveOrder, shift_wave};
///
/// assert_eq!(shift_wave("09-2023", -3, "{2}-{4}", WaveOrder::WaveFirst, 12).unwrap(), "06-2023");
/// assert_eq!(shift_wave("01-2023", -3, "{2}-{4}", WaveOrder::WaveFirst, 12).unwrap(), "10-2022");
/// ```
pub fn shift_wave(
    wave: &str,
    step: i64,
    pattern: &str,
    order: WaveOrder,
    waves_per_year: u32,
) -> Result<String> {
    if waves_per_year == 0 {
        return Err(CodecError::InvalidWavesPerYear { waves_per_year });
    }
    if step.unsigned_abs() > u64::from(waves_per_year) {
        return Err(CodecError::UnsupportedStep {
            step,
            waves_per_year,
        });
    }
    WaveFormat::new(pattern, order)?
        .with_waves_per_year(waves_per_year)?
        .shift(wave, step)
}

fn parse_width(text: &str) -> Option<usize> {
    text.parse().ok().filter(|width| *width > 0)
}

fn bad_width(text: &str) -> String {
    format!("width '{text}' must be a positive number")
}
