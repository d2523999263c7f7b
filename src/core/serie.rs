//! Serie data structure: a named numeric sequence with an optional index.

use crate::error::{KlError, Result};
use crate::utils::stats::{nan_max, nan_mean, nan_min, nan_std, nan_to_num};
use chrono::{DateTime, Utc};
use std::fmt;

/// Positional or temporal index of a [`Serie`].
#[derive(Debug, Clone, PartialEq)]
pub enum SerieIndex {
    /// Integer positions (defaults to `0..N-1`).
    Positional(Vec<i64>),
    /// Timestamps, e.g. the datetime index of a column-oriented table.
    Temporal(Vec<DateTime<Utc>>),
}

impl SerieIndex {
    /// Default index `0..len`.
    pub fn positional(len: usize) -> Self {
        SerieIndex::Positional((0..len as i64).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            SerieIndex::Positional(p) => p.len(),
            SerieIndex::Temporal(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, SerieIndex::Temporal(_))
    }
}

impl Default for SerieIndex {
    fn default() -> Self {
        SerieIndex::Positional(Vec::new())
    }
}

impl From<Vec<i64>> for SerieIndex {
    fn from(positions: Vec<i64>) -> Self {
        SerieIndex::Positional(positions)
    }
}

impl From<Vec<DateTime<Utc>>> for SerieIndex {
    fn from(timestamps: Vec<DateTime<Utc>>) -> Self {
        SerieIndex::Temporal(timestamps)
    }
}

impl fmt::Display for SerieIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerieIndex::Positional(p) => write!(f, "{:?}", p),
            SerieIndex::Temporal(t) => {
                write!(f, "[")?;
                for (i, ts) in t.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", ts.to_rfc3339())?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A named numeric sequence.
///
/// Missing observations are stored as `NaN` and ignored by the summary
/// statistics. `detrend` and `deseasonalize` only describe how the values
/// were prepared; the lag analysis uses them to decide whether the values
/// need a stabilization offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Serie {
    values: Vec<f64>,
    index: SerieIndex,
    identifier: Option<String>,
    detrend: bool,
    deseasonalize: bool,
    seasonal_period: Option<usize>,
}

/// Builder for constructing a Serie with metadata.
#[derive(Debug, Clone, Default)]
pub struct SerieBuilder {
    values: Vec<f64>,
    index: Option<SerieIndex>,
    identifier: Option<String>,
    detrend: bool,
    deseasonalize: bool,
    seasonal_period: Option<usize>,
}

impl SerieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values<T: Into<f64>>(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn index(mut self, index: impl Into<SerieIndex>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Mark the values as detrended.
    pub fn detrend(mut self, detrend: bool) -> Self {
        self.detrend = detrend;
        self
    }

    /// Mark the values as deseasonalized. Requires a seasonal period.
    pub fn deseasonalize(mut self, deseasonalize: bool) -> Self {
        self.deseasonalize = deseasonalize;
        self
    }

    pub fn seasonal_period(mut self, period: usize) -> Self {
        self.seasonal_period = Some(period);
        self
    }

    pub fn build(self) -> Result<Serie> {
        if self.deseasonalize && !matches!(self.seasonal_period, Some(p) if p > 0) {
            return Err(KlError::Validation(
                "seasonal period should be provided for deseasonalization".to_string(),
            ));
        }

        let index = match self.index {
            Some(index) => {
                if index.len() != self.values.len() {
                    return Err(KlError::Validation(format!(
                        "index and values must have the same length ({} vs {})",
                        index.len(),
                        self.values.len()
                    )));
                }
                index
            }
            None => SerieIndex::positional(self.values.len()),
        };

        Ok(Serie {
            values: self.values,
            index,
            identifier: self.identifier,
            detrend: self.detrend,
            deseasonalize: self.deseasonalize,
            seasonal_period: self.seasonal_period,
        })
    }
}

impl Serie {
    /// Create an anonymous serie with the default positional index.
    ///
    /// Accepts any value type with a lossless `Into<f64>` (`f32`, `i32`,
    /// `u32`, ...). `Vec<i64>` and `Vec<usize>` go through `Serie::from`.
    pub fn new<T: Into<f64>>(values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<f64> = values.into_iter().map(Into::into).collect();
        let index = SerieIndex::positional(values.len());
        Self {
            values,
            index,
            identifier: None,
            detrend: false,
            deseasonalize: false,
            seasonal_period: None,
        }
    }

    pub fn builder() -> SerieBuilder {
        SerieBuilder::new()
    }

    /// Create a serie with an explicit index.
    pub fn with_index(values: Vec<f64>, index: impl Into<SerieIndex>) -> Result<Self> {
        SerieBuilder::new().values(values).index(index).build()
    }

    /// Create a serie from one column of a table: the column name becomes
    /// the identifier and the table index becomes the serie index.
    pub fn from_column(
        name: impl Into<String>,
        values: Vec<f64>,
        index: impl Into<SerieIndex>,
    ) -> Result<Self> {
        SerieBuilder::new()
            .values(values)
            .index(index)
            .identifier(name)
            .build()
    }

    /// Attach an identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn index(&self) -> &SerieIndex {
        &self.index
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn detrend(&self) -> bool {
        self.detrend
    }

    pub fn deseasonalize(&self) -> bool {
        self.deseasonalize
    }

    pub fn seasonal_period(&self) -> Option<usize> {
        self.seasonal_period
    }

    /// Minimum, ignoring NaN.
    pub fn min(&self) -> f64 {
        nan_min(&self.values)
    }

    /// Maximum, ignoring NaN.
    pub fn max(&self) -> f64 {
        nan_max(&self.values)
    }

    /// Arithmetic mean, ignoring NaN.
    pub fn mean(&self) -> f64 {
        nan_mean(&self.values)
    }

    /// Population standard deviation, ignoring NaN.
    pub fn std(&self) -> f64 {
        nan_std(&self.values)
    }

    /// Rotate the values by `shift` positions and blank the positions that
    /// wrapped around with NaN.
    ///
    /// For `shift > 0` the first `shift` positions (clamped to the length)
    /// are blanked. For `shift < 0` the first `len - |shift|` positions are
    /// blanked, matching slice-from-start semantics. Index and identifier
    /// are carried over unchanged, so the index stays aligned with the
    /// original positions rather than the rotated values.
    pub fn shift(&self, shift: isize) -> Serie {
        let n = self.values.len();
        let mut values = self.values.clone();

        if n > 0 {
            let rotation = shift.rem_euclid(n as isize) as usize;
            values.rotate_right(rotation);

            let blanked = if shift >= 0 {
                (shift as usize).min(n)
            } else {
                n.saturating_sub(shift.unsigned_abs())
            };
            values[..blanked].fill(f64::NAN);
        }

        Serie {
            values,
            index: self.index.clone(),
            identifier: self.identifier.clone(),
            detrend: false,
            deseasonalize: false,
            seasonal_period: None,
        }
    }

    /// True if every value equals `value`, with NaN read as `0.0`.
    pub fn all_eq(&self, value: f64) -> bool {
        self.values.iter().all(|&v| nan_to_num(v) == value)
    }

    /// A copy with `offset` added to every value. Metadata is preserved.
    pub fn offset(&self, offset: f64) -> Serie {
        Serie {
            values: self.values.iter().map(|v| v + offset).collect(),
            ..self.clone()
        }
    }
}

impl From<Vec<f64>> for Serie {
    fn from(values: Vec<f64>) -> Self {
        Serie::new(values)
    }
}

/// Integer columns are coerced to double precision. `i64` has no lossless
/// `Into<f64>`, so it is converted with `as`.
impl From<Vec<i64>> for Serie {
    fn from(values: Vec<i64>) -> Self {
        Serie::new(values.into_iter().map(|v| v as f64))
    }
}

impl From<Vec<usize>> for Serie {
    fn from(values: Vec<usize>) -> Self {
        Serie::new(values.into_iter().map(|v| v as f64))
    }
}

impl fmt::Display for Serie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(identifier) = &self.identifier {
            writeln!(f, "{}", identifier)?;
        }
        writeln!(f, "Index: {}", self.index)?;
        write!(f, "Values: {:?}", self.values)
    }
}
