// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input rows for the stacking pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

/// A single cell value, as loosely typed as the data feeding the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A textual value. Numeric text (after trimming) is read as its number.
    Text(String),
    /// An explicitly missing value (e.g. a JSON `null`).
    Missing,
}

impl Value {
    /// Returns the numeric reading of this value, if it has one.
    ///
    /// The result may still be non-finite or negative.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Missing => None,
        }
    }

    /// Returns the value used for stacking under [`ValuePolicy::Coerce`].
    ///
    /// Missing, non-numeric, non-finite and negative values all count as `0.0`.
    pub fn coerced(&self) -> f64 {
        match self.to_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            other => {
                tracing::debug!(value = ?self, reading = ?other, "coercing unusable value to 0");
                0.0
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

/// One input row: a category id and an ordered mapping from series name to value.
///
/// Series names are unique within a record; entry order is preserved and is what
/// series key discovery uses for first-seen ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    category: String,
    values: Vec<(String, Value)>,
}

impl Record {
    /// Creates a record with no series values.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            values: Vec::new(),
        }
    }

    /// Builds a record from `(series, value)` entries.
    ///
    /// A repeated series name replaces the earlier value in place.
    pub fn from_entries<S, V>(
        category: impl Into<String>,
        entries: impl IntoIterator<Item = (S, V)>,
    ) -> Self
    where
        S: Into<String>,
        V: Into<Value>,
    {
        let mut record = Self::new(category);
        for (series, value) in entries {
            record.set(series, value);
        }
        record
    }

    /// Sets the value for a series, returning the record.
    pub fn with_value(mut self, series: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(series, value);
        self
    }

    /// Sets the value for a series.
    ///
    /// Existing series keep their position; new series are appended.
    pub fn set(&mut self, series: impl Into<String>, value: impl Into<Value>) {
        let series = series.into();
        let value = value.into();
        match self.values.iter_mut().find(|(name, _)| *name == series) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((series, value)),
        }
    }

    /// Returns the category id.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the raw value for a series, if the record has one.
    pub fn get(&self, series: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == series)
            .map(|(_, v)| v)
    }

    /// Returns the stacking value for a series; absent series count as `0.0`.
    pub fn value(&self, series: &str) -> f64 {
        self.get(series).map_or(0.0, Value::coerced)
    }

    /// Iterates `(series, value)` entries in record order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Returns the number of series entries in this record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the record carries no series entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// How malformed values are treated before stacking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Treat missing, non-numeric, non-finite and negative values as `0.0`.
    #[default]
    Coerce,
    /// Reject records that are not well formed (see [`validate_records`]).
    Strict,
}

impl ValuePolicy {
    /// Checks `records` against this policy.
    ///
    /// `Coerce` accepts everything; `Strict` runs [`validate_records`].
    pub fn check(self, records: &[Record]) -> Result<(), RecordError> {
        match self {
            Self::Coerce => Ok(()),
            Self::Strict => validate_records(records),
        }
    }
}

/// Errors reported by [`validate_records`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Two records share a category id.
    DuplicateCategory {
        /// The repeated category id.
        category: String,
    },
    /// A series value is missing or has no numeric reading.
    NonNumeric {
        /// Category of the offending record.
        category: String,
        /// Offending series.
        series: String,
    },
    /// A series value is NaN or infinite.
    NonFinite {
        /// Category of the offending record.
        category: String,
        /// Offending series.
        series: String,
    },
    /// A series value is below zero.
    Negative {
        /// Category of the offending record.
        category: String,
        /// Offending series.
        series: String,
        /// The negative value.
        value: f64,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCategory { category } => {
                write!(f, "duplicate category `{category}`")
            }
            Self::NonNumeric { category, series } => {
                write!(f, "category `{category}`: series `{series}` is not a number")
            }
            Self::NonFinite { category, series } => {
                write!(f, "category `{category}`: series `{series}` is not finite")
            }
            Self::Negative {
                category,
                series,
                value,
            } => write!(
                f,
                "category `{category}`: series `{series}` is negative ({value})"
            ),
        }
    }
}

impl core::error::Error for RecordError {}

/// Checks that category ids are unique and every value is a finite, non-negative number.
///
/// Only [`Value::Number`] passes; numeric text is rejected here even though
/// [`ValuePolicy::Coerce`] would read it. Returns the first problem found, in record order.
pub fn validate_records(records: &[Record]) -> Result<(), RecordError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.category()) {
            return Err(RecordError::DuplicateCategory {
                category: String::from(record.category()),
            });
        }
        for (series, value) in record.entries() {
            let category = String::from(record.category());
            let series = String::from(series);
            match value {
                Value::Number(v) if !v.is_finite() => {
                    return Err(RecordError::NonFinite { category, series });
                }
                Value::Number(v) if *v < 0.0 => {
                    return Err(RecordError::Negative {
                        category,
                        series,
                        value: *v,
                    });
                }
                Value::Number(_) => {}
                Value::Text(_) | Value::Missing => {
                    return Err(RecordError::NonNumeric { category, series });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn set_replaces_in_place_and_appends_new_series() {
        let mut r = Record::new("A").with_value("s1", 1.0).with_value("s2", 2.0);
        r.set("s1", 5.0);
        r.set("s3", 7.0);
        let names: Vec<&str> = r.entries().map(|(s, _)| s).collect();
        assert_eq!(names, ["s1", "s2", "s3"]);
        assert_eq!(r.value("s1"), 5.0);
    }

    #[test]
    fn coercion_reads_numeric_text_and_zeroes_the_rest() {
        let r = Record::new("A")
            .with_value("num", 3.0)
            .with_value("text", " 4.5 ")
            .with_value("junk", "n/a")
            .with_value("null", None::<f64>)
            .with_value("nan", f64::NAN)
            .with_value("neg", -2.0);
        assert_eq!(r.value("num"), 3.0);
        assert_eq!(r.value("text"), 4.5);
        assert_eq!(r.value("junk"), 0.0);
        assert_eq!(r.value("null"), 0.0);
        assert_eq!(r.value("nan"), 0.0);
        assert_eq!(r.value("neg"), 0.0);
        assert_eq!(r.value("absent"), 0.0);
    }

    #[test]
    fn strict_validation_reports_duplicates() {
        let records = [
            Record::new("A").with_value("s1", 1.0),
            Record::new("A").with_value("s1", 2.0),
        ];
        assert_eq!(
            validate_records(&records),
            Err(RecordError::DuplicateCategory {
                category: String::from("A")
            })
        );
        assert_eq!(ValuePolicy::Coerce.check(&records), Ok(()));
    }

    #[test]
    fn strict_validation_reports_bad_values() {
        let text = [Record::new("A").with_value("s1", "3")];
        assert!(matches!(
            validate_records(&text),
            Err(RecordError::NonNumeric { .. })
        ));

        let inf = [Record::new("A").with_value("s1", f64::INFINITY)];
        assert!(matches!(
            validate_records(&inf),
            Err(RecordError::NonFinite { .. })
        ));

        let neg = [Record::new("A").with_value("s1", -1.0)];
        assert_eq!(
            ValuePolicy::Strict.check(&neg),
            Err(RecordError::Negative {
                category: String::from("A"),
                series: String::from("s1"),
                value: -1.0,
            })
        );

        let ok = [
            Record::new("A").with_value("s1", 1.0),
            Record::new("B").with_value("s2", 0.0),
        ];
        assert_eq!(ValuePolicy::Strict.check(&ok), Ok(()));
    }

    #[test]
    fn errors_render_the_offending_cell() {
        let err = RecordError::NonNumeric {
            category: String::from("B"),
            series: String::from("s2"),
        };
        assert_eq!(
            std::format!("{err}"),
            "category `B`: series `s2` is not a number"
        );
    }
}
