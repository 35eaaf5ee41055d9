// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zero-baseline stacking.
//!
//! Series are stacked bottom to top in series key order. Each record gets its own independent
//! stack starting at `0.0`, so one record's segments never depend on another record's values.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::record::{Record, Value};

/// The stacked span of one series within one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedSegment {
    /// Cumulative value below this series (the running sum before adding it).
    pub lower: f64,
    /// Cumulative value including this series.
    pub upper: f64,
    /// Index of the originating record in the stacked input.
    pub record: usize,
}

impl StackedSegment {
    /// Returns `upper - lower`.
    pub fn height(&self) -> f64 {
        self.upper - self.lower
    }
}

/// All segments for one series, one per input record, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    /// The series name.
    pub key: String,
    /// Position in stack order (`0` is the bottom series).
    pub index: usize,
    /// One segment per record.
    pub segments: Vec<StackedSegment>,
}

/// Returns the union of series names across `records`, in first-seen order.
pub fn compute_series_keys(records: &[Record]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keys = Vec::new();
    for record in records {
        for (series, _) in record.entries() {
            if seen.insert(series) {
                keys.push(String::from(series));
            }
        }
    }
    keys
}

/// Stacks `records` by `series_keys` (bottom to top).
///
/// Returns one [`StackedSeries`] per key. Values are read with [`Value::coerced`], so absent and
/// unusable values contribute a zero-height segment. Series in a record that are not listed in
/// `series_keys` are ignored.
pub fn stack(records: &[Record], series_keys: &[String]) -> Vec<StackedSeries> {
    let slots = key_slots(series_keys);
    let mut out: Vec<StackedSeries> = series_keys
        .iter()
        .enumerate()
        .map(|(index, key)| StackedSeries {
            key: key.clone(),
            index,
            segments: Vec::with_capacity(records.len()),
        })
        .collect();

    let mut row = vec![0.0; series_keys.len()];
    for (record_index, record) in records.iter().enumerate() {
        fill_row(record, &slots, &mut row);
        let mut sum = 0.0;
        for (series, v) in out.iter_mut().zip(&row) {
            let lower = sum;
            sum = accumulate(sum, *v);
            series.segments.push(StackedSegment {
                lower,
                upper: sum,
                record: record_index,
            });
        }
    }

    tracing::debug!(
        records = records.len(),
        series = series_keys.len(),
        "stacked records"
    );
    out
}

/// Returns `(0, max)` where `max` is the largest per-record total over `series_keys`.
///
/// Returns `None` for an empty record set; callers decide how to draw a chart with no extent.
pub fn compute_value_domain(records: &[Record], series_keys: &[String]) -> Option<(f64, f64)> {
    let slots = key_slots(series_keys);
    let mut row = vec![0.0; series_keys.len()];
    let mut max: Option<f64> = None;
    for record in records {
        fill_row(record, &slots, &mut row);
        let total = row.iter().fold(0.0, |acc, v| accumulate(acc, *v));
        max = Some(max.map_or(total, |m| m.max(total)));
    }
    let domain = max.map(|m| (0.0, m));
    tracing::debug!(?domain, "computed value domain");
    domain
}

/// Adds a coerced value to a running stack sum, saturating at `f64::MAX`.
fn accumulate(sum: f64, value: f64) -> f64 {
    let next = sum + value;
    if next.is_finite() {
        next
    } else {
        tracing::debug!(sum, value, "stack sum overflowed; saturating");
        f64::MAX
    }
}

fn key_slots(series_keys: &[String]) -> HashMap<&str, usize> {
    let mut slots = HashMap::with_capacity(series_keys.len());
    for (i, key) in series_keys.iter().enumerate() {
        slots.entry(key.as_str()).or_insert(i);
    }
    slots
}

/// Writes the coerced value of each keyed series of `record` into `row` (zero when absent).
fn fill_row(record: &Record, slots: &HashMap<&str, usize>, row: &mut [f64]) {
    row.fill(0.0);
    for (series, value) in record.entries() {
        if let Some(&slot) = slots.get(series) {
            row[slot] = Value::coerced(value);
        }
    }
}
