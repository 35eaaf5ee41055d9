// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record model and zero-baseline stacking for stacked bar charts.
//!
//! This crate provides:
//! - a small [`Record`] model (a category id plus an ordered series → value map),
//! - an explicit [`ValuePolicy`] deciding how malformed values are handled, and
//! - the stacking pass: series key discovery, per-record cumulative sums, and the value domain.
//!
//! Everything here is a pure function of its inputs: identical records produce bit-identical
//! stacks, and nothing is cached between calls.

#![no_std]

extern crate alloc;

mod record;
mod stack;

pub use record::{Record, RecordError, Value, ValuePolicy, validate_records};
pub use stack::{
    StackedSegment, StackedSeries, compute_series_keys, compute_value_domain, stack,
};
