// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltip content.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use stackplot_transforms::Record;

use crate::format::format_value;

/// One `series: value` line of a tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    /// Series name.
    pub series: String,
    /// The value used for stacking.
    pub value: f64,
}

impl fmt::Display for TooltipLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.series, format_value(self.value))
    }
}

/// The content shown while hovering a bar: the record's category and each of its series.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// The category id, or `None` when it is empty.
    pub title: Option<String>,
    /// One line per series entry of the record, in record order.
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    /// Builds the tooltip for a record.
    ///
    /// Only series the record actually carries are listed; values are shown as stacked.
    pub fn for_record(record: &Record) -> Self {
        let title = Some(record.category())
            .filter(|c| !c.is_empty())
            .map(String::from);
        let lines = record
            .entries()
            .map(|(series, value)| TooltipLine {
                series: String::from(series),
                value: value.coerced(),
            })
            .collect();
        Self { title, lines }
    }

    /// Returns where to place the tooltip: `offset` pixels right of the pointer.
    pub fn anchor(pointer: Point, offset: f64) -> Point {
        Point::new(pointer.x + offset, pointer.y)
    }

    /// Returns the tooltip as text lines (title first, if any).
    pub fn text_lines(&self) -> Vec<String> {
        self.title
            .iter()
            .cloned()
            .chain(self.lines.iter().map(|l| alloc::format!("{l}")))
            .collect()
    }
}
