// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction state.
//!
//! The chart itself is stateless; a host UI keeps a [`HoverState`] next to it and feeds it
//! pointer events. The state mirrors the usual tooltip cycle: entering a bar picks the record,
//! moving shows the tooltip at the pointer, leaving hides it.

use kurbo::Point;

use crate::stacked_bar_chart::StackedBarChart;
use crate::tooltip::Tooltip;

/// The bar under a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BarHit {
    /// Stack position of the hit series.
    pub series: usize,
    /// Index of the hit record.
    pub record: usize,
}

/// Transient hover state owned by the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    hit: Option<BarHit>,
    pointer: Option<Point>,
}

impl HoverState {
    /// Records that the pointer entered a bar.
    pub fn enter(&mut self, hit: BarHit) {
        self.hit = Some(hit);
    }

    /// Records a pointer move; the tooltip becomes visible once a bar has been entered.
    pub fn move_to(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
    }

    /// Records that the pointer left the bar, hiding the tooltip.
    pub fn leave(&mut self) {
        self.hit = None;
        self.pointer = None;
    }

    /// Runs the enter/move/leave cycle for a pointer position over `chart`.
    ///
    /// Returns `true` if the visible state changed.
    pub fn update(&mut self, chart: &StackedBarChart<'_>, pointer: Point) -> bool {
        let before = *self;
        match chart.hit_test(pointer) {
            Some(hit) => {
                if self.hit != Some(hit) {
                    self.enter(hit);
                }
                self.move_to(pointer);
            }
            None => self.leave(),
        }
        before != *self
    }

    /// Returns the hovered bar, if any.
    pub fn hit(&self) -> Option<BarHit> {
        self.hit
    }

    /// Returns `true` while a tooltip should be shown.
    pub fn visible(&self) -> bool {
        self.hit.is_some() && self.pointer.is_some()
    }

    /// Returns the tooltip and its anchor point, while visible.
    pub fn tooltip(&self, chart: &StackedBarChart<'_>) -> Option<(Tooltip, Point)> {
        let (hit, pointer) = (self.hit?, self.pointer?);
        let record = chart.record(hit)?;
        Some((
            Tooltip::for_record(record),
            Tooltip::anchor(pointer, chart.tooltip_offset),
        ))
    }
}
