// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar geometry (one rectangle per record and series).

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use stackplot_transforms::{Record, StackedSeries};

use crate::palette::Palette;
use crate::scale::{ScaleCategory, ScaleLinear};

/// One drawable stacked segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    /// Bar bounds in chart coordinates.
    pub rect: Rect,
    /// Fill color (the palette color of the series).
    pub fill: Color,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the bar belongs to the selected category.
    pub selected: bool,
    /// Stack position of the series this bar belongs to.
    pub series: usize,
    /// Index of the originating record.
    pub record: usize,
}

/// Generates [`BarRect`]s from stacked series.
///
/// For each segment: `x = band(category)`, `y = y_scale(upper)`, `width = bandwidth` and
/// `height = |y_scale(lower) - y_scale(upper)|`.
#[derive(Clone, Copy, Debug)]
pub struct StackedBarMarkSpec<'a> {
    /// Band scale used for bar positions along x.
    pub band: &'a ScaleCategory,
    /// Linear scale used for bar positions along y.
    pub y_scale: ScaleLinear,
    /// Per-series fill palette.
    pub palette: &'a Palette,
    /// Fill opacity for every bar.
    pub opacity: f64,
    /// Category whose bars are flagged as selected.
    pub selected: Option<&'a str>,
}

impl<'a> StackedBarMarkSpec<'a> {
    /// Creates a bar spec with full opacity and no selection.
    pub fn new(band: &'a ScaleCategory, y_scale: ScaleLinear, palette: &'a Palette) -> Self {
        Self {
            band,
            y_scale,
            palette,
            opacity: 1.0,
            selected: None,
        }
    }

    /// Sets the fill opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Flags the bars of `category` as selected.
    pub fn with_selected(mut self, category: Option<&'a str>) -> Self {
        self.selected = category;
        self
    }

    /// Generates bars series-major: every bar of the bottom series first.
    ///
    /// This is also paint order. Segments whose record has no band are skipped.
    pub fn marks(&self, records: &[Record], stacked: &[StackedSeries]) -> Vec<BarRect> {
        let bw = self.band.band_width();
        let mut out = Vec::with_capacity(stacked.len() * records.len());
        for series in stacked {
            let fill = self.palette.color(series.index);
            for segment in &series.segments {
                let Some(record) = records.get(segment.record) else {
                    continue;
                };
                let Some(x) = self.band.offset(record.category()) else {
                    continue;
                };
                let y_upper = self.y_scale.map(segment.upper);
                let y_lower = self.y_scale.map(segment.lower);
                out.push(BarRect {
                    rect: Rect::new(x, y_upper.min(y_lower), x + bw, y_upper.max(y_lower)),
                    fill,
                    opacity: self.opacity,
                    selected: self.selected == Some(record.category()),
                    series: series.index,
                    record: segment.record,
                });
            }
        }
        out
    }
}
