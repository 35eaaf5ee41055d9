// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis geometry.
//!
//! An [`Axis`] is the data a renderer needs to draw a ruler next to the plot: the domain line,
//! one tick line per tick, and a positioned label for each tick. The value axis sits on the
//! left of the plot; the category axis sits below it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::format::format_tick;
use crate::scale::{ScaleCategory, ScaleLinear};

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A horizontal axis placed below the plot area.
    Bottom,
}

/// Horizontal text anchoring relative to a label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The label starts at its position.
    Start,
    /// The label is centred on its position.
    Middle,
    /// The label ends at its position.
    End,
}

/// Vertical text anchoring relative to a label position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the vertical middle of the label.
    Middle,
    /// The position is the top of the label.
    Hanging,
}

/// Axis styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    /// Tick line length in pixels, pointing away from the plot.
    pub tick_size: f64,
    /// Gap between the tick end and the label.
    pub tick_padding: f64,
    /// Label font size.
    pub font_size: f64,
    /// Stroke width for the domain line and ticks.
    pub stroke_width: f64,
    /// Color for lines and labels.
    pub color: Color,
}

impl AxisStyle {
    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            tick_size: 6.0,
            tick_padding: 3.0,
            font_size: 10.0,
            stroke_width: 1.0,
            color: css::BLACK,
        }
    }
}

/// One tick: its line and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis (y for the left axis, x for the bottom axis).
    pub position: f64,
    /// The tick line.
    pub line: Line,
    /// Label text.
    pub label: String,
    /// Label anchor point.
    pub label_pos: Point,
}

/// Axis geometry and labels, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Placement relative to the plot.
    pub orient: AxisOrient,
    /// The line running along the plot edge.
    pub domain: Line,
    /// Ticks in increasing position order.
    pub ticks: Vec<AxisTick>,
    /// How labels are anchored horizontally.
    pub anchor: TextAnchor,
    /// How labels are anchored vertically.
    pub baseline: TextBaseline,
    /// Styling used to build the axis.
    pub style: AxisStyle,
}

impl Axis {
    /// Builds the left value axis.
    ///
    /// With no scale (an empty chart) only the domain line is produced.
    pub fn value_axis(
        scale: Option<&ScaleLinear>,
        plot: Rect,
        tick_count: usize,
        style: AxisStyle,
    ) -> Self {
        let x = plot.x0;
        let ticks = scale
            .map(|scale| {
                let step = scale.tick_step(tick_count);
                scale
                    .ticks(tick_count)
                    .into_iter()
                    .map(|v| {
                        let y = scale.map(v);
                        AxisTick {
                            position: y,
                            line: Line::new((x - style.tick_size, y), (x, y)),
                            label: format_tick(v, step),
                            label_pos: Point::new(x - style.tick_size - style.tick_padding, y),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            orient: AxisOrient::Left,
            domain: Line::new((x, plot.y0), (x, plot.y1)),
            ticks,
            anchor: TextAnchor::End,
            baseline: TextBaseline::Middle,
            style,
        }
    }

    /// Builds the bottom category axis: one tick per category at the band centre.
    pub fn category_axis(scale: &ScaleCategory, plot: Rect, style: AxisStyle) -> Self {
        let y = plot.y1;
        let half = scale.band_width() * 0.5;
        let band = scale.band();
        let ticks = scale
            .categories()
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let x = band.x(i) + half;
                AxisTick {
                    position: x,
                    line: Line::new((x, y), (x, y + style.tick_size)),
                    label: category.clone(),
                    label_pos: Point::new(x, y + style.tick_size + style.tick_padding),
                }
            })
            .collect();

        Self {
            orient: AxisOrient::Bottom,
            domain: Line::new((plot.x0, y), (plot.x1, y)),
            ticks,
            anchor: TextAnchor::End,
            baseline: TextBaseline::Hanging,
            style,
        }
    }
}
