// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar chart composition.
//!
//! [`StackedBarChartSpec`] is the explicit configuration (size, margins, padding, palette,
//! axis styling). [`StackedBarChart::compute`] runs the whole pipeline over a record slice:
//!
//! records -> series keys -> stack -> value domain -> scales -> bars + axes.
//!
//! The result borrows the records so interaction can hand the originating record back.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use stackplot_transforms::{
    Record, RecordError, StackedSeries, ValuePolicy, compute_series_keys, compute_value_domain,
    stack,
};

use crate::axis::{Axis, AxisStyle};
use crate::interaction::BarHit;
use crate::layout::{ChartLayout, Margins, Size};
use crate::palette::Palette;
use crate::scale::{ScaleCategory, ScaleLinear, category_scale, value_scale};
use crate::stacked_bar_mark::{BarRect, StackedBarMarkSpec};

/// Configuration for a stacked bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedBarChartSpec {
    /// Outer chart size.
    pub size: Size,
    /// Space reserved around the plot for the axes.
    pub margins: Margins,
    /// Band padding as a fraction of a band step, in `[0, 1)`.
    pub padding: f64,
    /// Series colors, by stack position.
    pub palette: Palette,
    /// Fill opacity for bars, in `[0, 1]`.
    pub bar_opacity: f64,
    /// Approximate number of value-axis ticks.
    pub value_tick_count: usize,
    /// Whether to extend the value domain to the next round tick.
    pub nice: bool,
    /// Value (left) axis styling.
    pub value_axis: AxisStyle,
    /// Category (bottom) axis styling.
    pub category_axis: AxisStyle,
    /// Horizontal distance between the pointer and the tooltip.
    pub tooltip_offset: f64,
    /// How malformed records are handled.
    pub value_policy: ValuePolicy,
    /// Category whose bars are drawn as selected.
    pub selected: Option<String>,
}

impl StackedBarChartSpec {
    /// Creates a spec for a chart of the given size with default settings.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            margins: Margins::default(),
            padding: 0.05,
            palette: Palette::default(),
            bar_opacity: 0.8,
            value_tick_count: 10,
            nice: false,
            value_axis: AxisStyle::default(),
            category_axis: AxisStyle::default().with_font_size(8.0),
            tooltip_offset: 15.0,
            value_policy: ValuePolicy::Coerce,
            selected: None,
        }
    }

    /// Sets the margins around the plot.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the band padding fraction.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the series palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the bar fill opacity.
    pub fn with_bar_opacity(mut self, opacity: f64) -> Self {
        self.bar_opacity = opacity;
        self
    }

    /// Sets the approximate number of value-axis ticks.
    pub fn with_value_tick_count(mut self, count: usize) -> Self {
        self.value_tick_count = count;
        self
    }

    /// Enables or disables extending the value domain to a round tick.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Sets the tooltip offset from the pointer.
    pub fn with_tooltip_offset(mut self, offset: f64) -> Self {
        self.tooltip_offset = offset;
        self
    }

    /// Sets the value policy.
    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    /// Draws the bars of `category` as selected.
    pub fn with_selected(mut self, category: impl Into<String>) -> Self {
        self.selected = Some(category.into());
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.size.width.is_finite() || !self.size.height.is_finite() {
            return Err(ConfigError::InvalidSize);
        }
        if !self.margins.is_valid() {
            return Err(ConfigError::InvalidMargins);
        }
        if !(0.0..1.0).contains(&self.padding) {
            return Err(ConfigError::InvalidPadding(self.padding));
        }
        if !(0.0..=1.0).contains(&self.bar_opacity) {
            return Err(ConfigError::InvalidOpacity(self.bar_opacity));
        }
        Ok(())
    }
}

/// Errors reported by [`StackedBarChartSpec::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The chart width or height is not finite.
    InvalidSize,
    /// A margin is negative or not finite.
    InvalidMargins,
    /// Band padding outside `[0, 1)`.
    InvalidPadding(f64),
    /// Bar opacity outside `[0, 1]`.
    InvalidOpacity(f64),
    /// The palette has no colors.
    EmptyPalette,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => f.write_str("chart size must be finite"),
            Self::InvalidMargins => f.write_str("margins must be finite and non-negative"),
            Self::InvalidPadding(p) => write!(f, "band padding {p} is outside [0, 1)"),
            Self::InvalidOpacity(o) => write!(f, "bar opacity {o} is outside [0, 1]"),
            Self::EmptyPalette => f.write_str("palette has no colors"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors returned by [`StackedBarChart::compute`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The chart configuration is invalid.
    Config(ConfigError),
    /// The records were rejected by [`ValuePolicy::Strict`].
    Records(RecordError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid chart configuration: {err}"),
            Self::Records(err) => write!(f, "invalid records: {err}"),
        }
    }
}

impl core::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Records(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ChartError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RecordError> for ChartError {
    fn from(err: RecordError) -> Self {
        Self::Records(err)
    }
}

/// A computed stacked bar chart: stacks, scales, bars and axes for one set of records.
#[derive(Clone, Debug)]
pub struct StackedBarChart<'a> {
    records: &'a [Record],
    /// View and plot rectangles.
    pub layout: ChartLayout,
    /// Series names in stack order (bottom first).
    pub series_keys: Vec<String>,
    /// Stacked segments, one series per key.
    pub stacked: Vec<StackedSeries>,
    /// `(0, max)` value domain, `None` when there are no records.
    pub domain: Option<(f64, f64)>,
    /// Value scale, `None` when there are no records.
    pub value_scale: Option<ScaleLinear>,
    /// Category band scale.
    pub category_scale: ScaleCategory,
    /// Bars in paint order.
    pub bars: Vec<BarRect>,
    /// Left value axis.
    pub value_axis: Axis,
    /// Bottom category axis.
    pub category_axis: Axis,
    /// Horizontal distance between the pointer and the tooltip.
    pub tooltip_offset: f64,
}

impl<'a> StackedBarChart<'a> {
    /// Computes the chart for `records`.
    ///
    /// An empty record slice is not an error: the chart has no bars and no value ticks.
    pub fn compute(records: &'a [Record], spec: &StackedBarChartSpec) -> Result<Self, ChartError> {
        spec.validate()?;
        spec.value_policy.check(records)?;

        let layout = ChartLayout::arrange(spec.size, spec.margins);
        let series_keys = compute_series_keys(records);
        let stacked = stack(records, &series_keys);
        let domain = compute_value_domain(records, &series_keys);

        let y_scale = domain.map(|d| {
            let scale = value_scale(d, layout.vertical_range());
            if spec.nice {
                scale.nice(spec.value_tick_count)
            } else {
                scale
            }
        });
        let band = category_scale(
            records.iter().map(Record::category),
            layout.horizontal_range(),
            spec.padding,
        );

        let bars = match y_scale {
            Some(y_scale) => StackedBarMarkSpec::new(&band, y_scale, &spec.palette)
                .with_opacity(spec.bar_opacity)
                .with_selected(spec.selected.as_deref())
                .marks(records, &stacked),
            None => Vec::new(),
        };

        let value_axis = Axis::value_axis(
            y_scale.as_ref(),
            layout.plot,
            spec.value_tick_count,
            spec.value_axis,
        );
        let category_axis = Axis::category_axis(&band, layout.plot, spec.category_axis);

        tracing::debug!(
            records = records.len(),
            series = series_keys.len(),
            bars = bars.len(),
            ?domain,
            "computed stacked bar chart"
        );

        Ok(Self {
            records,
            layout,
            series_keys,
            stacked,
            domain,
            value_scale: y_scale,
            category_scale: band,
            bars,
            value_axis,
            category_axis,
            tooltip_offset: spec.tooltip_offset,
        })
    }

    /// Returns the records this chart was computed from.
    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    /// Returns the bar under `point`, preferring the last painted one.
    ///
    /// Zero-height bars and the gaps between bands never hit.
    pub fn hit_test(&self, point: Point) -> Option<BarHit> {
        self.bars
            .iter()
            .rev()
            .find(|bar| bar.rect.height() > 0.0 && bar.rect.contains(point))
            .map(|bar| BarHit {
                series: bar.series,
                record: bar.record,
            })
    }

    /// Returns the originating record of a hit (the click payload).
    pub fn record(&self, hit: BarHit) -> Option<&'a Record> {
        self.records.get(hit.record)
    }

    /// Returns the series name of a hit.
    pub fn series_key(&self, hit: BarHit) -> Option<&str> {
        self.series_keys.get(hit.series).map(String::as_str)
    }

    /// Resolves a click at `point` to the record under it.
    pub fn click(&self, point: Point) -> Option<&'a Record> {
        self.hit_test(point).and_then(|hit| self.record(hit))
    }
}
