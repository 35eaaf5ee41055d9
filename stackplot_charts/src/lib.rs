// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked bar chart building blocks on top of `stackplot_transforms`.
//!
//! This crate turns stacked records into drawable data:
//! - **Scales** map cumulative values and category ids into pixel coordinates.
//! - **Bars and axes** are plain geometry (`kurbo` shapes plus labels), ready for any renderer.
//! - **Interaction** helpers map pointer positions back to the originating record.
//!
//! Drawing is out of scope: a renderer walks [`StackedBarChart::bars`] and the two axes and
//! paints them however it likes.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod axis;
mod format;
mod interaction;
mod layout;
mod math;
mod palette;
mod scale;
mod stacked_bar_chart;
mod stacked_bar_mark;
#[cfg(test)]
mod stacked_tests;
mod tooltip;

pub use axis::{Axis, AxisOrient, AxisStyle, AxisTick, TextAnchor, TextBaseline};
pub use format::{format_tick, format_value};
pub use interaction::{BarHit, HoverState};
pub use layout::{ChartLayout, Margins, Size};
pub use palette::Palette;
pub use scale::{ScaleBand, ScaleCategory, ScaleLinear, category_scale, value_scale};
pub use stacked_bar_chart::{ChartError, ConfigError, StackedBarChart, StackedBarChartSpec};
pub use stacked_bar_mark::{BarRect, StackedBarMarkSpec};
pub use tooltip::{Tooltip, TooltipLine};
