// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart layout: the view rectangle and the plot rectangle inside the margins.
//!
//! Axes are drawn in the margins, adjacent to the plot rectangle, so the scales built from
//! [`ChartLayout::plot`] line up with both bars and axis ticks.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot rectangle (for axes and labels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Space above the plot.
    pub top: f64,
    /// Space right of the plot.
    pub right: f64,
    /// Space below the plot (bottom axis).
    pub bottom: f64,
    /// Space left of the plot (left axis).
    pub left: f64,
}

impl Margins {
    /// Creates margins from explicit sides.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns `true` if every side is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(30.0, 30.0, 50.0, 50.0)
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds, with the origin at `(0, 0)`.
    pub view: Rect,
    /// The plot rectangle that bars are drawn into.
    pub plot: Rect,
}

impl ChartLayout {
    /// Places the plot rectangle inside `size` after removing `margins`.
    ///
    /// Negative sizes are taken by absolute value. If the margins do not fit, the plot collapses
    /// to zero width or height at its top-left corner instead of inverting.
    pub fn arrange(size: Size, margins: Margins) -> Self {
        let width = size.width.abs();
        let height = size.height.abs();
        let left = margins.left.max(0.0);
        let top = margins.top.max(0.0);
        let plot_w = (width - left - margins.right.max(0.0)).max(0.0);
        let plot_h = (height - top - margins.bottom.max(0.0)).max(0.0);

        Self {
            view: Rect::new(0.0, 0.0, width, height),
            plot: Rect::new(left, top, left + plot_w, top + plot_h),
        }
    }

    /// Returns the plot's vertical pixel extent as `(top, bottom)`.
    pub fn vertical_range(&self) -> (f64, f64) {
        (self.plot.y0, self.plot.y1)
    }

    /// Returns the plot's horizontal pixel extent as `(left, right)`.
    pub fn horizontal_range(&self) -> (f64, f64) {
        (self.plot.x0, self.plot.x1)
    }
}
