// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value and category scales.
//!
//! Both scales are plain values: they are rebuilt whenever the data or the pixel extent
//! changes, and hold no state beyond their configuration.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::math;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps every value to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns round tick values (1, 2 or 5 times a power of ten) that lie inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    /// Returns the spacing between the values produced by [`ScaleLinear::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let span = (self.domain.1 - self.domain.0).abs();
        nice_step(span / count as f64)
    }

    /// Extends the domain outwards to the nearest tick step, so the axis starts and ends on a tick.
    pub fn nice(self, count: usize) -> Self {
        let step = self.tick_step(count);
        if step == 0.0 {
            return self;
        }
        let (mut d0, mut d1) = self.domain;
        let flipped = d0 > d1;
        if flipped {
            core::mem::swap(&mut d0, &mut d1);
        }
        let lo = math::floor(d0 / step) * step;
        let hi = math::ceil(d1 / step) * step;
        let domain = if flipped { (hi, lo) } else { (lo, hi) };
        Self { domain, ..self }
    }
}

/// Creates the value scale for a stacked chart.
///
/// `domain.0` maps to `pixel_range.1` and `domain.1` to `pixel_range.0`, so with a
/// top-to-bottom `pixel_range` of `(top, bottom)` the value `0` sits at the bottom.
pub fn value_scale(domain: (f64, f64), pixel_range: (f64, f64)) -> ScaleLinear {
    ScaleLinear::new(domain, (pixel_range.1, pixel_range.0))
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    // Sub-unit steps are applied as a division by the inverse step so 0.1 * 3 prints as 0.3.
    let inv = if step < 1.0 { math::round(1.0 / step) } else { 0.0 };
    let (start, stop) = if inv > 0.0 {
        (math::ceil(min * inv), math::floor(max * inv))
    } else {
        (math::ceil(min / step), math::floor(max / step))
    };

    let n_f = stop - start;
    if !n_f.is_finite() || n_f < 0.0 {
        return Vec::new();
    }
    let n_f = n_f.min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    let n = n_f as u64;
    (0..=n)
        .map(|i| {
            let k = start + i as f64;
            if inv > 0.0 { k / inv } else { k * step }
        })
        .collect()
}

// Rounding thresholds for the step mantissa: the geometric means of 1-2, 2-5 and 5-10.
const SQRT_50: f64 = 7.0710678118654755;
const SQRT_10: f64 = 3.1622776601683795;
const SQRT_2: f64 = core::f64::consts::SQRT_2;

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let decade = math::decade(step);
    let mantissa = step / decade;
    let multiple = match mantissa {
        m if m >= SQRT_50 => 10.0,
        m if m >= SQRT_10 => 5.0,
        m if m >= SQRT_2 => 2.0,
        _ => 1.0,
    };
    multiple * decade
}

/// A discrete band scale: `count` equal-width bands with padding expressed in steps.
///
/// A step is the distance between the starts of two adjacent bands. Inner padding is the gap
/// between bands; outer padding is the gap before the first and after the last band. Any slack
/// is split evenly on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`, without padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding as fractions of a step.
    ///
    /// Inner padding is clamped to `[0, 1]`; outer padding to `>= 0`.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Uses the same padding fraction for the inner gaps and both outer edges.
    pub fn with_uniform_padding(self, padding: f64) -> Self {
        self.with_padding(padding, padding)
    }

    /// Returns the distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        let span = (r1 - r0).abs();
        span / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0)
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the start position of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let span = (r1 - r0).abs();
        let step = self.step();
        let n = self.count as f64;
        let start = if r1 >= r0 { r0 } else { r1 };
        let slack = (span - step * (n - self.padding_inner)) * 0.5;
        start + slack + step * index as f64
    }
}

/// A band scale keyed by category id, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleCategory {
    categories: Vec<String>,
    band: ScaleBand,
}

impl ScaleCategory {
    /// Creates a category scale; `categories` order is band order.
    pub fn new(categories: Vec<String>, band: ScaleBand) -> Self {
        Self { categories, band }
    }

    /// Returns the band index of `category` (its first occurrence).
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// Returns the start position of the band for `category`.
    pub fn offset(&self, category: &str) -> Option<f64> {
        self.index_of(category).map(|i| self.band.x(i))
    }

    /// Returns the uniform band width.
    pub fn band_width(&self) -> f64 {
        self.band.band_width()
    }

    /// Returns the distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.band.step()
    }

    /// Returns the category ids in band order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the underlying index-based band scale.
    pub fn band(&self) -> ScaleBand {
        self.band
    }
}

/// Creates a category scale with equal bands over `pixel_range`.
///
/// `padding` is a fraction of a step applied to the gaps between bands and to both outer edges.
/// A repeated category id shares the band of its first occurrence.
pub fn category_scale(
    categories: impl IntoIterator<Item = impl Into<String>>,
    pixel_range: (f64, f64),
    padding: f64,
) -> ScaleCategory {
    let mut unique: Vec<String> = Vec::new();
    for category in categories {
        let category = category.into();
        if !unique.contains(&category) {
            unique.push(category);
        }
    }
    let categories = unique;
    let band = ScaleBand::new(pixel_range, categories.len()).with_uniform_padding(padding);
    ScaleCategory::new(categories, band)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn value_scale_is_inverted() {
        let s = value_scale((0.0, 8.0), (0.0, 200.0));
        assert!((s.map(0.0) - 200.0).abs() < 1e-9);
        assert!((s.map(8.0) - 0.0).abs() < 1e-9);
        assert!((s.map(4.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_the_bottom() {
        let s = value_scale((0.0, 0.0), (10.0, 110.0));
        assert_eq!(s.map(0.0), 110.0);
        assert_eq!(s.map(5.0), 110.0);
    }

    #[test]
    fn ticks_stay_inside_the_domain() {
        let s = ScaleLinear::new((0.0, 8.0), (100.0, 0.0));
        assert_eq!(s.ticks(5), [0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(s.tick_step(5), 2.0);

        let s = ScaleLinear::new((0.0, 13.0), (100.0, 0.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(13.0));
        assert!(ticks.iter().all(|t| (0.0..=13.0).contains(t)));
    }

    #[test]
    fn tick_count_is_an_upper_bound_not_a_floor() {
        let s = ScaleLinear::new((0.0, 72.0), (100.0, 0.0));
        assert_eq!(s.ticks(10), [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);

        let s = ScaleLinear::new((0.0, 33.0), (100.0, 0.0));
        assert_eq!(s.ticks(10), [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(s.tick_step(10), 5.0);

        let s = ScaleLinear::new((0.0, 14.5), (100.0, 0.0));
        assert_eq!(s.ticks(10).len(), 8, "steps of 2 up to 14");
    }

    #[test]
    fn fractional_ticks_are_exact_decimals() {
        let s = ScaleLinear::new((0.0, 1.0), (100.0, 0.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(ticks[7], 0.7);
    }

    #[test]
    fn nice_extends_to_the_next_step() {
        let s = ScaleLinear::new((0.0, 13.0), (100.0, 0.0)).nice(5);
        assert_eq!(s.domain(), (0.0, 14.0));
    }

    #[test]
    fn band_widths_and_gaps_fill_the_range() {
        for (n, p) in [(1_usize, 0.05), (2, 0.05), (7, 0.2), (10, 0.0)] {
            let band = ScaleBand::new((0.0, 500.0), n).with_uniform_padding(p);
            let step = band.step();
            let bw = band.band_width();
            let outer = band.x(0);
            let total = n as f64 * bw + (n - 1) as f64 * p * step + 2.0 * outer;
            assert!((total - 500.0).abs() < 1e-9, "n={n} p={p} total={total}");
            assert!((outer - p * step).abs() < 1e-9, "outer gap is one padding step");
            for i in 1..n {
                assert!(
                    (band.x(i) - band.x(i - 1) - step).abs() < 1e-9,
                    "bands are evenly spaced"
                );
            }
        }
    }

    #[test]
    fn category_scale_keeps_input_order() {
        let s = category_scale(["A", "B", "C"], (0.0, 300.0), 0.0);
        assert_eq!(s.offset("A"), Some(0.0));
        assert_eq!(s.offset("B"), Some(100.0));
        assert_eq!(s.offset("C"), Some(200.0));
        assert_eq!(s.offset("D"), None);
        assert!((s.band_width() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_band_scale_has_no_extent_issues() {
        let s = category_scale(Vec::<String>::new(), (0.0, 300.0), 0.05);
        assert!(s.band_width().is_finite());
        assert_eq!(s.index_of("A"), None);
    }

    #[test]
    fn repeated_categories_share_a_band() {
        let s = category_scale(["A", "B", "A"], (0.0, 200.0), 0.0);
        assert_eq!(s.categories().len(), 2);
        assert_eq!(s.offset("A"), Some(0.0));
        assert_eq!(s.offset("B"), Some(100.0));
    }
}
