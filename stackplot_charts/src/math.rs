// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounding and logarithms for `f64`, backed by `std` when available and `libm` otherwise.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("stackplot_charts requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
mod backend {
    pub(crate) fn floor(x: f64) -> f64 {
        x.floor()
    }

    pub(crate) fn ceil(x: f64) -> f64 {
        x.ceil()
    }

    pub(crate) fn round(x: f64) -> f64 {
        x.round()
    }

    pub(crate) fn log10(x: f64) -> f64 {
        x.log10()
    }

    pub(crate) fn powf(x: f64, n: f64) -> f64 {
        x.powf(n)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod backend {
    pub(crate) fn floor(x: f64) -> f64 {
        libm::floor(x)
    }

    pub(crate) fn ceil(x: f64) -> f64 {
        libm::ceil(x)
    }

    pub(crate) fn round(x: f64) -> f64 {
        libm::round(x)
    }

    pub(crate) fn log10(x: f64) -> f64 {
        libm::log10(x)
    }

    pub(crate) fn powf(x: f64, n: f64) -> f64 {
        libm::pow(x, n)
    }
}

pub(crate) use backend::{ceil, floor, log10, round};

/// Returns the power of ten at or below `x` (`x` must be positive and finite).
pub(crate) fn decade(x: f64) -> f64 {
    backend::powf(10.0, floor(log10(x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_of_values() {
        assert_eq!(decade(1.3), 1.0);
        assert_eq!(decade(250.0), 100.0);
        assert!((decade(0.07) - 0.01).abs() < 1e-15, "sub-unit decade");
    }

    #[test]
    fn round_is_half_away_from_zero() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(floor(-0.5), -1.0);
        assert_eq!(ceil(0.1), 1.0);
    }
}
