// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for tick labels and tooltips.

extern crate alloc;

use alloc::string::String;

use crate::math;

/// Formats a tick value with just enough decimals for the tick `step`, grouping thousands.
///
/// `format_tick(2500.0, 500.0)` is `"2,500"`; `format_tick(0.3, 0.1)` is `"0.3"`.
pub fn format_tick(value: f64, step: f64) -> String {
    group_thousands(&fixed(value, decimals_for_step(step)))
}

/// Formats a value rounded to a whole number (halves round away from zero), without grouping.
pub fn format_value(value: f64) -> String {
    fixed(math::round(value), 0)
}

#[allow(clippy::cast_possible_truncation, reason = "clamped to [0, 20]")]
fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    math::ceil(-math::log10(step) - 1e-9).clamp(0.0, 20.0) as usize
}

fn fixed(value: f64, decimals: usize) -> String {
    let s = alloc::format!("{value:.decimals$}");
    // `-0.0` and values that round to zero print without a sign.
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => String::from(rest),
        _ => s,
    }
}

fn group_thousands(s: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = match digits.find('.') {
        Some(i) => digits.split_at(i),
        None => (digits, ""),
    };
    if int.len() <= 3 || !int.bytes().all(|b| b.is_ascii_digit()) {
        return String::from(s);
    }
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    out.push_str(sign);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(frac);
    out
}
