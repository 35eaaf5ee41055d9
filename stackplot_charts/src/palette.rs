// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series fill colors.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::stacked_bar_chart::ConfigError;

/// A fixed, non-empty list of series colors, assigned by stack position.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// The default series colors, bottom series first.
    pub const DEFAULT: [Color; 5] = [
        Color::from_rgb8(0x9a, 0x9a, 0x9a),
        Color::from_rgb8(0xe3, 0x9b, 0x3a),
        Color::from_rgb8(0x66, 0x89, 0xc6),
        Color::from_rgb8(0x9a, 0x6f, 0xb0),
        Color::from_rgb8(0xa5, 0x32, 0x53),
    ];

    /// Creates a palette; at least one color is required.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self, ConfigError> {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Returns the color for the series at stack position `index`.
    ///
    /// Indices past the end wrap around: `colors[index % len]`.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Returns the number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: Self::DEFAULT.to_vec(),
        }
    }
}
