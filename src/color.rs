//! RGB and HSL value types with bidirectional conversion.
//!
//! Every other module goes through [`Rgb::to_hsl`] and [`Hsl::to_rgb`] for
//! color space math; nothing else in the crate derives hue, saturation, or
//! lightness on its own.

use serde::{Deserialize, Serialize};

use crate::error::WardrobeError;

// ============================================================================
// Rgb
// ============================================================================

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a new RGB color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Difference between the strongest and weakest channel.
    ///
    /// Near-gray pixels have a small spread; the extractor uses this to
    /// decide which pixels count toward a saturated average.
    pub fn channel_spread(&self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }

    /// Converts to HSL.
    ///
    /// Achromatic colors (all channels equal) report a hue and saturation
    /// of zero. The result round-trips through [`Hsl::to_rgb`] within ±1
    /// per channel.
    ///
    /// # Example
    ///
    /// ```
    /// use wardrobe_color::Rgb;
    ///
    /// let hsl = Rgb::new(255, 0, 0).to_hsl();
    /// assert_eq!(hsl.h, 0.0);
    /// assert_eq!(hsl.s, 1.0);
    /// assert_eq!(hsl.l, 0.5);
    /// ```
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, reported as 0.
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: (h * 60.0).rem_euclid(360.0),
            s,
            l,
        }
    }
}

// ============================================================================
// Hsl
// ============================================================================

/// An HSL color: hue in degrees `[0, 360)`, saturation and lightness in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Creates an HSL color.
    ///
    /// The hue may be any finite angle and is wrapped into `[0, 360)`.
    /// Saturation or lightness outside `[0, 1]` is rejected with
    /// [`WardrobeError::InvalidColorInput`].
    ///
    /// # Example
    ///
    /// ```
    /// use wardrobe_color::Hsl;
    ///
    /// let hsl = Hsl::new(370.0, 0.5, 0.5).unwrap();
    /// assert_eq!(hsl.h, 10.0);
    /// ```
    pub fn new(h: f32, s: f32, l: f32) -> Result<Self, WardrobeError> {
        if !h.is_finite() {
            return Err(WardrobeError::InvalidColorInput {
                component: "hue",
                value: h,
            });
        }
        for (component, value) in [("saturation", s), ("lightness", l)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(WardrobeError::InvalidColorInput { component, value });
            }
        }
        Ok(Self {
            h: h.rem_euclid(360.0),
            s,
            l,
        })
    }

    /// Converts to RGB using the chroma/sector method.
    ///
    /// The hue's 60° sector selects the base channel triple; each channel
    /// is then offset, scaled to `[0, 255]`, and rounded to the nearest
    /// integer.
    pub fn to_rgb(self) -> Rgb {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let x = c * (1.0 - ((self.h / 60.0) % 2.0 - 1.0).abs());
        let m = self.l - c / 2.0;

        let (r, g, b) = if self.h < 60.0 {
            (c, x, 0.0)
        } else if self.h < 120.0 {
            (x, c, 0.0)
        } else if self.h < 180.0 {
            (0.0, c, x)
        } else if self.h < 240.0 {
            (0.0, x, c)
        } else if self.h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
