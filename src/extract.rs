//! Dominant color extraction from sampled pixel buffers.
//!
//! The extractor works on already-decoded pixels. Callers hand it a strided
//! sample of an image (see [`sample_image`]) and get one representative
//! color back; no decoding or resizing happens here.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::WardrobeError;

/// Channel spread below which a pixel counts as near-gray and is skipped
/// in [`ExtractMode::SaturatedAverage`].
pub const DEFAULT_SATURATION_THRESHOLD: u8 = 20;

/// Returned when no sampled pixel passes the saturation threshold.
pub const FALLBACK_GRAY: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};

/// How the extractor reduces a pixel buffer to one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtractMode {
    /// Average only pixels whose channel spread meets the threshold,
    /// falling back to [`FALLBACK_GRAY`] when none qualify.
    SaturatedAverage { threshold: u8 },
    /// Average every sampled pixel unconditionally.
    PlainAverage,
}

impl Default for ExtractMode {
    fn default() -> Self {
        Self::SaturatedAverage {
            threshold: DEFAULT_SATURATION_THRESHOLD,
        }
    }
}

/// Reduces sampled pixels to a single representative color.
///
/// In plain-average mode an empty buffer is an error
/// ([`WardrobeError::EmptyInput`]). In saturated-average mode an empty
/// buffer simply yields the gray fallback, the same as a buffer where every
/// pixel sits below the threshold.
///
/// # Example
///
/// ```
/// use wardrobe_color::{extract, ExtractMode, Rgb};
///
/// let swatch = vec![Rgb::new(200, 40, 40); 12];
/// let dominant = extract(&swatch, ExtractMode::default()).unwrap();
/// assert_eq!(dominant, Rgb::new(200, 40, 40));
/// ```
pub fn extract(pixels: &[Rgb], mode: ExtractMode) -> Result<Rgb, WardrobeError> {
    match mode {
        ExtractMode::PlainAverage => {
            average(pixels.iter().copied()).ok_or(WardrobeError::EmptyInput)
        }
        ExtractMode::SaturatedAverage { threshold } => Ok(average(
            pixels
                .iter()
                .copied()
                .filter(|p| p.channel_spread() >= threshold),
        )
        .unwrap_or(FALLBACK_GRAY)),
    }
}

/// Collects every `stride`-th pixel of an already-decoded image, skipping
/// fully transparent ones. A stride of 0 is treated as 1.
pub fn sample_image(image: &RgbaImage, stride: usize) -> Vec<Rgb> {
    image
        .pixels()
        .step_by(stride.max(1))
        .filter(|p| p[3] > 0)
        .map(|p| Rgb::new(p[0], p[1], p[2]))
        .collect()
}

/// Averages each channel, rounding to the nearest integer.
fn average(pixels: impl Iterator<Item = Rgb>) -> Option<Rgb> {
    let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
    for p in pixels {
        r += p.r as u64;
        g += p.g as u64;
        b += p.b as u64;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Rgb::new(
        round_div(r, count),
        round_div(g, count),
        round_div(b, count),
    ))
}

fn round_div(sum: u64, count: u64) -> u8 {
    (sum as f64 / count as f64).round() as u8
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn plain_average_covers_every_pixel() {
        let pixels = [Rgb::new(10, 20, 30), Rgb::new(20, 40, 50)];
        let result = extract(&pixels, ExtractMode::PlainAverage).unwrap();
        assert_eq!(result, Rgb::new(15, 30, 40));
    }

    #[test]
    fn plain_average_rounds_to_nearest() {
        let pixels = [Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)];
        let result = extract(&pixels, ExtractMode::PlainAverage).unwrap();
        assert_eq!(result, Rgb::new(2, 2, 2));
    }

    #[test]
    fn empty_buffer_is_an_error_in_plain_mode() {
        assert_eq!(
            extract(&[], ExtractMode::PlainAverage),
            Err(WardrobeError::EmptyInput)
        );
    }

    #[test]
    fn saturated_mode_skips_near_grays() {
        let pixels = [
            Rgb::new(200, 40, 40),    // spread 160, kept
            Rgb::new(100, 100, 100),  // spread 0, skipped
            Rgb::new(110, 100, 100),  // spread 10, skipped
        ];
        let result = extract(&pixels, ExtractMode::default()).unwrap();
        assert_eq!(result, Rgb::new(200, 40, 40));
    }

    #[test]
    fn spread_exactly_at_threshold_is_kept() {
        let pixels = [Rgb::new(120, 100, 100)]; // spread 20
        let result = extract(&pixels, ExtractMode::default()).unwrap();
        assert_eq!(result, Rgb::new(120, 100, 100));
    }

    #[test]
    fn fallback_gray_when_nothing_qualifies() {
        let grays = [Rgb::new(100, 100, 100), Rgb::new(90, 95, 92)];
        assert_eq!(extract(&grays, ExtractMode::default()), Ok(FALLBACK_GRAY));

        // Empty buffer in saturated mode is the same non-error fallback.
        assert_eq!(extract(&[], ExtractMode::default()), Ok(FALLBACK_GRAY));
    }

    #[test]
    fn sample_image_strides_and_skips_transparent() {
        let img = RgbaImage::from_fn(6, 1, |x, _| {
            let alpha = if x == 2 { 0 } else { 255 };
            Rgba([x as u8 * 10, 0, 0, alpha])
        });

        // Stride 2 visits x = 0, 2, 4; the transparent pixel at x = 2 drops.
        let sampled = sample_image(&img, 2);
        assert_eq!(sampled, vec![Rgb::new(0, 0, 0), Rgb::new(40, 0, 0)]);
    }

    #[test]
    fn zero_stride_is_treated_as_one() {
        let img = RgbaImage::from_pixel(3, 1, Rgba([50, 60, 70, 255]));
        assert_eq!(sample_image(&img, 0).len(), 3);
    }
}
