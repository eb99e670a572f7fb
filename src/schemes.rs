//! Classical color-wheel palette derivation.

use serde::{Deserialize, Serialize};

/// Which color-wheel relationship a palette expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteKind {
    Analogous,
    Complementary,
    Triadic,
}

impl PaletteKind {
    /// Hue offsets in degrees applied to the base hue.
    pub fn offsets(&self) -> &'static [f32] {
        match self {
            Self::Analogous => &[-30.0, 0.0, 30.0],
            Self::Complementary => &[0.0, 180.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
        }
    }

    /// One-line explanation of the relationship, suitable for display.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Analogous => "Adjacent hues 30 degrees apart; related colors create cohesion.",
            Self::Complementary => {
                "Opposite each other on the color wheel; high contrast and vibrant when paired."
            }
            Self::Triadic => "Three hues evenly spaced 120 degrees apart; distinct but balanced.",
        }
    }
}

/// A derived set of hues sharing one color-wheel relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub kind: PaletteKind,
    /// Hue degrees, each in `[0, 360)`, in the order the offsets define.
    pub hues: Vec<f32>,
    pub description: String,
}

/// Derives the three classical palettes from a base hue.
///
/// The base hue is rounded to the nearest whole degree first, and every
/// derived hue is wrapped into `[0, 360)`. The palettes always come back in
/// the order analogous, complementary, triadic.
///
/// # Example
///
/// ```
/// use wardrobe_color::generate_palettes;
///
/// let [analogous, complementary, triadic] = generate_palettes(0.0);
/// assert_eq!(analogous.hues, vec![330.0, 0.0, 30.0]);
/// assert_eq!(complementary.hues, vec![0.0, 180.0]);
/// assert_eq!(triadic.hues, vec![0.0, 120.0, 240.0]);
/// ```
pub fn generate_palettes(base_hue: f32) -> [Palette; 3] {
    let base = base_hue.round();
    [
        PaletteKind::Analogous,
        PaletteKind::Complementary,
        PaletteKind::Triadic,
    ]
    .map(|kind| Palette {
        kind,
        hues: kind
            .offsets()
            .iter()
            .map(|offset| (base + offset).rem_euclid(360.0))
            .collect(),
        description: kind.description().to_owned(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_zero_yields_documented_hues() {
        let [analogous, complementary, triadic] = generate_palettes(0.0);
        assert_eq!(analogous.hues, vec![330.0, 0.0, 30.0]);
        assert_eq!(complementary.hues, vec![0.0, 180.0]);
        assert_eq!(triadic.hues, vec![0.0, 120.0, 240.0]);
    }

    #[test]
    fn always_three_palettes_in_fixed_order() {
        let palettes = generate_palettes(137.0);
        assert_eq!(palettes[0].kind, PaletteKind::Analogous);
        assert_eq!(palettes[1].kind, PaletteKind::Complementary);
        assert_eq!(palettes[2].kind, PaletteKind::Triadic);
        assert_eq!(palettes[0].hues.len(), 3);
        assert_eq!(palettes[1].hues.len(), 2);
        assert_eq!(palettes[2].hues.len(), 3);
    }

    #[test]
    fn derived_hues_wrap_around_the_wheel() {
        let [analogous, _, triadic] = generate_palettes(350.0);
        assert_eq!(analogous.hues, vec![320.0, 350.0, 20.0]);
        assert_eq!(triadic.hues, vec![350.0, 110.0, 230.0]);
    }

    #[test]
    fn base_hue_is_rounded_to_whole_degrees() {
        let [_, complementary, _] = generate_palettes(199.6);
        assert_eq!(complementary.hues, vec![200.0, 20.0]);
    }

    #[test]
    fn hues_stay_in_range_for_any_base() {
        for base in (0..720).step_by(7) {
            for palette in generate_palettes(base as f32) {
                for hue in palette.hues {
                    assert!((0.0..360.0).contains(&hue), "hue {hue} for base {base}");
                }
            }
        }
    }

    #[test]
    fn descriptions_are_present() {
        for palette in generate_palettes(42.0) {
            assert!(!palette.description.is_empty());
        }
    }
}
