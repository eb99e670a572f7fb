//! Climate appropriateness of garments and pairings.
//!
//! Independent of the color math: warmth tags come from garment type, not
//! color temperature. Results compose with the compatibility engine only in
//! the pairing layer.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::WardrobeError;

/// Temperatures at or above this reject warm garments. Degrees Fahrenheit.
pub const HOT_CUTOFF: f32 = 70.0;
/// Temperatures at or below this reject light garments.
pub const COLD_CUTOFF: f32 = 40.0;
/// Score for a pairing that fights the weather.
pub const CLIMATE_PENALTY_SCORE: f32 = 40.0;
/// Score when no usable temperature was supplied.
pub const CLIMATE_NEUTRAL_SCORE: f32 = 50.0;
/// Score for a pairing with no climate objection.
pub const CLIMATE_GOOD_SCORE: f32 = 100.0;

/// Coarse warmth category, fixed at garment creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warmth {
    Light,
    Medium,
    Warm,
}

/// Maps a garment type tag to its warmth. Total: unknown tags count as
/// light. Matching ignores ASCII case.
pub fn warmth_of(garment_type: &str) -> Warmth {
    if garment_type.eq_ignore_ascii_case("outerwear") {
        Warmth::Warm
    } else if garment_type.eq_ignore_ascii_case("top") {
        Warmth::Medium
    } else {
        Warmth::Light
    }
}

/// A wardrobe item: a label, a warmth tag, and its extracted dominant
/// color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garment {
    pub label: String,
    pub warmth: Warmth,
    pub color: Rgb,
}

impl Garment {
    /// Creates a garment, deriving warmth from the type tag via
    /// [`warmth_of`].
    pub fn new(garment_type: &str, label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            warmth: warmth_of(garment_type),
            color,
        }
    }
}

/// Whether a garment suits the temperature.
///
/// `None` means no temperature was specified and nothing is filtered.
/// Boundaries are inclusive: exactly 70 already rejects warm garments and
/// exactly 40 already rejects light ones.
pub fn is_climate_appropriate(garment: &Garment, temperature: Option<f32>) -> bool {
    let Some(t) = temperature else {
        return true;
    };
    if t >= HOT_CUTOFF && garment.warmth == Warmth::Warm {
        return false;
    }
    if t <= COLD_CUTOFF && garment.warmth == Warmth::Light {
        return false;
    }
    true
}

/// Scores how well a pairing suits the temperature.
///
/// No temperature (or a NaN one) scores neutral; a warm garment in hot
/// weather or a light garment in cold weather takes the penalty; anything
/// else scores full marks.
pub fn climate_score(temperature: Option<f32>, a: &Garment, b: &Garment) -> f32 {
    let Some(t) = temperature else {
        return CLIMATE_NEUTRAL_SCORE;
    };
    if t.is_nan() {
        return CLIMATE_NEUTRAL_SCORE;
    }
    let either_is = |w: Warmth| a.warmth == w || b.warmth == w;
    if t >= HOT_CUTOFF && either_is(Warmth::Warm) {
        return CLIMATE_PENALTY_SCORE;
    }
    if t <= COLD_CUTOFF && either_is(Warmth::Light) {
        return CLIMATE_PENALTY_SCORE;
    }
    CLIMATE_GOOD_SCORE
}

/// Climate verdict for a pairing: a score in `[0, 100]` and whether either
/// garment would have been filtered out on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateVerdict {
    pub score: f32,
    pub filtered_out: bool,
}

/// Assesses a pairing against the temperature.
pub fn assess(temperature: Option<f32>, a: &Garment, b: &Garment) -> ClimateVerdict {
    ClimateVerdict {
        score: climate_score(temperature, a, b),
        filtered_out: !is_climate_appropriate(a, temperature)
            || !is_climate_appropriate(b, temperature),
    }
}

/// Garments that pass the climate filter, in wardrobe order.
///
/// Fewer than two survivors is reported as
/// [`WardrobeError::InsufficientClimateMatches`]; callers typically retry
/// against the unfiltered wardrobe and surface an advisory message instead
/// of failing outright.
pub fn climate_candidates<'a>(
    wardrobe: &'a [Garment],
    temperature: Option<f32>,
) -> Result<Vec<&'a Garment>, WardrobeError> {
    let passing: Vec<&Garment> = wardrobe
        .iter()
        .filter(|g| is_climate_appropriate(g, temperature))
        .collect();
    if passing.len() < 2 {
        return Err(WardrobeError::InsufficientClimateMatches {
            matched: passing.len(),
        });
    }
    Ok(passing)
}

// ============================================================================
// Tests
// ============================================================================
