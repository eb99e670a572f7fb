//! Best-match pairing across a wardrobe.
//!
//! The composition layer over the compatibility engine and the climate
//! advisor: filter the wardrobe for the weather, take the first surviving
//! garment as the base, rank the rest by raw harmony plus contrast, and
//! report on the winner.

use serde::{Deserialize, Serialize};

use crate::climate::{ClimateVerdict, Garment, assess, climate_candidates};
use crate::compat::{PairScores, ScoringMode, Verdict, classify_with, score};
use crate::error::WardrobeError;

/// The outcome of pairing a wardrobe, ready for display or JSON transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingReport {
    pub base_label: String,
    pub partner_label: String,
    pub verdict: Verdict,
    /// Display-ready harmony score, clamped to `[0, 100]`.
    pub harmony_score: f32,
    /// Display-ready contrast score, clamped to `[0, 100]`.
    pub contrast_score: f32,
    pub climate: ClimateVerdict,
    /// True when the climate filter left fewer than two garments and the
    /// full wardrobe was used instead.
    pub climate_relaxed: bool,
}

impl PairingReport {
    /// Serializes the report to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the report to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a report from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Picks the best partner for the first climate-appropriate garment.
///
/// When the climate filter leaves fewer than two garments, the whole
/// wardrobe is used instead and the report notes the relaxation. Fewer
/// than two garments overall is [`WardrobeError::WardrobeTooSmall`].
///
/// # Example
///
/// ```
/// use wardrobe_color::{Garment, Rgb, ScoringMode, pair_wardrobe};
///
/// let wardrobe = vec![
///     Garment::new("top", "crimson tee", Rgb::new(220, 20, 60)),
///     Garment::new("bottom", "navy chinos", Rgb::new(20, 30, 90)),
///     Garment::new("outerwear", "olive jacket", Rgb::new(90, 100, 40)),
/// ];
///
/// let report = pair_wardrobe(&wardrobe, ScoringMode::Default, Some(55.0)).unwrap();
/// assert_eq!(report.base_label, "crimson tee");
/// ```
pub fn pair_wardrobe(
    wardrobe: &[Garment],
    mode: ScoringMode,
    temperature: Option<f32>,
) -> Result<PairingReport, WardrobeError> {
    if wardrobe.len() < 2 {
        return Err(WardrobeError::WardrobeTooSmall {
            len: wardrobe.len(),
        });
    }

    let (pool, climate_relaxed) = match climate_candidates(wardrobe, temperature) {
        Ok(pool) => (pool, false),
        Err(WardrobeError::InsufficientClimateMatches { .. }) => {
            (wardrobe.iter().collect(), true)
        }
        Err(other) => return Err(other),
    };

    let base = pool[0];
    let base_hsl = base.color.to_hsl();

    let mut best: Option<(&Garment, PairScores)> = None;
    for candidate in &pool[1..] {
        let scores = score(base_hsl, candidate.color.to_hsl(), mode);
        let ranked = scores.harmony + scores.contrast;
        let beats_current = best.map_or(true, |(_, held)| ranked > held.harmony + held.contrast);
        if beats_current {
            best = Some((*candidate, scores));
        }
    }
    let Some((partner, raw_scores)) = best else {
        return Err(WardrobeError::WardrobeTooSmall {
            len: wardrobe.len(),
        });
    };

    let display = raw_scores.clamped();
    Ok(PairingReport {
        base_label: base.label.clone(),
        partner_label: partner.label.clone(),
        verdict: classify_with(base_hsl, partner.color.to_hsl(), mode),
        harmony_score: display.harmony,
        contrast_score: display.contrast,
        climate: assess(temperature, base, partner),
        climate_relaxed,
    })
}

// ============================================================================
// Tests
// ============================================================================
