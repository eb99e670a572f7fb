//! Pair compatibility: clash detection, harmony classification, and scoring.
//!
//! [`classify`] runs an ordered chain of clash rules; the first rule that
//! matches wins and produces a [`ClashFinding`]. Only when no rule fires
//! does the pair fall through to a [`HarmonyFinding`] bucketed by hue
//! distance. Exactly one of the two comes back per comparison.

use serde::{Deserialize, Serialize};

use crate::color::Hsl;

// ============================================================================
// Thresholds
// ============================================================================

/// Hue separation above which two saturated colors start to vibrate.
pub const VIBRATING_HUE_GAP: f32 = 150.0;
/// Both colors must exceed this saturation for the vibrating rule to fire.
pub const VIBRATING_SATURATION_FLOOR: f32 = 0.6;
/// Lightness gap under which shapes blend together.
pub const VALUE_DEAD_END_GAP: f32 = 0.1;
/// Saturation gap above which one garment reads as washed out.
pub const SATURATION_CONFLICT_GAP: f32 = 0.5;
/// Lower edge of the near-miss window, exclusive.
pub const NEAR_MISS_MIN_GAP: f32 = 5.0;
/// Upper edge of the near-miss window, exclusive.
pub const NEAR_MISS_MAX_GAP: f32 = 25.0;
/// Saturations closer than this make a near-miss feel accidental.
pub const NEAR_MISS_SATURATION_GAP: f32 = 0.2;
/// Harmony bucket edge: above this gap a pair reads as complementary.
pub const COMPLEMENTARY_HUE_GAP: f32 = 150.0;
/// Harmony bucket edge: above this gap a pair reads as high contrast.
pub const HIGH_CONTRAST_HUE_GAP: f32 = 60.0;

/// Plain absolute hue difference in degrees.
///
/// Not the circular wrap-around distance: every threshold in this module is
/// calibrated against the plain difference of hues already in `[0, 360)`.
pub fn hue_distance(a: Hsl, b: Hsl) -> f32 {
    (a.h - b.h).abs()
}

// ============================================================================
// Clash findings
// ============================================================================

/// The closed set of recognized pairing failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClashKind {
    VibratingComplements,
    ValueDeadEnd,
    SaturationConflict,
    NearMissAnalogousTension,
}

impl ClashKind {
    /// Why the combination fails.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::VibratingComplements => {
                "Simultaneous Contrast: Opposites compete for photoreceptors."
            }
            Self::ValueDeadEnd => "Low Luminance Contrast: Similar brightness levels.",
            Self::SaturationConflict => "Pure color paired with muted/earth tone.",
            Self::NearMissAnalogousTension => "Too close for contrast, too far to match.",
        }
    }

    /// What the viewer sees.
    pub fn effect(&self) -> &'static str {
        match self {
            Self::VibratingComplements => {
                "Edges may glow or visually vibrate, causing eye strain."
            }
            Self::ValueDeadEnd => "Shapes visually blend together.",
            Self::SaturationConflict => "One garment may appear washed out or dirty.",
            Self::NearMissAnalogousTension => "Feels slightly accidental.",
        }
    }
}

/// A named, explained failure mode for a color pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClashFinding {
    pub kind: ClashKind,
    pub reason: String,
    pub effect: String,
}

impl ClashFinding {
    pub fn new(kind: ClashKind) -> Self {
        Self {
            kind,
            reason: kind.reason().to_owned(),
            effect: kind.effect().to_owned(),
        }
    }
}

// ============================================================================
// Harmony findings
// ============================================================================

/// Harmony bucket for pairs that survive the clash chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarmonyCategory {
    BalancedComplementary,
    TriadicHighContrast,
    AnalogousMonochromatic,
}

impl HarmonyCategory {
    /// One-line explanation of why the pairing works.
    pub fn description(&self) -> &'static str {
        match self {
            Self::BalancedComplementary => {
                "Balanced Complementary: Opposites create strong but intentional contrast."
            }
            Self::TriadicHighContrast => {
                "Triadic/High Contrast Harmony: Distinct but balanced hues."
            }
            Self::AnalogousMonochromatic => {
                "Analogous/Monochromatic Harmony: Related hues create cohesion."
            }
        }
    }
}

/// A harmonious pairing with its scores attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonyFinding {
    pub category: HarmonyCategory,
    pub harmony_score: f32,
    pub contrast_score: f32,
}

/// The outcome of comparing two colors: a clash or a harmony, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Clash(ClashFinding),
    Harmony(HarmonyFinding),
}

// ============================================================================
// Scoring
// ============================================================================

/// Styling mode that picks the harmony formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Rewards hues that sit close together.
    Minimalist,
    /// Rewards hues that sit far apart.
    Bold,
    /// Rewards matched saturation regardless of hue.
    Neutral,
    /// Rewards a 90-degree hue split.
    Default,
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::Default
    }
}

/// Raw harmony and contrast scores for a pair.
///
/// Neither value is clamped; the formulas can run negative or past 100.
/// Presentation layers call [`PairScores::clamped`] before showing them on
/// a meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairScores {
    pub harmony: f32,
    pub contrast: f32,
}

impl PairScores {
    /// Limits both scores to the `[0, 100]` display range.
    pub fn clamped(self) -> Self {
        Self {
            harmony: self.harmony.clamp(0.0, 100.0),
            contrast: self.contrast.clamp(0.0, 100.0),
        }
    }
}

/// Scores a pair under the given styling mode. No clamping happens here.
pub fn score(a: Hsl, b: Hsl, mode: ScoringMode) -> PairScores {
    let hue_gap = hue_distance(a, b);
    let harmony = match mode {
        ScoringMode::Minimalist => 100.0 - hue_gap,
        ScoringMode::Bold => hue_gap,
        ScoringMode::Neutral => 100.0 - (a.s - b.s).abs() * 100.0,
        ScoringMode::Default => 100.0 - (90.0 - hue_gap).abs(),
    };
    PairScores {
        harmony,
        contrast: (a.l - b.l).abs() * 100.0,
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classifies a pair with default-mode scores embedded in any harmony
/// finding. See [`classify_with`] for an explicit mode.
pub fn classify(a: Hsl, b: Hsl) -> Verdict {
    classify_with(a, b, ScoringMode::Default)
}

/// Runs the clash chain in priority order, then falls through to harmony.
pub fn classify_with(a: Hsl, b: Hsl, mode: ScoringMode) -> Verdict {
    let hue_gap = hue_distance(a, b);
    let lightness_gap = (a.l - b.l).abs();
    let saturation_gap = (a.s - b.s).abs();

    if hue_gap > VIBRATING_HUE_GAP
        && a.s > VIBRATING_SATURATION_FLOOR
        && b.s > VIBRATING_SATURATION_FLOOR
    {
        return Verdict::Clash(ClashFinding::new(ClashKind::VibratingComplements));
    }
    if lightness_gap < VALUE_DEAD_END_GAP {
        return Verdict::Clash(ClashFinding::new(ClashKind::ValueDeadEnd));
    }
    if saturation_gap > SATURATION_CONFLICT_GAP {
        return Verdict::Clash(ClashFinding::new(ClashKind::SaturationConflict));
    }
    if hue_gap > NEAR_MISS_MIN_GAP
        && hue_gap < NEAR_MISS_MAX_GAP
        && saturation_gap < NEAR_MISS_SATURATION_GAP
    {
        return Verdict::Clash(ClashFinding::new(ClashKind::NearMissAnalogousTension));
    }

    let category = if hue_gap > COMPLEMENTARY_HUE_GAP {
        HarmonyCategory::BalancedComplementary
    } else if hue_gap > HIGH_CONTRAST_HUE_GAP {
        HarmonyCategory::TriadicHighContrast
    } else {
        HarmonyCategory::AnalogousMonochromatic
    };
    let scores = score(a, b, mode);
    Verdict::Harmony(HarmonyFinding {
        category,
        harmony_score: scores.harmony,
        contrast_score: scores.contrast,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn hsl(h: f32, s: f32, l: f32) -> Hsl {
        Hsl::new(h, s, l).unwrap()
    }

    fn clash_kind(verdict: Verdict) -> ClashKind {
        match verdict {
            Verdict::Clash(finding) => finding.kind,
            Verdict::Harmony(found) => panic!("expected a clash, got {found:?}"),
        }
    }

    fn harmony_category(verdict: Verdict) -> HarmonyCategory {
        match verdict {
            Verdict::Harmony(finding) => finding.category,
            Verdict::Clash(clash) => panic!("expected harmony, got {clash:?}"),
        }
    }

    #[test]
    fn opposite_saturated_hues_vibrate() {
        let verdict = classify(hsl(10.0, 0.9, 0.5), hsl(190.0, 0.8, 0.5));
        assert_eq!(clash_kind(verdict), ClashKind::VibratingComplements);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Hue gap 160 with both saturations above the floor matches rule 1,
        // and the 0.05 lightness gap would also match rule 2. Rule 1 must
        // be the one reported.
        let verdict = classify(hsl(0.0, 0.8, 0.5), hsl(160.0, 0.7, 0.55));
        assert_eq!(clash_kind(verdict), ClashKind::VibratingComplements);
    }

    #[test]
    fn similar_lightness_is_a_value_dead_end() {
        let verdict = classify(hsl(0.0, 0.3, 0.5), hsl(40.0, 0.35, 0.55));
        assert_eq!(clash_kind(verdict), ClashKind::ValueDeadEnd);
    }

    #[test]
    fn wide_saturation_gap_conflicts() {
        let verdict = classify(hsl(0.0, 0.9, 0.2), hsl(30.0, 0.2, 0.6));
        assert_eq!(clash_kind(verdict), ClashKind::SaturationConflict);
    }

    #[test]
    fn close_but_unequal_hues_are_a_near_miss() {
        let verdict = classify(hsl(100.0, 0.5, 0.3), hsl(115.0, 0.6, 0.6));
        assert_eq!(clash_kind(verdict), ClashKind::NearMissAnalogousTension);
    }

    #[test]
    fn clash_findings_carry_display_text() {
        let finding = ClashFinding::new(ClashKind::ValueDeadEnd);
        assert!(finding.reason.contains("Luminance"));
        assert!(finding.effect.contains("blend"));
    }

    #[test]
    fn harmony_buckets_by_hue_distance() {
        // Saturations kept moderate so rule 1 stays quiet; lightness and
        // saturation gaps kept clear of rules 2-4.
        let complementary = classify(hsl(0.0, 0.4, 0.3), hsl(180.0, 0.5, 0.7));
        assert_eq!(
            harmony_category(complementary),
            HarmonyCategory::BalancedComplementary
        );

        let triadic = classify(hsl(0.0, 0.4, 0.3), hsl(100.0, 0.5, 0.7));
        assert_eq!(
            harmony_category(triadic),
            HarmonyCategory::TriadicHighContrast
        );

        let analogous = classify(hsl(0.0, 0.4, 0.3), hsl(2.0, 0.5, 0.7));
        assert_eq!(
            harmony_category(analogous),
            HarmonyCategory::AnalogousMonochromatic
        );
    }

    #[test]
    fn score_modes_return_raw_values() {
        let a = hsl(0.0, 0.9, 0.2);
        let b = hsl(120.0, 0.4, 0.8);

        let minimalist = score(a, b, ScoringMode::Minimalist);
        assert!((minimalist.harmony - (-20.0)).abs() < EPS);

        let bold = score(a, b, ScoringMode::Bold);
        assert!((bold.harmony - 120.0).abs() < EPS);

        let neutral = score(a, b, ScoringMode::Neutral);
        assert!((neutral.harmony - 50.0).abs() < EPS);

        let default = score(a, b, ScoringMode::Default);
        assert!((default.harmony - 70.0).abs() < EPS);

        // Contrast is mode-independent.
        for scores in [minimalist, bold, neutral, default] {
            assert!((scores.contrast - 60.0).abs() < EPS);
        }
    }

    #[test]
    fn clamped_limits_scores_to_display_range() {
        let clamped = PairScores {
            harmony: -20.0,
            contrast: 160.0,
        }
        .clamped();
        assert_eq!(clamped.harmony, 0.0);
        assert_eq!(clamped.contrast, 100.0);
    }

    #[test]
    fn classify_embeds_default_mode_scores() {
        let a = hsl(0.0, 0.4, 0.3);
        let b = hsl(100.0, 0.5, 0.7);
        let expected = score(a, b, ScoringMode::Default);

        match classify(a, b) {
            Verdict::Harmony(finding) => {
                assert!((finding.harmony_score - expected.harmony).abs() < EPS);
                assert!((finding.contrast_score - expected.contrast).abs() < EPS);
            }
            Verdict::Clash(clash) => panic!("expected harmony, got {clash:?}"),
        }
    }
}
