//! wardrobe-color: color relationship and outfit compatibility engine
//!
//! This crate provides the pure-computation core behind a set of color
//! exploration tools: RGB/HSL conversion, classical color-wheel palette
//! derivation, dominant-color extraction from sampled pixels, clash and
//! harmony classification for garment pairs, and climate-appropriateness
//! scoring. Everything is synchronous and free of shared state; image
//! decoding and rendering belong to the caller.
//!
//! # Example
//!
//! ```
//! use wardrobe_color::{Rgb, Verdict, classify, generate_palettes};
//!
//! let [analogous, complementary, _triadic] = generate_palettes(200.0);
//! assert_eq!(complementary.hues, vec![200.0, 20.0]);
//! assert_eq!(analogous.hues, vec![170.0, 200.0, 230.0]);
//!
//! let brick = Rgb::new(178, 34, 34).to_hsl();
//! let teal = Rgb::new(0, 128, 128).to_hsl();
//! match classify(brick, teal) {
//!     Verdict::Clash(clash) => println!("avoid: {}", clash.reason),
//!     Verdict::Harmony(found) => println!("works: {}", found.category.description()),
//! }
//! ```
//!
//! # Wardrobe Pairing
//!
//! For whole-wardrobe suggestions, build [`Garment`]s from extracted colors
//! and let [`pair_wardrobe`] filter, rank, and report:
//!
//! ```
//! use wardrobe_color::{Garment, Rgb, ScoringMode, pair_wardrobe};
//!
//! let wardrobe = vec![
//!     Garment::new("top", "crimson tee", Rgb::new(220, 20, 60)),
//!     Garment::new("bottom", "navy chinos", Rgb::new(20, 30, 90)),
//!     Garment::new("outerwear", "olive jacket", Rgb::new(90, 100, 40)),
//! ];
//!
//! let report = pair_wardrobe(&wardrobe, ScoringMode::Default, Some(55.0)).unwrap();
//! let json = report.to_json_pretty().unwrap();
//! assert!(json.contains("\"baseLabel\""));
//! ```

mod climate;
mod color;
mod compat;
mod error;
mod extract;
mod pairing;
mod schemes;

pub use climate::{
    CLIMATE_GOOD_SCORE, CLIMATE_NEUTRAL_SCORE, CLIMATE_PENALTY_SCORE, COLD_CUTOFF, ClimateVerdict,
    Garment, HOT_CUTOFF, Warmth, assess, climate_candidates, climate_score,
    is_climate_appropriate, warmth_of,
};
pub use color::{Hsl, Rgb};
pub use compat::{
    COMPLEMENTARY_HUE_GAP, ClashFinding, ClashKind, HIGH_CONTRAST_HUE_GAP, HarmonyCategory,
    HarmonyFinding, NEAR_MISS_MAX_GAP, NEAR_MISS_MIN_GAP, NEAR_MISS_SATURATION_GAP, PairScores,
    SATURATION_CONFLICT_GAP, ScoringMode, VALUE_DEAD_END_GAP, VIBRATING_HUE_GAP,
    VIBRATING_SATURATION_FLOOR, Verdict, classify, classify_with, hue_distance, score,
};
pub use error::WardrobeError;
pub use extract::{
    DEFAULT_SATURATION_THRESHOLD, ExtractMode, FALLBACK_GRAY, extract, sample_image,
};
pub use pairing::{PairingReport, pair_wardrobe};
pub use schemes::{Palette, PaletteKind, generate_palettes};
