//! Error conditions shared across the crate.

use thiserror::Error;

/// Everything that can go wrong in the color and pairing core.
///
/// None of these are fatal. Each is returned to the caller, which decides
/// whether to surface it, normalize the input, or relax a filter and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WardrobeError {
    /// An HSL component was non-finite or outside its documented range.
    #[error("invalid {component}: {value}")]
    InvalidColorInput {
        component: &'static str,
        value: f32,
    },

    /// The extractor was handed zero pixels in plain-average mode.
    #[error("cannot extract a color from an empty pixel buffer")]
    EmptyInput,

    /// The climate filter left fewer than two garments to pair.
    ///
    /// Advisory rather than hard failure: callers typically retry against
    /// the unfiltered wardrobe and tell the user the filter was relaxed.
    #[error("only {matched} garment(s) suit the current climate")]
    InsufficientClimateMatches { matched: usize },

    /// Pairing needs at least two garments to work with.
    #[error("wardrobe has {len} garment(s); pairing needs at least two")]
    WardrobeTooSmall { len: usize },
}
