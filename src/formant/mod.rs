//! Formant-synthesis parameter model
//!
//! Maps articulatory position, gender and voice quality to three resonances
//! (center frequency plus Q). Everything here is pure.

mod catalog;
mod model;

pub use catalog::{catalog, find_anchor, nearest_anchor, VowelAnchor, ANCHOR_COUNT};
pub use model::{
    calculate_bandwidth, gender_scale, interpolate_formants, nearest_weighted, quality_multiplier,
    recompute, scale_formants_for_gender, FormantOutput, Resonance, WeightedAnchor, FORMANT_COUNT,
};
