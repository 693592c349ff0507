//! Formant parameter model
//!
//! Pure functions from articulatory controls to resonator settings. Nothing
//! here holds state; callers own the [`ControlState`] and call [`recompute`]
//! after every control change.

use serde::Serialize;

use super::catalog::{catalog, VowelAnchor};
use crate::control::ControlState;

/// Number of formant bands driven by the model
pub const FORMANT_COUNT: usize = 3;

/// Offset added to every anchor distance so an exact hit has a finite weight
const DISTANCE_OFFSET: f64 = 0.01;

/// Bandwidth as a fraction of center frequency at neutral quality
const BASE_BANDWIDTH_RATIO: f64 = 0.08;

/// Bandwidth slope for breathy voice (q > 0)
const BREATHY_SLOPE: f64 = 0.5;

/// Bandwidth slope for tense voice (q < 0)
const TENSE_SLOPE: f64 = 0.3;

/// Gender scale slope from neutral to the female boundary
const FEMALE_SLOPE: f64 = 0.18;

/// Gender scale slope beyond the female boundary
const CHILD_SLOPE: f64 = 0.25;

/// One resonant band: center frequency and quality factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resonance {
    pub frequency: f64,
    pub q: f64,
}

/// Resonator settings for F1, F2 and F3
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormantOutput {
    pub bands: [Resonance; FORMANT_COUNT],
}

impl FormantOutput {
    /// Center frequencies only
    pub fn frequencies(&self) -> [f64; FORMANT_COUNT] {
        self.bands.map(|b| b.frequency)
    }

    /// Quality factors only
    pub fn qs(&self) -> [f64; FORMANT_COUNT] {
        self.bands.map(|b| b.q)
    }
}

/// An anchor chosen for interpolation along with its normalized weight
#[derive(Debug, Clone, Copy)]
pub struct WeightedAnchor {
    pub anchor: &'static VowelAnchor,
    pub distance: f64,
    pub weight: f64,
}

/// The three nearest anchors to (x, y) with normalized inverse-distance weights.
///
/// Selection is a stable sort on distance, so equal distances keep catalog
/// order. The result always holds exactly three anchors.
pub fn nearest_weighted(x: f64, y: f64) -> [WeightedAnchor; FORMANT_COUNT] {
    let mut ranked: Vec<(&'static VowelAnchor, f64)> = catalog()
        .iter()
        .map(|a| (a, a.distance_to(x, y)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let raw = [0, 1, 2].map(|i| 1.0 / (ranked[i].1 + DISTANCE_OFFSET));
    let total: f64 = raw.iter().sum();

    [0, 1, 2].map(|i| WeightedAnchor {
        anchor: ranked[i].0,
        distance: ranked[i].1,
        weight: raw[i] / total,
    })
}

/// Blend the formants of the three nearest anchors to (x, y).
///
/// Positions outside the unit square are not rejected; they extrapolate
/// from whichever anchors happen to be nearest.
pub fn interpolate_formants(x: f64, y: f64) -> [f64; FORMANT_COUNT] {
    let mut formants = [0.0; FORMANT_COUNT];
    for selected in nearest_weighted(x, y) {
        for (band, value) in formants.iter_mut().zip(selected.anchor.formants) {
            *band += selected.weight * value;
        }
    }
    formants
}

/// Global formant scale for a gender factor.
///
/// Piecewise linear with a breakpoint at 1.0 (adult female); 2.0 approximates
/// a child's vocal tract. Negative values fall below 1.0 unchecked.
pub fn gender_scale(gender: f64) -> f64 {
    if gender <= 1.0 {
        1.0 + FEMALE_SLOPE * gender
    } else {
        1.0 + FEMALE_SLOPE + CHILD_SLOPE * (gender - 1.0)
    }
}

/// Multiply every formant by the gender scale
pub fn scale_formants_for_gender(formants: [f64; FORMANT_COUNT], gender: f64) -> [f64; FORMANT_COUNT] {
    let scale = gender_scale(gender);
    formants.map(|f| f * scale)
}

/// Bandwidth multiplier for a voice quality; breathy widens faster than tense narrows
pub fn quality_multiplier(quality: f64) -> f64 {
    if quality >= 0.0 {
        1.0 + BREATHY_SLOPE * quality
    } else {
        1.0 + TENSE_SLOPE * quality
    }
}

/// Resonance bandwidth in Hz for a center frequency and voice quality
pub fn calculate_bandwidth(center_freq: f64, quality: f64) -> f64 {
    center_freq * BASE_BANDWIDTH_RATIO * quality_multiplier(quality)
}

/// Full parameter pipeline: position, then gender scale, then per-band Q
pub fn recompute(control: &ControlState) -> FormantOutput {
    let formants = interpolate_formants(control.x, control.y);
    let scaled = scale_formants_for_gender(formants, control.gender);

    let bands = scaled.map(|frequency| Resonance {
        frequency,
        q: frequency / calculate_bandwidth(frequency, control.quality),
    });

    FormantOutput { bands }
}
