//! Vowel anchor catalog
//!
//! Reference vowels placed on a normalized articulatory plane:
//! x is frontness (0 = back, 1 = front), y is height (0 = open, 1 = close).
//! Formant values are adult-male averages.

use serde::Serialize;

/// A fixed reference vowel on the articulatory plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VowelAnchor {
    /// IPA symbol
    pub label: &'static str,
    /// English word carrying the vowel
    pub word: &'static str,
    /// F1, F2, F3 in Hz
    pub formants: [f64; 3],
    /// Frontness, 0..1
    pub x: f64,
    /// Height, 0..1
    pub y: f64,
}

impl VowelAnchor {
    const fn new(label: &'static str, word: &'static str, formants: [f64; 3], x: f64, y: f64) -> Self {
        Self { label, word, formants, x, y }
    }

    /// Euclidean distance from this anchor to a point on the plane
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Number of anchors in the catalog
pub const ANCHOR_COUNT: usize = 11;

static CATALOG: [VowelAnchor; ANCHOR_COUNT] = [
    VowelAnchor::new("i", "beet", [270.0, 2290.0, 3010.0], 0.90, 0.90),
    VowelAnchor::new("ɪ", "bit", [390.0, 1990.0, 2550.0], 0.75, 0.75),
    VowelAnchor::new("ɛ", "bet", [530.0, 1840.0, 2480.0], 0.70, 0.45),
    VowelAnchor::new("æ", "bat", [660.0, 1720.0, 2410.0], 0.75, 0.15),
    VowelAnchor::new("ɑ", "father", [730.0, 1090.0, 2440.0], 0.30, 0.10),
    VowelAnchor::new("ɔ", "bought", [570.0, 840.0, 2410.0], 0.15, 0.30),
    VowelAnchor::new("ʊ", "book", [440.0, 1020.0, 2240.0], 0.20, 0.70),
    VowelAnchor::new("u", "boot", [300.0, 870.0, 2240.0], 0.10, 0.90),
    VowelAnchor::new("ʌ", "but", [640.0, 1190.0, 2390.0], 0.45, 0.35),
    VowelAnchor::new("ɝ", "bird", [490.0, 1350.0, 1690.0], 0.50, 0.65),
    VowelAnchor::new("ə", "about", [500.0, 1500.0, 2500.0], 0.50, 0.50),
];

/// The full anchor catalog, in its fixed iteration order
pub fn catalog() -> &'static [VowelAnchor] {
    &CATALOG
}

/// Look up an anchor by IPA label or example word (case-insensitive for words)
pub fn find_anchor(name: &str) -> Option<&'static VowelAnchor> {
    CATALOG
        .iter()
        .find(|a| a.label == name || a.word.eq_ignore_ascii_case(name))
}

/// The single closest anchor to a point; ties go to the earlier catalog entry
pub fn nearest_anchor(x: f64, y: f64) -> &'static VowelAnchor {
    let mut best = &CATALOG[0];
    let mut best_distance = best.distance_to(x, y);
    for anchor in &CATALOG[1..] {
        let d = anchor.distance_to(x, y);
        if d < best_distance {
            best = anchor;
            best_distance = d;
        }
    }
    best
}
