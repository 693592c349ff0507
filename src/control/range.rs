//! Linear control ranges
//!
//! Maps raw UI units (slider steps, pointer pixels) into model domains.

/// Linear mapping from an input span to an output span, clamped to the output span
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
}

impl ControlRange {
    pub fn new(in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Self {
        Self {
            in_min,
            in_max,
            out_min,
            out_max,
        }
    }

    /// Output bounds, low to high
    pub fn bounds(&self) -> (f64, f64) {
        (self.out_min.min(self.out_max), self.out_min.max(self.out_max))
    }

    pub fn map(&self, input: f64) -> f64 {
        let in_range = self.in_max - self.in_min;
        let normalized = if in_range.abs() < f64::EPSILON {
            0.5
        } else {
            (input - self.in_min) / in_range
        };

        let output = self.out_min + normalized * (self.out_max - self.out_min);
        let (lo, hi) = self.bounds();
        output.clamp(lo, hi)
    }
}

/// Articulatory position for a pointer inside a `width` x `height` surface.
///
/// Screen y grows downward; the returned y is flipped so the top edge is 1.0
/// (close vowels). Both coordinates are clamped to the unit square.
pub fn position_from_pointer(px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
    let x = ControlRange::new(0.0, width, 0.0, 1.0).map(px);
    let y = ControlRange::new(0.0, height, 1.0, 0.0).map(py);
    (x, y)
}
