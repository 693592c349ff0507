//! Biquad band-pass filter
//!
//! Constant 0 dB peak-gain band-pass, the response a browser
//! `BiquadFilterNode` of type "bandpass" gives. One per formant.

use std::f64::consts::PI;

/// Biquad filter coefficients
#[derive(Debug, Clone, Copy)]
struct Coefficients {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }
}

/// Resonant band-pass filter
pub struct Filter {
    sample_rate: f64,
    frequency: f64,
    q: f64,

    coeffs: Coefficients,

    // Direct Form II transposed state
    z1: f64,
    z2: f64,
}

impl Filter {
    /// Create a band-pass centered on `frequency`
    pub fn new(sample_rate: f64, frequency: f64, q: f64) -> Self {
        let mut filter = Self {
            sample_rate,
            frequency: 1000.0,
            q: 1.0,
            coeffs: Coefficients::default(),
            z1: 0.0,
            z2: 0.0,
        };
        filter.set_params(frequency, q);
        filter
    }

    /// Set center frequency (Hz) and Q together, recomputing once
    pub fn set_params(&mut self, frequency: f64, q: f64) {
        // Below ~44 Hz sample rate the margin drops under the floor; the floor wins
        let nyquist_margin = (self.sample_rate * 0.45).max(20.0);
        let clamped_freq = frequency.clamp(20.0, nyquist_margin);
        if clamped_freq != frequency {
            log::warn!(
                "band-pass center {:.1} Hz clamped to {:.1} Hz at {} Hz sample rate",
                frequency,
                clamped_freq,
                self.sample_rate
            );
        }
        self.frequency = clamped_freq;
        // Clamp Q to prevent instability
        self.q = q.clamp(0.1, 20.0);
        self.calculate_coefficients();
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.set_params(frequency, self.q);
    }

    pub fn set_q(&mut self, q: f64) {
        self.set_params(self.frequency, q);
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.set_params(self.frequency, self.q);
        self.reset();
    }

    /// Reset filter state (clear history)
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }

    fn calculate_coefficients(&mut self) {
        let omega = 2.0 * PI * self.frequency / self.sample_rate;
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * self.q);

        let a0 = 1.0 + alpha;
        self.coeffs = Coefficients {
            b0: alpha / a0,
            b1: 0.0,
            b2: -alpha / a0,
            a1: (-2.0 * cos_omega) / a0,
            a2: (1.0 - alpha) / a0,
        };
    }

    /// Process a single sample through the filter
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.coeffs.b0 * input + self.z1;

        self.z1 = self.coeffs.b1 * input - self.coeffs.a1 * output + self.z2;
        self.z2 = self.coeffs.b2 * input - self.coeffs.a2 * output;

        output
    }
}
