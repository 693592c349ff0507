//! Formant vowel voice
//!
//! A sawtooth glottal source feeding three parallel band-pass resonators
//! (F1, F2, F3) whose sum goes through a linear gain and a gate.

use super::{Filter, Gate, Oscillator, Voice, Waveform};
use crate::control::{DEFAULT_PITCH, DEFAULT_VOLUME};
use crate::formant::{FormantOutput, FORMANT_COUNT};

/// Resonator names accepted by `set_parameter`/`get_parameter`
const FREQUENCY_PARAMS: [&str; FORMANT_COUNT] = ["f1", "f2", "f3"];
const Q_PARAMS: [&str; FORMANT_COUNT] = ["q1", "q2", "q3"];

/// Three-formant vowel voice
pub struct VowelVoice {
    source: Oscillator,
    resonators: [Filter; FORMANT_COUNT],
    gate: Gate,
    volume: f64,
}

impl VowelVoice {
    /// Create a silent voice tuned to the given formants
    pub fn new(sample_rate: f64, formants: &FormantOutput) -> Self {
        let resonators = formants
            .bands
            .map(|band| Filter::new(sample_rate, band.frequency, band.q));

        Self {
            source: Oscillator::new(Waveform::Sawtooth, DEFAULT_PITCH, sample_rate),
            resonators,
            gate: Gate::new(sample_rate),
            volume: DEFAULT_VOLUME,
        }
    }

    /// Retune all three resonators
    pub fn set_formants(&mut self, formants: &FormantOutput) {
        for (filter, band) in self.resonators.iter_mut().zip(formants.bands.iter()) {
            filter.set_params(band.frequency, band.q);
        }
    }

    /// Current (frequency, Q) of each resonator, after filter clamping
    pub fn resonances(&self) -> [(f64, f64); FORMANT_COUNT] {
        [0, 1, 2].map(|i| (self.resonators[i].frequency(), self.resonators[i].q()))
    }

    pub fn pitch(&self) -> f64 {
        self.source.frequency()
    }

    pub fn set_pitch(&mut self, hz: f64) {
        self.source.set_frequency(hz);
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Stored as given; range checks belong to `ControlState::validate`
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    /// Gate attack and release in seconds
    pub fn set_gate_times(&mut self, attack: f64, release: f64) {
        self.gate.set_attack(attack);
        self.gate.set_release(release);
    }
}

impl Voice for VowelVoice {
    fn set_parameter(&mut self, name: &str, value: f64) {
        match name {
            "pitch" | "frequency" => self.set_pitch(value),
            "volume" | "amplitude" => self.set_volume(value),
            _ => {
                if let Some(i) = FREQUENCY_PARAMS.iter().position(|&p| p == name) {
                    self.resonators[i].set_frequency(value);
                } else if let Some(i) = Q_PARAMS.iter().position(|&p| p == name) {
                    self.resonators[i].set_q(value);
                }
            }
        }
    }

    fn get_parameter(&self, name: &str) -> Option<f64> {
        match name {
            "pitch" | "frequency" => Some(self.pitch()),
            "volume" | "amplitude" => Some(self.volume),
            _ => FREQUENCY_PARAMS
                .iter()
                .position(|&p| p == name)
                .map(|i| self.resonators[i].frequency())
                .or_else(|| {
                    Q_PARAMS
                        .iter()
                        .position(|&p| p == name)
                        .map(|i| self.resonators[i].q())
                }),
        }
    }

    fn trigger(&mut self) {
        self.gate.open();
    }

    fn release(&mut self) {
        self.gate.close();
    }

    fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    fn process(&mut self) -> f64 {
        if !self.gate.is_active() {
            return 0.0;
        }

        let excitation = self.source.generate();
        let mut sum = 0.0;
        for filter in &mut self.resonators {
            sum += filter.process(excitation);
        }

        sum * self.volume * self.gate.process()
    }

    fn set_sample_rate(&mut self, sample_rate: f64) {
        self.source.set_sample_rate(sample_rate);
        for filter in &mut self.resonators {
            filter.set_sample_rate(sample_rate);
        }
        self.gate.set_sample_rate(sample_rate);
    }
}
