//! Sawtooth generator voice
//!
//! A bare oscillator at a frequency with a linear volume. Defaults to a
//! sawtooth; other waveforms are there for comparison listening.

use super::{Gate, Oscillator, Voice, Waveform};

pub const DEFAULT_SAW_FREQUENCY: f64 = 220.0;
pub const DEFAULT_SAW_VOLUME: f64 = 0.2;

/// Single-oscillator voice
pub struct SawVoice {
    oscillator: Oscillator,
    gate: Gate,
    volume: f64,
}

impl SawVoice {
    pub fn new(sample_rate: f64) -> Self {
        Self::with_waveform(sample_rate, Waveform::Sawtooth)
    }

    pub fn with_waveform(sample_rate: f64, waveform: Waveform) -> Self {
        Self {
            oscillator: Oscillator::new(waveform, DEFAULT_SAW_FREQUENCY, sample_rate),
            gate: Gate::new(sample_rate),
            volume: DEFAULT_SAW_VOLUME,
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.oscillator.waveform()
    }

    /// Gate attack and release in seconds
    pub fn set_gate_times(&mut self, attack: f64, release: f64) {
        self.gate.set_attack(attack);
        self.gate.set_release(release);
    }
}

impl Voice for SawVoice {
    fn set_parameter(&mut self, name: &str, value: f64) {
        match name {
            "pitch" | "frequency" => self.oscillator.set_frequency(value.clamp(20.0, 20000.0)),
            "volume" | "amplitude" => self.volume = value.clamp(0.0, 1.0),
            _ => {}
        }
    }

    fn get_parameter(&self, name: &str) -> Option<f64> {
        match name {
            "pitch" | "frequency" => Some(self.oscillator.frequency()),
            "volume" | "amplitude" => Some(self.volume),
            _ => None,
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
        self.oscillator.generate() * self.volume * self.gate.process()
    }

    fn set_sample_rate(&mut self, sample_rate: f64) {
        self.oscillator.set_sample_rate(sample_rate);
        self.gate.set_sample_rate(sample_rate);
    }
}
