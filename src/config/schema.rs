//! Configuration schema definitions

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::control::ControlState;
use crate::synth::{Waveform, DEFAULT_SAW_FREQUENCY, DEFAULT_SAW_VOLUME};

/// Longest accepted gate attack or release
const MAX_GATE_SECS: f64 = 5.0;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Audio output settings
    #[serde(default)]
    pub audio: AudioConfig,

    /// Starting controls for the vowel synthesizer
    #[serde(default)]
    pub voice: ControlState,

    /// Sawtooth generator settings
    #[serde(default)]
    pub saw: SawConfig,
}

impl SynthConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.audio.sample_rate < 8000 || self.audio.sample_rate > 192000 {
            bail!("Sample rate must be between 8000 and 192000");
        }
        if self.audio.buffer_size < 64 || self.audio.buffer_size > 8192 {
            bail!("Buffer size must be between 64 and 8192");
        }
        for (name, seconds) in [("Attack", self.audio.attack), ("Release", self.audio.release)] {
            if !(seconds > 0.0 && seconds <= MAX_GATE_SECS) {
                bail!("{} must be between 0 and {} seconds", name, MAX_GATE_SECS);
            }
        }

        self.voice.validate().context("invalid voice settings")?;
        if self.voice.volume > 1.0 {
            bail!("Voice volume must be between 0.0 and 1.0");
        }

        if self.saw.frequency < 20.0 || self.saw.frequency > 20000.0 {
            bail!("Saw frequency must be between 20 and 20000 Hz");
        }
        if self.saw.volume < 0.0 || self.saw.volume > 1.0 {
            bail!("Saw volume must be between 0.0 and 1.0");
        }

        Ok(())
    }
}

/// Audio output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sample rate in Hz (default: 44100)
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Samples rendered between control updates (default: 512)
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Gate attack in seconds (default: 0.02)
    #[serde(default = "default_attack")]
    pub attack: f64,

    /// Gate release in seconds (default: 0.05)
    #[serde(default = "default_release")]
    pub release: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            buffer_size: default_buffer_size(),
            attack: default_attack(),
            release: default_release(),
        }
    }
}

fn default_sample_rate() -> u32 { 44100 }
fn default_buffer_size() -> usize { 512 }
fn default_attack() -> f64 { 0.02 }
fn default_release() -> f64 { 0.05 }

/// Sawtooth generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SawConfig {
    /// Frequency in Hz (default: 220)
    #[serde(default = "default_saw_frequency")]
    pub frequency: f64,

    /// Linear volume 0.0-1.0 (default: 0.2)
    #[serde(default = "default_saw_volume")]
    pub volume: f64,

    /// Waveform (default: sawtooth)
    #[serde(default)]
    pub waveform: Waveform,
}

impl Default for SawConfig {
    fn default() -> Self {
        Self {
            frequency: default_saw_frequency(),
            volume: default_saw_volume(),
            waveform: Waveform::default(),
        }
    }
}

fn default_saw_frequency() -> f64 { DEFAULT_SAW_FREQUENCY }
fn default_saw_volume() -> f64 { DEFAULT_SAW_VOLUME }
