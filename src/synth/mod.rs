//! Synthesis building blocks
//!
//! Oscillators, band-pass resonators, gates, and the two voices built from
//! them: the formant vowel voice and the plain sawtooth generator.

mod filter;
mod gate;
mod oscillator;
mod saw;
mod voice;
mod vowel;

pub use filter::Filter;
pub use gate::{Gate, GateStage};
pub use oscillator::{Oscillator, Waveform};
pub use saw::{SawVoice, DEFAULT_SAW_FREQUENCY, DEFAULT_SAW_VOLUME};
pub use voice::Voice;
pub use vowel::VowelVoice;
