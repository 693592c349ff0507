//! vowelsynth - formant vowel synthesis
//!
//! Maps articulatory controls (tongue position, gender, voice quality) to
//! three formant resonances, and renders them through a sawtooth source and
//! band-pass resonators.

pub mod config;
pub mod control;
pub mod engine;
pub mod formant;
pub mod synth;
pub mod viz;

pub use config::SynthConfig;
pub use control::{ControlEvent, ControlState};
pub use engine::VowelSession;
pub use formant::{recompute, FormantOutput};
