//! Rendering engine
//!
//! Stateful sessions that apply model output to voices, and WAV output.

mod recorder;
mod session;

pub use recorder::Recorder;
pub use session::{VowelSession, ANALYSER_SIZE};

use anyhow::Result;

use crate::synth::Voice;

/// Render `samples` samples from a voice, then its release tail (at most one
/// second), handing each filled block of up to `block` samples to `sink`
pub fn render_voice<F>(voice: &mut dyn Voice, samples: usize, sample_rate: f64, block: usize, mut sink: F) -> Result<()>
where
    F: FnMut(&[f32]) -> Result<()>,
{
    let block = block.max(1);
    let limit = samples + sample_rate as usize;
    let mut buffer = Vec::with_capacity(block);

    voice.trigger();
    let mut rendered = 0;
    while rendered < samples || (voice.is_active() && rendered < limit) {
        if rendered == samples {
            voice.release();
        }
        buffer.push(voice.process() as f32);
        rendered += 1;
        if buffer.len() == block {
            sink(&buffer)?;
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        sink(&buffer)?;
    }
    Ok(())
}
