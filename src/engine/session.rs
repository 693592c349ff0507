//! Vowel synthesis session
//!
//! Owns the control state and the voice it drives. The formant model stays
//! pure; this is where its output gets applied to the resonators.

use anyhow::Result;

use crate::control::{ControlEvent, ControlState};
use crate::formant::{nearest_anchor, recompute, FormantOutput};
use crate::synth::{Voice, VowelVoice};
use crate::viz::SampleBuffer;

/// Samples kept for waveform readback
pub const ANALYSER_SIZE: usize = 2048;

/// Upper bound on the release tail rendered by [`VowelSession::drain`], in seconds
const MAX_TAIL_SECS: f64 = 1.0;

/// A single vowel voice and the controls driving it
pub struct VowelSession {
    control: ControlState,
    formants: FormantOutput,
    voice: VowelVoice,
    analyser: SampleBuffer,
    sample_rate: f64,
}

impl VowelSession {
    /// Create a stopped session at the given controls
    pub fn new(sample_rate: f64, control: ControlState) -> Self {
        let formants = recompute(&control);
        let mut voice = VowelVoice::new(sample_rate, &formants);
        voice.set_pitch(control.pitch);
        voice.set_volume(control.volume);

        Self {
            control,
            formants,
            voice,
            analyser: SampleBuffer::new(ANALYSER_SIZE),
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    /// Resonator settings for the current controls
    pub fn formants(&self) -> &FormantOutput {
        &self.formants
    }

    pub fn voice(&self) -> &VowelVoice {
        &self.voice
    }

    pub fn analyser(&self) -> &SampleBuffer {
        &self.analyser
    }

    /// Apply one control change.
    ///
    /// Position, gender and quality recompute the formants and retune the
    /// resonators; pitch and volume go straight to the voice.
    pub fn apply(&mut self, event: ControlEvent) {
        self.control.apply(event);

        match event {
            ControlEvent::Pitch(hz) => self.voice.set_pitch(hz),
            ControlEvent::Volume(v) => self.voice.set_volume(v),
            _ => {
                self.formants = recompute(&self.control);
                self.voice.set_formants(&self.formants);
                log::debug!(
                    "{} -> F = {:.0?} Hz, Q = {:.2?} (nearest /{}/)",
                    event.name(),
                    self.formants.frequencies(),
                    self.formants.qs(),
                    nearest_anchor(self.control.x, self.control.y).label
                );
            }
        }
    }

    /// Gate attack and release in seconds
    pub fn set_gate_times(&mut self, attack: f64, release: f64) {
        self.voice.set_gate_times(attack, release);
    }

    /// Open the voice
    pub fn start(&mut self) {
        self.voice.trigger();
    }

    /// Close the voice; it rings out over its release time
    pub fn stop(&mut self) {
        self.voice.release();
    }

    /// Whether the voice is still producing sound
    pub fn is_running(&self) -> bool {
        self.voice.is_active()
    }

    /// Generate the next sample
    pub fn process(&mut self) -> f64 {
        let sample = self.voice.process();
        self.analyser.push(sample as f32);
        sample
    }

    /// Fill a buffer with samples
    pub fn fill_buffer(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process() as f32;
        }
    }

    /// Stop and render the release tail until the voice goes silent
    pub fn drain(&mut self) -> Vec<f32> {
        self.stop();
        let limit = (self.sample_rate * MAX_TAIL_SECS) as usize;
        let mut tail = Vec::new();
        while self.is_running() && tail.len() < limit {
            tail.push(self.process() as f32);
        }
        tail
    }

    /// Render a straight-line glide between two positions.
    ///
    /// The position is updated once per `block` samples, the way a UI feeds
    /// pointer moves at its own rate. Each rendered block is handed to `sink`
    /// as soon as it is filled; only one block is held in memory.
    pub fn render_glide<F>(&mut self, from: (f64, f64), to: (f64, f64), samples: usize, block: usize, mut sink: F) -> Result<()>
    where
        F: FnMut(&[f32]) -> Result<()>,
    {
        let block = block.max(1);
        let chunks = samples.div_ceil(block).max(1);
        let mut buffer = vec![0.0f32; block.min(samples.max(1))];
        let mut remaining = samples;

        for i in 0..chunks {
            let t = if chunks > 1 { i as f64 / (chunks - 1) as f64 } else { 1.0 };
            self.apply(ControlEvent::Position {
                x: from.0 * (1.0 - t) + to.0 * t,
                y: from.1 * (1.0 - t) + to.1 * t,
            });

            let n = remaining.min(block);
            self.fill_buffer(&mut buffer[..n]);
            sink(&buffer[..n])?;
            remaining -= n;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> VowelSession {
        VowelSession::new(44100.0, ControlState::default())
    }

    #[test]
    fn test_session_creation() {
        let session = session();
        assert_eq!(session.sample_rate(), 44100.0);
        assert!(!session.is_running());
        assert_eq!(session.formants(), &recompute(&ControlState::default()));
        assert_eq!(session.voice().pitch(), 120.0);
    }

    #[test]
    fn test_position_event_retunes_resonators() {
        let mut session = session();
        session.apply(ControlEvent::Position { x: 0.9, y: 0.9 });

        let expected = recompute(&ControlState {
            x: 0.9,
            y: 0.9,
            ..ControlState::default()
        });
        assert_eq!(session.formants(), &expected);
        let (f1, _) = session.voice().resonances()[0];
        assert!((f1 - expected.bands[0].frequency).abs() < 1e-9);
    }

    #[test]
    fn test_gender_and_quality_recompute() {
        let mut session = session();
        let before = *session.formants();

        session.apply(ControlEvent::Gender(1.0));
        let after_gender = *session.formants();
        assert!((after_gender.bands[0].frequency / before.bands[0].frequency - 1.18).abs() < 1e-9);

        session.apply(ControlEvent::Quality(1.0));
        assert!(session.formants().bands[0].q < after_gender.bands[0].q);
    }

    #[test]
    fn test_pitch_and_volume_pass_through() {
        let mut session = session();
        let before = *session.formants();

        session.apply(ControlEvent::Pitch(200.0));
        session.apply(ControlEvent::Volume(0.6));

        assert_eq!(session.voice().pitch(), 200.0);
        assert_eq!(session.voice().volume(), 0.6);
        assert_eq!(session.control().pitch, 200.0);
        assert_eq!(session.formants(), &before);
    }

    #[test]
    fn test_most_recent_event_wins() {
        let mut session = session();
        session.apply(ControlEvent::Position { x: 0.1, y: 0.1 });
        session.apply(ControlEvent::Volume(0.5));
        session.apply(ControlEvent::Position { x: 0.9, y: 0.9 });
        session.apply(ControlEvent::Volume(0.1));

        assert_eq!((session.control().x, session.control().y), (0.9, 0.9));
        assert_eq!(session.voice().volume(), 0.1);
        let expected = recompute(session.control());
        assert_eq!(session.formants(), &expected);
    }

    #[test]
    fn test_process_feeds_analyser() {
        let mut session = session();
        session.start();

        let mut buffer = vec![0.0f32; 4096];
        session.fill_buffer(&mut buffer);

        assert!(buffer.iter().any(|s| s.abs() > 0.0));
        assert_eq!(session.analyser().get_recent(16), buffer[buffer.len() - 16..].to_vec());
    }

    #[test]
    fn test_drain_ends_silent() {
        let mut session = session();
        session.start();
        let mut buffer = vec![0.0f32; 2048];
        session.fill_buffer(&mut buffer);

        let tail = session.drain();
        assert!(!tail.is_empty());
        assert!(!session.is_running());
        assert_eq!(session.process(), 0.0);
    }

    #[test]
    fn test_glide_ends_at_target() {
        let mut session = session();
        session.start();

        let mut blocks = Vec::new();
        session
            .render_glide((0.1, 0.9), (0.9, 0.9), 4410, 441, |block| {
                blocks.push(block.len());
                Ok(())
            })
            .unwrap();

        assert_eq!(blocks.len(), 10);
        assert!(blocks.iter().all(|&n| n <= 441));
        assert_eq!(blocks.iter().sum::<usize>(), 4410);
        assert_eq!((session.control().x, session.control().y), (0.9, 0.9));
    }

    #[test]
    fn test_glide_partial_last_block() {
        let mut session = session();
        session.start();

        let mut blocks = Vec::new();
        session
            .render_glide((0.9, 0.9), (0.1, 0.1), 1000, 300, |block| {
                blocks.push(block.len());
                Ok(())
            })
            .unwrap();
        assert_eq!(blocks, vec![300, 300, 300, 100]);
    }

    #[test]
    fn test_glide_stops_on_sink_error() {
        let mut session = session();
        session.start();

        let mut calls = 0;
        let result = session.render_glide((0.1, 0.9), (0.9, 0.9), 4410, 441, |_| {
            calls += 1;
            if calls == 3 {
                anyhow::bail!("disk full");
            }
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_volume_event_stored_as_given() {
        let mut session = session();
        session.apply(ControlEvent::Volume(-0.2));
        assert_eq!(session.control().volume, -0.2);
        assert_eq!(session.voice().volume(), session.control().volume);
    }

    #[test]
    fn test_longer_release_gives_longer_tail() {
        let tail_length = |release: f64| {
            let mut session = session();
            session.set_gate_times(0.005, release);
            session.start();
            let mut buffer = vec![0.0f32; 1024];
            session.fill_buffer(&mut buffer);
            session.drain().len()
        };
        let short = tail_length(0.02);
        let long = tail_length(0.2);
        assert!(short < 1000, "{}", short);
        assert!(long > 8000, "{}", long);
    }

    #[test]
    fn test_tiny_sample_rate_does_not_panic() {
        let mut session = VowelSession::new(20.0, ControlState::default());
        session.start();
        for _ in 0..100 {
            assert!(session.process().is_finite());
        }
        assert!(session.voice().resonances().iter().all(|(f, _)| *f == 20.0));
    }
}
