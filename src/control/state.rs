//! Control state owned by a synthesis session

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ControlEvent;

/// Default pitch in Hz
pub const DEFAULT_PITCH: f64 = 120.0;

/// Default linear output gain
pub const DEFAULT_VOLUME: f64 = 0.3;

/// Out-of-domain control value
#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("position ({x}, {y}) is outside the unit square")]
    Position { x: f64, y: f64 },
    #[error("gender factor {0} is outside 0.0..=2.0")]
    Gender(f64),
    #[error("quality factor {0} is outside -1.0..=1.0")]
    Quality(f64),
    #[error("pitch {0} Hz must be positive")]
    Pitch(f64),
    #[error("volume {0} must not be negative")]
    Volume(f64),
}

/// Current synthesis controls
///
/// Fields are public and unchecked; the formant model extrapolates from
/// whatever it is given. Call [`ControlState::validate`] at a trust boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlState {
    /// Frontness, 0..1
    pub x: f64,
    /// Height, 0..1
    pub y: f64,
    /// 0 = neutral/male, 1 = female, 2 = child
    pub gender: f64,
    /// -1 = tense, 1 = breathy
    pub quality: f64,
    /// Fundamental frequency in Hz
    pub pitch: f64,
    /// Linear gain
    pub volume: f64,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            gender: 0.0,
            quality: 0.0,
            pitch: DEFAULT_PITCH,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl ControlState {
    /// Apply a control event in place
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Position { x, y } => {
                self.x = x;
                self.y = y;
            }
            ControlEvent::Gender(g) => self.gender = g,
            ControlEvent::Quality(q) => self.quality = q,
            ControlEvent::Pitch(hz) => self.pitch = hz,
            ControlEvent::Volume(v) => self.volume = v,
        }
    }

    /// Copy with every field pulled into its documented domain
    pub fn clamped(&self) -> ControlState {
        let pitch = if self.pitch.is_finite() && self.pitch > 0.0 {
            self.pitch
        } else {
            DEFAULT_PITCH
        };
        ControlState {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
            gender: self.gender.clamp(0.0, 2.0),
            quality: self.quality.clamp(-1.0, 1.0),
            pitch,
            volume: self.volume.max(0.0),
        }
    }

    /// Check every field against its documented domain
    pub fn validate(&self) -> Result<(), ControlError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.x) || !unit.contains(&self.y) {
            return Err(ControlError::Position { x: self.x, y: self.y });
        }
        if !(0.0..=2.0).contains(&self.gender) {
            return Err(ControlError::Gender(self.gender));
        }
        if !(-1.0..=1.0).contains(&self.quality) {
            return Err(ControlError::Quality(self.quality));
        }
        if !(self.pitch > 0.0 && self.pitch.is_finite()) {
            return Err(ControlError::Pitch(self.pitch));
        }
        if !(self.volume >= 0.0 && self.volume.is_finite()) {
            return Err(ControlError::Volume(self.volume));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ControlState::default();
        assert_eq!((state.x, state.y), (0.5, 0.5));
        assert_eq!(state.gender, 0.0);
        assert_eq!(state.quality, 0.0);
        assert_eq!(state.pitch, 120.0);
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_apply_events() {
        let mut state = ControlState::default();
        state.apply(ControlEvent::Position { x: 0.1, y: 0.9 });
        state.apply(ControlEvent::Gender(1.5));
        state.apply(ControlEvent::Quality(-0.4));
        state.apply(ControlEvent::Pitch(220.0));
        state.apply(ControlEvent::Volume(0.8));

        assert_eq!(state.x, 0.1);
        assert_eq!(state.y, 0.9);
        assert_eq!(state.gender, 1.5);
        assert_eq!(state.quality, -0.4);
        assert_eq!(state.pitch, 220.0);
        assert_eq!(state.volume, 0.8);
    }

    #[test]
    fn test_apply_accepts_out_of_range() {
        let mut state = ControlState::default();
        state.apply(ControlEvent::Gender(-0.5));
        assert_eq!(state.gender, -0.5);
        assert_eq!(state.validate(), Err(ControlError::Gender(-0.5)));
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let base = ControlState::default();

        let bad = ControlState { x: 1.2, ..base };
        assert!(matches!(bad.validate(), Err(ControlError::Position { .. })));

        let bad = ControlState { quality: -1.5, ..base };
        assert_eq!(bad.validate(), Err(ControlError::Quality(-1.5)));

        let bad = ControlState { pitch: 0.0, ..base };
        assert_eq!(bad.validate(), Err(ControlError::Pitch(0.0)));

        let bad = ControlState { volume: -0.1, ..base };
        assert_eq!(bad.validate(), Err(ControlError::Volume(-0.1)));
    }

    #[test]
    fn test_clamped_is_valid() {
        let wild = ControlState {
            x: -0.2,
            y: 1.7,
            gender: 3.0,
            quality: -4.0,
            pitch: -10.0,
            volume: -1.0,
        };
        let tame = wild.clamped();
        assert!(tame.validate().is_ok());
        assert_eq!((tame.x, tame.y), (0.0, 1.0));
        assert_eq!(tame.gender, 2.0);
        assert_eq!(tame.quality, -1.0);
        assert_eq!(tame.pitch, DEFAULT_PITCH);
        assert_eq!(tame.volume, 0.0);
    }

    #[test]
    fn test_clamped_leaves_valid_state_alone() {
        let state = ControlState {
            x: 0.2,
            gender: 1.3,
            ..ControlState::default()
        };
        assert_eq!(state.clamped(), state);
    }

    #[test]
    fn test_error_messages() {
        let err = ControlError::Gender(3.0);
        assert_eq!(err.to_string(), "gender factor 3 is outside 0.0..=2.0");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let state: ControlState = serde_yaml::from_str("gender: 1.0\npitch: 200").unwrap();
        assert_eq!(state.gender, 1.0);
        assert_eq!(state.pitch, 200.0);
        assert_eq!(state.x, 0.5);
        assert_eq!(state.volume, DEFAULT_VOLUME);
    }
}
