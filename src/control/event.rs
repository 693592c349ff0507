//! Discrete control-change events

/// A single user action on the synthesizer controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Move on the articulatory plane
    Position { x: f64, y: f64 },
    /// Gender factor, 0..2
    Gender(f64),
    /// Voice quality, -1..1
    Quality(f64),
    /// Fundamental frequency in Hz
    Pitch(f64),
    /// Linear gain
    Volume(f64),
}

impl ControlEvent {
    /// Whether this event changes the resonator settings
    pub fn affects_formants(&self) -> bool {
        matches!(
            self,
            ControlEvent::Position { .. } | ControlEvent::Gender(_) | ControlEvent::Quality(_)
        )
    }

    /// Short parameter name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ControlEvent::Position { .. } => "position",
            ControlEvent::Gender(_) => "gender",
            ControlEvent::Quality(_) => "quality",
            ControlEvent::Pitch(_) => "pitch",
            ControlEvent::Volume(_) => "volume",
        }
    }
}
