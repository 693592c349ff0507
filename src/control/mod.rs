//! Synthesizer controls
//!
//! The caller-owned control state, the events that mutate it, and the
//! linear ranges used to bring raw UI input into model domains.

mod event;
mod range;
mod state;

pub use event::ControlEvent;
pub use range::{position_from_pointer, ControlRange};
pub use state::{ControlError, ControlState, DEFAULT_PITCH, DEFAULT_VOLUME};
