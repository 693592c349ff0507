//! Attack/release gate
//!
//! Linear gain ramp applied when a voice starts or stops, so starting and
//! stopping a session never clicks.

/// Gate stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateStage {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Linear attack/release gate
pub struct Gate {
    sample_rate: f64,
    attack: f64,
    release: f64,
    stage: GateStage,
    level: f64,
}

impl Gate {
    /// Create a closed gate with 20 ms attack and 50 ms release
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            attack: 0.02,
            release: 0.05,
            stage: GateStage::Closed,
            level: 0.0,
        }
    }

    /// Set attack time in seconds
    pub fn set_attack(&mut self, seconds: f64) {
        self.attack = seconds.max(0.001);
    }

    /// Set release time in seconds
    pub fn set_release(&mut self, seconds: f64) {
        self.release = seconds.max(0.001);
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
    }

    /// Start ramping up from the current level
    pub fn open(&mut self) {
        if self.stage != GateStage::Open {
            self.stage = GateStage::Opening;
        }
    }

    /// Start ramping down from the current level
    pub fn close(&mut self) {
        if self.stage != GateStage::Closed {
            self.stage = GateStage::Closing;
        }
    }

    pub fn stage(&self) -> GateStage {
        self.stage
    }

    /// Open, opening, or still ringing out
    pub fn is_active(&self) -> bool {
        self.stage != GateStage::Closed
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// Advance one sample and return the gain
    pub fn process(&mut self) -> f64 {
        let dt = 1.0 / self.sample_rate;

        match self.stage {
            GateStage::Closed => self.level = 0.0,
            GateStage::Open => self.level = 1.0,
            GateStage::Opening => {
                self.level += dt / self.attack;
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = GateStage::Open;
                }
            }
            GateStage::Closing => {
                self.level -= dt / self.release;
                if self.level <= 0.0 {
                    self.level = 0.0;
                    self.stage = GateStage::Closed;
                }
            }
        }

        self.level
    }
}
