//! Voice trait for sound generators

/// Trait for voice implementations
pub trait Voice: Send + Sync {
    /// Set a parameter value; unknown names are ignored
    fn set_parameter(&mut self, name: &str, value: f64);

    /// Get a parameter value
    fn get_parameter(&self, name: &str) -> Option<f64>;

    /// Open the voice's gate
    fn trigger(&mut self);

    /// Close the voice's gate; output rings out over the release time
    fn release(&mut self);

    /// Check if the voice is producing sound
    fn is_active(&self) -> bool;

    /// Generate the next sample
    fn process(&mut self) -> f64;

    /// Set the sample rate
    fn set_sample_rate(&mut self, sample_rate: f64);
}
