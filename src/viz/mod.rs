//! Waveform readback for visualization
//!
//! Sessions push every output sample into a [`SampleBuffer`]; a drawing
//! layer polls it at its own frame rate and takes whatever is newest.

mod waveform;

pub use waveform::render_ascii;

/// Fixed-capacity ring buffer of the most recent samples
pub struct SampleBuffer {
    samples: Vec<f32>,
    capacity: usize,
    write_pos: usize,
}

impl SampleBuffer {
    /// Create a zero-filled buffer; capacity is at least one sample
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: vec![0.0; capacity],
            capacity,
            write_pos: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push a new sample, overwriting the oldest
    pub fn push(&mut self, sample: f32) {
        self.samples[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.capacity;
    }

    /// Get all samples in order (oldest to newest)
    pub fn get_samples(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.capacity);
        result.extend_from_slice(&self.samples[self.write_pos..]);
        result.extend_from_slice(&self.samples[..self.write_pos]);
        result
    }

    /// Get the most recent N samples
    pub fn get_recent(&self, count: usize) -> Vec<f32> {
        let count = count.min(self.capacity);
        let samples = self.get_samples();
        samples[self.capacity - count..].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_order_before_wrap() {
        let mut buf = SampleBuffer::new(4);
        buf.push(1.0);
        buf.push(2.0);
        assert_eq!(buf.get_samples(), vec![0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_buffer_wraps() {
        let mut buf = SampleBuffer::new(3);
        for s in [1.0, 2.0, 3.0, 4.0, 5.0] {
            buf.push(s);
        }
        assert_eq!(buf.get_samples(), vec![3.0, 4.0, 5.0]);
        assert_eq!(buf.get_recent(2), vec![4.0, 5.0]);
        assert_eq!(buf.get_recent(10), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_zero_capacity_is_bumped() {
        let mut buf = SampleBuffer::new(0);
        buf.push(0.5);
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.get_samples(), vec![0.5]);
    }
}
