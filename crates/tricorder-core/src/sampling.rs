//! Detector pulse sampling
//!
//! The detector line is sampled once per render tick. This is a level
//! sample, not edge detection: a tick that sees the line asserted adds one
//! pulse, however long the line stayed asserted. Pulses wider than a tick are
//! therefore counted at most once per tick they overlap.

/// Accumulates pulses seen since the last history rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseSampler {
    sensor_present: bool,
    pending: u32,
}

impl PulseSampler {
    pub const fn new(sensor_present: bool) -> Self {
        Self {
            sensor_present,
            pending: 0,
        }
    }

    /// Record one sample of the detector line.
    ///
    /// Adds exactly one pulse when the detector is present and the line is
    /// asserted; otherwise does nothing.
    pub fn sample(&mut self, line_asserted: bool) {
        if self.sensor_present && line_asserted {
            self.pending = self.pending.saturating_add(1);
        }
    }

    /// Hand over the pending count and reset it to zero.
    pub fn take(&mut self) -> u32 {
        core::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn sensor_present(&self) -> bool {
        self.sensor_present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_one_per_asserted_sample() {
        let mut sampler = PulseSampler::new(true);
        sampler.sample(true);
        sampler.sample(false);
        sampler.sample(true);
        assert_eq!(sampler.pending(), 2);
    }

    #[test]
    fn test_absent_sensor_never_counts() {
        let mut sampler = PulseSampler::new(false);
        for _ in 0..10 {
            sampler.sample(true);
        }
        assert_eq!(sampler.pending(), 0);
    }

    #[test]
    fn test_take_resets_pending() {
        let mut sampler = PulseSampler::new(true);
        sampler.sample(true);
        sampler.sample(true);
        assert_eq!(sampler.take(), 2);
        assert_eq!(sampler.pending(), 0);
        assert_eq!(sampler.take(), 0);
    }
}
