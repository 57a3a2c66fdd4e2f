//! Rolling one-minute pulse history
//!
//! A fixed ring of per-second pulse counts. Once the ring is full every
//! rollover overwrites the oldest bucket, so the buffer always holds exactly
//! the most recent `N` one-second samples.

use embassy_time::{Duration, Instant};
use log::debug;

use crate::config::{BUCKET_SECONDS, HISTORY_CAPACITY};
use crate::sampling::PulseSampler;

/// Minimum spacing between two rollovers.
pub const BUCKET_PERIOD: Duration = Duration::from_secs(BUCKET_SECONDS);

pub struct RollingHistory<const N: usize = HISTORY_CAPACITY> {
    buckets: [u32; N],
    /// Next slot to overwrite
    write_index: usize,
    /// Buckets written so far, pinned at `N`
    valid_len: usize,
    last_rollover: Instant,
}

impl<const N: usize> RollingHistory<N> {
    /// Create an empty history whose first bucket closes one period after `start`.
    pub const fn new(start: Instant) -> Self {
        const { assert!(N > 0, "history needs at least one bucket") };
        Self {
            buckets: [0; N],
            write_index: 0,
            valid_len: 0,
            last_rollover: start,
        }
    }

    /// Commit the sampler's pending count if a full bucket period has elapsed.
    ///
    /// Runs at most once per elapsed period no matter how often it is called.
    /// Returns `true` when a bucket was written.
    pub fn maybe_rollover(&mut self, now: Instant, sampler: &mut PulseSampler) -> bool {
        if now.saturating_duration_since(self.last_rollover) < BUCKET_PERIOD {
            return false;
        }

        self.last_rollover = now;
        let count = sampler.take();
        self.push(count);
        debug!(
            "History rollover: count={} next_slot={} valid={}",
            count, self.write_index, self.valid_len
        );
        true
    }

    /// Write one bucket, overwriting the oldest once the ring is full.
    pub fn push(&mut self, count: u32) {
        self.buckets[self.write_index] = count;
        self.write_index = (self.write_index + 1) % N;
        self.valid_len = (self.valid_len + 1).min(N);
    }

    /// Sum of the valid buckets.
    pub fn sum(&self) -> u64 {
        self.iter().map(u64::from).sum()
    }

    /// Number of buckets written so far (at most `N`).
    pub fn len(&self) -> usize {
        self.valid_len
    }

    pub fn is_empty(&self) -> bool {
        self.valid_len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Valid buckets, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let start = if self.valid_len < N {
            0
        } else {
            self.write_index
        };
        (0..self.valid_len).map(move |i| self.buckets[(start + i) % N])
    }

    /// Most recently written bucket.
    pub fn latest(&self) -> Option<u32> {
        if self.valid_len == 0 {
            None
        } else {
            Some(self.buckets[(self.write_index + N - 1) % N])
        }
    }

    pub fn last_rollover(&self) -> Instant {
        self.last_rollover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate alloc;
    use alloc::vec::Vec;

    fn history() -> RollingHistory {
        RollingHistory::new(Instant::from_secs(0))
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut history = history();
        for i in 0..200 {
            history.push(i);
            assert!(history.len() <= 60, "valid length {} > 60", history.len());
        }
        assert_eq!(history.len(), 60);
    }

    #[test]
    fn test_sum_of_partial_history() {
        let mut history = history();
        for count in [2, 3, 1, 4, 2] {
            history.push(count);
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.sum(), 12);
        assert_eq!(history.latest(), Some(2));
    }

    #[test]
    fn test_wraparound_keeps_most_recent_sixty() {
        let mut history = history();
        for count in 1..=65 {
            history.push(count);
        }
        let kept: Vec<u32> = history.iter().collect();
        let expected: Vec<u32> = (6..=65).collect();
        assert_eq!(kept, expected);
        assert_eq!(history.sum(), expected.iter().map(|&c| c as u64).sum::<u64>());
    }

    #[test]
    fn test_sixty_first_push_overwrites_only_the_oldest() {
        let mut history = history();
        for count in 0..60 {
            history.push(count);
        }
        let before: Vec<u32> = history.iter().collect();
        history.push(1000);
        let after: Vec<u32> = history.iter().collect();

        assert_eq!(after[..59], before[1..]);
        assert_eq!(after[59], 1000);
    }

    #[test]
    fn test_rollover_waits_for_full_bucket() {
        let mut history = history();
        let mut sampler = PulseSampler::new(true);
        sampler.sample(true);

        assert!(!history.maybe_rollover(Instant::from_millis(999), &mut sampler));
        assert_eq!(history.len(), 0);
        assert_eq!(sampler.pending(), 1);

        assert!(history.maybe_rollover(Instant::from_millis(1000), &mut sampler));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(1));
        assert_eq!(sampler.pending(), 0);
    }

    #[test]
    fn test_rollover_is_idempotent_within_a_second() {
        let mut history = history();
        let mut sampler = PulseSampler::new(true);

        assert!(history.maybe_rollover(Instant::from_millis(1000), &mut sampler));
        for ms in (1100..2000).step_by(100) {
            sampler.sample(true);
            assert!(!history.maybe_rollover(Instant::from_millis(ms), &mut sampler));
        }
        assert_eq!(history.len(), 1);
        assert_eq!(sampler.pending(), 9);
    }

    #[test]
    fn test_single_bucket_history_keeps_latest() {
        let mut history = RollingHistory::<1>::new(Instant::from_secs(0));
        history.push(4);
        history.push(9);
        assert_eq!(history.len(), 1);
        assert_eq!(history.sum(), 9);
        assert_eq!(history.latest(), Some(9));
    }

    #[test]
    fn test_clock_going_backwards_does_not_roll() {
        let mut history = RollingHistory::<60>::new(Instant::from_secs(10));
        let mut sampler = PulseSampler::new(true);
        assert!(!history.maybe_rollover(Instant::from_secs(3), &mut sampler));
        assert!(history.is_empty());
    }
}
