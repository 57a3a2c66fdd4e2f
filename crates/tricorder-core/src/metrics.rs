//! Count-rate and dose-rate derivation
//!
//! Both figures are pure functions of the current history contents and are
//! recomputed on every refresh; nothing is cached.

use core::fmt::Write;

use log::warn;

use crate::config::BUCKET_SECONDS;
use crate::history::RollingHistory;

/// Counts per minute over the valid part of the history.
///
/// Returns 0 for an empty history.
pub fn cpm<const N: usize>(history: &RollingHistory<N>) -> f32 {
    let len = history.len();
    if len == 0 {
        return 0.0;
    }
    (history.sum() as f32 * 60.0) / (len as f32 * BUCKET_SECONDS as f32)
}

/// Snapshot of the radiation figures shown on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub cpm: f32,
    /// Estimated µSv/h
    pub dose_rate: f32,
}

impl Metrics {
    pub const ZERO: Self = Self {
        cpm: 0.0,
        dose_rate: 0.0,
    };

    /// Derive the figures from `history`.
    ///
    /// The dose rate is `cpm / calibration` when the detector is present and
    /// 0 otherwise, whatever the history holds.
    pub fn compute<const N: usize>(
        history: &RollingHistory<N>,
        sensor_present: bool,
        calibration: f32,
    ) -> Self {
        let cpm = cpm(history);
        let dose_rate = if sensor_present { cpm / calibration } else { 0.0 };
        Self { cpm, dose_rate }
    }

    /// `CPM: 144.0`
    pub fn cpm_text(&self) -> heapless::String<32> {
        let mut text = heapless::String::new();
        if write!(text, "CPM: {:.1}", self.cpm).is_err() {
            warn!("CPM readout truncated for {}", self.cpm);
        }
        text
    }

    /// `DOSE: 2.715 µSv/h`
    pub fn dose_text(&self) -> heapless::String<32> {
        let mut text = heapless::String::new();
        if write!(text, "DOSE: {:.3} µSv/h", self.dose_rate).is_err() {
            warn!("Dose readout truncated for {}", self.dose_rate);
        }
        text
    }
}
