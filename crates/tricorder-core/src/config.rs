//! Console configuration
//!
//! Runtime settings are stored as a compact `postcard` blob (typically baked
//! into flash next to the firmware image). Everything that never changes
//! between deployments is a compile-time constant.

use alloc::vec::Vec;
use embassy_time::Duration;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Number of one-second buckets kept in the rolling history (one minute).
pub const HISTORY_CAPACITY: usize = 60;

/// Width of a single history bucket in seconds.
pub const BUCKET_SECONDS: u64 = 1;

/// CPM to µSv/h divisor for the stock detector tube.
pub const DEFAULT_CALIBRATION: f32 = 53.032;

/// Render loop period in milliseconds.
pub const DEFAULT_TICK_PERIOD_MS: u32 = 100;

/// Clip played when the active tab changes.
pub const DEFAULT_TAB_SOUND: &str = "/sounds/tab.wav";

pub const DISPLAY_WIDTH_PX: u32 = 320;
pub const DISPLAY_HEIGHT_PX: u32 = 240;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Config blob could not be decoded")]
    Decode,
    #[error("Config could not be encoded")]
    Encode,
    #[error("Calibration constant must be finite and positive, got {0}")]
    InvalidCalibration(f32),
    #[error("Tick period must be non-zero")]
    ZeroTickPeriod,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(bound(deserialize = "'de: 'a"))]
pub struct ConsoleConfig<'a> {
    /// Divisor applied to CPM to estimate the dose rate in µSv/h.
    pub calibration: f32,
    /// Sleep between render ticks.
    pub tick_period_ms: u32,
    /// Opaque asset path handed to the audio collaborator on tab change.
    pub tab_sound: &'a str,
}

impl Default for ConsoleConfig<'_> {
    fn default() -> Self {
        Self {
            calibration: DEFAULT_CALIBRATION,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            tab_sound: DEFAULT_TAB_SOUND,
        }
    }
}

impl<'a> ConsoleConfig<'a> {
    /// Decode and validate a config blob.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|e| {
            log::error!("Config decode failed: {:?}", e);
            ConfigError::Decode
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Encode)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.calibration.is_finite() || self.calibration <= 0.0 {
            return Err(ConfigError::InvalidCalibration(self.calibration));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.calibration, 53.032);
        assert_eq!(config.tick_period(), Duration::from_millis(100));
        assert_eq!(config.tab_sound, "/sounds/tab.wav");
    }

    #[test]
    fn test_blob_decodes_back() {
        let config = ConsoleConfig {
            calibration: 120.5,
            tick_period_ms: 50,
            tab_sound: "/beep.wav",
        };
        let bytes = config.to_vec().unwrap();
        let decoded = ConsoleConfig::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_rejects_bad_calibration() {
        let config = ConsoleConfig {
            calibration: 0.0,
            ..ConsoleConfig::default()
        };
        let bytes = config.to_vec().unwrap();
        assert_eq!(
            ConsoleConfig::from_bytes(&bytes),
            Err(ConfigError::InvalidCalibration(0.0))
        );
    }

    #[test]
    fn test_rejects_zero_tick_period() {
        let config = ConsoleConfig {
            tick_period_ms: 0,
            ..ConsoleConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickPeriod));
    }

    #[test]
    fn test_truncated_blob_is_decode_error() {
        assert_eq!(ConsoleConfig::from_bytes(&[0x01]), Err(ConfigError::Decode));
    }
}
