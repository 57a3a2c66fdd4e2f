//! Sensor presence and the detector input line
//!
//! Presence is probed once by the application at startup and never again.
//! A missing sensor is a degraded state, not an error: readouts fall back to
//! placeholder values and the loop carries on.

mod detector;

pub use detector::DetectorLine;

/// Which sensors answered at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorPresence {
    pub radiation: bool,
    pub distance: bool,
    pub uv: bool,
}

impl SensorPresence {
    pub const ALL: Self = Self {
        radiation: true,
        distance: true,
        uv: true,
    };
}
