use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

/// Pulse output of the radiation detector.
///
/// The line is active-low: a pulse holds it below the pull-up. `None` means
/// the detector could not be claimed at startup and is treated as permanently
/// absent. Read failures are logged and reported as "not asserted" so the
/// render loop never sees them.
pub struct DetectorLine<P> {
    pin: Option<P>,
    read_errors: u32,
}

impl<P: InputPin> DetectorLine<P> {
    pub fn new(pin: Option<P>) -> Self {
        if pin.is_none() {
            warn!("Radiation detector not found, readouts will stay at zero");
        }
        Self {
            pin,
            read_errors: 0,
        }
    }

    pub fn is_present(&self) -> bool {
        self.pin.is_some()
    }

    /// Sample the line once. `true` while a pulse holds the line low.
    pub fn asserted(&mut self) -> bool {
        let Some(pin) = self.pin.as_mut() else {
            return false;
        };

        match pin.is_low() {
            Ok(low) => low,
            Err(e) => {
                // Only the first failure is logged; a flapping line would flood the log.
                if self.read_errors == 0 {
                    warn!("Detector line read failed: {:?}", e.kind());
                }
                self.read_errors = self.read_errors.saturating_add(1);
                false
            }
        }
    }

    /// Failed reads since startup.
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }
}
