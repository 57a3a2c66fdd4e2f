//! Synthetic collaborators: detector line, speaker and emblem asset

use std::convert::Infallible;
use std::path::Path;

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_hal::digital::{ErrorType, InputPin};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tricorder_core::audio::AudioCue;
use tricorder_core::views::Emblem;

/// Chance per tick that a pulse holds the line low (~30 CPM at 10 Hz).
const PULSE_PROBABILITY: f64 = 0.05;

/// Emblem bitmaps are raw big-endian RGB565 of this width.
pub const EMBLEM_WIDTH: u32 = 40;

/// Detector line with seeded random pulses.
pub struct SyntheticDetector {
    rng: StdRng,
}

impl SyntheticDetector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ErrorType for SyntheticDetector {
    type Error = Infallible;
}

impl InputPin for SyntheticDetector {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_low()?)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.rng.random_bool(PULSE_PROBABILITY))
    }
}

/// Logs clips instead of playing them.
pub struct LogAudio;

impl AudioCue for LogAudio {
    type Error = Infallible;

    fn play(&mut self, path: &str) -> Result<(), Self::Error> {
        info!("Audio cue: {}", path);
        Ok(())
    }
}

/// Load the corner emblem, or `None` if the asset is missing or malformed.
pub fn load_emblem(path: &Path) -> Option<Emblem> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load emblem {}: {}", path.display(), e);
            return None;
        }
    };

    let row_bytes = (EMBLEM_WIDTH * 2) as usize;
    if data.is_empty() || data.len() % row_bytes != 0 {
        warn!(
            "Emblem {} is {} bytes, not a whole number of {}-px RGB565 rows",
            path.display(),
            data.len(),
            EMBLEM_WIDTH
        );
        return None;
    }

    info!(
        "Emblem loaded: {}x{}",
        EMBLEM_WIDTH,
        data.len() / row_bytes
    );
    let data: &'static [u8] = Box::leak(data.into_boxed_slice());
    Some(Box::leak(Box::new(ImageRaw::<Rgb565>::new(
        data,
        EMBLEM_WIDTH,
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_rate_is_plausible() {
        let mut detector = SyntheticDetector::new(0xC0FFEE);
        let pulses = (0..10_000).filter(|_| detector.is_low().unwrap()).count();
        assert!((300..700).contains(&pulses), "pulses = {pulses}");
    }

    #[test]
    fn test_same_seed_replays_same_pulses() {
        let mut a = SyntheticDetector::new(7);
        let mut b = SyntheticDetector::new(7);
        for _ in 0..200 {
            assert_eq!(a.is_low().unwrap(), b.is_low().unwrap());
        }
    }

    #[test]
    fn test_missing_emblem_is_omitted() {
        assert!(load_emblem(Path::new("/definitely/not/here.raw")).is_none());
    }
}
