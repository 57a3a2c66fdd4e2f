//! Fixed-rate render loop
//!
//! One task owns the [`Console`] and all collaborators. Each iteration polls
//! touch, samples the detector line, ticks the console, refreshes the
//! display and then sleeps for the configured period. The sleep bounds the
//! minimum tick period; processing time adds to it.

use core::fmt::Debug;

use embassy_time::{Instant, Timer};
use embedded_hal::digital::InputPin;
use log::warn;

use crate::audio::AudioCue;
use crate::console::{Console, TickInput, TickOutcome};
use crate::display::Surface;
use crate::sensors::{DetectorLine, SensorPresence};
use crate::touch::TouchInput;

/// Collaborators the render loop talks to.
pub struct Hardware<T, P, A, S> {
    pub touch: T,
    pub detector: DetectorLine<P>,
    pub audio: A,
    pub surface: S,
}

impl<T, P: InputPin, A, S> Hardware<T, P, A, S> {
    /// Startup presence flags, with the radiation flag taken from the detector line.
    ///
    /// Build the [`Console`] from this so the sampler gate and the pin read
    /// agree on whether the detector exists.
    pub fn presence(&self, distance: bool, uv: bool) -> SensorPresence {
        SensorPresence {
            radiation: self.detector.is_present(),
            distance,
            uv,
        }
    }
}

impl<T, P, A, S> Hardware<T, P, A, S>
where
    T: TouchInput,
    P: InputPin,
    A: AudioCue,
    S: Surface,
    S::Error: Debug,
{
    /// Sample inputs, tick the console and refresh the surface without sleeping.
    pub fn tick_now(&mut self, console: &mut Console<'_>, now: Instant) -> TickOutcome {
        debug_assert_eq!(
            console.presence().radiation,
            self.detector.is_present(),
            "console built with a detector presence that disagrees with the detector line"
        );

        let input = TickInput {
            now,
            touch: self.touch.poll(),
            line_asserted: self.detector.asserted(),
        };

        let outcome = console.tick(input, &mut self.audio);

        // A failed refresh leaves the previous frame up; the next tick redraws.
        if let Err(e) = console.refresh(&mut self.surface) {
            warn!("Display refresh failed: {:?}", e);
        }
        outcome
    }
}

/// Run one loop iteration, then sleep for the console's tick period.
pub async fn step<T, P, A, S>(
    console: &mut Console<'_>,
    hardware: &mut Hardware<T, P, A, S>,
) -> TickOutcome
where
    T: TouchInput,
    P: InputPin,
    A: AudioCue,
    S: Surface,
    S::Error: Debug,
{
    let outcome = hardware.tick_now(console, Instant::now());
    Timer::after(console.tick_period()).await;
    outcome
}

/// Drive the console until power is removed.
pub async fn run<T, P, A, S>(console: &mut Console<'_>, hardware: &mut Hardware<T, P, A, S>) -> !
where
    T: TouchInput,
    P: InputPin,
    A: AudioCue,
    S: Surface,
    S::Error: Debug,
{
    loop {
        step(console, hardware).await;
    }
}
