//! Console state and the per-tick update
//!
//! [`Console`] owns every piece of mutable state the render loop touches:
//! pulse sampler, rolling history, view state, tab bar and blink indicator.
//! A tick is a plain method call taking the inputs sampled for that tick, so
//! the whole loop body can be exercised without hardware.
//!
//! Order within a tick is fixed:
//! 1. detector sample and history rollover
//! 2. touch dispatch (may switch tabs)
//! 3. blink phase from wall-clock seconds
//! 4. CPM / dose text when the radiation tab is attached
//!
//! [`Console::refresh`] then repaints what changed and flushes the surface
//! unconditionally.

use embassy_time::{Duration, Instant};
use log::info;

use crate::audio::AudioCue;
use crate::config::ConsoleConfig;
use crate::display::{Chrome, Surface};
use crate::history::RollingHistory;
use crate::input::InputDispatcher;
use crate::metrics::Metrics;
use crate::sampling::PulseSampler;
use crate::sensors::SensorPresence;
use crate::ui::components::BlinkIndicator;
use crate::ui::core::{Drawable, TouchPoint};
use crate::views::{Emblem, Tab, ViewState};

/// Inputs sampled at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub now: Instant,
    pub touch: Option<TouchPoint>,
    /// Detector line state for this tick (already active-low decoded)
    pub line_asserted: bool,
}

/// What a tick changed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    pub rolled_over: bool,
    pub transition: Option<Tab>,
    /// Metrics shown this tick, when the radiation tab was attached
    pub metrics: Option<Metrics>,
}

pub struct Console<'a> {
    calibration: f32,
    tick_period: Duration,
    tab_sound: &'a str,
    presence: SensorPresence,
    sampler: PulseSampler,
    history: RollingHistory,
    views: ViewState,
    dispatcher: InputDispatcher,
    chrome: Chrome,
    indicator: BlinkIndicator,
}

impl<'a> Console<'a> {
    pub fn new(
        config: &ConsoleConfig<'a>,
        presence: SensorPresence,
        emblem: Option<Emblem>,
        start: Instant,
    ) -> Self {
        info!(
            "Console starting: radiation={} distance={} uv={} K={}",
            presence.radiation, presence.distance, presence.uv, config.calibration
        );
        if emblem.is_none() {
            info!("No emblem supplied, views will omit it");
        }

        let views = ViewState::new(presence, emblem);
        let dispatcher = InputDispatcher::new(views.active());

        Self {
            calibration: config.calibration,
            tick_period: config.tick_period(),
            tab_sound: config.tab_sound,
            presence,
            sampler: PulseSampler::new(presence.radiation),
            history: RollingHistory::new(start),
            views,
            dispatcher,
            chrome: Chrome::new(),
            indicator: BlinkIndicator::new(180, 20, "SCANNING"),
        }
    }

    /// Advance the console by one render tick.
    pub fn tick<A: AudioCue>(&mut self, input: TickInput, audio: &mut A) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.sampler.sample(input.line_asserted);
        outcome.rolled_over = self.history.maybe_rollover(input.now, &mut self.sampler);

        if let Some(point) = input.touch {
            outcome.transition =
                self.dispatcher
                    .dispatch(point, &mut self.views, audio, self.tab_sound);
        }

        self.indicator.update(input.now);

        if self.views.active() == Tab::Radiation {
            let metrics = self.metrics();
            self.views.radiation_mut().set_metrics(&metrics);
            outcome.metrics = Some(metrics);
        }

        outcome
    }

    /// Repaint dirty widgets and flush the surface.
    ///
    /// The flush happens every call, even when nothing was repainted.
    pub fn refresh<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        if self.chrome.draw_if_dirty(surface)? {
            // The background wipe covers everything drawn on top of it.
            self.indicator.mark_dirty();
            self.dispatcher.mark_dirty();
            self.views.invalidate();
        }
        self.indicator.draw_if_dirty(surface)?;
        self.dispatcher.draw_dirty(surface)?;
        self.views.draw_attached(surface)?;
        surface.flush()
    }

    /// Current figures, derived fresh from the history.
    pub fn metrics(&self) -> Metrics {
        Metrics::compute(&self.history, self.presence.radiation, self.calibration)
    }

    pub fn active_tab(&self) -> Tab {
        self.views.active()
    }

    pub fn views(&self) -> &ViewState {
        &self.views
    }

    pub fn history(&self) -> &RollingHistory {
        &self.history
    }

    pub fn sampler(&self) -> &PulseSampler {
        &self.sampler
    }

    pub fn indicator(&self) -> &BlinkIndicator {
        &self.indicator
    }

    pub fn presence(&self) -> SensorPresence {
        self.presence
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;

    fn console(presence: SensorPresence) -> Console<'static> {
        Console::new(
            &ConsoleConfig::default(),
            presence,
            None,
            Instant::from_secs(0),
        )
    }

    fn input(ms: u64, asserted: bool) -> TickInput {
        TickInput {
            now: Instant::from_millis(ms),
            touch: None,
            line_asserted: asserted,
        }
    }

    #[test]
    fn test_pulses_roll_into_history_each_second() {
        let mut console = console(SensorPresence::ALL);
        let mut audio = Silent;

        // Ten ticks per second, three asserted samples in the first second.
        for step in 1..=10u64 {
            let asserted = matches!(step, 2 | 5 | 7);
            console.tick(input(step * 100, asserted), &mut audio);
        }

        assert_eq!(console.history().len(), 1);
        assert_eq!(console.history().latest(), Some(3));
        assert_eq!(console.metrics().cpm, 180.0);
    }

    #[test]
    fn test_radiation_text_updates_every_tick() {
        let mut console = console(SensorPresence::ALL);
        let outcome = console.tick(input(100, false), &mut Silent);
        assert_eq!(outcome.metrics, Some(Metrics::ZERO));
        assert_eq!(console.views().radiation().cpm_text(), "CPM: 0.0");
        assert_eq!(console.views().radiation().dose_text(), "DOSE: 0.000 µSv/h");
    }

    #[test]
    fn test_other_tabs_skip_metric_text() {
        let mut console = console(SensorPresence::ALL);
        let outcome = console.tick(
            TickInput {
                now: Instant::from_millis(100),
                touch: Some(TouchPoint::new(250, 210)),
                line_asserted: false,
            },
            &mut Silent,
        );
        assert_eq!(outcome.transition, Some(Tab::Uv));
        assert_eq!(outcome.metrics, None);
        assert_eq!(console.views().radiation().cpm_text(), "CPM: --");
    }

    #[test]
    fn test_absent_detector_reads_zero() {
        let mut console = console(SensorPresence::default());
        for step in 1..=30u64 {
            console.tick(input(step * 100, true), &mut Silent);
        }
        assert_eq!(console.history().len(), 3);
        assert_eq!(console.history().sum(), 0);
        assert_eq!(console.metrics(), Metrics::ZERO);
    }
}
