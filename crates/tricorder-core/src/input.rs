//! Touch-to-tab dispatch
//!
//! Buttons are hit-tested in tab-bar order and the first containing button
//! wins, so overlapping rectangles resolve to the earlier tab.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

use crate::audio::AudioCue;
use crate::ui::components::TabButton;
use crate::ui::core::{Drawable, TouchPoint};
use crate::views::{Tab, ViewState};

/// Tab-bar geometry, in priority order.
pub const TAB_BUTTON_BOUNDS: [(Tab, Rectangle); 3] = [
    (
        Tab::Radiation,
        Rectangle::new(Point::new(10, 200), Size::new(100, 30)),
    ),
    (
        Tab::Distance,
        Rectangle::new(Point::new(115, 200), Size::new(100, 30)),
    ),
    (
        Tab::Uv,
        Rectangle::new(Point::new(220, 200), Size::new(90, 30)),
    ),
];

pub struct InputDispatcher {
    buttons: [TabButton; 3],
}

impl InputDispatcher {
    /// Dispatcher over the stock tab-bar geometry.
    pub fn new(active: Tab) -> Self {
        Self::with_buttons(TAB_BUTTON_BOUNDS, active)
    }

    /// Dispatcher over `descriptors`; earlier entries win where rectangles overlap.
    pub fn with_buttons(descriptors: [(Tab, Rectangle); 3], active: Tab) -> Self {
        let mut buttons = descriptors.map(|(tab, bounds)| TabButton::new(bounds, tab));
        for button in buttons.iter_mut() {
            button.set_active(button.tab() == active);
        }
        Self { buttons }
    }

    /// First button in order containing `point`.
    pub fn hit_test(&self, point: TouchPoint) -> Option<Tab> {
        self.buttons
            .iter()
            .find(|button| button.contains(point))
            .map(TabButton::tab)
    }

    /// Route a touch to a tab transition.
    ///
    /// On a hit for a tab other than the active one: play the cue, swap the
    /// attached view and highlight the new button. Misses and hits on the
    /// active tab change nothing and stay silent. Returns the newly attached
    /// tab, if any.
    pub fn dispatch<A: AudioCue>(
        &mut self,
        point: TouchPoint,
        views: &mut ViewState,
        audio: &mut A,
        cue: &str,
    ) -> Option<Tab> {
        let Some(tab) = self.hit_test(point) else {
            debug!("Touch at ({}, {}) missed the tab bar", point.x, point.y);
            return None;
        };

        if tab == views.active() {
            debug!("Touch on already active tab {:?}", tab);
            return None;
        }

        if let Err(e) = audio.play(cue) {
            warn!("Tab cue '{}' failed: {:?}", cue, e);
        }

        views.switch_to(tab);
        for button in self.buttons.iter_mut() {
            button.set_active(button.tab() == tab);
        }
        Some(tab)
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    /// Repaint buttons whose state changed.
    pub fn draw_dirty<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        for button in self.buttons.iter_mut() {
            button.draw_if_dirty(display)?;
        }
        Ok(())
    }

    pub fn mark_dirty(&mut self) {
        for button in self.buttons.iter_mut() {
            button.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::SensorPresence;

    #[derive(Default)]
    struct CountingCue {
        played: u32,
        fail: bool,
    }

    impl AudioCue for CountingCue {
        type Error = &'static str;

        fn play(&mut self, _path: &str) -> Result<(), Self::Error> {
            self.played += 1;
            if self.fail { Err("speaker unplugged") } else { Ok(()) }
        }
    }

    fn setup() -> (InputDispatcher, ViewState, CountingCue) {
        (
            InputDispatcher::new(Tab::Radiation),
            ViewState::new(SensorPresence::ALL, None),
            CountingCue::default(),
        )
    }

    #[test]
    fn test_hit_test_maps_each_button() {
        let (dispatcher, _, _) = setup();
        assert_eq!(dispatcher.hit_test(TouchPoint::new(50, 215)), Some(Tab::Radiation));
        assert_eq!(dispatcher.hit_test(TouchPoint::new(150, 215)), Some(Tab::Distance));
        assert_eq!(dispatcher.hit_test(TouchPoint::new(300, 215)), Some(Tab::Uv));
        assert_eq!(dispatcher.hit_test(TouchPoint::new(112, 215)), None);
        assert_eq!(dispatcher.hit_test(TouchPoint::new(150, 100)), None);
    }

    #[test]
    fn test_dispatch_switches_and_plays_once() {
        let (mut dispatcher, mut views, mut cue) = setup();
        let result = dispatcher.dispatch(TouchPoint::new(150, 215), &mut views, &mut cue, "/t.wav");

        assert_eq!(result, Some(Tab::Distance));
        assert_eq!(views.active(), Tab::Distance);
        assert_eq!(views.transitions(), 1);
        assert_eq!(cue.played, 1);

        let active: heapless::Vec<Tab, 3> = dispatcher
            .buttons()
            .iter()
            .filter(|b| b.is_active())
            .map(|b| b.tab())
            .collect();
        assert_eq!(active.as_slice(), &[Tab::Distance]);
    }

    #[test]
    fn test_touching_active_tab_is_silent() {
        let (mut dispatcher, mut views, mut cue) = setup();
        let result = dispatcher.dispatch(TouchPoint::new(50, 215), &mut views, &mut cue, "/t.wav");
        assert_eq!(result, None);
        assert_eq!(views.transitions(), 0);
        assert_eq!(cue.played, 0);
    }

    #[test]
    fn test_miss_while_on_distance_keeps_distance() {
        let (mut dispatcher, mut views, mut cue) = setup();
        dispatcher.dispatch(TouchPoint::new(150, 215), &mut views, &mut cue, "/t.wav");

        let result = dispatcher.dispatch(TouchPoint::new(160, 60), &mut views, &mut cue, "/t.wav");
        assert_eq!(result, None);
        assert_eq!(views.active(), Tab::Distance);
        assert_eq!(views.transitions(), 1);
        assert_eq!(cue.played, 1);
    }

    #[test]
    fn test_overlap_resolves_to_earlier_button() {
        let dispatcher = InputDispatcher::with_buttons(
            [
                (Tab::Uv, Rectangle::new(Point::new(0, 0), Size::new(100, 50))),
                (Tab::Distance, Rectangle::new(Point::new(50, 0), Size::new(100, 50))),
                (Tab::Radiation, Rectangle::new(Point::new(0, 100), Size::new(10, 10))),
            ],
            Tab::Radiation,
        );

        assert_eq!(dispatcher.hit_test(TouchPoint::new(75, 25)), Some(Tab::Uv));
        assert_eq!(dispatcher.hit_test(TouchPoint::new(120, 25)), Some(Tab::Distance));
        assert_eq!(dispatcher.hit_test(TouchPoint::new(20, 25)), Some(Tab::Uv));
    }

    #[test]
    fn test_overlap_dispatch_switches_to_earlier_tab() {
        let mut dispatcher = InputDispatcher::with_buttons(
            [
                (Tab::Distance, Rectangle::new(Point::new(0, 0), Size::new(100, 50))),
                (Tab::Uv, Rectangle::new(Point::new(0, 0), Size::new(100, 50))),
                (Tab::Radiation, Rectangle::new(Point::new(0, 100), Size::new(10, 10))),
            ],
            Tab::Radiation,
        );
        let mut views = ViewState::new(SensorPresence::ALL, None);
        let mut cue = CountingCue::default();

        let result = dispatcher.dispatch(TouchPoint::new(40, 20), &mut views, &mut cue, "/t.wav");
        assert_eq!(result, Some(Tab::Distance));
        assert_eq!(views.active(), Tab::Distance);
        assert_eq!(cue.played, 1);
    }

    #[test]
    fn test_failed_cue_still_switches() {
        let (mut dispatcher, mut views, _) = setup();
        let mut cue = CountingCue {
            played: 0,
            fail: true,
        };
        let result = dispatcher.dispatch(TouchPoint::new(300, 215), &mut views, &mut cue, "/t.wav");
        assert_eq!(result, Some(Tab::Uv));
        assert_eq!(views.active(), Tab::Uv);
    }
}
