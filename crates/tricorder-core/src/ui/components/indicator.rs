// src/ui/components/indicator.rs
//! Blinking "SCANNING" indicator

use crate::ui::components::Label;
use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_BACKGROUND, COLOR_SECONDARY_TEXT, FONT_HEADER};
use embassy_time::Instant;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A label driven by a 1 Hz square wave derived from wall-clock seconds.
///
/// Lit on even seconds, blanked (drawn in the background colour) on odd
/// seconds. The phase depends only on the timestamp passed to
/// [`update`](Self::update), never on how many refreshes happened.
pub struct BlinkIndicator {
    label: Label,
    lit_color: Rgb565,
}

impl BlinkIndicator {
    pub fn new(x: i32, center_y: i32, text: &str) -> Self {
        let width = FONT_HEADER.character_size.width * text.chars().count() as u32;
        Self {
            label: Label::with_font(x, center_y, width, text, COLOR_SECONDARY_TEXT, FONT_HEADER),
            lit_color: COLOR_SECONDARY_TEXT,
        }
    }

    /// `true` when the indicator is lit at `now`.
    pub fn phase(now: Instant) -> bool {
        now.as_secs() % 2 == 0
    }

    /// Apply the phase for `now`. Returns `true` if the visible state changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let color = if Self::phase(now) {
            self.lit_color
        } else {
            COLOR_BACKGROUND
        };
        let changed = self.label.color() != color;
        self.label.set_color(color);
        changed
    }

    pub fn is_lit(&self) -> bool {
        self.label.color() == self.lit_color
    }
}

impl Drawable for BlinkIndicator {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.label.draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.label.bounds()
    }

    fn is_dirty(&self) -> bool {
        self.label.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.label.mark_clean()
    }

    fn mark_dirty(&mut self) {
        self.label.mark_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wave_follows_whole_seconds() {
        assert!(BlinkIndicator::phase(Instant::from_millis(0)));
        assert!(BlinkIndicator::phase(Instant::from_millis(999)));
        assert!(!BlinkIndicator::phase(Instant::from_millis(1000)));
        assert!(!BlinkIndicator::phase(Instant::from_millis(1999)));
        assert!(BlinkIndicator::phase(Instant::from_millis(2000)));
    }

    #[test]
    fn test_update_reports_only_edges() {
        let mut indicator = BlinkIndicator::new(180, 20, "SCANNING");
        assert!(!indicator.update(Instant::from_millis(100)));
        assert!(indicator.is_lit());
        assert!(indicator.update(Instant::from_millis(1100)));
        assert!(!indicator.is_lit());
        assert!(!indicator.update(Instant::from_millis(1200)));
        assert!(indicator.update(Instant::from_millis(2000)));
        assert!(indicator.is_lit());
    }
}
