//! Display surface collaborator and the static console chrome
//!
//! The console draws through `embedded-graphics` primitives onto a
//! [`Surface`] and asks it to flush once per tick. Panels that update in
//! place can make `flush` a no-op; framebuffered panels push their buffer.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_BACKGROUND, COLOR_SIDE_PANEL};

pub trait Surface: DrawTarget<Color = Rgb565> {
    /// Push everything drawn so far to the panel.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub const SCREEN: Rectangle = Rectangle::new(
    Point::zero(),
    Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX),
);

const LEFT_PANEL: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(30, DISPLAY_HEIGHT_PX));
const RIGHT_PANEL: Rectangle = Rectangle::new(Point::new(290, 0), Size::new(30, DISPLAY_HEIGHT_PX));

/// Background and side panels; painted once after startup.
pub struct Chrome {
    dirty: bool,
}

impl Chrome {
    pub const fn new() -> Self {
        Self { dirty: true }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Chrome {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        SCREEN
            .into_styled(PrimitiveStyle::with_fill(COLOR_BACKGROUND))
            .draw(display)?;
        LEFT_PANEL
            .into_styled(PrimitiveStyle::with_fill(COLOR_SIDE_PANEL))
            .draw(display)?;
        RIGHT_PANEL
            .into_styled(PrimitiveStyle::with_fill(COLOR_SIDE_PANEL))
            .draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        SCREEN
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_chrome_paints_once() {
        let mut chrome = Chrome::new();
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        assert!(chrome.draw_if_dirty(&mut display).unwrap());
        assert!(!chrome.draw_if_dirty(&mut display).unwrap());
        assert_eq!(chrome.bounds(), SCREEN);
    }
}
