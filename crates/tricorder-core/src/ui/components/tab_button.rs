// src/ui/components/tab_button.rs
//! Tab selector button

use crate::ui::core::{Drawable, TouchPoint};
use crate::ui::styling::{
    COLOR_BUTTON_ACTIVE_BORDER, COLOR_BUTTON_FILL, COLOR_BUTTON_TEXT, FONT_READOUT,
};
use crate::views::Tab;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_layout::align::{Align, horizontal, vertical};

/// Width of the outline drawn around the active tab's button.
const ACTIVE_BORDER_PX: u32 = 2;

/// Hit-test rectangle bound one-to-one to a [`Tab`], plus its visual.
///
/// Containment is half-open like [`Rectangle::contains`]: the left and top
/// edges are inside, the right and bottom edges are not.
pub struct TabButton {
    bounds: Rectangle,
    tab: Tab,
    active: bool,
    dirty: bool,
}

impl TabButton {
    pub fn new(bounds: Rectangle, tab: Tab) -> Self {
        Self {
            bounds,
            tab,
            active: false,
            dirty: true,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn contains(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.dirty = true;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drawable for TabButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let border = if self.active {
            COLOR_BUTTON_ACTIVE_BORDER
        } else {
            COLOR_BUTTON_FILL
        };
        let style = PrimitiveStyleBuilder::new()
            .fill_color(COLOR_BUTTON_FILL)
            .stroke_color(border)
            .stroke_width(ACTIVE_BORDER_PX)
            .build();
        self.bounds.into_styled(style).draw(display)?;

        let text_style = MonoTextStyle::new(FONT_READOUT, COLOR_BUTTON_TEXT);
        Text::with_baseline(self.tab.label(), Point::zero(), text_style, Baseline::Top)
            .align_to(&self.bounds, horizontal::Center, vertical::Center)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
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

    fn button() -> TabButton {
        TabButton::new(
            Rectangle::new(Point::new(10, 200), Size::new(100, 30)),
            Tab::Radiation,
        )
    }

    #[test]
    fn test_contains_is_half_open() {
        let button = button();
        assert!(button.contains(TouchPoint::new(10, 200)));
        assert!(button.contains(TouchPoint::new(109, 229)));
        assert!(!button.contains(TouchPoint::new(110, 215)));
        assert!(!button.contains(TouchPoint::new(50, 230)));
        assert!(!button.contains(TouchPoint::new(9, 215)));
    }

    #[test]
    fn test_set_active_marks_dirty_on_change() {
        let mut button = button();
        button.mark_clean();
        button.set_active(false);
        assert!(!button.is_dirty());
        button.set_active(true);
        assert!(button.is_dirty());
        assert!(button.is_active());
    }
}
