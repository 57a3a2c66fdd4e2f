// src/views/uv.rs
//! UV tab placeholder

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::{Emblem, clear_content, draw_emblem};
use crate::ui::components::Label;
use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_PRIMARY_TEXT, COLOR_SECONDARY_TEXT, COLOR_WARNING_TEXT};

pub const INDEX_PLACEHOLDER: &str = "UV Index: --";
pub const INTENSITY_PLACEHOLDER: &str = "UV I: --";
pub const MISSING_TEXT: &str = "No sensor detected.";

pub struct UvView {
    index: Label,
    intensity: Label,
    missing: Option<Label>,
    emblem: Option<Emblem>,
    needs_full_redraw: bool,
}

impl UvView {
    pub fn new(sensor_present: bool, emblem: Option<Emblem>) -> Self {
        Self {
            index: Label::new(70, 80, 200, INDEX_PLACEHOLDER, COLOR_PRIMARY_TEXT),
            intensity: Label::new(70, 100, 200, INTENSITY_PLACEHOLDER, COLOR_SECONDARY_TEXT),
            missing: (!sensor_present)
                .then(|| Label::new(70, 130, 200, MISSING_TEXT, COLOR_WARNING_TEXT)),
            emblem,
            needs_full_redraw: true,
        }
    }

    pub fn index_text(&self) -> &str {
        self.index.text()
    }

    pub fn intensity_text(&self) -> &str {
        self.intensity.text()
    }

    pub fn shows_missing_sensor(&self) -> bool {
        self.missing.is_some()
    }

    pub(crate) fn on_attach(&mut self) {
        self.needs_full_redraw = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.needs_full_redraw
            || self.index.is_dirty()
            || self.intensity.is_dirty()
            || self.missing.as_ref().is_some_and(|l| l.is_dirty())
    }

    pub(crate) fn render<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if self.needs_full_redraw {
            self.index.mark_dirty();
            self.intensity.mark_dirty();
            if let Some(missing) = self.missing.as_mut() {
                missing.mark_dirty();
            }
            clear_content(display)?;
            draw_emblem(self.emblem, display)?;
            self.needs_full_redraw = false;
        }

        self.index.draw_if_dirty(display)?;
        self.intensity.draw_if_dirty(display)?;
        if let Some(missing) = self.missing.as_mut() {
            missing.draw_if_dirty(display)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_and_notice() {
        let view = UvView::new(false, None);
        assert_eq!(view.index_text(), "UV Index: --");
        assert_eq!(view.intensity_text(), "UV I: --");
        assert!(view.shows_missing_sensor());
        assert!(!UvView::new(true, None).shows_missing_sensor());
    }
}
