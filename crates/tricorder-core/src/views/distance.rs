// src/views/distance.rs
//! Proximity tab placeholder

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::{Emblem, clear_content, draw_emblem};
use crate::ui::components::Label;
use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_PRIMARY_TEXT, COLOR_WARNING_TEXT};

pub const DISTANCE_PLACEHOLDER: &str = "Distance: -- m";
pub const MISSING_TEXT: &str = "Sensor not detected.";

pub struct DistanceView {
    distance: Label,
    missing: Option<Label>,
    emblem: Option<Emblem>,
    needs_full_redraw: bool,
}

impl DistanceView {
    pub fn new(sensor_present: bool, emblem: Option<Emblem>) -> Self {
        Self {
            distance: Label::new(70, 80, 200, DISTANCE_PLACEHOLDER, COLOR_PRIMARY_TEXT),
            missing: (!sensor_present)
                .then(|| Label::new(70, 130, 200, MISSING_TEXT, COLOR_WARNING_TEXT)),
            emblem,
            needs_full_redraw: true,
        }
    }

    pub fn distance_text(&self) -> &str {
        self.distance.text()
    }

    pub fn shows_missing_sensor(&self) -> bool {
        self.missing.is_some()
    }

    pub(crate) fn on_attach(&mut self) {
        self.needs_full_redraw = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.needs_full_redraw
            || self.distance.is_dirty()
            || self.missing.as_ref().is_some_and(|l| l.is_dirty())
    }

    pub(crate) fn render<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if self.needs_full_redraw {
            self.distance.mark_dirty();
            if let Some(missing) = self.missing.as_mut() {
                missing.mark_dirty();
            }
            clear_content(display)?;
            draw_emblem(self.emblem, display)?;
            self.needs_full_redraw = false;
        }

        self.distance.draw_if_dirty(display)?;
        if let Some(missing) = self.missing.as_mut() {
            missing.draw_if_dirty(display)?;
        }
        Ok(())
    }
}
