// src/views/radiation.rs
//! Radiation tab: CPM and dose-rate readouts

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::{Emblem, clear_content, draw_emblem};
use crate::metrics::Metrics;
use crate::ui::components::Label;
use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_PRIMARY_TEXT, COLOR_SECONDARY_TEXT, COLOR_WARNING_TEXT};

pub const CPM_PLACEHOLDER: &str = "CPM: --";
pub const DOSE_PLACEHOLDER: &str = "DOSE: -- µSv/h";
pub const MISSING_TEXT: &str = "Sensor not detected.";

const TEXT_X: i32 = 70;
const TEXT_WIDTH: u32 = 200;

pub struct RadiationView {
    cpm: Label,
    dose: Label,
    missing: Option<Label>,
    emblem: Option<Emblem>,
    needs_full_redraw: bool,
}

impl RadiationView {
    pub fn new(sensor_present: bool, emblem: Option<Emblem>) -> Self {
        let missing = (!sensor_present)
            .then(|| Label::new(TEXT_X, 130, TEXT_WIDTH, MISSING_TEXT, COLOR_WARNING_TEXT));

        Self {
            cpm: Label::new(TEXT_X, 80, TEXT_WIDTH, CPM_PLACEHOLDER, COLOR_PRIMARY_TEXT),
            dose: Label::new(TEXT_X, 100, TEXT_WIDTH, DOSE_PLACEHOLDER, COLOR_SECONDARY_TEXT),
            missing,
            emblem,
            needs_full_redraw: true,
        }
    }

    /// Rewrite both readouts from a fresh metrics snapshot.
    pub fn set_metrics(&mut self, metrics: &Metrics) {
        self.cpm.set_text(&metrics.cpm_text());
        self.dose.set_text(&metrics.dose_text());
    }

    pub fn cpm_text(&self) -> &str {
        self.cpm.text()
    }

    pub fn dose_text(&self) -> &str {
        self.dose.text()
    }

    pub fn shows_missing_sensor(&self) -> bool {
        self.missing.is_some()
    }

    pub(crate) fn on_attach(&mut self) {
        self.needs_full_redraw = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.needs_full_redraw
            || self.cpm.is_dirty()
            || self.dose.is_dirty()
            || self.missing.as_ref().is_some_and(|l| l.is_dirty())
    }

    pub(crate) fn render<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if self.needs_full_redraw {
            // Cleared only once the wipe lands, so a failed draw retries next refresh.
            self.cpm.mark_dirty();
            self.dose.mark_dirty();
            if let Some(missing) = self.missing.as_mut() {
                missing.mark_dirty();
            }
            clear_content(display)?;
            draw_emblem(self.emblem, display)?;
            self.needs_full_redraw = false;
        }

        self.cpm.draw_if_dirty(display)?;
        self.dose.draw_if_dirty(display)?;
        if let Some(missing) = self.missing.as_mut() {
            missing.draw_if_dirty(display)?;
        }
        Ok(())
    }
}
