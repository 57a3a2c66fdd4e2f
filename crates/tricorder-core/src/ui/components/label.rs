// src/ui/components/label.rs
//! Single-line text label

use crate::ui::core::Drawable;
use crate::ui::styling::{COLOR_BACKGROUND, FONT_READOUT};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

/// Mutable single-line text on an opaque background.
///
/// The label owns a fixed rectangle and repaints its background before the
/// glyphs, so shorter text fully replaces longer text without a page clear.
/// Holds up to 32 bytes of text.
pub struct Label {
    bounds: Rectangle,
    text: heapless::String<32>,
    color: Rgb565,
    font: &'static MonoFont<'static>,
    dirty: bool,
}

impl Label {
    /// Create a label whose text is vertically centred on `(x, center_y)`.
    pub fn new(x: i32, center_y: i32, width: u32, text: &str, color: Rgb565) -> Self {
        Self::with_font(x, center_y, width, text, color, FONT_READOUT)
    }

    pub fn with_font(
        x: i32,
        center_y: i32,
        width: u32,
        text: &str,
        color: Rgb565,
        font: &'static MonoFont<'static>,
    ) -> Self {
        let height = font.character_size.height;
        let bounds = Rectangle::new(
            Point::new(x, center_y - (height / 2) as i32),
            Size::new(width, height),
        );

        let mut label_text = heapless::String::new();
        label_text.push_str(text).ok();

        Self {
            bounds,
            text: label_text,
            color,
            font,
            dirty: true,
        }
    }

    /// Replace the text, marking the label dirty only when it changed.
    pub fn set_text(&mut self, text: &str) {
        if self.text.as_str() != text {
            self.text.clear();
            self.text.push_str(text).ok();
            self.dirty = true;
        }
    }

    pub fn set_color(&mut self, color: Rgb565) {
        if self.color != color {
            self.color = color;
            self.dirty = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }
}

impl Drawable for Label {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(COLOR_BACKGROUND))
            .draw(display)?;

        let style = MonoTextStyle::new(self.font, self.color);
        Text::with_baseline(&self.text, self.bounds.top_left, style, Baseline::Top)
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
