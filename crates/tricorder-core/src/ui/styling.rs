//! Colour and font presets
//!
//! Black canvas with dark-blue side panels. Readouts are cyan or yellow.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::iso_8859_1::{FONT_9X15_BOLD, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Convert a `0xRRGGBB` literal to RGB565.
pub const fn rgb(hex: u32) -> Rgb565 {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub const COLOR_BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const COLOR_SIDE_PANEL: Rgb565 = rgb(0x003366);
pub const COLOR_PRIMARY_TEXT: Rgb565 = rgb(0x00FFFF);
pub const COLOR_SECONDARY_TEXT: Rgb565 = rgb(0xFFFF00);
pub const COLOR_WARNING_TEXT: Rgb565 = rgb(0xFF0000);
pub const COLOR_BUTTON_FILL: Rgb565 = Rgb565::WHITE;
pub const COLOR_BUTTON_TEXT: Rgb565 = Rgb565::BLACK;
pub const COLOR_BUTTON_ACTIVE_BORDER: Rgb565 = rgb(0x00FFFF);

/// Readout font; ISO 8859-1 so `µ` renders.
pub const FONT_READOUT: &MonoFont<'static> = &FONT_9X15_BOLD;

/// Header font for the scan indicator.
pub const FONT_HEADER: &MonoFont<'static> = &FONT_10X20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(rgb(0xFFFFFF), Rgb565::WHITE);
        assert_eq!(rgb(0x000000), Rgb565::BLACK);
        assert_eq!(rgb(0x003366), Rgb565::new(0, 0x33 >> 2, 0x66 >> 3));
    }
}
