//! Simulator-backed display surface

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::SimulatorDisplay;
#[cfg(feature = "window")]
use embedded_graphics_simulator::Window;

use tricorder_core::display::Surface;

/// Wraps a [`SimulatorDisplay`] so the console can flush it.
///
/// Headless builds only count flushes; with the `window` feature a flush
/// pushes the frame to the SDL window.
pub struct SimSurface {
    pub display: SimulatorDisplay<Rgb565>,
    pub frames: u64,
    #[cfg(feature = "window")]
    pub window: Window,
}

impl SimSurface {
    #[cfg(not(feature = "window"))]
    pub fn new(size: Size) -> Self {
        Self {
            display: SimulatorDisplay::new(size),
            frames: 0,
        }
    }

    #[cfg(feature = "window")]
    pub fn new(size: Size, window: Window) -> Self {
        Self {
            display: SimulatorDisplay::new(size),
            frames: 0,
            window,
        }
    }
}

impl OriginDimensions for SimSurface {
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl DrawTarget for SimSurface {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }
}

impl Surface for SimSurface {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.frames += 1;
        #[cfg(feature = "window")]
        self.window.update(&self.display);
        Ok(())
    }
}
