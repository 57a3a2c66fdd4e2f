// src/views/mod.rs
//! Tabbed content views
//!
//! The console shows exactly one content view at a time. [`ViewState`] owns
//! all three views and a single [`Tab`] naming the attached one, so a
//! renderer holding the state can only ever see one attached view. Switching
//! is a single `&mut` call that swaps the active tab and schedules the new
//! view for a full repaint of the content area.

pub mod distance;
pub mod radiation;
pub mod uv;

pub use distance::DistanceView;
pub use radiation::RadiationView;
pub use uv::UvView;

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::info;

use crate::sensors::SensorPresence;
use crate::ui::styling::COLOR_BACKGROUND;

/// Region between the header and the tab bar, inside the side panels.
pub const CONTENT_AREA: Rectangle = Rectangle::new(Point::new(30, 40), Size::new(260, 155));

/// Where the optional emblem is placed inside every view.
pub const EMBLEM_TOP_LEFT: Point = Point::new(236, 140);

/// Bitmap shown in the corner of each view, supplied by the application.
pub type Emblem = &'static ImageRaw<'static, Rgb565>;

/// The three mutually exclusive console tabs, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Radiation,
    Distance,
    Uv,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Radiation, Tab::Distance, Tab::Uv];

    /// Text on the tab's button.
    pub const fn label(self) -> &'static str {
        match self {
            Tab::Radiation => "Rad",
            Tab::Distance => "Prox",
            Tab::Uv => "UV",
        }
    }
}

/// Draw the emblem if one was loaded.
pub(crate) fn draw_emblem<D: DrawTarget<Color = Rgb565>>(
    emblem: Option<Emblem>,
    display: &mut D,
) -> Result<(), D::Error> {
    if let Some(raw) = emblem {
        Image::new(raw, EMBLEM_TOP_LEFT).draw(display)?;
    }
    Ok(())
}

/// Clear the content area before a full view repaint.
pub(crate) fn clear_content<D: DrawTarget<Color = Rgb565>>(display: &mut D) -> Result<(), D::Error> {
    CONTENT_AREA
        .into_styled(PrimitiveStyle::with_fill(COLOR_BACKGROUND))
        .draw(display)
}

/// Active tab plus the single attached content view.
pub struct ViewState {
    active: Tab,
    radiation: RadiationView,
    distance: DistanceView,
    uv: UvView,
    transitions: u32,
}

impl ViewState {
    /// Build all views and attach the radiation view.
    pub fn new(presence: SensorPresence, emblem: Option<Emblem>) -> Self {
        let mut state = Self {
            active: Tab::Radiation,
            radiation: RadiationView::new(presence.radiation, emblem),
            distance: DistanceView::new(presence.distance, emblem),
            uv: UvView::new(presence.uv, emblem),
            transitions: 0,
        };
        state.invalidate();
        state
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Detach the current view and attach the one for `tab`.
    ///
    /// Returns `false` without touching anything when `tab` is already active.
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        if tab == self.active {
            return false;
        }

        info!("View transition: {:?} -> {:?}", self.active, tab);
        self.active = tab;
        self.transitions = self.transitions.wrapping_add(1);
        self.invalidate();
        true
    }

    /// Schedule a full repaint of the attached view.
    pub fn invalidate(&mut self) {
        match self.active {
            Tab::Radiation => self.radiation.on_attach(),
            Tab::Distance => self.distance.on_attach(),
            Tab::Uv => self.uv.on_attach(),
        }
    }

    /// Number of detach/attach swaps performed since startup.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn radiation(&self) -> &RadiationView {
        &self.radiation
    }

    pub fn radiation_mut(&mut self) -> &mut RadiationView {
        &mut self.radiation
    }

    pub fn distance(&self) -> &DistanceView {
        &self.distance
    }

    pub fn uv(&self) -> &UvView {
        &self.uv
    }

    /// Repaint whatever is dirty in the attached view.
    pub fn draw_attached<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self.active {
            Tab::Radiation => self.radiation.render(display),
            Tab::Distance => self.distance.render(display),
            Tab::Uv => self.uv.render(display),
        }
    }

    pub fn attached_is_dirty(&self) -> bool {
        match self.active {
            Tab::Radiation => self.radiation.is_dirty(),
            Tab::Distance => self.distance.is_dirty(),
            Tab::Uv => self.uv.is_dirty(),
        }
    }
}
