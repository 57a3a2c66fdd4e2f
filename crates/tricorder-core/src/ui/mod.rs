// src/ui/mod.rs
//! Console widget layer
//!
//! Widgets track their own dirty state and redraw only when it is set, while
//! the console still flushes the panel on every tick:
//! - Core traits and touch types
//! - Labels, tab buttons and the blinking scan indicator
//! - Colour and font presets

pub mod components;
pub mod core;
pub mod styling;

pub use components::{BlinkIndicator, Label, TabButton};
pub use core::{Drawable, TouchPoint};
