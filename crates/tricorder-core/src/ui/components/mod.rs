// src/ui/components/mod.rs
//! Reusable UI components

pub mod indicator;
pub mod label;
pub mod tab_button;

pub use indicator::BlinkIndicator;
pub use label::Label;
pub use tab_button::TabButton;
