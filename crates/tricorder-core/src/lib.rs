//! Hardware-independent core of the tricorder radiation console
//!
//! This crate holds everything that does not touch a specific board: the
//! pulse sampler and one-minute rolling history, CPM and dose-rate
//! derivation, the three-tab view state and its touch dispatcher, and the
//! fixed-rate render loop that ties them together. Sensors, touch panel,
//! speaker and display are reached only through small collaborator traits.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod audio;
pub mod config;
pub mod console;
pub mod display;
pub mod history;
pub mod input;
pub mod metrics;
pub mod runner;
pub mod sampling;
pub mod sensors;
pub mod touch;
pub mod ui;
pub mod views;
