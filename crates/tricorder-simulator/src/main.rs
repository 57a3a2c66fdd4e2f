//! Desktop simulator for the tricorder radiation console.
//!
//! Drives `tricorder-core` against a synthetic detector line. By default it
//! runs headless for a fixed number of ticks, replays a scripted set of tab
//! presses and writes PNG snapshots of the screen to `target/simulator/`.
//!
//! With the `window` feature the console is shown in an SDL2 window instead.
//!
//! | Input        | Action                       |
//! |--------------|------------------------------|
//! | Mouse click  | Touch at the cursor position |
//! | Q / Escape   | Quit                         |
//!
//! Environment:
//! - `TRICORDER_CONFIG`: path to a postcard-encoded console config
//! - `TRICORDER_EMBLEM`: raw RGB565 emblem (default: the bundled delta emblem)

mod mock;
mod surface;

use std::path::PathBuf;

use embassy_time::Instant;
use embedded_graphics::prelude::*;
use log::{info, warn};

use tricorder_core::config::{ConsoleConfig, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use tricorder_core::console::Console;
use tricorder_core::runner::Hardware;
use tricorder_core::sensors::DetectorLine;
use tricorder_core::touch::TOUCH_CHANNEL;
use tricorder_core::views::Emblem;

use crate::mock::{LogAudio, SyntheticDetector, load_emblem};
use crate::surface::SimSurface;

/// Pixel scale factor for snapshots and the window.
const SCALE: u32 = 2;

/// Ticks to run in headless mode.
#[cfg(not(feature = "window"))]
const HEADLESS_TICKS: u32 = 80;

/// Headless tab presses, as (tick, x, y).
#[cfg(not(feature = "window"))]
const TOUCH_SCRIPT: [(u32, u16, u16); 4] = [
    (30, 160, 215), // Prox
    (40, 5, 5),     // miss
    (50, 260, 215), // UV
    (65, 50, 215),  // Rad
];

fn load_config_bytes() -> Option<Vec<u8>> {
    let path = std::env::var_os("TRICORDER_CONFIG")?;
    match std::fs::read(&path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Failed to read config {:?}: {}", path, e);
            None
        }
    }
}

fn emblem_path() -> PathBuf {
    std::env::var_os("TRICORDER_EMBLEM")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/emblem.raw")))
}

fn main() {
    env_logger::init();

    let config_bytes = load_config_bytes();
    let config = match config_bytes.as_deref().map(ConsoleConfig::from_bytes) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!("Invalid config, using defaults: {}", e);
            ConsoleConfig::default()
        }
        None => ConsoleConfig::default(),
    };
    info!(
        "Config: K={} tick={}ms sound={}",
        config.calibration, config.tick_period_ms, config.tab_sound
    );

    let emblem = load_emblem(&emblem_path());
    let size = Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX);

    #[cfg(not(feature = "window"))]
    run_headless(&config, emblem, size);

    #[cfg(feature = "window")]
    run_window(&config, emblem, size);
}

/// Console over `hardware`; only the detector is simulated, the other two
/// sensors report absent.
fn build_console<'a, T, A, S>(
    config: &ConsoleConfig<'a>,
    emblem: Option<Emblem>,
    hardware: &Hardware<T, SyntheticDetector, A, S>,
) -> Console<'a> {
    Console::new(config, hardware.presence(false, false), emblem, Instant::now())
}

#[cfg(not(feature = "window"))]
fn run_headless(config: &ConsoleConfig<'_>, emblem: Option<Emblem>, size: Size) {
    use embedded_graphics_simulator::OutputSettingsBuilder;
    use tricorder_core::runner::step;
    use tricorder_core::ui::TouchPoint;

    let out_dir = std::path::Path::new("target/simulator");
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        warn!("Cannot create {}: {}", out_dir.display(), e);
    }

    let mut hardware = Hardware {
        touch: TOUCH_CHANNEL.receiver(),
        detector: DetectorLine::new(Some(SyntheticDetector::new(0x5EED))),
        audio: LogAudio,
        surface: SimSurface::new(size),
    };
    let mut console = build_console(config, emblem, &hardware);
    let settings = OutputSettingsBuilder::new().scale(SCALE).build();

    embassy_futures::block_on(async {
        for tick in 0..HEADLESS_TICKS {
            for &(at, x, y) in TOUCH_SCRIPT.iter().filter(|(at, ..)| *at == tick) {
                info!("Tick {}: touch at ({}, {})", at, x, y);
                if TOUCH_CHANNEL.try_send(TouchPoint::new(x, y)).is_err() {
                    warn!("Touch channel full, dropping press");
                }
            }

            let outcome = step(&mut console, &mut hardware).await;

            let snapshot = match outcome.transition {
                Some(tab) => Some(format!("tick{:03}-{}.png", tick, tab.label())),
                None if tick + 1 == HEADLESS_TICKS => Some(String::from("final.png")),
                None => None,
            };
            if let Some(name) = snapshot {
                save_png(&hardware.surface, &settings, &out_dir.join(name));
            }
        }
    });

    let metrics = console.metrics();
    info!(
        "Done: {} frames, {} buckets, {} / {}",
        hardware.surface.frames,
        console.history().len(),
        metrics.cpm_text(),
        metrics.dose_text()
    );
}

#[cfg(not(feature = "window"))]
fn save_png(
    surface: &SimSurface,
    settings: &embedded_graphics_simulator::OutputSettings,
    path: &std::path::Path,
) {
    match surface
        .display
        .to_rgb_output_image(settings)
        .save_png(path)
    {
        Ok(()) => info!("Saved {}", path.display()),
        Err(e) => warn!("Failed to save {}: {}", path.display(), e),
    }
}

#[cfg(feature = "window")]
fn run_window(config: &ConsoleConfig<'_>, emblem: Option<Emblem>, size: Size) {
    use std::time::Duration;

    use embedded_graphics_simulator::{
        OutputSettingsBuilder, SimulatorEvent, Window, sdl2::Keycode,
    };
    use tricorder_core::ui::TouchPoint;

    let settings = OutputSettingsBuilder::new().scale(SCALE).build();
    let window = Window::new("Tricorder Simulator", &settings);

    let mut hardware = Hardware {
        touch: TOUCH_CHANNEL.receiver(),
        detector: DetectorLine::new(Some(SyntheticDetector::new(0x5EED))),
        audio: LogAudio,
        surface: SimSurface::new(size, window),
    };
    let mut console = build_console(config, emblem, &hardware);
    let tick_period = Duration::from_millis(console.tick_period().as_millis());

    info!("Simulator running. Click the tab bar to switch views, Q to quit.");

    'running: loop {
        let started = std::time::Instant::now();

        // The first tick's flush also performs the window's first update,
        // which has to happen before events can be polled.
        hardware.tick_now(&mut console, Instant::now());

        for event in hardware.surface.window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Q | Keycode::Escape,
                    ..
                } => break 'running,
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let x = point.x.clamp(0, u16::MAX as i32) as u16;
                    let y = point.y.clamp(0, u16::MAX as i32) as u16;
                    if TOUCH_CHANNEL.try_send(TouchPoint::new(x, y)).is_err() {
                        warn!("Touch channel full, dropping click");
                    }
                }
                _ => {}
            }
        }

        if let Some(remaining) = tick_period.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!("Simulator exited after {} frames", hardware.surface.frames);
}
