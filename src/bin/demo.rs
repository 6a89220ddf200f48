//! Animated showcase of every shape the crate can rasterize.
//!
//! Opens an SDL2 window and renders a CPU-drawn scene each frame: a
//! breathing disk inside a ring, a card with animated corner rounding, an
//! arrow tracking the disk and a progress line, all eased with the
//! keyframe functions. Animation settings live in `demo.json` next to the
//! binary and can be tweaked and saved from the keyboard.

use std::fs;
use std::path::Path;

use easel::display::{Display, InputEvent, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use easel::{Arrow, Canvas, Circle, CornerRadii, Easing, Line, Rgb, RoundedRect};
use log::{info, warn};
use sdl2::keyboard::Keycode;
use serde::{Deserialize, Serialize};

const SETTINGS_PATH: &str = "demo.json";

/// Animation settings, loadable from `demo.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DemoSettings {
    /// Frames one leg of the ping-pong animation takes.
    #[serde(default = "default_period")]
    period: f32,
    #[serde(default)]
    easing: Easing,
}

fn default_period() -> f32 {
    120.0
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            period: default_period(),
            easing: Easing::default(),
        }
    }
}

impl DemoSettings {
    fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

/// Bounce a frame counter between 0 and 1 over `period` frames each way.
fn ping_pong(frame: f32, period: f32, easing: Easing) -> f32 {
    let leg = (frame / period).floor() as i64;
    let t = easing.apply(
        leg as f32 * period,
        (leg + 1) as f32 * period,
        0.0,
        1.0,
        frame,
    );
    if leg % 2 == 0 {
        t
    } else {
        1.0 - t
    }
}

/// Render one frame of the demo scene.
fn render_scene(canvas: &mut Canvas, frame: f32, settings: &DemoSettings) {
    let w = canvas.width() as f32;
    let h = canvas.height() as f32;
    let t = ping_pong(frame, settings.period, settings.easing);

    canvas.clear(Rgb::new(14, 18, 28));

    // Window frame.
    canvas.draw_rounded_rect(&RoundedRect {
        pos: (8.0, 8.0),
        size: (w - 16.0, h - 16.0),
        border: 3.0,
        corner_radius: 14.0,
        color: Rgb::new(70, 80, 110),
        ..RoundedRect::default()
    });

    // Breathing disk with a steady ring around it.
    let center = (w * 0.32, h * 0.5);
    let radius = 30.0 + 60.0 * t;
    canvas.draw_circle(&Circle {
        center,
        radius,
        color: Rgb::new(235, 110, 70),
        opacity: 230,
        ..Circle::default()
    });
    canvas.draw_circle(&Circle {
        center,
        radius: 104.0,
        border: 4.0,
        color: Rgb::new(90, 160, 255),
        ..Circle::default()
    });

    // Card whose rounding animates on two opposite corners.
    canvas.draw_rounded_rect(&RoundedRect {
        pos: (w * 0.58, h * 0.28),
        size: (w * 0.3, h * 0.44),
        corner_radius: 6.0 + 42.0 * t,
        corners: CornerRadii::from_overrides(-1.0, 0.0, -1.0, 0.0),
        color: Rgb::new(40, 140, 100),
        opacity: 220,
        ..RoundedRect::default()
    });

    // Arrow from the card tracking the disk's edge.
    canvas.draw_arrow(&Arrow {
        tail: (w * 0.58, h * 0.5),
        head: (center.0 + radius + 8.0, center.1),
        thickness: 2.0,
        color: Rgb::new(240, 230, 180),
        ..Arrow::default()
    });

    // Progress line along the bottom.
    canvas.draw_line(&Line {
        from: (w * 0.1, h * 0.92),
        to: (w * 0.1 + w * 0.8 * t, h * 0.92),
        thickness: 3.0,
        color: Rgb::new(200, 200, 210),
        ..Line::default()
    });
}

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: easel-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (width, height, vsync) = parse_args();

    let (mut display, texture_creator) = Display::with_options("easel", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut canvas = Canvas::new(width, height);

    let mut settings = DemoSettings::load(SETTINGS_PATH).unwrap_or_default();
    info!(
        "animating with {:?} easing over {} frames per leg",
        settings.easing, settings.period
    );

    println!("=== easel demo ===");
    println!("Resolution: {}x{}", width, height);
    if vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  1          - Constant easing");
    println!("  2          - Linear easing");
    println!("  3          - Sine easing");
    println!("  Up/Down    - Speed up / slow down the animation");
    println!("  S          - Save settings to {}", SETTINGS_PATH);
    println!("  L          - Load settings from {}", SETTINGS_PATH);
    println!("  Escape     - Quit");

    let mut frame = 0.0_f32;

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Num1 => settings.easing = Easing::Constant,
                    Keycode::Num2 => settings.easing = Easing::Linear,
                    Keycode::Num3 => settings.easing = Easing::Sine,
                    Keycode::Up => settings.period = (settings.period - 30.0).max(30.0),
                    Keycode::Down => settings.period += 30.0,
                    Keycode::S => {
                        if let Err(e) = settings.save(SETTINGS_PATH) {
                            warn!("failed to save settings: {}", e);
                        } else {
                            info!("settings saved to {}", SETTINGS_PATH);
                        }
                    },
                    Keycode::L => match DemoSettings::load(SETTINGS_PATH) {
                        Ok(loaded) => {
                            settings = loaded;
                            info!("settings loaded from {}", SETTINGS_PATH);
                        },
                        Err(e) => warn!("failed to load settings: {}", e),
                    },
                    _ => {},
                },
            }
        }

        render_scene(&mut canvas, frame, &settings);
        display.present(&mut target, &canvas)?;
        frame += 1.0;
    }

    Ok(())
}
