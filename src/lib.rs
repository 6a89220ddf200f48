//! Antialiased 2D shape rendering into an owned RGB pixel buffer.
//!
//! The crate rasterizes circles, rounded rectangles, lines and arrows into
//! a [`Canvas`] with one-pixel coverage-ramp antialiasing, and ships the
//! keyframe easings used to animate them. Everything renders on the CPU;
//! the optional `display` feature adds an SDL2 window for putting canvases
//! on screen.
//!
//! ```
//! use easel::{Canvas, Circle, Rgb};
//!
//! let mut canvas = Canvas::new(64, 64);
//! canvas.draw_circle(&Circle {
//!     center: (32.0, 32.0),
//!     radius: 20.0,
//!     color: Rgb::new(255, 128, 0),
//!     ..Circle::default()
//! });
//! assert_eq!(canvas.pixel(32, 32), Rgb::new(255, 128, 0));
//! ```

pub mod canvas;
pub mod color;
pub mod coverage;
#[cfg(feature = "display")]
pub mod display;
pub mod interp;
pub mod shapes;

pub use canvas::Canvas;
pub use color::Rgb;
pub use interp::Easing;
pub use shapes::{Arrow, Circle, CornerRadii, CornerRadius, Line, RoundedRect};
