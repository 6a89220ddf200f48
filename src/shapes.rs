//! Shape parameters and the rasterizers that composite them into a canvas.
//!
//! Each rasterizer makes a single stateless pass: compute the integer
//! bounding box holding the shape plus its one-pixel antialiasing ramp,
//! then for every pixel in the box derive a coverage factor from
//! [`crate::coverage`], fold in the shape's opacity, clamp, and blend with
//! [`Rgb::mix`]. Pixels outside the box are never touched, and degenerate
//! geometry (negative radii, borders thicker than the shape, zero-area
//! rects) saturates through the coverage math instead of erroring.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::{opacity_factor, Rgb};
use crate::coverage::{
    circle_coverage, clamp_unit, distance, inner_threshold, rect_border_coverage, rect_coverage,
    segment_distance,
};

/// A filled disk, or a ring when `border` is nonzero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    /// Center position, in pixels.
    pub center: (f32, f32),
    pub radius: f32,
    /// Ring thickness; 0 draws the disk filled.
    pub border: f32,
    pub color: Rgb,
    /// 0-255; scales the coverage of every pixel.
    pub opacity: u8,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: (0.0, 0.0),
            radius: 100.0,
            border: 0.0,
            color: Rgb::WHITE,
            opacity: 255,
        }
    }
}

/// An axis-aligned rectangle with optionally rounded corners, filled or
/// hollowed to a border ring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundedRect {
    /// Top-left corner, in pixels.
    pub pos: (f32, f32),
    /// Width and height.
    pub size: (f32, f32),
    /// Border thickness; 0 draws the rectangle filled.
    pub border: f32,
    /// Rounding radius for corners left at [`CornerRadius::Inherit`].
    pub corner_radius: f32,
    pub corners: CornerRadii,
    pub color: Rgb,
    pub opacity: u8,
}

impl Default for RoundedRect {
    fn default() -> Self {
        Self {
            pos: (0.0, 0.0),
            size: (0.0, 0.0),
            border: 0.0,
            corner_radius: 0.0,
            corners: CornerRadii::INHERIT,
            color: Rgb::WHITE,
            opacity: 255,
        }
    }
}

/// A thick antialiased segment with round caps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub thickness: f32,
    pub color: Rgb,
    pub opacity: u8,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            from: (0.0, 0.0),
            to: (0.0, 0.0),
            thickness: 1.0,
            color: Rgb::WHITE,
            opacity: 255,
        }
    }
}

/// A shaft line with two barbs meeting at the head.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arrow {
    pub tail: (f32, f32),
    /// Where the shaft and both barbs meet.
    pub head: (f32, f32),
    /// Angle between the shaft and each barb, in degrees.
    pub angle: f32,
    /// Barb length as a fraction of the shaft length.
    pub side_len_frac: f32,
    pub thickness: f32,
    pub color: Rgb,
    pub opacity: u8,
}

impl Default for Arrow {
    fn default() -> Self {
        Self {
            tail: (0.0, 0.0),
            head: (0.0, 0.0),
            angle: 40.0,
            side_len_frac: 0.4,
            thickness: 1.0,
            color: Rgb::WHITE,
            opacity: 255,
        }
    }
}

/// Rounding for one corner of a [`RoundedRect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum CornerRadius {
    /// Use the rect's `corner_radius`.
    #[default]
    Inherit,
    /// Round this corner with its own radius.
    Radius(f32),
}

impl CornerRadius {
    #[inline]
    fn resolve(self, default: f32) -> f32 {
        match self {
            CornerRadius::Inherit => default,
            CornerRadius::Radius(r) => r,
        }
    }
}

/// Per-corner rounding overrides, top-left first, clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: CornerRadius,
    pub top_right: CornerRadius,
    pub bottom_right: CornerRadius,
    pub bottom_left: CornerRadius,
}

impl CornerRadii {
    /// Every corner uses the rect's default radius.
    pub const INHERIT: Self = Self {
        top_left: CornerRadius::Inherit,
        top_right: CornerRadius::Inherit,
        bottom_right: CornerRadius::Inherit,
        bottom_left: CornerRadius::Inherit,
    };

    /// Build from raw per-corner radii where a negative value means
    /// "inherit the default", the convention of the historical call
    /// signature.
    pub fn from_overrides(
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    ) -> Self {
        let corner = |r: f32| {
            if r < 0.0 {
                CornerRadius::Inherit
            } else {
                CornerRadius::Radius(r)
            }
        };
        Self {
            top_left: corner(top_left),
            top_right: corner(top_right),
            bottom_right: corner(bottom_right),
            bottom_left: corner(bottom_left),
        }
    }

    /// Resolved radii in declaration order (TL, TR, BR, BL).
    fn resolve(self, default: f32) -> [f32; 4] {
        [
            self.top_left.resolve(default),
            self.top_right.resolve(default),
            self.bottom_right.resolve(default),
            self.bottom_left.resolve(default),
        ]
    }
}

/// Inclusive pixel bounding box of a circle: radius plus the one-pixel
/// ramp, clipped to the last pixel column and row. Empty boxes come back
/// with the start past the end.
fn circle_box(cx: f32, cy: f32, radius: f32, width: u32, height: u32) -> (i32, i32, i32, i32) {
    let x0 = ((cx - radius - 1.0).floor() as i32).max(0);
    let x1 = ((cx + radius + 1.0).ceil() as i32).min(width as i32 - 1);
    let y0 = ((cy - radius - 1.0).floor() as i32).max(0);
    let y1 = ((cy + radius + 1.0).ceil() as i32).min(height as i32 - 1);
    (x0, y0, x1, y1)
}

/// Inclusive pixel bounding box of a rect plus its ramp. Historically this
/// clips the upper bound to `width`/`height` themselves, one past the last
/// pixel [`circle_box`] stops at; the rasterizer drops the phantom column
/// and row through its checked store.
fn rect_box(x: f32, y: f32, w: f32, h: f32, width: u32, height: u32) -> (i32, i32, i32, i32) {
    let x0 = ((x - 1.0).floor() as i32).max(0);
    let x1 = ((x + w + 1.0).ceil() as i32).min(width as i32);
    let y0 = ((y - 1.0).floor() as i32).max(0);
    let y1 = ((y + h + 1.0).ceil() as i32).min(height as i32);
    (x0, y0, x1, y1)
}

impl Canvas {
    /// Composite an antialiased circle over the canvas.
    pub fn draw_circle(&mut self, circle: &Circle) {
        let (cx, cy) = circle.center;
        let (x0, y0, x1, y1) = circle_box(cx, cy, circle.radius, self.width(), self.height());
        trace!(
            "circle center=({}, {}) radius={} border={} box=({}..{}, {}..{})",
            cx,
            cy,
            circle.radius,
            circle.border,
            x0,
            x1,
            y0,
            y1
        );
        let opacity = opacity_factor(circle.opacity);
        let inner = inner_threshold(circle.radius, circle.border);
        for y in y0..=y1 {
            let dy = y as f32 - cy;
            for x in x0..=x1 {
                let d = distance(x as f32 - cx, dy);
                let factor = clamp_unit(circle_coverage(d, circle.radius, inner) * opacity);
                if factor > 0.0 {
                    // The box is clipped to the canvas, so the direct store holds.
                    self.blend_pixel(x as u32, y as u32, circle.color, factor);
                }
            }
        }
    }

    /// Composite an antialiased rounded rectangle over the canvas.
    ///
    /// Pixels inside a corner's axis-aligned box are covered by that
    /// corner's circle formula; everything else uses the straight-edge
    /// ramps. The bordered cutout for straight edges is the additive band
    /// sum, whose over-1 spill near ring corners is clamped before the
    /// blend.
    pub fn draw_rounded_rect(&mut self, rect: &RoundedRect) {
        let (left, top) = rect.pos;
        let (w, h) = rect.size;
        let right = left + w;
        let bottom = top + h;
        let [tl, tr, br, bl] = rect.corners.resolve(rect.corner_radius);
        let [tl_in, tr_in, br_in, bl_in] =
            [tl, tr, br, bl].map(|r| inner_threshold(r, rect.border));
        let (x0, y0, x1, y1) = rect_box(left, top, w, h, self.width(), self.height());
        trace!(
            "rect pos=({}, {}) size=({}, {}) border={} radii=({}, {}, {}, {}) box=({}..{}, {}..{})",
            left,
            top,
            w,
            h,
            rect.border,
            tl,
            tr,
            br,
            bl,
            x0,
            x1,
            y0,
            y1
        );
        let opacity = opacity_factor(rect.opacity);
        for y in y0..=y1 {
            let yf = y as f32;
            for x in x0..=x1 {
                let xf = x as f32;
                let corner = |ccx: f32, ccy: f32, rad: f32, inner: f32| {
                    circle_coverage(distance(xf - ccx, yf - ccy), rad, inner)
                };
                // Corner boxes take priority over the straight edges, in
                // fixed order TL, TR, BR, BL. A zero radius leaves the
                // corner square.
                let coverage = if tl > 0.0 && xf < left + tl && yf < top + tl {
                    corner(left + tl, top + tl, tl, tl_in)
                } else if tr > 0.0 && xf > right - tr && yf < top + tr {
                    corner(right - tr, top + tr, tr, tr_in)
                } else if br > 0.0 && xf > right - br && yf > bottom - br {
                    corner(right - br, bottom - br, br, br_in)
                } else if bl > 0.0 && xf < left + bl && yf > bottom - bl {
                    corner(left + bl, bottom - bl, bl, bl_in)
                } else if rect.border == 0.0 {
                    rect_coverage(xf, yf, left, top, right, bottom)
                } else {
                    rect_coverage(xf, yf, left, top, right, bottom)
                        * rect_border_coverage(xf, yf, left, top, right, bottom, rect.border)
                };
                let factor = clamp_unit(coverage * opacity);
                if factor > 0.0 {
                    // The historical box reaches one past the last column
                    // and row; the checked store drops those pixels.
                    self.try_blend_pixel(x as u32, y as u32, rect.color, factor);
                }
            }
        }
    }

    /// Composite an antialiased line segment with round caps.
    pub fn draw_line(&mut self, line: &Line) {
        let (ax, ay) = line.from;
        let (bx, by) = line.to;
        let half = line.thickness / 2.0;
        // Segment extremes padded by the half thickness plus the ramp.
        let pad = half + 1.0;
        let x0 = ((ax.min(bx) - pad).floor() as i32).max(0);
        let x1 = ((ax.max(bx) + pad).ceil() as i32).min(self.width() as i32 - 1);
        let y0 = ((ay.min(by) - pad).floor() as i32).max(0);
        let y1 = ((ay.max(by) + pad).ceil() as i32).min(self.height() as i32 - 1);
        trace!(
            "line ({}, {})..({}, {}) thickness={} box=({}..{}, {}..{})",
            ax,
            ay,
            bx,
            by,
            line.thickness,
            x0,
            x1,
            y0,
            y1
        );
        let opacity = opacity_factor(line.opacity);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = segment_distance(x as f32, y as f32, ax, ay, bx, by);
                let factor = clamp_unit(clamp_unit(half - d + 1.0) * opacity);
                if factor > 0.0 {
                    self.blend_pixel(x as u32, y as u32, line.color, factor);
                }
            }
        }
    }

    /// Composite an arrow: the shaft plus two barbs swept back from the
    /// head at `angle` degrees either side of the shaft direction.
    pub fn draw_arrow(&mut self, arrow: &Arrow) {
        let (tx, ty) = arrow.tail;
        let (hx, hy) = arrow.head;
        trace!(
            "arrow ({}, {})..({}, {}) angle={} side_len_frac={}",
            tx,
            ty,
            hx,
            hy,
            arrow.angle,
            arrow.side_len_frac
        );
        let segment = |from: (f32, f32), to: (f32, f32)| Line {
            from,
            to,
            thickness: arrow.thickness,
            color: arrow.color,
            opacity: arrow.opacity,
        };
        self.draw_line(&segment(arrow.tail, arrow.head));

        let len = distance(hx - tx, hy - ty);
        if len < 1e-6 {
            // Degenerate shaft: the cap dot above is all there is to draw.
            return;
        }
        // Unit vector pointing from the head back down the shaft, rotated
        // by +/- angle for the two barbs.
        let ux = (tx - hx) / len;
        let uy = (ty - hy) / len;
        let (sin, cos) = arrow.angle.to_radians().sin_cos();
        let barb_len = arrow.side_len_frac * len;
        for s in [sin, -sin] {
            let end = (
                hx + (ux * cos - uy * s) * barb_len,
                hy + (ux * s + uy * cos) * barb_len,
            );
            self.draw_line(&segment(arrow.head, end));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist_from(x: u32, y: u32, cx: f32, cy: f32) -> f32 {
        distance(x as f32 - cx, y as f32 - cy)
    }

    #[test]
    fn test_filled_circle_end_to_end() {
        // Red r=5 disk at (10, 10) in a 20x20 black canvas: the center is
        // pure red and everything past the ramp stays pure black.
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_circle(&Circle {
            center: (10.0, 10.0),
            radius: 5.0,
            border: 0.0,
            color: Rgb::new(255, 0, 0),
            opacity: 255,
        });
        assert_eq!(canvas.pixel(10, 10), Rgb::new(255, 0, 0));
        for y in 0..20 {
            for x in 0..20 {
                let d = dist_from(x, y, 10.0, 10.0);
                if d > 6.0 {
                    assert_eq!(canvas.pixel(x, y), Rgb::BLACK, "({}, {}) d={}", x, y, d);
                } else if d <= 5.0 {
                    assert_eq!(
                        canvas.pixel(x, y),
                        Rgb::new(255, 0, 0),
                        "({}, {}) d={}",
                        x,
                        y,
                        d
                    );
                }
            }
        }
    }

    #[test]
    fn test_circle_leaves_background_pattern_alone() {
        // Coverage 0 means no blend at all, not a blend by zero.
        let mut canvas = Canvas::new(20, 20);
        for y in 0..20 {
            for x in 0..20 {
                canvas.set_pixel(x, y, Rgb::new((x * 13) as u8, (y * 11) as u8, 77));
            }
        }
        let before = canvas.clone();
        canvas.draw_circle(&Circle {
            center: (10.0, 10.0),
            radius: 5.0,
            border: 0.0,
            color: Rgb::WHITE,
            opacity: 255,
        });
        for y in 0..20 {
            for x in 0..20 {
                if dist_from(x, y, 10.0, 10.0) > 6.0 {
                    assert_eq!(canvas.pixel(x, y), before.pixel(x, y));
                }
            }
        }
    }

    #[test]
    fn test_bordered_circle_is_a_ring() {
        let mut canvas = Canvas::new(24, 24);
        let green = Rgb::new(0, 255, 0);
        canvas.draw_circle(&Circle {
            center: (12.0, 12.0),
            radius: 8.0,
            border: 3.0,
            color: green,
            opacity: 255,
        });
        for y in 0..24 {
            for x in 0..24 {
                let d = dist_from(x, y, 12.0, 12.0);
                if d <= 4.0 || d >= 9.0 {
                    // The hole and the far outside stay black.
                    assert_eq!(canvas.pixel(x, y), Rgb::BLACK, "({}, {}) d={}", x, y, d);
                } else if (5.0..=8.0).contains(&d) {
                    assert_eq!(canvas.pixel(x, y), green, "({}, {}) d={}", x, y, d);
                }
            }
        }
    }

    #[test]
    fn test_circle_ramp_monotonic_on_canvas() {
        // Fractional center puts pixel centers mid-ramp.
        let mut canvas = Canvas::new(24, 20);
        canvas.draw_circle(&Circle {
            center: (10.5, 10.0),
            radius: 6.0,
            border: 0.0,
            color: Rgb::WHITE,
            opacity: 255,
        });
        let mut prev = 255u8;
        for x in 11..20 {
            let r = canvas.pixel(x, 10).r;
            assert!(r <= prev, "brightness rose at x={}", x);
            prev = r;
        }
        // Half a pixel past the radius sits exactly mid-ramp.
        assert_eq!(canvas.pixel(17, 10).r, 128);
    }

    #[test]
    fn test_circle_partial_opacity_scales_blend() {
        let mut canvas = Canvas::new(16, 16);
        canvas.draw_circle(&Circle {
            center: (8.0, 8.0),
            radius: 4.0,
            border: 0.0,
            color: Rgb::WHITE,
            opacity: 128,
        });
        assert_eq!(canvas.pixel(8, 8), Rgb::new(128, 128, 128));
        assert_eq!(canvas.pixel(0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_circle_idempotent_where_coverage_saturates() {
        let shape = Circle {
            center: (10.0, 10.0),
            radius: 5.0,
            border: 0.0,
            color: Rgb::new(30, 200, 90),
            opacity: 255,
        };
        let mut once = Canvas::new(20, 20);
        once.draw_circle(&shape);
        let mut twice = Canvas::new(20, 20);
        twice.draw_circle(&shape);
        twice.draw_circle(&shape);
        for y in 0..20 {
            for x in 0..20 {
                let d = dist_from(x, y, 10.0, 10.0);
                // Ramp pixels re-blend; saturated and untouched ones must not.
                if !(5.0..6.0).contains(&d) {
                    assert_eq!(once.pixel(x, y), twice.pixel(x, y), "({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_rounded_rect_end_to_end() {
        // White 10x10 rect at the origin with r=3 corners over black:
        // center white, the square corner pixel cut away.
        let mut canvas = Canvas::new(12, 12);
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (0.0, 0.0),
            size: (10.0, 10.0),
            corner_radius: 3.0,
            ..RoundedRect::default()
        });
        assert_eq!(canvas.pixel(5, 5), Rgb::WHITE);
        assert_eq!(canvas.pixel(0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_rounded_rect_corners_symmetric() {
        let mut canvas = Canvas::new(12, 12);
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (0.0, 0.0),
            size: (10.0, 10.0),
            corner_radius: 3.0,
            ..RoundedRect::default()
        });
        // All four outer corner pixels are cut.
        assert_eq!(canvas.pixel(0, 0), Rgb::BLACK);
        assert_eq!(canvas.pixel(10, 0), Rgb::BLACK);
        assert_eq!(canvas.pixel(0, 10), Rgb::BLACK);
        assert_eq!(canvas.pixel(10, 10), Rgb::BLACK);
        // Mirrored ramp pixels match exactly.
        assert_eq!(canvas.pixel(0, 2), canvas.pixel(10, 2));
        assert_eq!(canvas.pixel(0, 2), canvas.pixel(2, 0));
        assert_eq!(canvas.pixel(0, 2), canvas.pixel(10, 8));
        // One pixel inside the arc is solid.
        assert_eq!(canvas.pixel(9, 9), Rgb::WHITE);
    }

    #[test]
    fn test_zero_radius_matches_straight_edge_formula() {
        // With every radius 0 no corner path may be taken: the output must
        // be byte-identical to rasterizing with the straight-edge formula
        // alone, including the fractional-coverage ramp.
        let (left, top, w, h) = (3.2_f32, 4.1_f32, 9.5_f32, 6.3_f32);
        let color = Rgb::new(200, 150, 100);

        let mut drawn = Canvas::new(20, 20);
        drawn.draw_rounded_rect(&RoundedRect {
            pos: (left, top),
            size: (w, h),
            color,
            ..RoundedRect::default()
        });

        let mut reference = Canvas::new(20, 20);
        let (x0, y0, x1, y1) = rect_box(left, top, w, h, 20, 20);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let cov = rect_coverage(x as f32, y as f32, left, top, left + w, top + h);
                reference.try_blend_pixel(x as u32, y as u32, color, clamp_unit(cov));
            }
        }
        assert_eq!(drawn.as_bytes(), reference.as_bytes());
    }

    #[test]
    fn test_per_corner_overrides() {
        // Default 4, TR overridden square, BL overridden small.
        let mut canvas = Canvas::new(16, 16);
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (0.0, 0.0),
            size: (12.0, 12.0),
            corner_radius: 4.0,
            corners: CornerRadii::from_overrides(-1.0, 0.0, -1.0, 2.0),
            ..RoundedRect::default()
        });
        // Inherited TL radius cuts the corner pixel.
        assert_eq!(canvas.pixel(0, 0), Rgb::BLACK);
        // Square TR keeps it.
        assert_eq!(canvas.pixel(11, 0), Rgb::WHITE);
        // The small BL radius leaves its corner pixel mid-ramp.
        let bl = canvas.pixel(0, 11);
        assert!(bl != Rgb::BLACK && bl != Rgb::WHITE, "got {:?}", bl);
    }

    #[test]
    fn test_corner_radii_resolution() {
        let corners = CornerRadii::from_overrides(-1.0, 2.0, -0.5, 0.0);
        assert_eq!(corners.top_left, CornerRadius::Inherit);
        assert_eq!(corners.top_right, CornerRadius::Radius(2.0));
        assert_eq!(corners.bottom_right, CornerRadius::Inherit);
        assert_eq!(corners.bottom_left, CornerRadius::Radius(0.0));
        assert_eq!(corners.resolve(5.0), [5.0, 2.0, 5.0, 0.0]);
        assert_eq!(CornerRadii::INHERIT.resolve(3.0), [3.0; 4]);
    }

    #[test]
    fn test_corner_radii_serde_round_trip() {
        let corners = CornerRadii::from_overrides(1.5, -1.0, 0.0, 7.0);
        let json = serde_json::to_string(&corners).unwrap();
        let back: CornerRadii = serde_json::from_str(&json).unwrap();
        assert_eq!(back, corners);
    }

    #[test]
    fn test_bordered_rect_band() {
        // Square bordered rect: the interior stays untouched, the band is
        // solid, and the band corner (where the additive sum spills past 1)
        // clamps to the exact color instead of wrapping.
        let color = Rgb::new(255, 200, 50);
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (2.0, 2.0),
            size: (14.0, 14.0),
            border: 2.0,
            color,
            ..RoundedRect::default()
        });
        assert_eq!(canvas.pixel(9, 9), Rgb::BLACK, "interior must stay empty");
        assert_eq!(canvas.pixel(3, 9), color, "edge band is solid");
        assert_eq!(canvas.pixel(3, 3), color, "band corner clamps, not wraps");
        assert_eq!(canvas.pixel(0, 9), Rgb::BLACK, "outside stays empty");
    }

    #[test]
    fn test_bordered_rounded_corner_ring() {
        // Rounded and bordered together: the corner arc is hollow too.
        let color = Rgb::new(80, 80, 255);
        let mut canvas = Canvas::new(24, 24);
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (2.0, 2.0),
            size: (18.0, 18.0),
            border: 2.0,
            corner_radius: 6.0,
            color,
            ..RoundedRect::default()
        });
        // Corner circle center is (8, 8) with r=6: distance 6 sits on the
        // band, distance <= 3 is inside the hollow.
        assert_eq!(canvas.pixel(8, 2), color);
        assert_eq!(canvas.pixel(8, 8), Rgb::BLACK);
        assert_eq!(canvas.pixel(4, 5), color, "on the corner arc band");
        assert_eq!(canvas.pixel(11, 11), Rgb::BLACK, "deep interior empty");
        assert_eq!(canvas.pixel(2, 2), Rgb::BLACK, "outside the corner arc");
    }

    #[test]
    fn test_box_clip_asymmetry() {
        // The rect box historically clips one pixel further than the
        // circle box: up to width/height instead of the last pixel.
        let (_, _, cx1, cy1) = circle_box(50.0, 50.0, 100.0, 20, 10);
        assert_eq!((cx1, cy1), (19, 9));
        let (_, _, rx1, ry1) = rect_box(-5.0, -5.0, 100.0, 100.0, 20, 10);
        assert_eq!((rx1, ry1), (20, 10));
        assert_eq!(rx1, cx1 + 1);
        // Lower bounds clip identically.
        let (cx0, cy0, ..) = circle_box(-50.0, -50.0, 100.0, 20, 10);
        let (rx0, ry0, ..) = rect_box(-105.0, -105.0, 100.0, 100.0, 20, 10);
        assert_eq!((cx0, cy0), (0, 0));
        assert_eq!((rx0, ry0), (0, 0));
    }

    #[test]
    fn test_rect_phantom_column_is_dropped() {
        // A rect flush with the canvas edge iterates one column and row
        // past the end; the checked store must drop those pixels without
        // panicking or wrapping into the next row.
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (0.0, 0.0),
            size: (8.0, 8.0),
            ..RoundedRect::default()
        });
        assert_eq!(canvas.pixel(0, 0), Rgb::WHITE);
        assert_eq!(canvas.pixel(7, 7), Rgb::WHITE);
    }

    #[test]
    fn test_degenerate_geometry_never_panics() {
        let mut canvas = Canvas::new(10, 10);
        let before = canvas.clone();

        // Negative radius: empty box, nothing drawn.
        canvas.draw_circle(&Circle {
            center: (5.0, 5.0),
            radius: -3.0,
            ..Circle::default()
        });
        assert_eq!(canvas.as_bytes(), before.as_bytes());

        // Center far off canvas: clipped to nothing.
        canvas.draw_circle(&Circle {
            center: (-50.0, -50.0),
            radius: 5.0,
            ..Circle::default()
        });
        assert_eq!(canvas.as_bytes(), before.as_bytes());

        // Negative-size rect: empty box.
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (5.0, 5.0),
            size: (-4.0, -4.0),
            ..RoundedRect::default()
        });
        assert_eq!(canvas.as_bytes(), before.as_bytes());

        // Border thicker than the radius saturates to a filled disk.
        canvas.draw_circle(&Circle {
            center: (5.0, 5.0),
            radius: 4.0,
            border: 9.0,
            ..Circle::default()
        });
        assert_eq!(canvas.pixel(5, 5), Rgb::WHITE);

        // Corner radii beyond half the rect size still rasterize.
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (1.0, 1.0),
            size: (8.0, 8.0),
            corner_radius: 20.0,
            ..RoundedRect::default()
        });

        // Zero-area rect degrades to its boundary point, no panic.
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (3.0, 3.0),
            size: (0.0, 0.0),
            ..RoundedRect::default()
        });
    }

    #[test]
    fn test_line_band_and_caps() {
        let mut canvas = Canvas::new(24, 12);
        canvas.draw_line(&Line {
            from: (3.0, 5.0),
            to: (16.0, 5.0),
            thickness: 3.0,
            ..Line::default()
        });
        // Core of the band is solid a pixel either side of the axis.
        assert_eq!(canvas.pixel(10, 5), Rgb::WHITE);
        assert_eq!(canvas.pixel(10, 6), Rgb::WHITE);
        // Mid-ramp at 2 pixels off axis for half-thickness 1.5.
        assert_eq!(canvas.pixel(10, 7).r, 128);
        assert_eq!(canvas.pixel(10, 8), Rgb::BLACK);
        // Round cap reaches past the endpoint, then fades out.
        assert_eq!(canvas.pixel(17, 5), Rgb::WHITE);
        assert_eq!(canvas.pixel(19, 5), Rgb::BLACK);
    }

    #[test]
    fn test_line_zero_length_draws_a_dot() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_line(&Line {
            from: (5.0, 5.0),
            to: (5.0, 5.0),
            thickness: 2.0,
            ..Line::default()
        });
        assert_eq!(canvas.pixel(5, 5), Rgb::WHITE);
        assert_eq!(canvas.pixel(9, 9), Rgb::BLACK);
    }

    #[test]
    fn test_arrow_shaft_and_barbs() {
        let mut canvas = Canvas::new(24, 16);
        canvas.draw_arrow(&Arrow {
            tail: (2.0, 8.0),
            head: (12.0, 8.0),
            angle: 45.0,
            side_len_frac: 0.4,
            ..Arrow::default()
        });
        // Shaft.
        assert_eq!(canvas.pixel(7, 8), Rgb::WHITE);
        // Barbs sweep back from the head at 45 degrees both sides; with
        // length 4 they pass straight through (10, 6) and (10, 10).
        assert_eq!(canvas.pixel(10, 6), Rgb::WHITE);
        assert_eq!(canvas.pixel(10, 10), Rgb::WHITE);
        // Off every segment.
        assert_eq!(canvas.pixel(5, 3), Rgb::BLACK);
        assert_eq!(canvas.pixel(20, 8), Rgb::BLACK);
    }

    #[test]
    fn test_arrow_zero_length_degrades_to_dot() {
        let mut canvas = Canvas::new(10, 10);
        canvas.draw_arrow(&Arrow {
            tail: (4.0, 4.0),
            head: (4.0, 4.0),
            thickness: 2.0,
            ..Arrow::default()
        });
        assert_eq!(canvas.pixel(4, 4), Rgb::WHITE);
    }

    #[test]
    fn test_shapes_compose_over_existing_content() {
        // Drawing never clears: a second shape blends over the first.
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_rounded_rect(&RoundedRect {
            pos: (2.0, 2.0),
            size: (16.0, 16.0),
            color: Rgb::new(0, 0, 200),
            ..RoundedRect::default()
        });
        canvas.draw_circle(&Circle {
            center: (10.0, 10.0),
            radius: 4.0,
            color: Rgb::new(200, 0, 0),
            opacity: 128,
            ..Circle::default()
        });
        // Center is a mix of circle over rect, not of circle over black.
        assert_eq!(
            canvas.pixel(10, 10),
            Rgb::new(0, 0, 200).mix(Rgb::new(200, 0, 0), 128.0 / 255.0)
        );
        // Rect still intact away from the circle.
        assert_eq!(canvas.pixel(4, 10), Rgb::new(0, 0, 200));
    }
}
