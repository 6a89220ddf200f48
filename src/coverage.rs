//! Per-pixel coverage math for antialiased shape edges.
//!
//! Every shape boundary gets a one-pixel-wide linear ramp: a term is 1 on
//! the covered side of an edge, 0 one pixel past it, and linear in between.
//! Rasterizers combine the terms for a pixel, clamp the result to [0, 1],
//! scale by the shape's opacity and feed it to [`crate::color::Rgb::mix`].

/// Clamp a coverage term to the unit interval.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Euclidean length of the offset `(dx, dy)`.
#[inline]
pub fn distance(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Inner-edge threshold for a bordered radius.
///
/// A border of 0 means filled: the threshold drops to 0, which puts the
/// inner ramp below any reachable distance so it saturates at 1.
#[inline]
pub fn inner_threshold(radius: f32, border: f32) -> f32 {
    if border == 0.0 {
        0.0
    } else {
        radius - border
    }
}

/// Coverage of a disk or ring at `dist` from its center.
///
/// The outer term ramps from 1 at `radius` down to 0 one pixel outside it;
/// the inner term ramps up across the inner edge at `inner_threshold`
/// (see [`inner_threshold`]). Both terms are unit-clamped, so the product
/// is already in [0, 1].
#[inline]
pub fn circle_coverage(dist: f32, radius: f32, inner_threshold: f32) -> f32 {
    clamp_unit(radius - dist + 1.0) * clamp_unit(dist - inner_threshold + 1.0)
}

/// Outer coverage of an axis-aligned rectangle: the product of one ramp per
/// edge. Deep inside all four terms saturate at 1; outside any edge the
/// matching term is 0.
#[inline]
pub fn rect_coverage(x: f32, y: f32, left: f32, top: f32, right: f32, bottom: f32) -> f32 {
    clamp_unit(x - left + 1.0)
        * clamp_unit(right - x + 1.0)
        * clamp_unit(y - top + 1.0)
        * clamp_unit(bottom - y + 1.0)
}

/// Border-band membership for a bordered rectangle's straight edges.
///
/// Unlike the circle's multiplicative inner term, this is the SUM of the
/// four per-edge ramps: a pixel belongs to the band when it is within a
/// pixel of ANY inner edge. Where two bands meet the sum exceeds 1, so
/// callers must clamp the combined factor before blending.
#[inline]
pub fn rect_border_coverage(
    x: f32,
    y: f32,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    border: f32,
) -> f32 {
    clamp_unit((left + border) - x + 1.0)
        + clamp_unit(x - (right - border) + 1.0)
        + clamp_unit((top + border) - y + 1.0)
        + clamp_unit(y - (bottom - border) + 1.0)
}

/// Distance from `(px, py)` to the segment from `(ax, ay)` to `(bx, by)`.
///
/// Projects the point onto the segment, clamping the projection parameter
/// to the endpoints. Near-zero-length segments fall back to point distance.
pub fn segment_distance(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let ex = bx - ax;
    let ey = by - ay;
    let len_sq = ex * ex + ey * ey;
    if len_sq < 1e-6 {
        return distance(px - ax, py - ay);
    }
    let t = (((px - ax) * ex + (py - ay) * ey) / len_sq).clamp(0.0, 1.0);
    distance(px - (ax + t * ex), py - (ay + t * ey))
}
