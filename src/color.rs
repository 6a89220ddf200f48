//! RGB color values and the linear blend used to composite coverage.

use serde::{Deserialize, Serialize};

/// 8-bit RGB color. No embedded alpha: opacity travels separately with each
/// shape and is folded into the coverage factor before blending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward another color: each channel becomes
    /// `self*(1-factor) + toward*factor`, rounded to the nearest integer.
    ///
    /// The factor is not clamped here — rasterizers clamp the combined
    /// coverage to [0, 1] before calling. Blending a color with itself is
    /// exact for every factor.
    #[inline]
    pub fn mix(self, toward: Rgb, factor: f32) -> Rgb {
        let blend = |from: u8, to: u8| {
            (f32::from(from) * (1.0 - factor) + f32::from(to) * factor).round() as u8
        };
        Rgb::new(
            blend(self.r, toward.r),
            blend(self.g, toward.g),
            blend(self.b, toward.b),
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

/// Normalize a 0-255 opacity into the [0, 1] factor space of coverage math.
#[inline]
pub fn opacity_factor(opacity: u8) -> f32 {
    f32::from(opacity) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints_exact() {
        let a = Rgb::new(10, 200, 77);
        let b = Rgb::new(255, 0, 128);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn test_mix_self_is_identity() {
        // Self-blend must be lossless for any factor in [0, 1].
        let c = Rgb::new(13, 255, 201);
        for i in 0..=100 {
            let factor = i as f32 / 100.0;
            assert_eq!(c.mix(c, factor), c, "self-mix drifted at factor {}", factor);
        }
    }

    #[test]
    fn test_mix_halfway() {
        let half = Rgb::BLACK.mix(Rgb::WHITE, 0.5);
        assert_eq!(half, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_mix_rounds_to_nearest() {
        // 0.1 of 255 is 25.5, which rounds up.
        let c = Rgb::BLACK.mix(Rgb::WHITE, 0.1);
        assert_eq!(c.r, 26);
    }

    #[test]
    fn test_opacity_factor_range() {
        assert_eq!(opacity_factor(0), 0.0);
        assert_eq!(opacity_factor(255), 1.0);
        let mid = opacity_factor(128);
        assert!(mid > 0.5 && mid < 0.51);
    }

    #[test]
    fn test_tuple_conversions() {
        let c = Rgb::from((1, 2, 3));
        assert_eq!(c, Rgb::new(1, 2, 3));
        let t: (u8, u8, u8) = c.into();
        assert_eq!(t, (1, 2, 3));
    }
}
