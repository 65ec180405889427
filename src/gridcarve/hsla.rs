use crate::utils::{clamp_unit, denormalize_channel, normalize_channel};
use image::Rgba;
use std::f64::consts::PI;

/// Full turn of the hue circle, in degrees.
pub const HUE_CIRCLE: f64 = 360.0;

/// Hue-saturation-lightness-alpha colour.
///
/// Hue is a circular quantity in degrees, kept in [0, 360). Saturation,
/// lightness and alpha live in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsla {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation, [0, 1]
    pub s: f64,
    /// Lightness, [0, 1]
    pub l: f64,
    /// Alpha, [0, 1]
    pub a: f64,
}

impl Hsla {
    /// Creates a colour, wrapping the hue onto the circle and clamping the
    /// remaining channels into the unit interval.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
            a: clamp_unit(a),
        }
    }

    /// Creates an opaque colour.
    pub fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Interpolates towards `other` by `t`.
    ///
    /// Saturation, lightness and alpha move linearly; hue moves along the
    /// shorter arc of the hue circle (see [`hue_lerp`]).
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            h: hue_lerp(self.h, other.h, t),
            s: lerp(self.s, other.s, t),
            l: lerp(self.l, other.l, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// Channel-wise average, with the hue midpoint on the shorter arc.
    pub fn average(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }

    /// Distance between two colours in the HSL double cone, scaled to [0, 1].
    ///
    /// Suitable for tolerance comparisons: identical colours are at 0,
    /// black and white are at 1.
    pub fn dist(&self, other: &Self) -> f64 {
        let [x1, y1, z1] = self.cone_point();
        let [x2, y2, z2] = other.cone_point();
        let (dx, dy, dz) = (x1 - x2, y1 - y2, z1 - z2);
        (dx * dx + dy * dy + dz * dz).sqrt() / 2.0
    }

    fn cone_point(&self) -> [f64; 3] {
        let radius = self.s * (1.0 - (2.0 * self.l - 1.0).abs());
        let angle = self.h * PI / 180.0;
        [radius * angle.cos(), radius * angle.sin(), 2.0 * self.l - 1.0]
    }
}

/// Wraps a hue in degrees onto [0, 360).
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(HUE_CIRCLE);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= HUE_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Length of the shorter arc between two hues, in [0, 180].
///
/// Two pixels with hues 90 and 110 differ by 20, but hues 5 and 355
/// differ by 10.
#[inline]
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let d = (h1 - h2).abs().rem_euclid(HUE_CIRCLE);
    d.min(HUE_CIRCLE - d)
}

/// Moves from hue `from` towards hue `to` by fraction `t` along the shorter arc.
///
/// Diametric hues have two arcs of equal length. The one whose midpoint is
/// the smaller hue value is taken, so the average of 30 and 210 is 120 and
/// the average of 170 and 350 is 80, whichever argument comes first.
pub fn hue_lerp(from: f64, to: f64, t: f64) -> f64 {
    let half = HUE_CIRCLE / 2.0;
    let mut delta = (to - from).rem_euclid(HUE_CIRCLE);
    if delta > half {
        delta -= HUE_CIRCLE;
    } else if delta == half {
        let forward = normalize_hue(from + half / 2.0);
        let backward = normalize_hue(from - half / 2.0);
        if backward < forward {
            delta = -half;
        }
    }
    normalize_hue(from + delta * t)
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

impl From<Rgba<u8>> for Hsla {
    fn from(pixel: Rgba<u8>) -> Self {
        let Rgba([r, g, b, a]) = pixel;
        let (r, g, b) = (
            normalize_channel(r),
            normalize_channel(g),
            normalize_channel(b),
        );
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let chroma = max - min;

        if chroma == 0.0 {
            return Self::new(0.0, 0.0, l, normalize_channel(a));
        }

        let s = chroma / (1.0 - (2.0 * l - 1.0).abs());
        let sector = if max == r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        Self::new(sector * 60.0, s, l, normalize_channel(a))
    }
}

impl From<Hsla> for Rgba<u8> {
    fn from(color: Hsla) -> Self {
        let chroma = (1.0 - (2.0 * color.l - 1.0).abs()) * color.s;
        let sector = color.h / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = color.l - chroma / 2.0;

        Rgba([
            denormalize_channel(r + m),
            denormalize_channel(g + m),
            denormalize_channel(b + m),
            denormalize_channel(color.a),
        ])
    }
}
