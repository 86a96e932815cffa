//! CSS-style color strings and luminance adjustment in HLS space.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Parse any CSS color: `rgb()`/`rgba()` (alpha in `0..=1`), `hsl()`,
    /// hex forms and named colors such as `white`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let [red, green, blue, alpha] = csscolorparser::parse(input.trim()).ok()?.to_rgba8();
        Some(Self {
            red,
            green,
            blue,
            alpha,
        })
    }

    /// Hue in degrees, luminance and saturation in `0..=1`.
    #[must_use]
    pub fn to_hls(self) -> (f64, f64, f64) {
        let r = f64::from(self.red) / 255.0;
        let g = f64::from(self.green) / 255.0;
        let b = f64::from(self.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let luminance = (max + min) / 2.0;

        if (max - min).abs() < f64::EPSILON {
            return (0.0, luminance, 0.0);
        }

        let delta = max - min;
        let saturation = if luminance <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let mut hue = if (r - max).abs() < f64::EPSILON {
            (g - b) / delta
        } else if (g - max).abs() < f64::EPSILON {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        (hue, luminance, saturation)
    }

    /// Build an opaque color from HLS components.
    #[must_use]
    pub fn from_hls(hue: f64, luminance: f64, saturation: f64) -> Self {
        if saturation.abs() < f64::EPSILON {
            let v = unit_to_byte(luminance);
            return Self {
                red: v,
                green: v,
                blue: v,
                alpha: u8::MAX,
            };
        }

        let hue = hue / 360.0;
        let upper = if luminance <= 0.5 {
            luminance * (1.0 + saturation)
        } else {
            luminance + saturation - luminance * saturation
        };
        let lower = 2.0 * luminance - upper;

        let channel = |mut t: f64| {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            let value = if 6.0 * t < 1.0 {
                lower + (upper - lower) * t * 6.0
            } else if 2.0 * t < 1.0 {
                upper
            } else if 3.0 * t < 2.0 {
                lower + (upper - lower) * (2.0 / 3.0 - t) * 6.0
            } else {
                lower
            };
            unit_to_byte(value)
        };

        Self {
            red: channel(hue + 1.0 / 3.0),
            green: channel(hue),
            blue: channel(hue - 1.0 / 3.0),
            alpha: u8::MAX,
        }
    }

    /// Alpha as a fraction rounded to two decimals.
    #[must_use]
    pub fn alpha_fraction(self) -> f64 {
        (f64::from(self.alpha) / 255.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red,
            self.green,
            self.blue,
            self.alpha_fraction()
        )
    }
}

// Values are clamped to 0..=255 before the cast
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Shift the luminance of `color` by `factor`. When the result would leave
/// `0..1` the shift is applied in the other direction instead. Alpha is kept.
///
/// Returns `None` if `color` does not parse.
#[must_use]
pub fn modify_luminance(color: &str, factor: f64) -> Option<String> {
    let parsed = Rgba::parse(color)?;
    let (hue, luminance, saturation) = parsed.to_hls();

    let mut shifted = luminance + factor;
    if !(0.0..1.0).contains(&shifted) {
        shifted = luminance - factor;
    }

    let adjusted = Rgba {
        alpha: parsed.alpha,
        ..Rgba::from_hls(hue, shifted, saturation)
    };
    Some(adjusted.to_string())
}
