use std::fmt;

/// An sRGB-encoded color with components in `[0, 1]`.
///
/// Colors travel through the debug panel and the constants as `#rrggbb`
/// strings or `0xrrggbb` integers; shaders receive them in linear space via
/// [`Color::to_linear`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Parse a CSS hex color, `#rrggbb` or `#rgb`. The leading `#` is optional.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_hex),
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16).ok().map(Self::from_hex)
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> u32 {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (quantize(self.r) << 16) | (quantize(self.g) << 8) | quantize(self.b)
    }

    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }

    /// Linear RGBA with opaque alpha, laid out for a `vec4<f32>` uniform.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        let [r, g, b] = self.to_linear();
        [r, g, b, 1.0]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
