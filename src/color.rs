use bytemuck::{Pod, Zeroable};

/// Packed 0xAARRGGBB color, one per model point.
///
/// `#[repr(transparent)]` over `u32` so a frame can be handed to an output sink
/// as bytes without copying.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);

    /// Convert hue (degrees), saturation (0-100) and brightness (0-100) to a packed color.
    pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let v = (brightness / 100.0).clamp(0.0, 1.0);
        let channel = |x: f64| (x * 255.0 + 0.5) as u32;

        if s == 0.0 {
            let c = channel(v);
            return Self::from_rgb(c, c, c);
        }

        let h = hue / 360.0;
        let h = (h - h.floor()) * 6.0;
        let f = h - h.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::from_rgb(channel(r), channel(g), channel(b))
    }

    /// Zero-saturation color of the given brightness (0-100).
    #[inline]
    pub fn gray(brightness: f64) -> Self {
        Self::hsb(0.0, 0.0, brightness)
    }

    fn from_rgb(r: u32, g: u32, b: u32) -> Self {
        Self(0xFF00_0000 | (r.min(255) << 16) | (g.min(255) << 8) | b.min(255))
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// HSB brightness (0-100) read back from the packed channels.
    pub fn brightness(self) -> f64 {
        let max = self.red().max(self.green()).max(self.blue());
        max as f64 / 255.0 * 100.0
    }
}

/// View a color buffer as raw bytes (native endian, 4 per point).
pub fn as_bytes(colors: &[Color]) -> &[u8] {
    bytemuck::cast_slice(colors)
}
