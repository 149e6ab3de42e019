use std::ops::{Add, AddAssign, Div, Mul};

/// Linear RGB radiance. Components are unclamped during shading; quantization
/// to display bytes happens once per pixel in [`Color::to_srgb_bytes`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    pub const fn splat(value: f64) -> Self {
        Color::new(value, value, value)
    }

    /// Gamma-2 quantization: square root, clamp just under 1.0, scale to a
    /// byte. Matches the display transform the rest of the pipeline expects.
    pub fn to_srgb_bytes(&self) -> [u8; 3] {
        fn convert(channel: f64) -> u8 {
            let gamma_corrected = channel.max(0.0).sqrt();
            (gamma_corrected.clamp(0.0, 0.999) * 256.0) as u8
        }
        [convert(self.r), convert(self.g), convert(self.b)]
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        *self = *self + other;
    }
}

impl Mul for Color {
    type Output = Color;
    fn mul(self, other: Color) -> Color {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, scale: f64) -> Color {
        Color::new(self.r * scale, self.g * scale, self.b * scale)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;
    fn mul(self, color: Color) -> Color {
        color * self
    }
}

impl Div<f64> for Color {
    type Output = Color;
    fn div(self, divisor: f64) -> Color {
        Color::new(self.r / divisor, self.g / divisor, self.b / divisor)
    }
}
