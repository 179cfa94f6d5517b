#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Colour of every pixel whose orbit never escaped.
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend per channel: `(1 - blend) * from + blend * to`, truncated.
    ///
    /// `blend` is clamped into `[0, 1]` so a rounding overshoot can never wrap a channel.
    #[must_use]
    pub fn lerp(from: Colour, to: Colour, blend: f64) -> Colour {
        if from == to {
            return from;
        }

        let blend = if blend.is_nan() { 0.0 } else { blend.clamp(0.0, 1.0) };
        let channel = |a: u8, b: u8| ((1.0 - blend) * a as f64 + blend * b as f64) as u8;

        Colour {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
        }
    }
}
