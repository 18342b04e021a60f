#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Builds a colour from wide channel values, saturating each to `0..=255`.
    #[must_use]
    pub fn saturating(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: saturate_channel(r),
            g: saturate_channel(g),
            b: saturate_channel(b),
        }
    }
}

fn saturate_channel(value: i64) -> u8 {
    value.clamp(0, i64::from(u8::MAX)) as u8
}
