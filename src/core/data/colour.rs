#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::grey(0);
    pub const WHITE: Colour = Colour::grey(255);

    #[must_use]
    pub const fn grey(intensity: u8) -> Self {
        Self {
            r: intensity,
            g: intensity,
            b: intensity,
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
