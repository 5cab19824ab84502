/// An 8-bit RGBA colour, not premultiplied.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::rgba(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Colour::rgb(1, 2, 3).a, 255);
        assert_eq!(Colour::RED, Colour { r: 255, g: 0, b: 0, a: 255 });
    }

    #[test]
    fn test_bytes_conversion() {
        let colour = Colour::rgba(10, 20, 30, 40);

        assert_eq!(colour.to_bytes(), [10, 20, 30, 40]);
        assert_eq!(Colour::from_bytes([10, 20, 30, 40]), colour);
    }
}
