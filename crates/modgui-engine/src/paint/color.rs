/// Packed `0xAARRGGBB` color.
///
/// This is the representation the host engine's draw calls take. Renderers
/// that need normalized channels use [`Argb::to_f32`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Straight-alpha `(r, g, b, a)` channels in `[0, 1]`.
    #[inline]
    pub fn to_f32(self) -> (f32, f32, f32, f32) {
        (
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
            self.a() as f32 / 255.0,
        )
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(v: u32) -> Self {
        Argb(v)
    }
}
