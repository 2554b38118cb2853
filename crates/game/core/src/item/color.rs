/// Packed 32-bit surface color in `0xRRGGBBAA` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rgba(pub u32);

impl Rgba {
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub const fn packed(self) -> u32 {
        self.0
    }
}

impl From<u32> for Rgba {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl core::fmt::Display for Rgba {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
