pub const XBGR1555_SIZE: usize = std::mem::size_of::<Xbgr1555>();

const BGR_CHANNEL_MAX: u16 = 0b11111;

// -------------------------------------------------------------------------------------------------

/// A raw NDS palette entry: 15-bit BGR, little-endian on cartridge, top bit unused.
/// Bits 0-4 are red, 5-9 green, 10-14 blue.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Xbgr1555(pub u16);

#[rustfmt::skip]
impl Xbgr1555 {
    pub const BLACK:   Xbgr1555 = Xbgr1555(0b0_00000_00000_00000);
    pub const WHITE:   Xbgr1555 = Xbgr1555(0b0_11111_11111_11111);
    pub const RED:     Xbgr1555 = Xbgr1555(0b0_00000_00000_11111);
    pub const GREEN:   Xbgr1555 = Xbgr1555(0b0_00000_11111_00000);
    pub const BLUE:    Xbgr1555 = Xbgr1555(0b0_11111_00000_00000);
    pub const MAGENTA: Xbgr1555 = Xbgr1555(0b0_11111_00000_11111);
}

// -------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rgba32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[rustfmt::skip]
impl Rgba32 {
    pub const BLACK: Rgba32 = Rgba32::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Rgba32 = Rgba32::opaque(0xFF, 0xFF, 0xFF);
}

impl Rgba32 {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

// -------------------------------------------------------------------------------------------------

/// Expands a 5-bit channel to 8 bits, repeating the top bits in the low bits: 0b11111 maps to
/// exactly 0xFF. Must stay `(v << 3) | (v >> 2)`, not a `* 255 / 31` rescale.
const fn expand_channel(v5: u16) -> u8 {
    ((v5 << 3) | (v5 >> 2)) as u8
}

impl From<Xbgr1555> for Rgba32 {
    fn from(color: Xbgr1555) -> Self {
        Rgba32::opaque(
            expand_channel((color.0 >> 0x0) & BGR_CHANNEL_MAX),
            expand_channel((color.0 >> 0x5) & BGR_CHANNEL_MAX),
            expand_channel((color.0 >> 0xA) & BGR_CHANNEL_MAX),
        )
    }
}

// -------------------------------------------------------------------------------------------------
