use std::{fmt, fmt::Formatter};

use nom::{multi::count, number::complete::le_u16};
use num_enum::TryFromPrimitive;

use crate::{
    error::IconParseError,
    graphics::color::{Rgba32, Xbgr1555},
    header::RomHeader,
    nds_utils::{rom::Rom, rom_slice::RomSlice},
};

pub const ICON_SIDE: usize = 32;
pub const N_PIXELS_IN_ICON: usize = ICON_SIDE * ICON_SIDE;
pub const N_PALETTE_COLORS: usize = 16;

const TILE_SIDE: usize = 8;
const BYTES_PER_TILE: usize = TILE_SIDE * TILE_SIDE / 2;
const TILES_PER_ROW: usize = ICON_SIDE / TILE_SIDE;

#[rustfmt::skip]
pub mod offsets {
    //! Byte offsets relative to the start of the icon/title block.
    pub const VERSION: usize = 0x00;
    pub const BITMAP:  usize = 0x20;
    pub const PALETTE: usize = 0x220;
}

#[rustfmt::skip]
pub mod sizes {
    pub const VERSION: usize = 2;
    pub const BITMAP:  usize = 0x200;
    pub const PALETTE: usize = super::N_PALETTE_COLORS * crate::graphics::color::XBGR1555_SIZE;
}

// -------------------------------------------------------------------------------------------------

/// Icon/title block format revision. Informational only: unknown values never fail a decode, the
/// extra content of later revisions (extra titles, animated icon frames) is not read.
#[derive(Copy, Clone, Debug, Eq, PartialEq, TryFromPrimitive)]
#[repr(u16)]
pub enum BannerVersion {
    Base         = 0x0001,
    Chinese      = 0x0002,
    Korean       = 0x0003,
    AnimatedIcon = 0x0103,
}

impl fmt::Display for BannerVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use BannerVersion::*;
        f.write_str(match self {
            Base => "1 (base)",
            Chinese => "2 (with Chinese title)",
            Korean => "3 (with Chinese and Korean titles)",
            AnimatedIcon => "0x103 (DSi animated icon)",
        })
    }
}

// -------------------------------------------------------------------------------------------------

/// The icon's 32x32 grid of 4-bit palette indices, already untiled from the cartridge layout.
#[derive(Clone, Debug)]
pub struct IconBitmap {
    color_indices: [u8; N_PIXELS_IN_ICON],
}

/// The icon's 16 raw palette entries. Entry 0 is reserved for transparency; whatever color value
/// sits in that slot is never rendered.
#[derive(Clone, Debug)]
pub struct IconPalette([Xbgr1555; N_PALETTE_COLORS]);

#[derive(Clone, Debug)]
pub struct RomIcon {
    pub bitmap:      IconBitmap,
    pub palette:     IconPalette,
    pub raw_version: u16,
}

// -------------------------------------------------------------------------------------------------

impl RomIcon {
    pub fn parse(rom: &Rom, header: &RomHeader) -> Result<Self, IconParseError> {
        let block_begin = header.icon_title_offset as usize;

        // Both fixed-size reads are checked up front; a decode either yields a complete icon or
        // nothing. The end is computed in u64 so a hostile offset cannot wrap on 32-bit targets.
        let block_end = header.icon_title_offset as u64 + (offsets::PALETTE + sizes::PALETTE) as u64;
        if block_end > rom.len() as u64 {
            return Err(IconParseError::TruncatedIconData(header.icon_title_offset, rom.len()));
        }

        let version_slice = RomSlice::new(block_begin + offsets::VERSION, sizes::VERSION);
        let raw_version = rom.parse_at(version_slice, le_u16).map_err(IconParseError::ReadVersion)?;

        let bitmap_slice = RomSlice::new(block_begin + offsets::BITMAP, sizes::BITMAP);
        let bitmap_bytes = rom.slice_at(bitmap_slice).map_err(IconParseError::ReadBitmap)?;
        let bitmap = IconBitmap::from_tiled_4bpp(bitmap_bytes);

        let palette_slice = RomSlice::new(block_begin + offsets::PALETTE, sizes::PALETTE);
        let raw_colors = rom
            .parse_at(palette_slice, count(le_u16, N_PALETTE_COLORS))
            .map_err(IconParseError::ReadPalette)?;
        let mut colors = [Xbgr1555::BLACK; N_PALETTE_COLORS];
        for (slot, raw) in colors.iter_mut().zip(raw_colors) {
            *slot = Xbgr1555(raw);
        }

        Ok(Self { bitmap, palette: IconPalette(colors), raw_version })
    }

    pub fn version(&self) -> Option<BannerVersion> {
        BannerVersion::try_from(self.raw_version).ok()
    }
}

// -------------------------------------------------------------------------------------------------

impl IconBitmap {
    /// Untiles the cartridge bitmap: 16 tiles of 8x8 pixels, row-major of tiles, two pixels per
    /// byte with the low nibble on the left. Every byte `i` lands at
    /// `x = (i/32*8 % 32) + (i%32*2 % 8)`, `y = (i/32/4)*8 + (i%32)/4`.
    pub fn from_tiled_4bpp(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), sizes::BITMAP);
        let mut color_indices = [0u8; N_PIXELS_IN_ICON];
        for (i, &byte) in bytes.iter().enumerate() {
            let tile = i / BYTES_PER_TILE;
            let pixel_pair = i % BYTES_PER_TILE;
            let x = (tile * TILE_SIDE) % ICON_SIDE + (pixel_pair * 2) % TILE_SIDE;
            let y = (tile / TILES_PER_ROW) * TILE_SIDE + pixel_pair / (TILE_SIDE / 2);
            color_indices[y * ICON_SIDE + x] = byte & 0xF;
            color_indices[y * ICON_SIDE + x + 1] = (byte >> 4) & 0xF;
        }
        Self { color_indices }
    }

    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        self.color_indices[y * ICON_SIDE + x]
    }

    pub fn color_indices(&self) -> &[u8; N_PIXELS_IN_ICON] {
        &self.color_indices
    }
}

impl IconPalette {
    pub fn raw_color_at(&self, index: usize) -> Xbgr1555 {
        self.0[index]
    }

    /// Expands all 16 entries to 8-bit channels. Entry 0 is expanded like the rest; skipping it
    /// is the renderer's business.
    pub fn resolve(&self) -> [Rgba32; N_PALETTE_COLORS] {
        self.0.map(Rgba32::from)
    }
}

// -------------------------------------------------------------------------------------------------
