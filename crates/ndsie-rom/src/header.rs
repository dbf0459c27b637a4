use nom::number::complete::le_u32;

use crate::{
    error::HeaderParseError,
    nds_utils::{rom::Rom, rom_slice::RomSlice},
};

#[rustfmt::skip]
pub mod offsets {
    pub const ICON_TITLE: usize = 0x68;
}

#[rustfmt::skip]
pub mod sizes {
    /// The prefix of the cartridge header up to and including the icon/title offset field.
    pub const HEADER:            usize = 0x6C;
    pub const ICON_TITLE_OFFSET: usize = 4;
}

// -------------------------------------------------------------------------------------------------

/// The part of the NDS cartridge header this tool cares about: the byte offset of the icon/title
/// block. No magic numbers or checksums are verified, so any sufficiently long buffer parses.
#[derive(Copy, Clone, Debug)]
pub struct RomHeader {
    pub icon_title_offset: u32,
}

// -------------------------------------------------------------------------------------------------

impl RomHeader {
    pub fn parse(rom: &Rom) -> Result<Self, HeaderParseError> {
        if rom.len() < sizes::HEADER {
            return Err(HeaderParseError::TruncatedHeader(rom.len()));
        }

        let offset_slice = RomSlice::new(offsets::ICON_TITLE, sizes::ICON_TITLE_OFFSET);
        let icon_title_offset =
            rom.parse_at(offset_slice, le_u32).map_err(HeaderParseError::ReadIconTitleOffset)?;

        Ok(Self { icon_title_offset })
    }
}

// -------------------------------------------------------------------------------------------------
