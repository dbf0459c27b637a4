pub mod error;
pub mod graphics;
pub mod header;
pub mod nds_utils;

use std::{fs, path::Path};

pub use crate::{header::RomHeader, nds_utils::rom::Rom};
use crate::graphics::icon::RomIcon;

// -------------------------------------------------------------------------------------------------

/// Everything this tool decodes out of a ROM: the header field locating the icon/title block, and
/// the icon itself. The ROM buffer is only read during parsing, never retained.
#[derive(Debug)]
pub struct NdsRom {
    pub header: RomHeader,
    pub icon:   RomIcon,
}

// -------------------------------------------------------------------------------------------------

impl NdsRom {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        log::info!("Reading ROM from file: {}", path.as_ref().display());

        let bytes = fs::read(path)?;
        let rom = Rom::new(bytes)?;
        Self::from_rom(&rom)
    }

    pub fn from_rom(rom: &Rom) -> anyhow::Result<Self> {
        log::info!("Parsing cartridge header");
        let header = RomHeader::parse(rom)?;

        log::info!("Decoding icon at {:#x}", header.icon_title_offset);
        let icon = RomIcon::parse(rom, &header)?;

        Ok(Self { header, icon })
    }
}
