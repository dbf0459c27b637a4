use thiserror::Error;

use crate::nds_utils::rom_slice::RomSlice;

// -------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum RomError {
    #[error("Empty ROM file")]
    Empty,
    #[error("Could not slice ROM at {0} (ROM size: {1} ({1:#x}))")]
    Slice(RomSlice, usize),
    #[error("Could not parse ROM slice")]
    Parse,
}

#[derive(Debug, Error)]
pub enum HeaderParseError {
    #[error("ROM too short to contain the cartridge header: {0} ({0:#x}) bytes")]
    TruncatedHeader(usize),
    #[error("Reading icon/title block offset:\n- {0}")]
    ReadIconTitleOffset(RomError),
}

#[derive(Debug, Error)]
pub enum IconParseError {
    #[error("Icon/title block at {0:#x} exceeds ROM bounds (ROM size: {1} ({1:#x}))")]
    TruncatedIconData(u32, usize),
    #[error("Reading banner version:\n- {0}")]
    ReadVersion(RomError),
    #[error("Reading icon bitmap:\n- {0}")]
    ReadBitmap(RomError),
    #[error("Reading icon palette:\n- {0}")]
    ReadPalette(RomError),
}
