use std::sync::Arc;

use crate::{error::RomError, nds_utils::rom_slice::RomSlice};

type ParseErr<'a> = nom::Err<nom::error::Error<&'a [u8]>>;

// -------------------------------------------------------------------------------------------------

#[derive(Clone)]
pub struct Rom(pub Arc<[u8]>);

// -------------------------------------------------------------------------------------------------

impl Rom {
    pub fn new(data: Vec<u8>) -> Result<Self, RomError> {
        if data.is_empty() {
            Err(RomError::Empty)
        } else {
            Ok(Self(Arc::from(data)))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn slice_at(&self, slice: RomSlice) -> Result<&[u8], RomError> {
        self.0.get(slice.begin..slice.end()).ok_or(RomError::Slice(slice, self.len()))
    }

    pub fn parse_at<'r, Ret, Parser>(&'r self, slice: RomSlice, mut f: Parser) -> Result<Ret, RomError>
    where
        Parser: nom::Parser<&'r [u8], Ret, nom::error::Error<&'r [u8]>>,
    {
        let bytes = self.slice_at(slice)?;
        let (_, ret) = f.parse(bytes).map_err(|_: ParseErr| RomError::Parse)?;
        Ok(ret)
    }
}

// -------------------------------------------------------------------------------------------------
