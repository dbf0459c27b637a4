use std::{fmt, fmt::Formatter};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RomSlice {
    pub begin: usize,
    pub size:  usize,
}

impl RomSlice {
    pub const fn new(begin: usize, size: usize) -> Self {
        Self { begin, size }
    }

    pub fn end(&self) -> usize {
        self.begin + self.size
    }

    #[must_use]
    pub fn offset_forward(self, offset: usize) -> Self {
        Self { begin: self.begin + offset, ..self }
    }

    #[must_use]
    pub fn resize(self, size: usize) -> Self {
        Self { size, ..self }
    }
}

impl fmt::Display for RomSlice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}..{:#x}]", self.begin, self.end())
    }
}
