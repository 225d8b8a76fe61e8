use std::ops::Range;

/// Contiguous run of image rows handed to one worker for a single pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowBand {
    pub start: u32,
    pub end: u32,
}

impl RowBand {
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
