use crate::core::data::colour::Colour;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::row_band::RowBand;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch { expected, actual } => {
                write!(
                    f,
                    "frame needs {} bytes but buffer holds {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Interleaved RGB frame, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: FrameSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            buffer: vec![0; size.rgb_len()],
        }
    }

    pub fn from_data(size: FrameSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        if size.rgb_len() != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected: size.rgb_len(),
                actual: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }

        let index = (y as usize * self.size.width() as usize + x as usize) * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Splits the frame into one mutable byte slice per band.
    ///
    /// Bands must be sorted, contiguous and cover every row; the slices are
    /// carved with `split_at_mut`, so each worker owns its rows exclusively.
    pub(crate) fn band_slices_mut(&mut self, bands: &[RowBand]) -> Vec<&mut [u8]> {
        let stride = self.size.row_stride();
        let mut slices = Vec::with_capacity(bands.len());
        let mut rest: &mut [u8] = &mut self.buffer;

        for band in bands {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(band.len() as usize * stride);
            slices.push(head);
            rest = tail;
        }

        debug_assert!(rest.is_empty(), "row bands left {} bytes uncovered", rest.len());

        slices
    }
}
