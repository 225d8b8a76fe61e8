use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Linear grayscale: `floor(255 * n / max_iterations)` on every channel.
///
/// Points that hit the cap come out at 255, so the set interior is white.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrayscaleColourMap {
    max_iterations: u32,
}

impl GrayscaleColourMap {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    /// Scales against the algorithm's own cap, which is already non-zero.
    #[must_use]
    pub fn for_algorithm(algorithm: &MandelbrotAlgorithm) -> Self {
        Self {
            max_iterations: algorithm.max_iterations(),
        }
    }

    #[must_use]
    pub fn intensity(&self, iterations: u32) -> u8 {
        let iterations = u64::from(iterations.min(self.max_iterations));

        (255 * iterations / u64::from(self.max_iterations)) as u8
    }
}

impl ColourMap<u32> for GrayscaleColourMap {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        Colour::grey(self.intensity(iterations))
    }
}
