use crate::core::actions::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Squared escape radius (|z| >= 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts applications of `z <- z² + c`, starting from `z = 0`, performed
/// while `|z|² < 4` and fewer than `max_iterations` have run.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z.square() + c;
        iteration += 1;
    }

    iteration
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    #[inline]
    fn compute(&self, point: Complex) -> u32 {
        escape_iterations(point, self.max_iterations)
    }
}
