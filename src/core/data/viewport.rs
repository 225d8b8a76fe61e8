use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { real_span: f64, imag_span: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize {
                real_span,
                imag_span,
            } => {
                write!(
                    f,
                    "viewport spans must be positive and finite: real {} imag {}",
                    real_span, imag_span
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Axis-aligned rectangle of the complex plane mapped onto the output image.
///
/// Row 0 of the image samples `min_imag`, column 0 samples `min_real`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min_real: f64,
    max_real: f64,
    min_imag: f64,
    max_imag: f64,
}

impl Viewport {
    pub fn new(
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
    ) -> Result<Self, ViewportError> {
        let real_span = max_real - min_real;
        let imag_span = max_imag - min_imag;

        // NaN fails both comparisons, so it is rejected here too.
        if !(real_span > 0.0 && imag_span > 0.0) || !real_span.is_finite() || !imag_span.is_finite()
        {
            return Err(ViewportError::InvalidSize {
                real_span,
                imag_span,
            });
        }

        Ok(Self {
            min_real,
            max_real,
            min_imag,
            max_imag,
        })
    }

    /// Builds a viewport from its centre and spans.
    pub fn from_center(
        center: Complex,
        real_span: f64,
        imag_span: f64,
    ) -> Result<Self, ViewportError> {
        Self::new(
            center.real - real_span / 2.0,
            center.real + real_span / 2.0,
            center.imag - imag_span / 2.0,
            center.imag + imag_span / 2.0,
        )
    }

    #[must_use]
    pub fn min_real(&self) -> f64 {
        self.min_real
    }

    #[must_use]
    pub fn max_real(&self) -> f64 {
        self.max_real
    }

    #[must_use]
    pub fn min_imag(&self) -> f64 {
        self.min_imag
    }

    #[must_use]
    pub fn max_imag(&self) -> f64 {
        self.max_imag
    }

    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.max_real - self.min_real
    }

    #[must_use]
    pub fn imag_span(&self) -> f64 {
        self.max_imag - self.min_imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.min_real + self.max_real) / 2.0,
            imag: (self.min_imag + self.max_imag) / 2.0,
        }
    }

    /// Real span over imaginary span. Only zoom re-derives this from the
    /// configured output ratio; pan leaves it untouched.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.real_span() / self.imag_span()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "real [{:.6}, {:.6}] imag [{:.6}, {:.6}]",
            self.min_real, self.max_real, self.min_imag, self.max_imag
        )
    }
}
