use crate::core::data::complex::Complex;

/// Per-sample escape-time computation. Pure: the same point always yields
/// the same result, so bands can be evaluated in any order.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, point: Complex) -> Self::Success;
}
